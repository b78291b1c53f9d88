//! @acp:module "Init Command"
//! @acp:summary "Write a starter configuration file"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `todo-to-issue init`.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use console::style;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};

use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::extract::Language;
use crate::render::{DEFAULT_LABEL_TEMPLATES, DEFAULT_TITLE_TEMPLATE};

/// Options for the init command
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Where to write the config
    pub path: PathBuf,
    /// Overwrite an existing config
    pub force: bool,
    /// Repository as `owner/name`
    pub repo: Option<String>,
    /// Skip interactive prompts
    pub yes: bool,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONFIG_FILE),
            force: false,
            repo: None,
            yes: false,
        }
    }
}

/// Execute the init command
pub fn execute_init(options: InitOptions) -> Result<()> {
    if options.path.exists() && !options.force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            options.path.display()
        );
    }

    let mut config = starter_config();
    config.github.repo = options.repo.clone();

    if !options.yes && options.repo.is_none() {
        run_interactive_init(&mut config)?;
    }

    config
        .save(&options.path)
        .with_context(|| format!("Failed to write {}", options.path.display()))?;
    println!("{} Created {}", style("✓").green(), options.path.display());

    println!("\n{}", style("Next steps:").bold());
    println!(
        "  1. Run {} to list TODO comments",
        style("todo-to-issue scan").cyan()
    );
    println!(
        "  2. Run {} to preview the issues",
        style("todo-to-issue create --dry-run").cyan()
    );
    if config.github.repo.is_none() {
        println!("  3. Set github.repo before creating issues");
    }

    Ok(())
}

/// Defaults with the fallback templates spelled out, so users can edit them
fn starter_config() -> Config {
    let mut config = Config::default();
    config.issue_template.title = Some(DEFAULT_TITLE_TEMPLATE.to_string());
    config.issue_template.labels = Some(
        DEFAULT_LABEL_TEMPLATES
            .iter()
            .map(|label| label.to_string())
            .collect(),
    );
    config
}

fn run_interactive_init(config: &mut Config) -> Result<()> {
    println!("{} todo-to-issue setup\n", style("→").cyan());

    let repo: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("GitHub repository (owner/name, blank to skip)")
        .allow_empty(true)
        .interact_text()?;
    let repo = repo.trim();
    if !repo.is_empty() {
        config.github.repo = Some(repo.to_string());
    }

    let languages = Language::all();
    let names: Vec<&str> = languages.iter().map(|l| l.name()).collect();
    let defaults = vec![true; names.len()];
    let selections = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Languages to scan")
        .items(&names)
        .defaults(&defaults)
        .interact()?;

    if selections.is_empty() {
        println!(
            "{} No language selected, keeping all",
            style("⚠").yellow()
        );
    } else {
        config.adapters = selections.iter().map(|&idx| languages[idx]).collect();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);

        execute_init(InitOptions {
            path: path.clone(),
            force: false,
            repo: Some("acme/widgets".into()),
            yes: true,
        })
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.github.repo.as_deref(), Some("acme/widgets"));
        assert_eq!(config.issue_template.title.as_deref(), Some("{description}"));
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&path, "{}").unwrap();

        let options = InitOptions {
            path: path.clone(),
            yes: true,
            ..InitOptions::default()
        };
        assert!(execute_init(options.clone()).is_err());

        execute_init(InitOptions { force: true, ..options }).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("issueTemplate"));
    }
}
