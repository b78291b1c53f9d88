//! @acp:module "Create Command"
//! @acp:summary "Scan, render and file TODO comments as issues"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `todo-to-issue create`. Live runs need a repository and a
//! token; dry runs without a token preview against an offline tracker.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::config::Config;
use crate::orchestrator::{IssueOrchestrator, RunMode, RunSummary};
use crate::render::TemplateRenderer;
use crate::tracker::{GitHubTracker, IssueTracker, OfflineTracker};

use super::scan::{print_failures, run_scan};

/// Options for the create command
#[derive(Debug, Clone)]
pub struct CreateOptions {
    /// Directory or file to scan
    pub source: PathBuf,
    /// Preview instead of creating
    pub dry_run: bool,
    /// Repository override (`owner/name`)
    pub repo: Option<String>,
    /// Token override
    pub token: Option<String>,
    /// Skip the confirmation prompt
    pub yes: bool,
}

impl Default for CreateOptions {
    fn default() -> Self {
        Self {
            source: PathBuf::from("."),
            dry_run: false,
            repo: None,
            token: None,
            yes: false,
        }
    }
}

/// Execute the create command
pub fn execute_create(options: CreateOptions, config: &Config) -> Result<()> {
    let report = run_scan(&options.source, config)?;
    print_failures(&report);

    if report.is_empty() {
        println!(
            "{} No TODO comments found ({} files scanned)",
            style("•").dim(),
            report.files_scanned
        );
        return Ok(());
    }

    println!(
        "{} Found {} TODO comments in {} files",
        style("✓").green(),
        report.items.len(),
        report.files_scanned
    );

    let mut github = config.github.clone();
    if options.repo.is_some() {
        github.repo = options.repo.clone();
    }
    if options.token.is_some() {
        github.token = options.token.clone();
    }

    let mode = RunMode::from_dry_run(options.dry_run);
    let tracker: Box<dyn IssueTracker> = if mode == RunMode::DryRun && github.token.is_none() {
        eprintln!(
            "{} No GitHub token; existing issues are not checked in this preview",
            style("⚠").yellow()
        );
        Box::new(OfflineTracker)
    } else {
        println!("{} Connecting to GitHub...", style("→").cyan());
        Box::new(GitHubTracker::connect(&github).context("Failed to connect to GitHub")?)
    };

    if mode == RunMode::Live && !options.yes {
        let repo = github.repo.as_deref().unwrap_or_default();
        let proceed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "Create up to {} issues in {}?",
                report.items.len(),
                repo
            ))
            .default(false)
            .interact()?;
        if !proceed {
            println!("{} Aborted", style("✗").red());
            return Ok(());
        }
    }

    let renderer = TemplateRenderer::new(&config.issue_template);
    let summary = IssueOrchestrator::new(tracker.as_ref(), &renderer)
        .with_progress(mode == RunMode::Live)
        .run(&report.items, mode, &mut std::io::stdout())?;

    print_summary(&summary, mode);

    if summary.failed > 0 {
        bail!("{} items could not be processed", summary.failed);
    }
    Ok(())
}

fn print_summary(summary: &RunSummary, mode: RunMode) {
    let verb = match mode {
        RunMode::DryRun => "Would create",
        RunMode::Live => "Created",
    };
    println!(
        "{} {} {} issues",
        style("✓").green(),
        verb,
        style(summary.created).bold()
    );
    if summary.skipped > 0 {
        println!(
            "  {} {} already tracked",
            style("•").dim(),
            summary.skipped
        );
    }
    if summary.failed > 0 {
        println!("  {} {} failed", style("✗").red(), summary.failed);
    }
}
