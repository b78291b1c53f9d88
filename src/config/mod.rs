//! @acp:module "Configuration"
//! @acp:summary "Project configuration loading and defaults"
//! @acp:domain cli
//! @acp:layer config
//!
//! Configuration lives in a YAML file (`.todo-to-issue.yaml` by default).
//! Every section is optional; missing values fall back to the defaults below.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, TodoError};
use crate::extract::Language;
use crate::item::Defaults;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = ".todo-to-issue.yaml";

/// @acp:summary "Main configuration structure"
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// GitHub repository and credentials
    #[serde(default)]
    pub github: GitHubConfig,

    /// Priority and category used when an annotation omits them
    #[serde(default)]
    pub defaults: Defaults,

    /// File patterns to include/exclude (glob syntax)
    #[serde(default)]
    pub filters: FiltersConfig,

    /// Issue title/body/label templates
    #[serde(default)]
    pub issue_template: IssueTemplateConfig,

    /// Adapter selection order; the first adapter supporting a file wins
    #[serde(default = "default_adapters")]
    pub adapters: Vec<Language>,

    /// Scan tuning
    #[serde(default)]
    pub scan: ScanConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github: GitHubConfig::default(),
            defaults: Defaults::default(),
            filters: FiltersConfig::default(),
            issue_template: IssueTemplateConfig::default(),
            adapters: default_adapters(),
            scan: ScanConfig::default(),
        }
    }
}

impl Config {
    /// @acp:summary "Load config from a YAML file"
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate().map_err(|e| match e {
            TodoError::Config { message, .. } => TodoError::config_with_path(message, path),
            other => other,
        })?;
        Ok(config)
    }

    /// @acp:summary "Save config to a YAML file"
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// @acp:summary "Load from the given path, the user config dir, or defaults"
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load(path);
        }
        if let Some(user_config) = user_config_path().filter(|p| p.exists()) {
            tracing::debug!("Using user config {}", user_config.display());
            return Self::load(user_config);
        }
        tracing::debug!("No config at {}, using defaults", path.display());
        Ok(Self::default())
    }

    /// Reject values serde cannot catch on its own
    pub fn validate(&self) -> Result<()> {
        for pattern in self.filters.include.iter().chain(&self.filters.exclude) {
            glob::Pattern::new(pattern).map_err(|e| {
                TodoError::config(format!("invalid glob {:?}: {}", pattern, e))
            })?;
        }
        if self.adapters.is_empty() {
            return Err(TodoError::config("adapters list must not be empty"));
        }
        if self.scan.workers == Some(0) {
            return Err(TodoError::config("scan.workers must be at least 1"));
        }
        Ok(())
    }
}

/// `<config_dir>/todo-to-issue/config.yaml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("todo-to-issue").join("config.yaml"))
}

fn default_adapters() -> Vec<Language> {
    Language::all().to_vec()
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

/// @acp:summary "GitHub tracker settings"
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitHubConfig {
    /// Repository as `owner/name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,

    /// Personal access token; `GITHUB_TOKEN` is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// API base URL (GitHub Enterprise installs differ)
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Per-request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            repo: None,
            token: None,
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

// Hand-written so tokens never end up in logs.
impl std::fmt::Debug for GitHubConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubConfig")
            .field("repo", &self.repo)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// @acp:summary "Include/exclude glob filters"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiltersConfig {
    #[serde(default = "default_include")]
    pub include: Vec<String>,

    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

impl Default for FiltersConfig {
    fn default() -> Self {
        Self {
            include: default_include(),
            exclude: default_exclude(),
        }
    }
}

fn default_include() -> Vec<String> {
    vec!["**/*".to_string()]
}

fn default_exclude() -> Vec<String> {
    vec![
        // Package managers
        "**/node_modules/**".to_string(),
        "**/vendor/**".to_string(),
        // Build outputs
        "**/dist/**".to_string(),
        "**/build/**".to_string(),
        "**/target/**".to_string(),
        "**/out/**".to_string(),
        "**/bin/**".to_string(),
        "**/obj/**".to_string(),
        // Cache/temp
        "**/.cache/**".to_string(),
        "**/__pycache__/**".to_string(),
        // VCS
        "**/.git/**".to_string(),
        // IDE
        "**/.idea/**".to_string(),
        "**/.vscode/**".to_string(),
        // Any other hidden directory (.github, .venv, .tox, ...)
        "**/.*/**".to_string(),
    ]
}

/// @acp:summary "Issue templates; unset fields use the built-in fallbacks"
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueTemplateConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,

    /// Append each item tag as an extra label
    #[serde(default = "default_true")]
    pub tags_as_labels: bool,
}

impl Default for IssueTemplateConfig {
    fn default() -> Self {
        Self {
            title: None,
            body: None,
            labels: None,
            tags_as_labels: true,
        }
    }
}

/// @acp:summary "Scan settings"
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Number of parallel workers (default: available parallelism)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workers: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Category, Priority};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.defaults.priority, Priority::Medium);
        assert_eq!(config.defaults.category, Category::Feature);
        assert_eq!(config.github.api_url, "https://api.github.com");
        assert_eq!(config.adapters, Language::all().to_vec());
        assert!(config.issue_template.title.is_none());
        assert!(config.issue_template.tags_as_labels);
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r#"
github:
  repo: acme/widgets
  token: secret
  timeoutSecs: 5
defaults:
  priority: high
  category: bug
filters:
  include: ["src/**/*.java"]
  exclude: ["**/generated/**"]
issueTemplate:
  title: "[{priority}] {description}"
  labels: ["todo", "{category}"]
  tagsAsLabels: false
adapters: [python, java]
scan:
  workers: 2
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        config.validate().unwrap();

        assert_eq!(config.github.repo.as_deref(), Some("acme/widgets"));
        assert_eq!(config.github.timeout_secs, 5);
        assert_eq!(config.defaults.priority, Priority::High);
        assert_eq!(config.filters.include, vec!["src/**/*.java"]);
        assert_eq!(
            config.issue_template.title.as_deref(),
            Some("[{priority}] {description}")
        );
        assert!(!config.issue_template.tags_as_labels);
        assert_eq!(config.adapters, vec![Language::Python, Language::Java]);
        assert_eq!(config.scan.workers, Some(2));
    }

    #[test]
    fn test_invalid_default_priority_is_an_error() {
        let result: std::result::Result<Config, _> =
            serde_yaml::from_str("defaults:\n  priority: urgent\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_glob_fails_validation() {
        let mut file = NamedTempFile::with_suffix(".yaml").unwrap();
        write!(file, "filters:\n  include: [\"src/[*.rs\"]\n").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, TodoError::Config { path: Some(_), .. }));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let file = NamedTempFile::with_suffix(".yaml").unwrap();
        let mut config = Config::default();
        config.github.repo = Some("acme/widgets".into());
        config.save(file.path()).unwrap();

        let loaded = Config::load(file.path()).unwrap();
        assert_eq!(loaded.github.repo.as_deref(), Some("acme/widgets"));
        assert_eq!(loaded.adapters, config.adapters);
    }

    #[test]
    fn test_default_excludes_hidden_directories() {
        let options = glob::MatchOptions {
            case_sensitive: true,
            require_literal_separator: false,
            require_literal_leading_dot: false,
        };
        let excluded = |path: &str| {
            default_exclude()
                .iter()
                .any(|p| glob::Pattern::new(p).unwrap().matches_with(path, options))
        };

        assert!(excluded(".github/workflows/ci.sh"));
        assert!(excluded("tools/.tox/py3/lib.py"));
        assert!(!excluded("src/main.rs"));
        assert!(!excluded("src/lib.d.ts"));
    }

    #[test]
    fn test_debug_redacts_token() {
        let github = GitHubConfig {
            token: Some("ghp_secret".into()),
            ..GitHubConfig::default()
        };
        let rendered = format!("{:?}", github);
        assert!(!rendered.contains("ghp_secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
