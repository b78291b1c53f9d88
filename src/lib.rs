#![forbid(unsafe_code)]

//! @acp:module "todo-to-issue Library"
//! @acp:summary "Turns TODO comments in source files into tracker issues"
//! @acp:domain cli
//! @acp:layer api
//! @acp:stability stable
//!
//! # todo-to-issue
//!
//! Scans source trees for structured TODO comments and files them as issues.
//!
//! ## Annotation format
//!
//! ```text
//! // TODO: Fix null check | priority: high | category: bug | assignee: @alice | tags: safety, urgent
//! ```
//!
//! Everything after the first `|` is optional metadata. Unknown keys are kept
//! as extension fields and can be used as template placeholders.
//!
//! ## Example
//!
//! ```rust,no_run
//! use todo_to_issue::{Config, IssueOrchestrator, OfflineTracker, RunMode, Scanner, TemplateRenderer};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let report = Scanner::new(&config)?.scan(std::path::Path::new("."))?;
//!
//!     let renderer = TemplateRenderer::new(&config.issue_template);
//!     let summary = IssueOrchestrator::new(&OfflineTracker, &renderer)
//!         .run(&report.items, RunMode::DryRun, &mut std::io::stdout())?;
//!
//!     println!("{} issues would be created", summary.created);
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod extract;
pub mod item;
pub mod orchestrator;
pub mod parse;
pub mod render;
pub mod scan;
pub mod tracker;

// Re-exports
pub use config::Config;
pub use error::{Result, TodoError};
pub use extract::{AdapterRegistry, Language, TodoAdapter};
pub use item::{Category, Defaults, Priority, TodoItem};
pub use orchestrator::{IssueOrchestrator, RunMode, RunSummary};
pub use parse::{match_annotation, normalize, parse_annotation, Metadata};
pub use render::{RenderedIssue, TemplateRenderer};
pub use scan::{FileFailure, ScanReport, Scanner};
pub use tracker::{ExistenceQuery, GitHubTracker, IssueHandle, IssueTracker, OfflineTracker};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
