//! @acp:module "Issue Trackers"
//! @acp:summary "Tracker capability contract plus GitHub and offline clients"
//! @acp:domain cli
//! @acp:layer service
//!
//! The orchestrator talks to a tracker only through [`IssueTracker`]; tests
//! substitute an in-memory implementation.

pub mod github;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TodoError};
use crate::render::RenderedIssue;

pub use github::GitHubTracker;

/// Inputs for the duplicate check of one rendered issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistenceQuery {
    pub title: String,
    pub file: PathBuf,
}

impl ExistenceQuery {
    pub fn new(title: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            title: title.into(),
            file: file.into(),
        }
    }

    /// Search qualifiers for a repository-scoped issue search
    pub fn search_terms(&self, repo: &str) -> String {
        format!(
            "repo:{} is:issue in:title,body \"{}\" \"{}\"",
            repo,
            quote_safe(&self.title),
            quote_safe(&self.file.display().to_string())
        )
    }
}

// Embedded quotes would end the phrase early.
fn quote_safe(value: &str) -> String {
    value.replace('"', " ")
}

/// Reference to an issue the tracker created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueHandle {
    pub number: u64,
    pub url: String,
}

/// @acp:summary "Remote issue tracker operations used by the orchestrator"
pub trait IssueTracker {
    /// Whether an issue matching the query already exists
    fn exists(&self, query: &ExistenceQuery) -> Result<bool>;

    /// Create an issue from rendered content
    fn create(&self, issue: &RenderedIssue) -> Result<IssueHandle>;

    /// Assign an existing issue to a user handle (a leading `@` is allowed)
    fn assign(&self, handle: &IssueHandle, assignee: &str) -> Result<()>;
}

/// @acp:summary "Tracker with no remote; only usable for dry runs"
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineTracker;

impl IssueTracker for OfflineTracker {
    fn exists(&self, _query: &ExistenceQuery) -> Result<bool> {
        Ok(false)
    }

    fn create(&self, _issue: &RenderedIssue) -> Result<IssueHandle> {
        Err(TodoError::tracker("create", "no tracker configured"))
    }

    fn assign(&self, _handle: &IssueHandle, _assignee: &str) -> Result<()> {
        Err(TodoError::tracker("assign", "no tracker configured"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_terms() {
        let query = ExistenceQuery::new("Fix null check", "src/Main.java");
        assert_eq!(
            query.search_terms("acme/widgets"),
            r#"repo:acme/widgets is:issue in:title,body "Fix null check" "src/Main.java""#
        );
    }

    #[test]
    fn test_search_terms_strip_quotes() {
        let query = ExistenceQuery::new(r#"say "hi""#, "a.rs");
        assert!(query.search_terms("o/r").contains(r#""say  hi ""#));
    }

    #[test]
    fn test_offline_tracker() {
        let tracker = OfflineTracker;
        assert!(!tracker.exists(&ExistenceQuery::new("t", "f")).unwrap());

        let issue = RenderedIssue::new("t", "b", vec![]);
        assert!(matches!(
            tracker.create(&issue),
            Err(TodoError::Tracker { .. })
        ));
    }
}
