//! @acp:module "GitHub Tracker"
//! @acp:summary "Blocking GitHub REST client for issue search, creation and assignment"
//! @acp:domain cli
//! @acp:layer integration
//!
//! One [`GitHubTracker`] is one session: the agent, repository and token are
//! fixed at [`GitHubTracker::connect`] and reused for every call of a run.

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;

use super::{ExistenceQuery, IssueHandle, IssueTracker};
use crate::config::GitHubConfig;
use crate::error::{Result, TodoError};
use crate::render::RenderedIssue;

const USER_AGENT: &str = concat!("todo-to-issue/", env!("CARGO_PKG_VERSION"));
const ACCEPT: &str = "application/vnd.github+json";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    total_count: u64,
}

#[derive(Debug, Deserialize)]
struct CreatedIssue {
    number: u64,
    html_url: String,
}

/// @acp:summary "GitHub issue tracker session"
pub struct GitHubTracker {
    agent: ureq::Agent,
    api_url: String,
    repo: String,
    token: String,
}

impl std::fmt::Debug for GitHubTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubTracker")
            .field("api_url", &self.api_url)
            .field("repo", &self.repo)
            .finish_non_exhaustive()
    }
}

impl GitHubTracker {
    /// @acp:summary "Open a session and verify the repository is reachable"
    /// @acp:ai-careful "Any failure here aborts the whole create run"
    pub fn connect(config: &GitHubConfig) -> Result<Self> {
        let repo = config
            .repo
            .clone()
            .filter(|r| !r.trim().is_empty())
            .ok_or_else(|| TodoError::Connection("no repository configured (github.repo)".into()))?;
        if !is_repo_slug(&repo) {
            return Err(TodoError::Connection(format!(
                "repository must look like owner/name, got {:?}",
                repo
            )));
        }

        let token = config
            .token
            .clone()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| TodoError::Connection("no GitHub token configured".into()))?;

        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build();

        let tracker = Self {
            agent,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            repo,
            token,
        };

        tracker
            .get(&format!("/repos/{}", tracker.repo))
            .call()
            .map_err(|e| TodoError::Connection(describe(e)))?;

        tracing::debug!("Connected to {} at {}", tracker.repo, tracker.api_url);
        Ok(tracker)
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    fn get(&self, path: &str) -> ureq::Request {
        self.authorized(self.agent.get(&format!("{}{}", self.api_url, path)))
    }

    fn post(&self, path: &str) -> ureq::Request {
        self.authorized(self.agent.post(&format!("{}{}", self.api_url, path)))
    }

    fn authorized(&self, request: ureq::Request) -> ureq::Request {
        request
            .set("Accept", ACCEPT)
            .set("Authorization", &format!("Bearer {}", self.token))
    }
}

impl IssueTracker for GitHubTracker {
    fn exists(&self, query: &ExistenceQuery) -> Result<bool> {
        let terms = query.search_terms(&self.repo);
        let response: SearchResponse = self
            .get("/search/issues")
            .query("q", &terms)
            .call()
            .map_err(|e| TodoError::tracker("search", describe(e)))?
            .into_json()
            .map_err(|e| TodoError::tracker("search", e.to_string()))?;

        Ok(response.total_count > 0)
    }

    fn create(&self, issue: &RenderedIssue) -> Result<IssueHandle> {
        let payload = json!({
            "title": issue.title(),
            "body": issue.body(),
            "labels": issue.labels(),
        });

        let created: CreatedIssue = self
            .post(&format!("/repos/{}/issues", self.repo))
            .send_json(payload)
            .map_err(|e| TodoError::tracker("create", describe(e)))?
            .into_json()
            .map_err(|e| TodoError::tracker("create", e.to_string()))?;

        Ok(IssueHandle {
            number: created.number,
            url: created.html_url,
        })
    }

    fn assign(&self, handle: &IssueHandle, assignee: &str) -> Result<()> {
        let login = login_of(assignee);
        if login.is_empty() {
            return Err(TodoError::tracker("assign", "empty assignee"));
        }

        self.post(&format!(
            "/repos/{}/issues/{}/assignees",
            self.repo, handle.number
        ))
        .send_json(json!({ "assignees": [login] }))
        .map_err(|e| TodoError::tracker("assign", describe(e)))?;

        Ok(())
    }
}

/// `@alice` -> `alice`
pub(crate) fn login_of(assignee: &str) -> &str {
    assignee.trim().trim_start_matches('@')
}

fn is_repo_slug(repo: &str) -> bool {
    let mut parts = repo.split('/');
    matches!(
        (parts.next(), parts.next(), parts.next()),
        (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty()
    )
}

fn describe(error: ureq::Error) -> String {
    match error {
        ureq::Error::Status(code, response) => {
            let message = response
                .into_json::<serde_json::Value>()
                .ok()
                .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
                .unwrap_or_default();
            if message.is_empty() {
                format!("HTTP {}", code)
            } else {
                format!("HTTP {}: {}", code, message)
            }
        }
        ureq::Error::Transport(transport) => transport.to_string(),
    }
}
