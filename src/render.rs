//! @acp:module "Issue Renderer"
//! @acp:summary "Placeholder substitution for issue title, body and labels"
//! @acp:domain cli
//! @acp:layer output
//!
//! Templates are plain text with `{name}` placeholders. Substitution is a
//! single literal pass: no conditionals, no loops, and substituted values
//! are never re-scanned. Unknown placeholders are left as written.
//!
//! | Placeholder     | Value                                   |
//! |-----------------|-----------------------------------------|
//! | `{description}` | TODO text                               |
//! | `{file}`        | path of the source file                 |
//! | `{line}`        | 1-based line number                     |
//! | `{priority}`    | `low` / `medium` / `high`               |
//! | `{category}`    | `bug` / `feature` / `refactor`          |
//! | `{assignee}`    | handle as written, or empty             |
//! | `{tags}`        | tags joined with `", "`, or empty       |
//! | `{fingerprint}` | short identity hash of the item         |
//! | `{<key>}`       | any extension field of the item         |

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;

use crate::config::IssueTemplateConfig;
use crate::item::TodoItem;

static PLACEHOLDER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_.-]*)\}").unwrap());

/// Title template used when none is configured
pub const DEFAULT_TITLE_TEMPLATE: &str = "{description}";

/// Label templates used when none are configured
pub const DEFAULT_LABEL_TEMPLATES: &[&str] = &["todo", "{category}", "{priority}"];

/// Marker prefix embedded in fallback bodies
pub const FINGERPRINT_MARKER: &str = "todo-to-issue:fingerprint";

/// @acp:summary "Issue content derived from one item"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedIssue {
    title: String,
    body: String,
    labels: Vec<String>,
}

impl RenderedIssue {
    pub fn new(title: impl Into<String>, body: impl Into<String>, labels: Vec<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            labels,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

/// @acp:summary "Renders items through the configured or fallback templates"
#[derive(Debug, Clone)]
pub struct TemplateRenderer {
    title: Option<String>,
    body: Option<String>,
    labels: Option<Vec<String>>,
    tags_as_labels: bool,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new(&IssueTemplateConfig::default())
    }
}

impl TemplateRenderer {
    pub fn new(config: &IssueTemplateConfig) -> Self {
        Self {
            title: config.title.clone(),
            body: config.body.clone(),
            labels: config.labels.clone(),
            tags_as_labels: config.tags_as_labels,
        }
    }

    /// Substitute placeholders in one template; see [`render_template`]
    pub fn render_template(&self, template: &str, item: &TodoItem) -> String {
        render_template(template, item)
    }

    /// @acp:summary "Render title, body and labels for one item"
    pub fn render(&self, item: &TodoItem) -> RenderedIssue {
        let title = render_template(
            self.title.as_deref().unwrap_or(DEFAULT_TITLE_TEMPLATE),
            item,
        );

        let body = match &self.body {
            Some(template) => render_template(template, item),
            None => fallback_body(item),
        };

        let mut labels: Vec<String> = match &self.labels {
            Some(templates) => templates.iter().map(|t| render_template(t, item)).collect(),
            None => DEFAULT_LABEL_TEMPLATES
                .iter()
                .map(|t| render_template(t, item))
                .collect(),
        };
        labels.retain(|label| !label.trim().is_empty());

        if self.tags_as_labels {
            labels.extend(item.tags().iter().cloned());
        }

        RenderedIssue::new(title, body, labels)
    }
}

/// @acp:summary "Substitute placeholders in one template string"
/// Never fails: absent optional fields render as the empty string.
pub fn render_template(template: &str, item: &TodoItem) -> String {
    PLACEHOLDER_PATTERN
        .replace_all(template, |caps: &Captures| {
            let name = &caps[1];
            placeholder_value(name, item).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn placeholder_value(name: &str, item: &TodoItem) -> Option<String> {
    let value = match name {
        "description" => item.description().to_string(),
        "file" => item.file_path().display().to_string(),
        "line" => item.line_number().to_string(),
        "priority" => item.priority().as_str().to_string(),
        "category" => item.category().as_str().to_string(),
        "assignee" => item.assignee().unwrap_or_default().to_string(),
        "tags" => item.tags().join(", "),
        "fingerprint" => item.fingerprint(),
        other => item.extension_fields().get(other)?.clone(),
    };
    Some(value)
}

/// @acp:summary "Built-in body used when no body template is configured"
/// Optional fields appear only when the item has them.
pub fn fallback_body(item: &TodoItem) -> String {
    let mut lines = vec![
        format!("**Task**: {}", item.description()),
        format!("**File**: {}", item.file_path().display()),
        format!("**Line**: {}", item.line_number()),
        format!("**Priority**: {}", item.priority()),
        format!("**Category**: {}", item.category()),
    ];

    if let Some(assignee) = item.assignee() {
        lines.push(format!("**Assignee**: {}", assignee));
    }
    if !item.tags().is_empty() {
        lines.push(format!("**Tags**: {}", item.tags().join(", ")));
    }
    for (key, value) in item.extension_fields() {
        lines.push(format!("**{}**: {}", key, value));
    }

    lines.push(String::new());
    lines.push(format!("<!-- {}={} -->", FINGERPRINT_MARKER, item.fingerprint()));

    lines.join("\n")
}
