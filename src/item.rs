//! @acp:module "TODO Item Model"
//! @acp:summary "Normalized TODO items, their enumerations and scan defaults"
//! @acp:domain cli
//! @acp:layer model
//!
//! A [`TodoItem`] is the canonical, default-filled form of one annotation.
//! Items are value types: once built they are never mutated.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::parse::Metadata;

/// TODO priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[serde(alias = "LOW", alias = "Low")]
    Low,
    #[default]
    #[serde(alias = "MEDIUM", alias = "Medium")]
    Medium,
    #[serde(alias = "HIGH", alias = "High")]
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(format!("Unknown priority: {}", s)),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// TODO category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[serde(alias = "BUG", alias = "Bug")]
    Bug,
    #[default]
    #[serde(alias = "FEATURE", alias = "Feature")]
    Feature,
    #[serde(alias = "REFACTOR", alias = "Refactor")]
    Refactor,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Bug => "bug",
            Category::Feature => "feature",
            Category::Refactor => "refactor",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bug" => Ok(Category::Bug),
            "feature" => Ok(Category::Feature),
            "refactor" => Ok(Category::Refactor),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// @acp:summary "Fallback priority and category for items without metadata"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Defaults {
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub category: Category,
}

/// @acp:summary "One extracted TODO annotation"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    description: String,
    file_path: PathBuf,
    line_number: usize,
    priority: Priority,
    category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    assignee: Option<String>,
    tags: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    extension_fields: BTreeMap<String, String>,
}

impl TodoItem {
    /// Build an item, or `None` when the description is blank or the line is 0.
    pub fn new(
        description: &str,
        file_path: impl Into<PathBuf>,
        line_number: usize,
        metadata: Metadata,
    ) -> Option<Self> {
        let description = description.trim();
        if description.is_empty() || line_number == 0 {
            return None;
        }

        Some(Self {
            description: description.to_string(),
            file_path: file_path.into(),
            line_number,
            priority: metadata.priority,
            category: metadata.category,
            assignee: metadata.assignee,
            tags: metadata.tags,
            extension_fields: metadata.extension_fields,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn assignee(&self) -> Option<&str> {
        self.assignee.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn extension_fields(&self) -> &BTreeMap<String, String> {
        &self.extension_fields
    }

    /// Stable identity of the item within a scan: path, line and description.
    pub fn identity(&self) -> String {
        format!(
            "{}:{}:{}",
            self.file_path.display(),
            self.line_number,
            self.description
        )
    }

    /// First 12 hex digits of the SHA-256 of [`TodoItem::identity`]
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.identity().as_bytes());
        let hex = format!("{:x}", digest);
        hex[..12].to_string()
    }
}
