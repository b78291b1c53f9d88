//! @acp:module "Metadata Normalizer"
//! @acp:summary "Parses the pipe-delimited metadata tail into typed, default-filled fields"
//! @acp:domain cli
//! @acp:layer service
//!
//! Unknown priority or category values fall back to the supplied defaults
//! instead of failing, so one malformed annotation never costs a whole file.

use std::collections::BTreeMap;

use crate::item::{Category, Defaults, Priority};

use super::matcher::split_unescaped_pipes;

/// @acp:summary "Typed metadata fields of one annotation"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub priority: Priority,
    pub category: Category,
    pub assignee: Option<String>,
    pub tags: Vec<String>,
    /// Keys not modelled natively, lowercased
    pub extension_fields: BTreeMap<String, String>,
}

impl Metadata {
    /// Metadata for an annotation without a tail
    pub fn from_defaults(defaults: &Defaults) -> Self {
        Self {
            priority: defaults.priority,
            category: defaults.category,
            assignee: None,
            tags: Vec::new(),
            extension_fields: BTreeMap::new(),
        }
    }
}

/// @acp:summary "Normalize a metadata tail against the given defaults"
pub fn normalize(tail: Option<&str>, defaults: &Defaults) -> Metadata {
    let mut metadata = Metadata::from_defaults(defaults);
    let Some(tail) = tail else {
        return metadata;
    };

    for segment in split_unescaped_pipes(tail) {
        let Some((key, value)) = segment.split_once(':') else {
            if !segment.trim().is_empty() {
                tracing::debug!("Ignoring metadata segment without a key: {:?}", segment);
            }
            continue;
        };

        let key = key.trim().to_lowercase();
        let value = value.trim();
        if key.is_empty() {
            continue;
        }

        match key.as_str() {
            "priority" => match value.parse::<Priority>() {
                Ok(priority) => metadata.priority = priority,
                Err(_) => {
                    tracing::debug!("Unknown priority {:?}, using {}", value, defaults.priority);
                    metadata.priority = defaults.priority;
                }
            },
            "category" => match value.parse::<Category>() {
                Ok(category) => metadata.category = category,
                Err(_) => {
                    tracing::debug!("Unknown category {:?}, using {}", value, defaults.category);
                    metadata.category = defaults.category;
                }
            },
            "assignee" => {
                metadata.assignee = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                };
            }
            "tags" => {
                metadata.tags.extend(
                    value
                        .split(',')
                        .map(str::trim)
                        .filter(|t| !t.is_empty())
                        .map(str::to_string),
                );
            }
            _ => {
                metadata.extension_fields.insert(key, value.to_string());
            }
        }
    }

    metadata
}
