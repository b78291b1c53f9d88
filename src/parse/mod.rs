//! @acp:module "Parser"
//! @acp:summary "TODO annotation matching and metadata normalization"
//! @acp:domain cli
//! @acp:layer service
//!
//! Turns one comment span into a [`TodoItem`]. The matcher finds the marker
//! and splits off the metadata tail; the normalizer types the tail against
//! the caller's [`Defaults`].
//!
//! ```text
//! // TODO: Fix null check | priority: high | assignee: @alice | tags: a, b
//!          └── description ─┘ └──────────── metadata tail ─────────────┘
//! ```

pub mod matcher;
pub mod metadata;

use std::path::Path;

pub use matcher::{match_annotation, AnnotationMatch};
pub use metadata::{normalize, Metadata};

use crate::item::{Defaults, TodoItem};

/// @acp:summary "Match and normalize one comment span into an item"
pub fn parse_annotation(
    text: &str,
    file_path: &Path,
    line_number: usize,
    defaults: &Defaults,
) -> Option<TodoItem> {
    let found = match_annotation(text)?;
    let metadata = normalize(found.metadata_tail.as_deref(), defaults);
    TodoItem::new(&found.description, file_path, line_number, metadata)
}
