//! Rust adapter

use std::path::Path;

use crate::extract::adapter::{has_extension, TodoAdapter};
use crate::extract::comment::{extract_items, CommentSyntax};
use crate::extract::language::Language;
use crate::item::{Defaults, TodoItem};

// `'` is handled as a char literal so lifetimes never open a string.
const SYNTAX: CommentSyntax = CommentSyntax {
    line_prefixes: &["//"],
    block: Some(("/*", "*/")),
    string_delims: &['"'],
    raw_strings: &[
        ("br##\"", "\"##"),
        ("br#\"", "\"#"),
        ("br\"", "\""),
        ("r##\"", "\"##"),
        ("r#\"", "\"#"),
        ("r\"", "\""),
    ],
    char_literals: true,
};

/// Rust adapter - line, doc and block comments
pub struct RustAdapter {
    defaults: Defaults,
}

impl RustAdapter {
    pub fn new(defaults: Defaults) -> Self {
        Self { defaults }
    }
}

impl TodoAdapter for RustAdapter {
    fn language(&self) -> Language {
        Language::Rust
    }

    fn supports(&self, path: &Path) -> bool {
        has_extension(path, Language::Rust.extensions())
    }

    fn extract_source(&self, path: &Path, source: &str) -> Vec<TodoItem> {
        extract_items(path, source, &SYNTAX, &self.defaults)
    }
}
