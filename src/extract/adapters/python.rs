//! Python adapter

use std::path::Path;

use crate::extract::adapter::{has_extension, TodoAdapter};
use crate::extract::comment::{extract_items, CommentSyntax};
use crate::extract::language::Language;
use crate::item::{Defaults, TodoItem};

const SYNTAX: CommentSyntax = CommentSyntax {
    line_prefixes: &["#"],
    block: None,
    string_delims: &['"', '\''],
    raw_strings: &[],
    char_literals: false,
};

/// Python adapter - `#` comments only, docstrings are not scanned
pub struct PythonAdapter {
    defaults: Defaults,
}

impl PythonAdapter {
    pub fn new(defaults: Defaults) -> Self {
        Self { defaults }
    }
}

impl TodoAdapter for PythonAdapter {
    fn language(&self) -> Language {
        Language::Python
    }

    fn supports(&self, path: &Path) -> bool {
        has_extension(path, Language::Python.extensions())
    }

    fn extract_source(&self, path: &Path, source: &str) -> Vec<TodoItem> {
        extract_items(path, source, &SYNTAX, &self.defaults)
    }
}
