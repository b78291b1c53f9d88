//! Go adapter

use std::path::Path;

use crate::extract::adapter::{has_extension, TodoAdapter};
use crate::extract::comment::{extract_items, CommentSyntax};
use crate::extract::language::Language;
use crate::item::{Defaults, TodoItem};

const SYNTAX: CommentSyntax = CommentSyntax {
    line_prefixes: &["//"],
    block: Some(("/*", "*/")),
    string_delims: &['"'],
    raw_strings: &[("`", "`")],
    char_literals: false,
};

/// Go adapter
pub struct GoAdapter {
    defaults: Defaults,
}

impl GoAdapter {
    pub fn new(defaults: Defaults) -> Self {
        Self { defaults }
    }
}

impl TodoAdapter for GoAdapter {
    fn language(&self) -> Language {
        Language::Go
    }

    fn supports(&self, path: &Path) -> bool {
        has_extension(path, Language::Go.extensions())
    }

    fn extract_source(&self, path: &Path, source: &str) -> Vec<TodoItem> {
        extract_items(path, source, &SYNTAX, &self.defaults)
    }
}
