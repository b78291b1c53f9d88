//! Java adapter

use std::path::Path;

use crate::extract::adapter::{has_extension, TodoAdapter};
use crate::extract::comment::{extract_items, CommentSyntax};
use crate::extract::language::Language;
use crate::item::{Defaults, TodoItem};

const SYNTAX: CommentSyntax = CommentSyntax {
    line_prefixes: &["//"],
    block: Some(("/*", "*/")),
    string_delims: &['"', '\''],
    raw_strings: &[],
    char_literals: false,
};

/// Java adapter - line, block and Javadoc comments
pub struct JavaAdapter {
    defaults: Defaults,
}

impl JavaAdapter {
    pub fn new(defaults: Defaults) -> Self {
        Self { defaults }
    }
}

impl TodoAdapter for JavaAdapter {
    fn language(&self) -> Language {
        Language::Java
    }

    fn supports(&self, path: &Path) -> bool {
        has_extension(path, Language::Java.extensions())
    }

    fn extract_source(&self, path: &Path, source: &str) -> Vec<TodoItem> {
        extract_items(path, source, &SYNTAX, &self.defaults)
    }
}
