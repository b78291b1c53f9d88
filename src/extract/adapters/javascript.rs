//! JavaScript / TypeScript adapter

use std::path::Path;

use crate::extract::adapter::{has_extension, TodoAdapter};
use crate::extract::comment::{extract_items, CommentSyntax};
use crate::extract::language::Language;
use crate::item::{Defaults, TodoItem};

const SYNTAX: CommentSyntax = CommentSyntax {
    line_prefixes: &["//"],
    block: Some(("/*", "*/")),
    string_delims: &['"', '\'', '`'],
    raw_strings: &[],
    char_literals: false,
};

/// JavaScript adapter - also claims TypeScript and JSX sources
pub struct JavaScriptAdapter {
    defaults: Defaults,
}

impl JavaScriptAdapter {
    pub fn new(defaults: Defaults) -> Self {
        Self { defaults }
    }
}

impl TodoAdapter for JavaScriptAdapter {
    fn language(&self) -> Language {
        Language::JavaScript
    }

    fn supports(&self, path: &Path) -> bool {
        has_extension(path, Language::JavaScript.extensions())
    }

    fn extract_source(&self, path: &Path, source: &str) -> Vec<TodoItem> {
        extract_items(path, source, &SYNTAX, &self.defaults)
    }
}
