//! C# adapter

use std::path::Path;

use crate::extract::adapter::{has_extension, TodoAdapter};
use crate::extract::comment::{extract_items, CommentSyntax};
use crate::extract::language::Language;
use crate::item::{Defaults, TodoItem};

const SYNTAX: CommentSyntax = CommentSyntax {
    line_prefixes: &["//"],
    block: Some(("/*", "*/")),
    string_delims: &['"', '\''],
    raw_strings: &[("@$\"", "\""), ("@\"", "\"")],
    char_literals: false,
};

/// C# adapter - `//`, `///` and `/* */` comments
pub struct CSharpAdapter {
    defaults: Defaults,
}

impl CSharpAdapter {
    pub fn new(defaults: Defaults) -> Self {
        Self { defaults }
    }
}

impl TodoAdapter for CSharpAdapter {
    fn language(&self) -> Language {
        Language::CSharp
    }

    fn supports(&self, path: &Path) -> bool {
        has_extension(path, Language::CSharp.extensions())
    }

    fn extract_source(&self, path: &Path, source: &str) -> Vec<TodoItem> {
        extract_items(path, source, &SYNTAX, &self.defaults)
    }
}
