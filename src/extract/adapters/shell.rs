//! Shell script adapter

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

/// Shell adapter - sh, bash and zsh scripts
pub struct ShellAdapter {
    defaults: Defaults,
}

impl ShellAdapter {
    pub fn new(defaults: Defaults) -> Self {
        Self { defaults }
    }
}

impl TodoAdapter for ShellAdapter {
    fn language(&self) -> Language {
        Language::Shell
    }

    fn supports(&self, path: &Path) -> bool {
        has_extension(path, Language::Shell.extensions())
    }

    fn extract_source(&self, path: &Path, source: &str) -> Vec<TodoItem> {
        extract_items(path, source, &SYNTAX, &self.defaults)
    }
}
