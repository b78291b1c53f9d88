//! Generic plain-text adapter

use std::path::Path;

use crate::extract::adapter::{has_extension, TodoAdapter};
use crate::extract::language::Language;
use crate::item::{Defaults, TodoItem};
use crate::parse::parse_annotation;

/// Generic adapter - every line of a text document is a candidate span
pub struct GenericAdapter {
    defaults: Defaults,
}

impl GenericAdapter {
    pub fn new(defaults: Defaults) -> Self {
        Self { defaults }
    }
}

impl TodoAdapter for GenericAdapter {
    fn language(&self) -> Language {
        Language::Generic
    }

    fn supports(&self, path: &Path) -> bool {
        has_extension(path, Language::Generic.extensions())
    }

    fn extract_source(&self, path: &Path, source: &str) -> Vec<TodoItem> {
        source
            .lines()
            .enumerate()
            .filter_map(|(idx, line)| parse_annotation(line, path, idx + 1, &self.defaults))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_bullets() {
        let source = "# Notes\n\n- TODO: write changelog | tags: docs\n- done item\n";
        let adapter = GenericAdapter::new(Defaults::default());
        let items = adapter.extract_source(Path::new("NOTES.md"), source);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].line_number(), 3);
        assert_eq!(items[0].tags().to_vec(), vec!["docs"]);
    }
}
