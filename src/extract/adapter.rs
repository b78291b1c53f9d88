//! @acp:module "TODO Adapter Trait"
//! @acp:summary "Capability contract shared by all per-language adapters"
//! @acp:domain cli
//! @acp:layer service

use std::path::Path;

use crate::error::{Result, TodoError};
use crate::item::TodoItem;

use super::language::Language;

/// TODO adapter trait - implement for each supported language
pub trait TodoAdapter: Send + Sync {
    /// Get the language identifier
    fn language(&self) -> Language;

    /// Whether this adapter handles the path. Must only look at the name.
    fn supports(&self, path: &Path) -> bool;

    /// Extract items from already-loaded source text
    fn extract_source(&self, path: &Path, source: &str) -> Vec<TodoItem>;

    /// Read the file at `path` and extract its items, stamped with `display_path`.
    ///
    /// Every scan reads files through this method. A file with no TODOs
    /// yields an empty list; only a read failure is an error.
    fn extract(&self, path: &Path, display_path: &Path) -> Result<Vec<TodoItem>> {
        let source =
            std::fs::read_to_string(path).map_err(|e| TodoError::read(display_path, e))?;
        Ok(self.extract_source(display_path, &source))
    }
}

/// Case-insensitive extension check
pub(crate) fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| extensions.iter().any(|x| x.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_extension() {
        assert!(has_extension(Path::new("src/Main.JAVA"), &["java"]));
        assert!(has_extension(Path::new("a/b.tsx"), &["ts", "tsx"]));
        assert!(!has_extension(Path::new("Makefile"), &["java"]));
        assert!(!has_extension(Path::new("notes.java.bak"), &["java"]));
    }
}
