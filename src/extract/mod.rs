//! @acp:module "TODO Extraction"
//! @acp:summary "Per-language adapters and the fixed-priority adapter registry"
//! @acp:domain cli
//! @acp:layer service
//!
//! Each adapter owns the notion of "comment" for its language and feeds
//! comment spans to the [`parse`](crate::parse) layer.
//!
//! ## Selection
//!
//! Adapters are consulted in a fixed order and the first one whose
//! [`TodoAdapter::supports`] returns true claims the path. No other adapter
//! sees that file. The order comes from the `adapters` configuration key and
//! defaults to [`Language::all`].

pub mod adapter;
pub mod adapters;
pub mod comment;
pub mod language;

use std::path::Path;

pub use adapter::TodoAdapter;
pub use comment::{CommentSyntax, RawSpan};
pub use language::Language;

use crate::error::Result;
use crate::item::{Defaults, TodoItem};
use adapters::*;

/// @acp:summary "Ordered adapter list; first supporting adapter wins"
pub struct AdapterRegistry {
    adapters: Vec<Box<dyn TodoAdapter>>,
}

impl AdapterRegistry {
    /// Create a registry with all built-in adapters in default order
    pub fn new(defaults: Defaults) -> Self {
        Self::with_order(defaults, Language::all())
    }

    /// Create a registry with the given languages, in the given order.
    /// Repeated languages keep their first position.
    pub fn with_order(defaults: Defaults, order: &[Language]) -> Self {
        let mut seen = Vec::new();
        let mut adapters: Vec<Box<dyn TodoAdapter>> = Vec::new();

        for language in order {
            if seen.contains(language) {
                continue;
            }
            seen.push(*language);
            adapters.push(build_adapter(*language, defaults));
        }

        Self { adapters }
    }

    /// Create a registry from arbitrary adapters, consulted in list order
    pub fn from_adapters(adapters: Vec<Box<dyn TodoAdapter>>) -> Self {
        Self { adapters }
    }

    /// Adapter that claims the path, if any
    pub fn select(&self, path: &Path) -> Option<&dyn TodoAdapter> {
        self.adapters
            .iter()
            .find(|adapter| adapter.supports(path))
            .map(|adapter| adapter.as_ref())
    }

    /// Extract with the selected adapter; `None` when no adapter claims the path
    pub fn extract(&self, path: &Path) -> Option<Result<Vec<TodoItem>>> {
        self.extract_as(path, path)
    }

    /// Like [`extract`](Self::extract), but selects the adapter by and stamps
    /// items with `display_path`
    pub fn extract_as(&self, path: &Path, display_path: &Path) -> Option<Result<Vec<TodoItem>>> {
        self.select(display_path)
            .map(|adapter| adapter.extract(path, display_path))
    }

    /// Languages in selection order
    pub fn languages(&self) -> Vec<Language> {
        self.adapters.iter().map(|a| a.language()).collect()
    }
}

fn build_adapter(language: Language, defaults: Defaults) -> Box<dyn TodoAdapter> {
    match language {
        Language::Java => Box::new(JavaAdapter::new(defaults)),
        Language::CSharp => Box::new(CSharpAdapter::new(defaults)),
        Language::Rust => Box::new(RustAdapter::new(defaults)),
        Language::Go => Box::new(GoAdapter::new(defaults)),
        Language::JavaScript => Box::new(JavaScriptAdapter::new(defaults)),
        Language::Python => Box::new(PythonAdapter::new(defaults)),
        Language::Shell => Box::new(ShellAdapter::new(defaults)),
        Language::Generic => Box::new(GenericAdapter::new(defaults)),
    }
}
