//! @acp:module "Adapter Languages"
//! @acp:summary "Supported source languages and their file extensions"
//! @acp:domain cli
//! @acp:layer model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Source languages with a built-in adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Java,
    #[serde(alias = "c#", alias = "cs")]
    CSharp,
    Rust,
    Go,
    #[serde(alias = "js", alias = "typescript", alias = "ts")]
    JavaScript,
    Python,
    Shell,
    Generic,
}

impl Language {
    /// Built-in adapters in default selection order
    pub fn all() -> &'static [Language] {
        &[
            Language::Java,
            Language::CSharp,
            Language::Rust,
            Language::Go,
            Language::JavaScript,
            Language::Python,
            Language::Shell,
            Language::Generic,
        ]
    }

    /// File extensions claimed by this language's adapter (lowercase, no dot)
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Language::Java => &["java"],
            Language::CSharp => &["cs"],
            Language::Rust => &["rs"],
            Language::Go => &["go"],
            Language::JavaScript => &["js", "jsx", "mjs", "cjs", "ts", "tsx"],
            Language::Python => &["py", "pyi"],
            Language::Shell => &["sh", "bash", "zsh"],
            Language::Generic => &["txt", "md", "markdown", "rst", "adoc"],
        }
    }

    /// Identifier used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::CSharp => "csharp",
            Language::Rust => "rust",
            Language::Go => "go",
            Language::JavaScript => "javascript",
            Language::Python => "python",
            Language::Shell => "shell",
            Language::Generic => "generic",
        }
    }

    /// Get the human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Language::Java => "Java",
            Language::CSharp => "C#",
            Language::Rust => "Rust",
            Language::Go => "Go",
            Language::JavaScript => "JavaScript/TypeScript",
            Language::Python => "Python",
            Language::Shell => "Shell",
            Language::Generic => "Plain text",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "java" => Ok(Language::Java),
            "csharp" | "c#" | "cs" => Ok(Language::CSharp),
            "rust" => Ok(Language::Rust),
            "go" => Ok(Language::Go),
            "javascript" | "js" | "typescript" | "ts" => Ok(Language::JavaScript),
            "python" => Ok(Language::Python),
            "shell" => Ok(Language::Shell),
            "generic" => Ok(Language::Generic),
            _ => Err(format!("Unknown language: {}", s)),
        }
    }
}
