//! @acp:module "Errors"
//! @acp:summary "Library error type and result alias"
//! @acp:domain cli
//! @acp:layer model

use std::path::{Path, PathBuf};

use thiserror::Error;

/// @acp:summary "Errors raised by scanning, configuration and tracker calls"
#[derive(Error, Debug)]
pub enum TodoError {
    /// A source file could not be read during extraction
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is missing a value or holds an invalid one
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// The tracker session could not be established
    #[error("Tracker connection failed: {0}")]
    Connection(String),

    /// A single tracker call failed
    #[error("Tracker {operation} failed: {message}")]
    Tracker { operation: String, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    #[error("{0}")]
    Other(String),
}

impl TodoError {
    pub fn read(path: &Path, source: std::io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            path: None,
        }
    }

    pub fn config_with_path(message: impl Into<String>, path: &Path) -> Self {
        Self::Config {
            message: message.into(),
            path: Some(path.to_path_buf()),
        }
    }

    pub fn tracker(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Tracker {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TodoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_names_path() {
        let err = TodoError::read(
            Path::new("src/Main.java"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "Failed to read src/Main.java: denied");
    }

    #[test]
    fn test_tracker_error_message() {
        let err = TodoError::tracker("create", "422 Unprocessable Entity");
        assert_eq!(
            err.to_string(),
            "Tracker create failed: 422 Unprocessable Entity"
        );
    }
}
