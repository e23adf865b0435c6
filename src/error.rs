use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for semver-stamp operations
#[derive(Error, Debug)]
pub enum StampError {
    #[error("Version not found in {}", .path.display())]
    VersionNotFound { path: PathBuf },

    #[error("No tags found in repository history")]
    NoTagsFound,

    #[error("Invalid version format: '{0}' - expected X.Y.Z")]
    InvalidVersionFormat(String),

    #[error("Version control query failed: {0}")]
    VersionControl(#[from] git2::Error),

    #[error("Unparseable integer: '{0}'")]
    UnparseableInteger(String),

    #[error("Unknown field: '{0}'")]
    UnknownField(String),

    #[error("Cannot read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot serialize version record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Convenience type alias for Results in semver-stamp
pub type Result<T> = std::result::Result<T, StampError>;

impl StampError {
    /// Create a version-not-found error for a descriptor file
    pub fn version_not_found(path: impl Into<PathBuf>) -> Self {
        StampError::VersionNotFound { path: path.into() }
    }

    /// Create an invalid-format error for the offending text
    pub fn invalid_format(text: impl Into<String>) -> Self {
        StampError::InvalidVersionFormat(text.into())
    }

    /// Create an unparseable-integer error for the offending text
    pub fn unparseable(text: impl Into<String>) -> Self {
        StampError::UnparseableInteger(text.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        StampError::Config(msg.into())
    }
}
