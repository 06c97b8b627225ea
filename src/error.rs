use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for mdt-version operations
#[derive(Error, Debug)]
pub enum MdtVersionError {
    #[error("Invalid version format: '{0}' - expected X.Y.Z, X.Y.Z-kind or X.Y.Z-kind.N")]
    InvalidVersionFormat(String),

    #[error("Illegal transition: cannot apply '{action}' while at stage '{stage}'")]
    IllegalTransition { stage: String, action: String },

    #[error("Unknown action: '{0}' - valid actions are dev, alpha, beta, rc, release, minor, patch")]
    UnknownAction(String),

    #[error("Manifest not found: {}", .0.display())]
    ManifestNotFound(PathBuf),

    #[error("Manifest {} has no top-level string field '{}'", .path.display(), .field)]
    MissingVersionField { path: PathBuf, field: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in mdt-version
pub type Result<T> = std::result::Result<T, MdtVersionError>;

impl MdtVersionError {
    /// Create an invalid-version-format error for the offending string
    pub fn invalid_format(version: impl Into<String>) -> Self {
        MdtVersionError::InvalidVersionFormat(version.into())
    }

    /// Create an illegal-transition error naming the current stage and the rejected action
    pub fn illegal_transition(stage: impl Into<String>, action: impl Into<String>) -> Self {
        MdtVersionError::IllegalTransition {
            stage: stage.into(),
            action: action.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        MdtVersionError::Config(msg.into())
    }

    /// Create a missing-version-field error for the given manifest path
    pub fn missing_field(path: impl Into<PathBuf>, field: impl Into<String>) -> Self {
        MdtVersionError::MissingVersionField {
            path: path.into(),
            field: field.into(),
        }
    }
}
