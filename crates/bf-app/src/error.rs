//! Error types for the bf-app service layer.

use std::path::PathBuf;

use crate::validate::ValidationError;

/// Application error type that wraps errors from the numerical crates
/// and provides a unified error interface for the CLI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Model error: {0}")]
    Model(#[from] bf_lti::LtiError),

    #[error("Response error: {0}")]
    Response(#[from] bf_response::ResponseError),

    #[error("Analysis validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to read analysis file: {path}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unsupported file extension (expected .yaml, .yml or .json): {path}")]
    UnsupportedFormat { path: PathBuf },

    #[error("Analysis not found: {0}")]
    AnalysisNotFound(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for bf-app operations.
pub type AppResult<T> = Result<T, AppError>;
