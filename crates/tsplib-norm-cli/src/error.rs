//! Error types for the tsplib-norm CLI

use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;
use tsplib_norm::TsplibError;

/// Result type alias for CLI operations
pub(crate) type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Not a file (e.g., directory)
    #[error("Not a file: {0}")]
    NotAFile(PathBuf),

    /// Malformed TSPLIB input
    #[error("Invalid TSPLIB input: {0}")]
    InvalidFormat(String),

    /// Some files in a batch failed
    #[error("Conversion failed: {0}")]
    ConversionFailed(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Library bug or runtime failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CliError {
    /// Get exit code for this error
    pub(crate) fn exit_code(&self) -> ExitCode {
        match self {
            Self::Internal(_) => ExitCode::from(1),
            Self::FileNotFound(_) | Self::NotAFile(_) => ExitCode::from(3),
            Self::InvalidFormat(_) => ExitCode::from(4),
            Self::ConversionFailed(_) => ExitCode::from(5),
            Self::Json(_) => ExitCode::from(6),
            Self::Io(_) => ExitCode::from(7),
        }
    }
}

impl From<TsplibError> for CliError {
    fn from(e: TsplibError) -> Self {
        match e {
            TsplibError::Io(io) => Self::Io(io),
            TsplibError::Json(json) => Self::Json(json),
            other if other.is_internal() => Self::Internal(other.to_string()),
            other => Self::InvalidFormat(other.to_string()),
        }
    }
}
