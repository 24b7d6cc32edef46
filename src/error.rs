//! Error types for TSPLIB normalization.
//!
//! Every failure in this crate is per file: callers converting a batch are
//! expected to record the error against its path and keep going.

use std::path::PathBuf;
use thiserror::Error;

use crate::matrix::FormatKind;

/// Main error type for tokenizing, building and densifying TSPLIB data.
///
/// # Examples
///
/// ```
/// use tsplib_norm::error::TsplibError;
/// use tsplib_norm::matrix::FormatKind;
///
/// let err = TsplibError::SizeMismatch {
///     format: FormatKind::UpperRow,
///     dimension: 4,
///     expected: 6,
///     actual: 5,
/// };
/// let msg = err.to_string();
/// assert!(msg.contains("UPPER_ROW") && msg.contains('6') && msg.contains('5'));
/// ```
#[derive(Error, Debug)]
pub enum TsplibError {
    /// `EDGE_WEIGHT_FORMAT` is not one of the nine matrix layouts.
    #[error("Unsupported EDGE_WEIGHT_FORMAT: {keyword}")]
    UnsupportedFormat {
        /// Keyword as it appeared in the file
        keyword: String,
    },

    /// Token count does not match the layout's expected count.
    #[error(
        "Edge weight count mismatch for {format} with dimension {dimension}: \
         expected {expected} values, got {actual}"
    )]
    SizeMismatch {
        /// Declared matrix layout
        format: FormatKind,
        /// Declared dimension
        dimension: usize,
        /// Count implied by layout and dimension
        expected: usize,
        /// Count actually supplied
        actual: usize,
    },

    /// Matrix lookup outside `[0, dimension)` after removing the index base.
    #[error("Matrix index ({row}, {col}) out of range for dimension {dimension}")]
    IndexOutOfRange {
        /// Row as supplied by the caller
        row: usize,
        /// Column as supplied by the caller
        col: usize,
        /// Matrix dimension
        dimension: usize,
    },

    /// Row lookup outside `[0, dimension)` after removing the index base.
    #[error("Matrix row {row} out of range for dimension {dimension}")]
    RowOutOfRange {
        /// Row as supplied by the caller
        row: usize,
        /// Matrix dimension
        dimension: usize,
    },

    /// A token inside a numeric section is not a number.
    #[error("Invalid value '{token}' in {} at line {line}", .file.display())]
    ValueParse {
        /// Source file
        file: PathBuf,
        /// 1-based line number
        line: usize,
        /// Offending token
        token: String,
    },

    /// Header-level defect (missing or malformed field).
    #[error("Parse error in {}{}: {cause}", .file.display(), .line.map(|l| format!(" at line {l}")).unwrap_or_default())]
    Parse {
        /// Source file
        file: PathBuf,
        /// 1-based line number, when the defect is tied to a line
        line: Option<usize>,
        /// Description
        cause: String,
    },

    /// Node identifier that cannot be converted to a zero-based index.
    #[error("Invalid node id {value}: TSPLIB node ids start at 1")]
    InvalidNodeId {
        /// Raw identifier
        value: i64,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Worker pool could not be created
    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}

impl TsplibError {
    /// Whether this error is a defect in the calling code rather than bad input.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::IndexOutOfRange { .. } | Self::RowOutOfRange { .. } | Self::ThreadPool(_)
        )
    }
}

/// Result type alias for TSPLIB operations
pub type TsplibResult<T> = std::result::Result<T, TsplibError>;
