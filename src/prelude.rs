//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use tsplib_norm::prelude::*;
//! ```

pub use crate::builder::{ExtractedMatrix, MatrixBuilder};
pub use crate::convert::{
    convert_batch, convert_file, convert_str, BatchReport, ConversionFailure, ConvertOptions,
    ProblemRecord,
};
pub use crate::densify::{densify, MatrixRecord};
pub use crate::error::{TsplibError, TsplibResult};
pub use crate::matrix::{DenseMatrix, FormatKind, WeightMatrix};
pub use crate::node_ids::{split_sequences, to_zero_based};
pub use crate::tsplib::{ProblemType, TsplibParser};
