//! tsplib-norm: TSPLIB95 explicit edge-weight matrices, normalized.
//!
//! TSPLIB95 stores explicit distance matrices in one of nine packed layouts
//! (full, or an upper/lower triangle swept by rows or columns, with or without
//! the diagonal). This crate validates such a section, addresses it in place,
//! and materializes the dense `n × n` form together with the metadata a
//! storage layer needs.
//!
//! # Quick Start
//!
//! ```
//! use tsplib_norm::prelude::*;
//!
//! let extracted = MatrixBuilder::new("UPPER_ROW", 4)
//!     .with_problem_type("TSP")
//!     .build(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
//!     .unwrap();
//! assert_eq!(extracted.matrix.value_at(3, 1).unwrap(), 5.0);
//!
//! let record = densify(extracted);
//! assert_eq!(record.matrix_format, FormatKind::UpperRow);
//! assert_eq!(record.matrix[2], vec![2.0, 4.0, 0.0, 6.0]);
//! ```
//!
//! # Modules
//!
//! - [`matrix`]: Format table, index arithmetic and [`WeightMatrix`](matrix::WeightMatrix)
//! - [`builder`]: Section tokens to a validated matrix
//! - [`densify`]: Dense output record
//! - [`node_ids`]: 1-based node ids to zero-based indices
//! - [`tsplib`]: Header and section tokenizer
//! - [`convert`]: Whole-file and batch conversion to JSON-ready records
//! - [`error`]: Error type

pub mod builder;
pub mod convert;
pub mod densify;
pub mod error;
pub mod matrix;
pub mod node_ids;
pub mod prelude;
pub mod tsplib;

pub use builder::{ExtractedMatrix, MatrixBuilder};
pub use convert::{
    convert_batch, convert_file, convert_str, BatchReport, ConversionFailure, ConvertOptions,
    ProblemRecord,
};
pub use densify::{densify, MatrixRecord};
pub use error::{TsplibError, TsplibResult};
pub use matrix::{FormatKind, WeightMatrix};
pub use tsplib::{ProblemType, TsplibFile, TsplibParser};
