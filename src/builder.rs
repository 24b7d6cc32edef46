//! Extraction pipeline: raw section tokens to a validated matrix.

use crate::error::TsplibResult;
use crate::matrix::{FormatKind, WeightMatrix};
use crate::tsplib::ProblemType;

/// A validated matrix plus the metadata the storage layer needs with it.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedMatrix {
    /// The packed matrix
    pub matrix: WeightMatrix,
    /// Symmetry as implied by the problem `TYPE` (never by matrix content)
    pub is_symmetric: bool,
    /// Dimension of the matrix itself
    ///
    /// May be smaller than the problem's declared node count, e.g. a VRP
    /// whose explicit matrix only covers customers.
    pub actual_dimension: usize,
}

/// Builds a [`WeightMatrix`] from an `EDGE_WEIGHT_SECTION`.
///
/// # Examples
///
/// ```
/// use tsplib_norm::builder::MatrixBuilder;
///
/// let extracted = MatrixBuilder::new("UPPER_ROW", 3)
///     .with_problem_type("ATSP")
///     .build(vec![1.0, 2.0, 3.0])
///     .expect("3 values for a 3x3 upper triangle");
/// assert_eq!(extracted.actual_dimension, 3);
/// assert!(!extracted.is_symmetric);
/// ```
#[derive(Debug, Clone)]
pub struct MatrixBuilder {
    format_keyword: String,
    declared_dimension: usize,
    problem_type: ProblemType,
    min_index: usize,
}

impl MatrixBuilder {
    /// Start a builder for `format_keyword` at `declared_dimension`.
    #[must_use]
    pub fn new(format_keyword: impl Into<String>, declared_dimension: usize) -> Self {
        Self {
            format_keyword: format_keyword.into(),
            declared_dimension,
            problem_type: ProblemType::Tsp,
            min_index: 0,
        }
    }

    /// Problem `TYPE` keyword the symmetry flag is derived from.
    #[must_use]
    pub fn with_problem_type(mut self, problem_type: &str) -> Self {
        self.problem_type = ProblemType::parse(problem_type);
        self
    }

    /// Coordinate base of the resulting matrix.
    #[must_use]
    pub fn with_min_index(mut self, min_index: usize) -> Self {
        self.min_index = min_index;
        self
    }

    /// Validate `tokens` and wrap them.
    ///
    /// # Errors
    ///
    /// - [`TsplibError::UnsupportedFormat`](crate::error::TsplibError::UnsupportedFormat)
    ///   for an unknown format keyword
    /// - [`TsplibError::SizeMismatch`](crate::error::TsplibError::SizeMismatch)
    ///   when the token count does not fit the format and dimension
    pub fn build(self, tokens: Vec<f64>) -> TsplibResult<ExtractedMatrix> {
        let format = FormatKind::lookup(&self.format_keyword)?;
        let matrix =
            WeightMatrix::new(tokens, self.declared_dimension, format)?.with_min_index(self.min_index);
        let actual_dimension = matrix.dimension();
        Ok(ExtractedMatrix {
            matrix,
            is_symmetric: self.problem_type.assumes_symmetric(),
            actual_dimension,
        })
    }
}
