//! Dense output record for the storage layer.

use serde::{Deserialize, Serialize};

use crate::builder::ExtractedMatrix;
use crate::matrix::{DenseMatrix, FormatKind};

/// Fully materialized edge-weight matrix with its provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixRecord {
    /// Matrix dimension (may differ from the problem's node count)
    pub dimension: usize,
    /// Layout the values were read from
    pub matrix_format: FormatKind,
    /// Symmetry implied by the problem type
    pub is_symmetric: bool,
    /// Row-major `dimension × dimension` values
    pub matrix: DenseMatrix,
}

/// Materialize an extracted matrix. Consumes it; the packed form is not
/// needed once the dense one exists.
#[must_use]
pub fn densify(extracted: ExtractedMatrix) -> MatrixRecord {
    MatrixRecord {
        dimension: extracted.actual_dimension,
        matrix_format: extracted.matrix.format(),
        is_symmetric: extracted.is_symmetric,
        matrix: extracted.matrix.to_dense(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::MatrixBuilder;

    #[test]
    fn test_densify_carries_metadata() {
        let extracted = MatrixBuilder::new("UPPER_DIAG_ROW", 3)
            .with_problem_type("TSP")
            .build(vec![5.0, 1.0, 2.0, 5.0, 3.0, 5.0])
            .expect("valid");
        let record = densify(extracted);
        assert_eq!(record.dimension, 3);
        assert_eq!(record.matrix_format, FormatKind::UpperDiagRow);
        assert!(record.is_symmetric);
        assert_eq!(
            record.matrix,
            vec![
                vec![5.0, 1.0, 2.0],
                vec![1.0, 5.0, 3.0],
                vec![2.0, 3.0, 5.0],
            ]
        );
    }

    #[test]
    fn test_dense_output_ignores_min_index() {
        let extracted = MatrixBuilder::new("FULL_MATRIX", 2)
            .with_min_index(1)
            .build(vec![0.0, 1.0, 2.0, 0.0])
            .expect("valid");
        let record = densify(extracted);
        assert_eq!(record.matrix, vec![vec![0.0, 1.0], vec![2.0, 0.0]]);
    }

    #[test]
    fn test_record_json_shape() {
        let extracted = MatrixBuilder::new("LOWER_ROW", 2)
            .with_problem_type("SOP")
            .build(vec![7.0])
            .expect("valid");
        let json = serde_json::to_value(densify(extracted)).expect("serialize");
        assert_eq!(json["dimension"], 2);
        assert_eq!(json["matrix_format"], "LOWER_ROW");
        assert_eq!(json["is_symmetric"], false);
        assert_eq!(json["matrix"][1][0], 7.0);
    }
}
