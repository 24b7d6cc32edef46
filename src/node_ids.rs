//! TSPLIB (1-based, `-1` terminated) node ids to zero-based indices.
//!
//! Matrix coordinates do not go through here; see
//! [`WeightMatrix::with_min_index`](crate::matrix::WeightMatrix::with_min_index).

use crate::error::{TsplibError, TsplibResult};

/// Terminator ending a tour or depot list.
pub const TERMINATOR: i64 = -1;

/// Convert a single 1-based id.
///
/// # Errors
///
/// Returns [`TsplibError::InvalidNodeId`] for values below 1.
pub fn node_index(id: i64) -> TsplibResult<usize> {
    if id < 1 {
        return Err(TsplibError::InvalidNodeId { value: id });
    }
    usize::try_from(id - 1).map_err(|_| TsplibError::InvalidNodeId { value: id })
}

/// Convert ids up to the first terminator.
///
/// ```
/// use tsplib_norm::node_ids::to_zero_based;
///
/// assert_eq!(to_zero_based(&[1, 5, 3, -1]).unwrap(), vec![0, 4, 2]);
/// ```
///
/// # Errors
///
/// Returns [`TsplibError::InvalidNodeId`] for a value below 1 that is not the
/// terminator.
pub fn to_zero_based(ids: &[i64]) -> TsplibResult<Vec<usize>> {
    ids.iter()
        .take_while(|&&id| id != TERMINATOR)
        .map(|&id| node_index(id))
        .collect()
}

/// Split a `-1` separated stream into zero-based sequences.
///
/// A trailing sequence without terminator is kept; empty sequences (e.g. the
/// one after a final `-1 -1`) are dropped.
///
/// # Errors
///
/// Returns [`TsplibError::InvalidNodeId`] as [`to_zero_based`] does.
pub fn split_sequences(ids: &[i64]) -> TsplibResult<Vec<Vec<usize>>> {
    ids.split(|&id| id == TERMINATOR)
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| {
            chunk
                .iter()
                .map(|&id| node_index(id))
                .collect::<TsplibResult<Vec<_>>>()
        })
        .collect()
}
