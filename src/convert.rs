//! File-level conversion: TSPLIB text to a normalized [`ProblemRecord`].
//!
//! Each file converts independently. A batch never aborts on a bad file; the
//! failure is logged and reported next to the successes.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::builder::MatrixBuilder;
use crate::densify::{densify, MatrixRecord};
use crate::error::{TsplibError, TsplibResult};
use crate::node_ids;
use crate::tsplib::{TsplibFile, TsplibParser};

/// Normalized problem, zero-based throughout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemRecord {
    /// `NAME`
    pub name: String,
    /// `TYPE` keyword
    pub problem_type: String,
    /// `COMMENT`
    pub comment: Option<String>,
    /// Declared `DIMENSION` of the problem
    pub dimension: usize,
    /// `CAPACITY`
    pub capacity: Option<f64>,
    /// `EDGE_WEIGHT_TYPE`
    pub edge_weight_type: Option<String>,
    /// Explicit matrix, when the file has an `EDGE_WEIGHT_SECTION`
    pub edge_weights: Option<MatrixRecord>,
    /// Tours from `TOUR_SECTION`, zero-based
    pub tours: Vec<Vec<usize>>,
    /// Depots from `DEPOT_SECTION`, zero-based
    pub depots: Vec<usize>,
    /// `(node, demand)` from `DEMAND_SECTION`, zero-based node
    pub demands: Vec<(usize, f64)>,
}

impl ProblemRecord {
    /// Build a record from a tokenized file.
    ///
    /// # Errors
    ///
    /// Matrix extraction and node-id conversion failures, plus
    /// [`TsplibError::Parse`] when weights are present without an
    /// `EDGE_WEIGHT_FORMAT`.
    pub fn from_tsplib(file: TsplibFile, path: &Path) -> TsplibResult<Self> {
        let edge_weights = match file.edge_weights {
            Some(tokens) => {
                let format = file
                    .edge_weight_format
                    .as_deref()
                    .ok_or_else(|| TsplibError::Parse {
                        file: path.to_path_buf(),
                        line: None,
                        cause: "EDGE_WEIGHT_SECTION without EDGE_WEIGHT_FORMAT".into(),
                    })?;
                let extracted = MatrixBuilder::new(format, file.dimension)
                    .with_problem_type(file.problem_type.as_str())
                    .build(tokens)?;
                Some(densify(extracted))
            }
            None => None,
        };

        let demands = file
            .demands
            .iter()
            .map(|&(node, demand)| node_ids::node_index(node).map(|idx| (idx, demand)))
            .collect::<TsplibResult<Vec<_>>>()?;

        Ok(Self {
            name: file.name,
            problem_type: file.problem_type.to_string(),
            comment: file.comment,
            dimension: file.dimension,
            capacity: file.capacity,
            edge_weight_type: file.edge_weight_type,
            edge_weights,
            tours: node_ids::split_sequences(&file.tour_ids)?,
            depots: node_ids::to_zero_based(&file.depot_ids)?,
            demands,
        })
    }

    /// Serialize as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`TsplibError::Json`] if serialization fails.
    pub fn to_json(&self, pretty: bool) -> TsplibResult<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

/// Convert TSPLIB text. `path` is used for error context and default name.
///
/// # Errors
///
/// Any tokenizer, matrix or node-id error for this file.
pub fn convert_str(content: &str, path: &Path) -> TsplibResult<ProblemRecord> {
    let file = TsplibParser::parse(content, path)?;
    ProblemRecord::from_tsplib(file, path)
}

/// Read and convert one file.
///
/// # Errors
///
/// I/O failures plus everything [`convert_str`] reports.
pub fn convert_file(path: &Path) -> TsplibResult<ProblemRecord> {
    let content = std::fs::read_to_string(path)?;
    let record = convert_str(&content, path)?;
    tracing::debug!(
        path = %path.display(),
        dimension = record.dimension,
        matrix_format = record
            .edge_weights
            .as_ref()
            .map(|m| m.matrix_format.as_str()),
        "converted"
    );
    Ok(record)
}

/// Options for batch conversion.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertOptions {
    /// Worker threads; `None` uses the global pool
    pub jobs: Option<usize>,
}

impl ConvertOptions {
    /// Default options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set worker thread count (values below 1 are treated as 1)
    #[must_use]
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = Some(jobs.max(1));
        self
    }
}

/// A file that could not be converted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionFailure {
    /// Input path
    pub path: PathBuf,
    /// Error message
    pub reason: String,
}

/// Outcome of a batch, in input order.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Successfully converted files
    pub converted: Vec<(PathBuf, ProblemRecord)>,
    /// Files that failed
    pub failures: Vec<ConversionFailure>,
}

impl BatchReport {
    /// Whether every file converted.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    fn collect(results: Vec<(PathBuf, TsplibResult<ProblemRecord>)>) -> Self {
        let mut report = Self::default();
        for (path, result) in results {
            match result {
                Ok(record) => report.converted.push((path, record)),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "conversion failed");
                    report.failures.push(ConversionFailure {
                        path,
                        reason: err.to_string(),
                    });
                }
            }
        }
        report
    }
}

fn convert_one(path: &Path) -> (PathBuf, TsplibResult<ProblemRecord>) {
    (path.to_path_buf(), convert_file(path))
}

/// Convert many files, isolating failures per file.
///
/// # Errors
///
/// Only [`TsplibError::ThreadPool`] when a sized worker pool cannot be
/// created; per-file errors land in [`BatchReport::failures`].
#[cfg(feature = "parallel")]
pub fn convert_batch(paths: &[PathBuf], options: &ConvertOptions) -> TsplibResult<BatchReport> {
    use rayon::prelude::*;

    let run = || -> Vec<_> { paths.par_iter().map(|p| convert_one(p)).collect() };
    let results = match options.jobs {
        Some(jobs) => rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build()
            .map_err(|e| TsplibError::ThreadPool(e.to_string()))?
            .install(run),
        None => run(),
    };
    Ok(BatchReport::collect(results))
}

/// Convert many files, isolating failures per file.
///
/// # Errors
///
/// Never fails without the `parallel` feature; per-file errors land in
/// [`BatchReport::failures`].
#[cfg(not(feature = "parallel"))]
pub fn convert_batch(paths: &[PathBuf], _options: &ConvertOptions) -> TsplibResult<BatchReport> {
    let results = paths.iter().map(|p| convert_one(p)).collect();
    Ok(BatchReport::collect(results))
}

#[cfg(test)]
#[path = "convert_tests.rs"]
mod tests;
