//! TSPLIB95 section tokenizer.
//!
//! Splits a TSPLIB file into header fields and the raw numeric content of the
//! sections this crate normalizes. Numbers are parsed here; interpreting them
//! (matrix layout, node-id base) happens downstream.
//!
//! Reference: Reinelt (1991) "TSPLIB—A Traveling Salesman Problem Library"

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::{TsplibError, TsplibResult};
use crate::matrix::{expected_count, FormatKind};

/// Problem `TYPE` keyword.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProblemType {
    /// Symmetric traveling salesman
    Tsp,
    /// Asymmetric traveling salesman
    Atsp,
    /// Sequential ordering
    Sop,
    /// Hamiltonian cycle
    Hcp,
    /// Capacitated vehicle routing
    Cvrp,
    /// Vehicle routing (older spelling)
    Vrp,
    /// Tour file
    Tour,
    /// Anything else, kept verbatim
    Other(String),
}

impl ProblemType {
    /// Parse a `TYPE` value, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        match trimmed.to_uppercase().as_str() {
            "TSP" => Self::Tsp,
            "ATSP" => Self::Atsp,
            "SOP" => Self::Sop,
            "HCP" => Self::Hcp,
            "CVRP" => Self::Cvrp,
            "VRP" => Self::Vrp,
            "TOUR" => Self::Tour,
            _ => Self::Other(trimmed.to_string()),
        }
    }

    /// Keyword as written in TSPLIB files.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Tsp => "TSP",
            Self::Atsp => "ATSP",
            Self::Sop => "SOP",
            Self::Hcp => "HCP",
            Self::Cvrp => "CVRP",
            Self::Vrp => "VRP",
            Self::Tour => "TOUR",
            Self::Other(s) => s,
        }
    }

    /// Whether edge weights are taken to be symmetric.
    ///
    /// This is a label heuristic: only `ATSP` and `SOP` are asymmetric. The
    /// matrix contents are never inspected, so a file whose `TYPE` disagrees
    /// with its data is labelled by its `TYPE`.
    #[must_use]
    pub fn assumes_symmetric(&self) -> bool {
        !matches!(self, Self::Atsp | Self::Sop)
    }
}

impl fmt::Display for ProblemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Header fields and raw section content of one TSPLIB file.
#[derive(Debug, Clone, PartialEq)]
pub struct TsplibFile {
    /// `NAME`, or the file stem when absent
    pub name: String,
    /// `TYPE`
    pub problem_type: ProblemType,
    /// `COMMENT` lines joined with a space
    pub comment: Option<String>,
    /// `DIMENSION` (node count of the problem)
    pub dimension: usize,
    /// `CAPACITY` (vehicle routing)
    pub capacity: Option<f64>,
    /// `EDGE_WEIGHT_TYPE`, verbatim
    pub edge_weight_type: Option<String>,
    /// `EDGE_WEIGHT_FORMAT`, verbatim
    pub edge_weight_format: Option<String>,
    /// `EDGE_WEIGHT_SECTION` values; `None` when the section is absent
    pub edge_weights: Option<Vec<f64>>,
    /// `TOUR_SECTION` ids, terminators included
    pub tour_ids: Vec<i64>,
    /// `DEPOT_SECTION` ids, terminators included
    pub depot_ids: Vec<i64>,
    /// `DEMAND_SECTION` `(node id, demand)` pairs
    pub demands: Vec<(i64, f64)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Header,
    EdgeWeight,
    Tour,
    Depot,
    Demand,
    /// Recognized but not normalized here
    Skipped,
}

impl Section {
    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "EDGE_WEIGHT_SECTION" => Some(Self::EdgeWeight),
            "TOUR_SECTION" => Some(Self::Tour),
            "DEPOT_SECTION" => Some(Self::Depot),
            "DEMAND_SECTION" => Some(Self::Demand),
            "NODE_COORD_SECTION"
            | "DISPLAY_DATA_SECTION"
            | "FIXED_EDGES_SECTION"
            | "EDGE_DATA_SECTION" => Some(Self::Skipped),
            // Extensions such as BACKHAUL_SECTION or TIME_WINDOW_SECTION
            other if other.ends_with("_SECTION") => Some(Self::Skipped),
            _ => None,
        }
    }
}

/// Parser for TSPLIB format files
#[derive(Debug)]
pub struct TsplibParser;

impl TsplibParser {
    /// Parse a TSPLIB file
    ///
    /// # Errors
    ///
    /// I/O failures, plus everything [`TsplibParser::parse`] reports.
    pub fn parse_file(path: &Path) -> TsplibResult<TsplibFile> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, path)
    }

    /// Parse TSPLIB content; `path` is used for error context and the
    /// default name.
    ///
    /// # Errors
    ///
    /// - [`TsplibError::ValueParse`] for a non-numeric token in a numeric section
    /// - [`TsplibError::Parse`] for a missing or malformed header field
    pub fn parse(content: &str, path: &Path) -> TsplibResult<TsplibFile> {
        let mut name = String::new();
        let mut problem_type = ProblemType::Tsp;
        let mut comments: Vec<String> = Vec::new();
        let mut dimension: Option<usize> = None;
        let mut capacity = None;
        let mut edge_weight_type = None;
        let mut edge_weight_format = None;
        let mut edge_weights: Option<Vec<f64>> = None;
        let mut tour_ids = Vec::new();
        let mut depot_ids = Vec::new();
        let mut demands = Vec::new();
        let mut section = Section::Header;

        for (line_idx, line) in content.lines().enumerate() {
            let line_num = line_idx + 1;
            let line = line.trim();

            if line.is_empty() {
                continue;
            }
            if line == "EOF" {
                break;
            }

            if let Some(next) = Section::from_keyword(line.trim_end_matches(':').trim_end()) {
                section = next;
                if next == Section::EdgeWeight {
                    edge_weights.get_or_insert_with(Vec::new);
                }
                continue;
            }

            // Data lines never contain ':', so this is a header line and
            // closes whatever section was open.
            if let Some((key, value)) = line.split_once(':') {
                section = Section::Header;
                let value = value.trim();
                match key.trim().to_uppercase().as_str() {
                    "NAME" => name = value.to_string(),
                    "TYPE" => problem_type = ProblemType::parse(value),
                    "COMMENT" => comments.push(value.to_string()),
                    "DIMENSION" => {
                        dimension = Some(value.parse().map_err(|_| TsplibError::Parse {
                            file: path.to_path_buf(),
                            line: Some(line_num),
                            cause: format!("Invalid dimension: {value}"),
                        })?);
                    }
                    "CAPACITY" => {
                        capacity = Some(value.parse().map_err(|_| TsplibError::Parse {
                            file: path.to_path_buf(),
                            line: Some(line_num),
                            cause: format!("Invalid capacity: {value}"),
                        })?);
                    }
                    "EDGE_WEIGHT_TYPE" => edge_weight_type = Some(value.to_string()),
                    "EDGE_WEIGHT_FORMAT" => edge_weight_format = Some(value.to_string()),
                    // Unknown or informational fields - ignore
                    _ => {}
                }
                continue;
            }

            match section {
                Section::EdgeWeight => {
                    let weights = edge_weights.get_or_insert_with(Vec::new);
                    for token in line.split_whitespace() {
                        weights.push(parse_token(token, path, line_num)?);
                    }
                }
                Section::Tour => {
                    for token in line.split_whitespace() {
                        tour_ids.push(parse_token(token, path, line_num)?);
                    }
                }
                Section::Depot => {
                    for token in line.split_whitespace() {
                        depot_ids.push(parse_token(token, path, line_num)?);
                    }
                }
                Section::Demand => {
                    let mut parts = line.split_whitespace();
                    match (parts.next(), parts.next(), parts.next()) {
                        (Some(node), Some(demand), None) => demands.push((
                            parse_token(node, path, line_num)?,
                            parse_token(demand, path, line_num)?,
                        )),
                        _ => {
                            return Err(TsplibError::Parse {
                                file: path.to_path_buf(),
                                line: Some(line_num),
                                cause: format!("Expected 'node demand' pair, got: {line}"),
                            });
                        }
                    }
                }
                Section::Header | Section::Skipped => {}
            }
        }

        let dimension = dimension.ok_or_else(|| TsplibError::Parse {
            file: path.to_path_buf(),
            line: None,
            cause: "Missing DIMENSION field".into(),
        })?;

        if problem_type == ProblemType::Sop {
            if let Some(weights) = edge_weights.as_mut() {
                strip_dimension_prefix(weights, dimension, edge_weight_format.as_deref());
            }
        }

        if name.is_empty() {
            name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("unnamed")
                .to_string();
        }

        Ok(TsplibFile {
            name,
            problem_type,
            comment: if comments.is_empty() {
                None
            } else {
                Some(comments.join(" "))
            },
            dimension,
            capacity,
            edge_weight_type,
            edge_weight_format,
            edge_weights,
            tour_ids,
            depot_ids,
            demands,
        })
    }
}

/// TSPLIB95 SOP files repeat `DIMENSION` as the first token of
/// `EDGE_WEIGHT_SECTION`. Drop it only when it is exactly one token too many.
fn strip_dimension_prefix(weights: &mut Vec<f64>, dimension: usize, format: Option<&str>) {
    let Some(expected) = format
        .and_then(|keyword| FormatKind::lookup(keyword).ok())
        .map(|kind| expected_count(kind.layout(), dimension))
    else {
        return;
    };
    #[allow(clippy::cast_precision_loss)]
    let leading_dimension = weights.first() == Some(&(dimension as f64));
    if leading_dimension && expected.checked_add(1) == Some(weights.len()) {
        weights.remove(0);
        tracing::debug!(dimension, "dropped leading dimension token in SOP weights");
    }
}

fn parse_token<T: std::str::FromStr>(token: &str, path: &Path, line: usize) -> TsplibResult<T> {
    token.parse().map_err(|_| TsplibError::ValueParse {
        file: path.to_path_buf(),
        line,
        token: token.to_string(),
    })
}

#[cfg(test)]
#[path = "tsplib_tests.rs"]
mod tests;
