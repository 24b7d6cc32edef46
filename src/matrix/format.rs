//! Edge-weight format table.
//!
//! TSPLIB95 names nine layouts for an explicit matrix. Only three of them are
//! distinct in memory: the full matrix, the upper triangle swept row by row,
//! and the lower triangle swept row by row. Column-major storage of one
//! triangle is the same linear sequence as row-major storage of the mirrored
//! triangle, so every `*_COL` keyword resolves to a row layout here and shares
//! its index arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{TsplibError, TsplibResult};

/// `EDGE_WEIGHT_FORMAT` keyword for an explicit matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FormatKind {
    /// All n² entries, row-major
    FullMatrix,
    /// Upper triangle without diagonal, row-major
    UpperRow,
    /// Lower triangle without diagonal, row-major
    LowerRow,
    /// Upper triangle with diagonal, row-major
    UpperDiagRow,
    /// Lower triangle with diagonal, row-major
    LowerDiagRow,
    /// Upper triangle without diagonal, column-major
    UpperCol,
    /// Lower triangle without diagonal, column-major
    LowerCol,
    /// Upper triangle with diagonal, column-major
    UpperDiagCol,
    /// Lower triangle with diagonal, column-major
    LowerDiagCol,
}

/// Which half of the matrix a triangular layout physically stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Triangle {
    /// Entries with `col >= row` (or `col > row` without diagonal)
    Upper,
    /// Entries with `col <= row` (or `col < row` without diagonal)
    Lower,
}

/// Storage layout a keyword resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Dense row-major n×n
    Full,
    /// One triangle, row-major
    Triangular {
        /// Stored half
        triangle: Triangle,
        /// Whether diagonal entries are stored
        diagonal: bool,
    },
}

/// Static table: keyword, kind, and the row layout that addresses it.
const FORMAT_TABLE: [(&str, FormatKind, Layout); 9] = [
    ("FULL_MATRIX", FormatKind::FullMatrix, Layout::Full),
    (
        "UPPER_ROW",
        FormatKind::UpperRow,
        Layout::Triangular {
            triangle: Triangle::Upper,
            diagonal: false,
        },
    ),
    (
        "LOWER_ROW",
        FormatKind::LowerRow,
        Layout::Triangular {
            triangle: Triangle::Lower,
            diagonal: false,
        },
    ),
    (
        "UPPER_DIAG_ROW",
        FormatKind::UpperDiagRow,
        Layout::Triangular {
            triangle: Triangle::Upper,
            diagonal: true,
        },
    ),
    (
        "LOWER_DIAG_ROW",
        FormatKind::LowerDiagRow,
        Layout::Triangular {
            triangle: Triangle::Lower,
            diagonal: true,
        },
    ),
    // Column variants: mirrored triangle, same sweep.
    (
        "UPPER_COL",
        FormatKind::UpperCol,
        Layout::Triangular {
            triangle: Triangle::Lower,
            diagonal: false,
        },
    ),
    (
        "LOWER_COL",
        FormatKind::LowerCol,
        Layout::Triangular {
            triangle: Triangle::Upper,
            diagonal: false,
        },
    ),
    (
        "UPPER_DIAG_COL",
        FormatKind::UpperDiagCol,
        Layout::Triangular {
            triangle: Triangle::Lower,
            diagonal: true,
        },
    ),
    (
        "LOWER_DIAG_COL",
        FormatKind::LowerDiagCol,
        Layout::Triangular {
            triangle: Triangle::Upper,
            diagonal: true,
        },
    ),
];

impl FormatKind {
    /// All nine formats in table order.
    pub const ALL: [FormatKind; 9] = [
        Self::FullMatrix,
        Self::UpperRow,
        Self::LowerRow,
        Self::UpperDiagRow,
        Self::LowerDiagRow,
        Self::UpperCol,
        Self::LowerCol,
        Self::UpperDiagCol,
        Self::LowerDiagCol,
    ];

    /// Resolve a TSPLIB keyword.
    ///
    /// Surrounding whitespace is ignored; the keyword itself must match
    /// exactly as TSPLIB95 spells it.
    ///
    /// # Errors
    ///
    /// Returns [`TsplibError::UnsupportedFormat`] for anything outside the
    /// nine matrix layouts (including `FUNCTION`, which is not a matrix).
    pub fn lookup(keyword: &str) -> TsplibResult<Self> {
        let trimmed = keyword.trim();
        FORMAT_TABLE
            .iter()
            .find(|(name, _, _)| *name == trimmed)
            .map(|(_, kind, _)| *kind)
            .ok_or_else(|| TsplibError::UnsupportedFormat {
                keyword: keyword.to_string(),
            })
    }

    fn entry(self) -> &'static (&'static str, FormatKind, Layout) {
        // Table order matches declaration order.
        &FORMAT_TABLE[self as usize]
    }

    /// TSPLIB keyword for this format.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.entry().0
    }

    /// Row layout used to address this format.
    #[must_use]
    pub fn layout(self) -> Layout {
        self.entry().2
    }

    /// Whether diagonal entries are physically stored.
    #[must_use]
    pub fn has_diagonal(self) -> bool {
        match self.layout() {
            Layout::Full => true,
            Layout::Triangular { diagonal, .. } => diagonal,
        }
    }

    /// Whether only one half of the matrix is stored.
    #[must_use]
    pub fn is_triangular(self) -> bool {
        !matches!(self.layout(), Layout::Full)
    }

    /// The format that reads the same token sequence into the same matrix.
    ///
    /// Column variants pair with the row variant of the mirrored triangle;
    /// `FULL_MATRIX` is its own dual.
    #[must_use]
    pub fn dual(self) -> Self {
        match self {
            Self::FullMatrix => Self::FullMatrix,
            Self::UpperCol => Self::LowerRow,
            Self::LowerRow => Self::UpperCol,
            Self::LowerCol => Self::UpperRow,
            Self::UpperRow => Self::LowerCol,
            Self::UpperDiagCol => Self::LowerDiagRow,
            Self::LowerDiagRow => Self::UpperDiagCol,
            Self::LowerDiagCol => Self::UpperDiagRow,
            Self::UpperDiagRow => Self::LowerDiagCol,
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatKind {
    type Err = TsplibError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}
