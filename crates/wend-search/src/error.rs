//! Error types for search validation.

use std::fmt;

/// Errors raised while validating a search's endpoints.
///
/// Every variant is detected eagerly, before the search loop runs; an
/// exhausted frontier is reported as
/// [`SearchOutcome::NoPath`](crate::SearchOutcome::NoPath), not as an
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// An endpoint index lies outside the grid.
    CellOutOfBounds {
        /// The offending cell index.
        index: usize,
        /// Number of cells in the grid.
        cell_count: usize,
    },
    /// Source and destination refer to the same cell.
    IdenticalEndpoints {
        /// The shared cell index.
        index: usize,
    },
    /// An endpoint refers to a blocked cell.
    BlockedEndpoint {
        /// The offending cell index.
        index: usize,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellOutOfBounds { index, cell_count } => {
                write!(f, "cell index {index} out of bounds: grid has {cell_count} cells")
            }
            Self::IdenticalEndpoints { index } => {
                write!(f, "source and destination are both cell {index}")
            }
            Self::BlockedEndpoint { index } => {
                write!(f, "cell {index} is blocked and cannot be an endpoint")
            }
        }
    }
}

impl std::error::Error for SearchError {}
