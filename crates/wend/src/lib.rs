//! Wend: a single-agent A* pathfinder over 4-connected grids.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the wend sub-crates. For most users, adding `wend` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use wend::prelude::*;
//!
//! // A 5x5 map with a three-cell wall in column 2.
//! let mut grid = Grid::new(5, 5).unwrap();
//! for index in [7, 12, 17] {
//!     grid.set_blocked(index, true);
//! }
//!
//! let source = coords::index_of(0, 0, 5);
//! let destination = coords::index_of(4, 0, 5);
//! let outcome = seek(&mut grid, source, destination).unwrap();
//! assert_eq!(outcome, SearchOutcome::PathFound { cost: 4 });
//!
//! // Row-major symbols, ready for a console front end to lay out.
//! let top_row: String = grid
//!     .render(source, destination)
//!     .take(5)
//!     .map(Symbol::glyph)
//!     .collect();
//! assert_eq!(top_row, "S...D");
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`grid`] | `wend-grid` | Grid, cells, coordinate math, render symbols |
//! | [`search`] | `wend-search` | Frontier and the A* engine |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid, cell, and coordinate types (`wend-grid`).
pub use wend_grid as grid;

/// Frontier and search engine (`wend-search`).
pub use wend_search as search;

/// Common imports for typical wend usage.
///
/// ```rust
/// use wend::prelude::*;
/// ```
pub mod prelude {
    pub use wend_grid::coords;
    pub use wend_grid::{Cell, Grid, GridError, Symbol};
    pub use wend_search::{seek, Frontier, SearchEngine, SearchError, SearchOutcome};
}
