//! A* search over wend grids.
//!
//! The algorithm is A* with the Manhattan-distance heuristic on a
//! 4-connected, unit-cost grid. Each search is an independent,
//! stack-local computation over a mutably borrowed [`wend_grid::Grid`]:
//! construct a [`SearchEngine`] (or call [`seek`]) with a source and a
//! destination cell, run it to a [`SearchOutcome`], then read the marked
//! path back off the grid.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod engine;
pub mod error;
pub mod frontier;

pub use engine::{seek, SearchEngine, SearchOutcome};
pub use error::SearchError;
pub use frontier::Frontier;
