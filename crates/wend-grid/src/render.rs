//! Display symbols for laying a grid out on screen.

use crate::cell::Cell;

/// The display symbol for one cell.
///
/// When several markings apply to a cell, precedence is: blocked, then
/// source, then destination, then path, else empty. Endpoint validation
/// keeps source and destination off blocked cells, and reconstruction
/// never marks the endpoints themselves, so overlaps do not arise through
/// the public API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symbol {
    /// Walkable cell not on the path.
    Empty,
    /// Static obstacle.
    Blocked,
    /// The search source.
    Source,
    /// The search destination.
    Destination,
    /// An interior cell of the reconstructed path.
    Path,
}

impl Symbol {
    /// Single-character glyph used by console front ends.
    pub fn glyph(self) -> char {
        match self {
            Self::Empty => ' ',
            Self::Blocked => 'X',
            Self::Source => 'S',
            Self::Destination => 'D',
            Self::Path => '.',
        }
    }
}

/// Classify one cell according to the render precedence.
pub(crate) fn classify(cell: &Cell, is_source: bool, is_destination: bool) -> Symbol {
    if cell.is_blocked() {
        Symbol::Blocked
    } else if is_source {
        Symbol::Source
    } else if is_destination {
        Symbol::Destination
    } else if cell.is_on_path() {
        Symbol::Path
    } else {
        Symbol::Empty
    }
}
