//! Positions typed as a column letter and a row number.

use std::fmt;
use wend::prelude::{coords, Grid};

/// Why a typed position was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Not a column letter followed by a row number.
    InvalidPosition,
    /// Well-formed, but the coordinate lies outside the map.
    OutsideMap,
    /// Refers to an obstacle cell.
    BlockedCell,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPosition => {
                write!(f, "invalid position, expected a column letter and a row number (e.g. C2)")
            }
            Self::OutsideMap => write!(f, "position is outside the map"),
            Self::BlockedCell => write!(f, "cannot place a point on a block"),
        }
    }
}

impl std::error::Error for InputError {}

/// Parse a position like `A0`, `B1` or `H13` into a cell index.
///
/// Columns are letters `A`-`Z`, rows are non-negative numbers. The
/// 26-column bound belongs to this front end; the grid itself has no
/// such limit. Blocked cells are refused so endpoints are valid before
/// the search sees them.
pub fn parse_position(text: &str, grid: &Grid) -> Result<usize, InputError> {
    let text = text.trim();
    let mut chars = text.chars();
    let column = chars.next().ok_or(InputError::InvalidPosition)?;
    if !column.is_ascii_uppercase() {
        return Err(InputError::InvalidPosition);
    }

    let row_text = chars.as_str();
    if row_text.is_empty() || !row_text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::InvalidPosition);
    }
    let y: u32 = row_text.parse().map_err(|_| InputError::InvalidPosition)?;

    let x = column as u32 - 'A' as u32;
    if x >= grid.width() || y >= grid.height() {
        return Err(InputError::OutsideMap);
    }

    let index = coords::index_of(x, y, grid.width());
    if grid.cell(index).is_blocked() {
        return Err(InputError::BlockedCell);
    }
    Ok(index)
}
