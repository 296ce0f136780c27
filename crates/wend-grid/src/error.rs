//! Error types for grid construction and lookup.

use std::fmt;

/// Errors arising from grid construction or cell lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A grid dimension is zero.
    InvalidDimension {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// A coordinate lies outside the grid extent.
    OutOfBounds {
        /// The offending x position.
        x: u32,
        /// The offending y position.
        y: u32,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { width, height } => {
                write!(f, "grid dimensions must be positive, got {width}x{height}")
            }
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(f, "position ({x}, {y}) out of bounds: [0, {width}) x [0, {height})")
            }
        }
    }
}

impl std::error::Error for GridError {}
