//! Dense row-major grid of cells with a 4-connected neighbourhood.

use crate::cell::Cell;
use crate::coords;
use crate::error::GridError;
use crate::render::{self, Symbol};
use smallvec::SmallVec;

/// A two-dimensional grid of [`Cell`]s stored in a dense row-major `Vec`.
///
/// Each cell has coordinate `(x, y)` where `0 <= x < width` and
/// `0 <= y < height`, flattened to index `y * width + x`. Neighbours are
/// the four cardinal directions; distance is Manhattan (L1).
///
/// The grid is the single owner of all cell state. A search borrows it
/// mutably for its whole run, so independent searches over independent
/// grids are safe to run in parallel.
///
/// # Examples
///
/// ```
/// use wend_grid::Grid;
///
/// let grid = Grid::new(5, 5).unwrap();
/// assert_eq!(grid.cell_count(), 25);
///
/// // Corner cell 0 has only two neighbours.
/// assert_eq!(grid.neighbors(0).as_slice(), &[1, 5]);
/// ```
#[derive(Debug, Clone)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid of `width * height` unblocked cells with all search
    /// state unset.
    ///
    /// Returns [`GridError::InvalidDimension`] if either dimension is
    /// zero.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimension { width, height });
        }
        let count = (width as usize) * (height as usize);
        Ok(Self {
            width,
            height,
            cells: vec![Cell::default(); count],
        })
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Borrow the cell at `(x, y)`, bounds-checked.
    ///
    /// Returns [`GridError::OutOfBounds`] if either coordinate falls
    /// outside the grid extent.
    pub fn cell_at(&self, x: u32, y: u32) -> Result<&Cell, GridError> {
        self.check_bounds(x, y)?;
        Ok(&self.cells[coords::index_of(x, y, self.width)])
    }

    /// Mutably borrow the cell at `(x, y)`, bounds-checked.
    pub fn cell_at_mut(&mut self, x: u32, y: u32) -> Result<&mut Cell, GridError> {
        self.check_bounds(x, y)?;
        let index = coords::index_of(x, y, self.width);
        Ok(&mut self.cells[index])
    }

    fn check_bounds(&self, x: u32, y: u32) -> Result<(), GridError> {
        if x >= self.width || y >= self.height {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Borrow a cell by index.
    ///
    /// The index must be valid (`index < cell_count()`); this panics like
    /// slice indexing otherwise. [`Grid::cell_at`] is the validated entry
    /// point.
    pub fn cell(&self, index: usize) -> &Cell {
        &self.cells[index]
    }

    /// Mutably borrow a cell by index. Same contract as [`Grid::cell`].
    pub fn cell_mut(&mut self, index: usize) -> &mut Cell {
        &mut self.cells[index]
    }

    /// Set or clear the obstacle flag on a cell.
    pub fn set_blocked(&mut self, index: usize, blocked: bool) {
        self.cells[index].set_blocked(blocked);
    }

    /// Number of blocked cells on the map.
    pub fn blocked_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_blocked()).count()
    }

    /// The 4-connected neighbours of `index`, in the fixed order up,
    /// right, down, left, omitting any that would fall outside the grid.
    ///
    /// The order decides tie-break order among equal-cost neighbours, not
    /// path optimality.
    pub fn neighbors(&self, index: usize) -> SmallVec<[usize; 4]> {
        let x = coords::column_of(index, self.width);
        let y = coords::row_of(index, self.width);
        let mut result = SmallVec::new();
        if y > 0 {
            result.push(coords::index_of(x, y - 1, self.width));
        }
        if x + 1 < self.width {
            result.push(coords::index_of(x + 1, y, self.width));
        }
        if y + 1 < self.height {
            result.push(coords::index_of(x, y + 1, self.width));
        }
        if x > 0 {
            result.push(coords::index_of(x - 1, y, self.width));
        }
        result
    }

    /// Lazy row-major sequence of display symbols, one per cell.
    ///
    /// `source` and `destination` are cell indices; the symbol precedence
    /// is documented on [`Symbol`]. Rendering reads but never mutates the
    /// grid, so repeated calls produce identical output.
    pub fn render(
        &self,
        source: usize,
        destination: usize,
    ) -> impl Iterator<Item = Symbol> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| render::classify(cell, i == source, i == destination))
    }

    /// Reset search-scoped state (`visited`, `on_path`, costs, parents)
    /// on every cell; obstacles stay. Called by the engine before each
    /// search so one grid can host many searches.
    pub fn clear_search_state(&mut self) {
        for cell in &mut self.cells {
            cell.clear_search_state();
        }
    }
}
