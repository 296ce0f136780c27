//! The A* search loop and path reconstruction.

use crate::error::SearchError;
use crate::frontier::Frontier;
use wend_grid::{coords, Grid};

/// Terminal result of a search.
///
/// "No path" is a normal outcome, not an error; validation failures are
/// reported through [`SearchError`] before the loop ever runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The destination was reached. The interior cells of the route are
    /// marked `on_path` on the grid, ready for rendering.
    PathFound {
        /// The destination's g-cost: the path length in steps.
        cost: u32,
    },
    /// The frontier emptied before the destination was reached.
    NoPath,
}

impl SearchOutcome {
    /// Whether the search reached the destination.
    pub fn is_path_found(&self) -> bool {
        matches!(self, Self::PathFound { .. })
    }
}

/// A single A* search over a mutably borrowed grid.
///
/// The engine is a stack-local value: construct one per search with
/// [`SearchEngine::new`], which validates the endpoints eagerly, then
/// consume it with [`SearchEngine::seek`]. Nothing is shared between
/// searches, so independent searches over independent grids can run in
/// parallel.
///
/// Costs follow a single-discovery policy: a cell's g-cost, h-cost, and
/// parent are assigned once, on first encounter, and frontier members are
/// never re-costed. On a unit-cost 4-connected grid with the Manhattan
/// heuristic this yields shortest paths; weighted grids are out of scope.
#[derive(Debug)]
pub struct SearchEngine<'a> {
    grid: &'a mut Grid,
    source: usize,
    destination: usize,
    frontier: Frontier,
}

impl<'a> SearchEngine<'a> {
    /// Validate endpoints and prepare a search.
    ///
    /// Fails with [`SearchError::CellOutOfBounds`] if either index lies
    /// outside the grid, [`SearchError::IdenticalEndpoints`] if source
    /// and destination coincide, or [`SearchError::BlockedEndpoint`] if
    /// either endpoint sits on an obstacle. All checks run before the
    /// loop, so the loop itself never sees malformed input.
    pub fn new(
        grid: &'a mut Grid,
        source: usize,
        destination: usize,
    ) -> Result<Self, SearchError> {
        let cell_count = grid.cell_count();
        for index in [source, destination] {
            if index >= cell_count {
                return Err(SearchError::CellOutOfBounds { index, cell_count });
            }
        }
        if source == destination {
            return Err(SearchError::IdenticalEndpoints { index: source });
        }
        for index in [source, destination] {
            if grid.cell(index).is_blocked() {
                return Err(SearchError::BlockedEndpoint { index });
            }
        }
        Ok(Self {
            grid,
            source,
            destination,
            frontier: Frontier::new(),
        })
    }

    /// Run the search to a terminal outcome.
    ///
    /// Repeatedly extracts the lowest-cost frontier cell and expands its
    /// unblocked, unvisited, undiscovered neighbours. Success is declared
    /// when the destination reaches the head of the frontier — the
    /// destination itself is never expanded or marked visited. An empty
    /// frontier means no route exists.
    pub fn seek(mut self) -> SearchOutcome {
        self.grid.clear_search_state();

        let start = self.grid.cell_mut(self.source);
        start.set_g_cost(0);
        start.set_h_cost(0);
        self.frontier.insert(self.source, 0);

        while let Some((current, f)) = self.frontier.extract_min() {
            if current == self.destination {
                // The destination's h is zero, so its f is exactly the
                // path cost in steps.
                self.trace_path();
                return SearchOutcome::PathFound { cost: f };
            }
            self.expand(current);
            self.grid.cell_mut(current).set_visited(true);
        }

        SearchOutcome::NoPath
    }

    /// Discover the expandable neighbours of `current`, in the fixed
    /// order up, right, down, left.
    fn expand(&mut self, current: usize) {
        let Some(parent_g) = self.grid.cell(current).g_cost() else {
            // Frontier members are always discovered.
            return;
        };
        for neighbor in self.grid.neighbors(current) {
            let cell = self.grid.cell(neighbor);
            if cell.is_blocked() || cell.is_visited() || cell.is_discovered() {
                continue;
            }
            let g = parent_g + 1;
            let h = coords::manhattan(neighbor, self.destination, self.grid.width());
            let cell = self.grid.cell_mut(neighbor);
            cell.set_parent(current);
            cell.set_g_cost(g);
            cell.set_h_cost(h);
            self.frontier.insert(neighbor, g + h);
        }
    }

    /// Walk parent links from the destination back to the source, marking
    /// the interior cells of the route. Neither endpoint is marked.
    ///
    /// Only reachable from the success branch, where the destination has
    /// been discovered and carries a parent link back to the source.
    fn trace_path(&mut self) {
        let mut index = self
            .grid
            .cell(self.destination)
            .parent()
            .expect("a reached destination always has a parent");
        while index != self.source {
            let cell = self.grid.cell_mut(index);
            cell.set_on_path(true);
            index = cell
                .parent()
                .expect("path cells always link back to the source");
        }
    }
}

/// Validate and run a search in one call.
///
/// Equivalent to `SearchEngine::new(grid, source, destination)?.seek()`.
///
/// # Examples
///
/// ```
/// use wend_grid::Grid;
/// use wend_search::{seek, SearchOutcome};
///
/// let mut grid = Grid::new(3, 3).unwrap();
/// let outcome = seek(&mut grid, 0, 8).unwrap();
/// assert_eq!(outcome, SearchOutcome::PathFound { cost: 4 });
/// ```
pub fn seek(
    grid: &mut Grid,
    source: usize,
    destination: usize,
) -> Result<SearchOutcome, SearchError> {
    Ok(SearchEngine::new(grid, source, destination)?.seek())
}
