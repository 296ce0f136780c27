//! Per-cell search state.

/// One cell of a [`Grid`](crate::Grid).
///
/// A cell's identity is its position in the grid's dense array; the cell
/// itself only carries state. The `blocked` flag is static map data, set
/// before a search begins and never changed by the engine. Everything
/// else is search-scoped: unset on a fresh grid, assigned once per search,
/// and cleared by [`Grid::clear_search_state`](crate::Grid::clear_search_state)
/// before the next one.
///
/// The parent link is stored as an index into the grid's cell array, so
/// the parent forest needs no reference graph: a cell is assigned a
/// parent at most once, on first discovery, and parents always point at
/// previously expanded cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    blocked: bool,
    visited: bool,
    on_path: bool,
    g_cost: Option<u32>,
    h_cost: Option<u32>,
    parent: Option<usize>,
}

impl Cell {
    /// Whether this cell is a static obstacle.
    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    /// Set or clear the obstacle flag.
    pub fn set_blocked(&mut self, blocked: bool) {
        self.blocked = blocked;
    }

    /// Whether this cell has been expanded (closed).
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    /// Mark this cell as expanded.
    pub fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }

    /// Whether this cell lies on the reconstructed shortest path.
    pub fn is_on_path(&self) -> bool {
        self.on_path
    }

    /// Mark this cell as part of the reconstructed path.
    pub fn set_on_path(&mut self, on_path: bool) {
        self.on_path = on_path;
    }

    /// Cost from the source along the best known path, once discovered.
    pub fn g_cost(&self) -> Option<u32> {
        self.g_cost
    }

    /// Assign the cost from the source.
    pub fn set_g_cost(&mut self, g_cost: u32) {
        self.g_cost = Some(g_cost);
    }

    /// Heuristic estimate of the remaining cost to the destination, once
    /// discovered.
    pub fn h_cost(&self) -> Option<u32> {
        self.h_cost
    }

    /// Assign the heuristic estimate.
    pub fn set_h_cost(&mut self, h_cost: u32) {
        self.h_cost = Some(h_cost);
    }

    /// Total estimated cost `f = g + h`, available once both parts are set.
    pub fn f_cost(&self) -> Option<u32> {
        Some(self.g_cost? + self.h_cost?)
    }

    /// Index of the cell this one was discovered from.
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    /// Record the cell this one was discovered from.
    pub fn set_parent(&mut self, parent: usize) {
        self.parent = Some(parent);
    }

    /// A cell counts as discovered once its g-cost has been assigned.
    pub fn is_discovered(&self) -> bool {
        self.g_cost.is_some()
    }

    /// Reset search-scoped state; the obstacle flag stays.
    pub(crate) fn clear_search_state(&mut self) {
        self.visited = false;
        self.on_path = false;
        self.g_cost = None;
        self.h_cost = None;
        self.parent = None;
    }
}
