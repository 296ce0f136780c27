//! End-to-end search scenarios on small maps.

use proptest::prelude::*;
use wend_grid::{coords, Grid, Symbol};
use wend_search::{seek, SearchError, SearchOutcome};

/// The demo map: 5x5 with a vertical wall at column 2, rows 1-3.
fn demo_grid() -> Grid {
    let mut grid = Grid::new(5, 5).unwrap();
    for index in [7, 12, 17] {
        grid.set_blocked(index, true);
    }
    grid
}

#[test]
fn demo_map_goes_straight_along_the_open_row() {
    let mut grid = demo_grid();
    let source = coords::index_of(0, 0, 5);
    let destination = coords::index_of(4, 0, 5);

    let outcome = seek(&mut grid, source, destination).unwrap();
    assert_eq!(outcome, SearchOutcome::PathFound { cost: 4 });

    // Row 0 is unobstructed, so the route is the 4-step straight line
    // with no detour around the wall.
    let on_path: Vec<usize> = (0..grid.cell_count())
        .filter(|&i| grid.cell(i).is_on_path())
        .collect();
    assert_eq!(on_path, vec![1, 2, 3]);
}

#[test]
fn demo_map_detours_around_the_wall() {
    let mut grid = demo_grid();
    let source = coords::index_of(0, 2, 5);
    let destination = coords::index_of(4, 2, 5);

    // Manhattan distance is 4, but the wall sits between the endpoints;
    // the shortest route rounds either end of it in 8 steps.
    let outcome = seek(&mut grid, source, destination).unwrap();
    assert_eq!(outcome, SearchOutcome::PathFound { cost: 8 });
}

#[test]
fn full_wall_leaves_the_far_side_unreachable() {
    let mut grid = Grid::new(5, 5).unwrap();
    for y in 0..5 {
        grid.set_blocked(coords::index_of(2, y, 5), true);
    }
    let source = coords::index_of(0, 0, 5);
    let destination = coords::index_of(4, 0, 5);

    let outcome = seek(&mut grid, source, destination).unwrap();
    assert_eq!(outcome, SearchOutcome::NoPath);
    assert!((0..grid.cell_count()).all(|i| !grid.cell(i).is_on_path()));
}

#[test]
fn a_destination_on_the_wall_is_rejected_before_the_search() {
    let mut grid = Grid::new(5, 5).unwrap();
    for y in 0..5 {
        grid.set_blocked(coords::index_of(2, y, 5), true);
    }
    let source = coords::index_of(0, 0, 5);
    let destination = coords::index_of(2, 4, 5);

    assert_eq!(
        seek(&mut grid, source, destination),
        Err(SearchError::BlockedEndpoint { index: destination })
    );
}

#[test]
fn enclosed_destination_yields_no_path_and_no_marks() {
    // Destination (3,3) boxed in on all four sides.
    let mut grid = Grid::new(5, 5).unwrap();
    for (x, y) in [(3, 2), (4, 3), (3, 4), (2, 3)] {
        grid.set_blocked(coords::index_of(x, y, 5), true);
    }
    let source = coords::index_of(0, 0, 5);
    let destination = coords::index_of(3, 3, 5);

    let outcome = seek(&mut grid, source, destination).unwrap();
    assert_eq!(outcome, SearchOutcome::NoPath);
    assert!((0..grid.cell_count()).all(|i| !grid.cell(i).is_on_path()));
}

#[test]
fn rendering_after_a_search_shows_the_route() {
    let mut grid = demo_grid();
    let source = coords::index_of(0, 0, 5);
    let destination = coords::index_of(4, 0, 5);
    seek(&mut grid, source, destination).unwrap();

    let glyphs: String = grid
        .render(source, destination)
        .map(Symbol::glyph)
        .collect();
    assert_eq!(glyphs.len(), 25);
    assert_eq!(&glyphs[0..5], "S...D");
    // The wall stays visible below the route.
    assert_eq!(glyphs.as_bytes()[7], b'X');
    assert_eq!(glyphs.as_bytes()[12], b'X');
    assert_eq!(glyphs.as_bytes()[17], b'X');
}

proptest! {
    #[test]
    fn open_grid_costs_match_manhattan_distance(
        width in 2u32..10,
        height in 2u32..10,
        a in 0usize..8192,
        b in 0usize..8192,
    ) {
        let mut grid = Grid::new(width, height).unwrap();
        let source = a % grid.cell_count();
        let destination = b % grid.cell_count();
        prop_assume!(source != destination);

        let outcome = seek(&mut grid, source, destination).unwrap();
        let expected = coords::manhattan(source, destination, width);
        prop_assert_eq!(outcome, SearchOutcome::PathFound { cost: expected });
    }

    #[test]
    fn path_marks_are_interior_only(
        width in 2u32..8,
        height in 2u32..8,
        a in 0usize..4096,
        b in 0usize..4096,
    ) {
        let mut grid = Grid::new(width, height).unwrap();
        let source = a % grid.cell_count();
        let destination = b % grid.cell_count();
        prop_assume!(source != destination);

        let outcome = seek(&mut grid, source, destination).unwrap();
        prop_assert!(outcome.is_path_found());
        let SearchOutcome::PathFound { cost } = outcome else { unreachable!() };

        // A cost-N route has N-1 interior cells; endpoints stay unmarked.
        let marked = (0..grid.cell_count())
            .filter(|&i| grid.cell(i).is_on_path())
            .count();
        prop_assert_eq!(marked as u32, cost - 1);
        prop_assert!(!grid.cell(source).is_on_path());
        prop_assert!(!grid.cell(destination).is_on_path());
    }
}
