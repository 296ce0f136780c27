//! Pure coordinate math for row-major grids.
//!
//! These functions are total and perform no bounds checking — that is the
//! contract. Callers validate positions against the grid extent before
//! converting.

/// Flatten `(x, y)` into a row-major cell index: `y * width + x`.
pub fn index_of(x: u32, y: u32, width: u32) -> usize {
    (y as usize) * (width as usize) + (x as usize)
}

/// Column (x position) of a row-major cell index.
pub fn column_of(index: usize, width: u32) -> u32 {
    (index % width as usize) as u32
}

/// Row (y position) of a row-major cell index.
pub fn row_of(index: usize, width: u32) -> u32 {
    (index / width as usize) as u32
}

/// Manhattan (L1) distance in cells between two indices on a grid of the
/// given width.
pub fn manhattan(a: usize, b: usize, width: u32) -> u32 {
    let dx = column_of(a, width).abs_diff(column_of(b, width));
    let dy = row_of(a, width).abs_diff(row_of(b, width));
    dx + dy
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn index_is_row_major() {
        assert_eq!(index_of(0, 0, 5), 0);
        assert_eq!(index_of(4, 0, 5), 4);
        assert_eq!(index_of(0, 1, 5), 5);
        assert_eq!(index_of(2, 3, 5), 17);
    }

    #[test]
    fn column_and_row_split_the_index() {
        assert_eq!(column_of(17, 5), 2);
        assert_eq!(row_of(17, 5), 3);
        assert_eq!(column_of(0, 5), 0);
        assert_eq!(row_of(0, 5), 0);
    }

    #[test]
    fn manhattan_examples() {
        assert_eq!(manhattan(0, 24, 5), 8); // (0,0) to (4,4)
        assert_eq!(manhattan(0, 4, 5), 4); // (0,0) to (4,0)
        assert_eq!(manhattan(12, 12, 5), 0);
    }

    proptest! {
        #[test]
        fn index_coordinate_roundtrip(width in 1u32..64, height in 1u32..64, seed in 0usize..4096) {
            let count = (width as usize) * (height as usize);
            let index = seed % count;
            let x = column_of(index, width);
            let y = row_of(index, width);
            prop_assert!(x < width);
            prop_assert!(y < height);
            prop_assert_eq!(index_of(x, y, width), index);
        }

        #[test]
        fn manhattan_is_symmetric(width in 1u32..64, a in 0usize..4096, b in 0usize..4096) {
            prop_assert_eq!(manhattan(a, b, width), manhattan(b, a, width));
        }
    }
}
