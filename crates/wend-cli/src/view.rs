//! Console table layout for a rendered grid.

use wend::prelude::Grid;

/// Lay the grid's row-major symbols out as a table: a letter column
/// header, a horizontal rule, and one numbered row per grid row.
pub fn draw_map(grid: &Grid, source: usize, destination: usize) -> String {
    let width = grid.width();
    let mut out = String::new();

    out.push('\n');
    let label_width = grid.height().to_string().len() + 1;
    for _ in 0..label_width {
        out.push(' ');
    }
    out.push_str("| ");
    for i in 0..width {
        out.push((b'A' + i as u8) as char);
        out.push(' ');
    }
    out.push('\n');
    for _ in 0..(width * 2 + 4) {
        out.push('-');
    }
    out.push('\n');

    let mut symbols = grid.render(source, destination);
    for y in 0..grid.height() {
        out.push_str(&format!("{y:>2}| "));
        for _ in 0..width {
            if let Some(symbol) = symbols.next() {
                out.push(symbol.glyph());
                out.push(' ');
            }
        }
        out.push('\n');
    }
    out.push('\n');
    out
}

/// Erase the terminal and home the cursor (ANSI).
pub fn clear_screen() {
    print!("\x1b[2J\x1b[1;1H");
}
