//! Map configuration for the console front end.

use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use wend::prelude::Grid;

/// Widest map the console can label: columns are letters A-Z.
///
/// A front-end limit only; the grid itself supports arbitrary width.
pub const MAX_COLUMNS: u32 = 26;

/// Map layout: grid dimensions and blocked cell indices.
///
/// Loaded from a TOML file when a path is given on the command line;
/// otherwise the default demo map is used (5x5 with a three-cell wall
/// in column 2).
#[derive(Clone, Debug, Deserialize)]
pub struct MapConfig {
    /// Grid width in cells.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Grid height in cells.
    #[serde(default = "default_height")]
    pub height: u32,

    /// Row-major indices of blocked cells.
    #[serde(default = "default_blocked")]
    pub blocked: Vec<usize>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            blocked: default_blocked(),
        }
    }
}

impl MapConfig {
    /// Load a map layout from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: MapConfig = toml::from_str(&text)?;
        Ok(config)
    }

    /// Build the configured grid.
    pub fn build_grid(&self) -> Result<Grid> {
        if self.width > MAX_COLUMNS {
            return Err(CliError::Config(format!(
                "the console labels at most {MAX_COLUMNS} columns, got {}",
                self.width
            )));
        }
        let mut grid = Grid::new(self.width, self.height)?;
        for &index in &self.blocked {
            if index >= grid.cell_count() {
                return Err(CliError::Config(format!(
                    "blocked index {index} outside a {}x{} map",
                    self.width, self.height
                )));
            }
            grid.set_blocked(index, true);
        }
        Ok(grid)
    }
}

fn default_width() -> u32 {
    5
}

fn default_height() -> u32 {
    5
}

fn default_blocked() -> Vec<usize> {
    vec![7, 12, 17]
}
