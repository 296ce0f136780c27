//! Interactive console front end for the wend pathfinder.
//!
//! Builds a map (the built-in demo, or a TOML layout given as the sole
//! argument), prompts for source and destination positions like `A0` or
//! `C2`, runs the search, and draws the projected route.

mod config;
mod error;
mod input;
mod view;

use config::MapConfig;
use error::Result;
use input::parse_position;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};
use wend::prelude::{seek, Grid, SearchOutcome};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wend=info".parse().unwrap()),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => MapConfig::load(Path::new(&path))?,
        None => MapConfig::default(),
    };
    let mut grid = config.build_grid()?;
    debug!(
        width = grid.width(),
        height = grid.height(),
        blocks = grid.blocked_count(),
        "grid built"
    );

    view::clear_screen();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let source = prompt_position("Source", &grid, &mut lines)?;
    let destination = loop {
        let index = prompt_position("Destination", &grid, &mut lines)?;
        if index != source {
            break index;
        }
        println!("destination must differ from the source");
    };

    let started = Instant::now();
    let outcome = seek(&mut grid, source, destination)?;
    let elapsed = started.elapsed();

    print!("{}", view::draw_map(&grid, source, destination));
    match outcome {
        SearchOutcome::PathFound { cost } => {
            println!("Path projected in {}ms ({cost} steps).", elapsed.as_millis());
        }
        SearchOutcome::NoPath => println!("No path could be projected."),
    }
    info!(?outcome, elapsed_us = elapsed.as_micros() as u64, "search finished");

    Ok(())
}

/// Prompt until a valid position is typed; parse failures re-prompt.
fn prompt_position(
    label: &str,
    grid: &Grid,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<usize> {
    loop {
        print!("{label} => ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a position was chosen",
            )
            .into());
        };
        match parse_position(&line?, grid) {
            Ok(index) => return Ok(index),
            Err(err) => println!("{err}"),
        }
    }
}
