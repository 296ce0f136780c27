//! Error types for the console front end.

use thiserror::Error;
use wend::prelude::{GridError, SearchError};

/// Console front end error type.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("search error: {0}")]
    Search(#[from] SearchError),
}

impl From<toml::de::Error> for CliError {
    fn from(e: toml::de::Error) -> Self {
        CliError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
