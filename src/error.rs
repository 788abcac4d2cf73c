use std::io;

use thiserror::Error;

/// Errors raised by the grid and dedup components.
#[derive(Debug, Error)]
pub enum Error {
    #[error("CSV file has no header row")]
    MissingHeader,
    #[error("grid spacing must be a positive number of meters, got {0}")]
    InvalidSpacing(f64),
    #[error("invalid territory: {0}")]
    InvalidTerritory(String),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to parse territory file: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
