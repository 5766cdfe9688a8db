//! Error types shared by the simulation and the persistence layer.

use thiserror::Error;

/// Failures while reading or writing the key-value settings store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not determine home directory")]
    NoHomeDir,
    #[error("settings file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings could not be serialized: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Failures that end the current run when raised inside a simulation step.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("snake has no segments")]
    EmptySnake,
    #[error("grid {cols}x{rows} is smaller than the {min}x{min} minimum")]
    InvalidGrid { cols: i32, rows: i32, min: i32 },
    #[error(transparent)]
    Store(#[from] StoreError),
}
