use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the mart pipeline.
#[derive(Error, Debug)]
pub enum MartError {
    /// A source file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV record could not be parsed into its typed form.
    #[error("Failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A timestamp string did not match the expected source format.
    #[error("Invalid timestamp format: {0}")]
    TimestampParse(String),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Any error raised by the relational store.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Pass-through for CSV errors that do not carry a path (report export).
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the mart crates.
pub type Result<T> = std::result::Result<T, MartError>;
