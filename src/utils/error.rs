//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//!
//! Parse mismatches are deliberately absent here: the classifier reports
//! them as `LineMatch::NoMatch`, never as an error.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while producing or locating run files
#[derive(Error, Debug)]
pub enum AcquisitionError {
    #[error("Cannot create capture directory {path}: {source}")]
    CaptureDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot create run file {path}: {source}")]
    RunFileFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to execute '{command}': {source}")]
    CommandUnavailable {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read run directory {path}: {source}")]
    RunDirUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur during chart rendering
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("No hops to plot")]
    NoHops,

    #[error("Series lengths differ: {labels} labels, {samples} sample sets, {means} means")]
    MismatchedSeries {
        labels: usize,
        samples: usize,
        means: usize,
    },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
