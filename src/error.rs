use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures reading or writing the high-score file.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("failed to access score file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("score file {path} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Top-level failures surfaced by the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
    #[error("failed to open log file {path}: {source}")]
    Logger {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Score(#[from] ScoreError),
}
