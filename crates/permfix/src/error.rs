use std::{io, path::PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PermFixError>;

#[derive(Debug, Error)]
pub enum PermFixError {
    #[error("Invalid pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Invalid separator for pattern of length {length}: {reason}")]
    InvalidSeparator { length: usize, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create file {path}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write file {path}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}
