//! Error types for spam-rs

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for spam-rs operations
pub type Result<T> = std::result::Result<T, SpamError>;

/// Spam classifier error types
#[derive(Error, Debug)]
pub enum SpamError {
    /// A corpus or input file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A class was configured without any training files
    #[error("No training files configured for the {0} corpus")]
    EmptyCorpusList(&'static str),

    /// A word count no longer fits in the count type
    #[error("Count for word '{word}' overflowed")]
    CountOverflow { word: String },

    /// A vocabulary word is missing from a class count map after smoothing
    #[error("Word '{word}' is missing from the {class} counts")]
    UnsmoothedWord { word: String, class: &'static str },
}

impl SpamError {
    /// Build a file read error carrying the offending path
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }
}
