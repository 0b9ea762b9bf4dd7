//! Training corpora
//!
//! A corpus is the concatenated text of every sample file for one class.

use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Result, SpamError};

/// Raw text of all sample documents for one class
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    text: String,
}

impl Corpus {
    /// Read and concatenate every file, separated by a single space
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut text = String::new();

        for path in paths {
            let path = path.as_ref();
            let content = read_text(path)?;
            if content.trim().is_empty() {
                warn!("Corpus file {} is empty", path.display());
            }
            debug!(path = %path.display(), bytes = content.len(), "Loaded corpus file");

            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(&content);
        }

        Ok(Self { text })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl From<String> for Corpus {
    fn from(text: String) -> Self {
        Self { text }
    }
}

impl From<&str> for Corpus {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

/// Read a whole UTF-8 file, keeping the path in the error
pub fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| SpamError::read_file(path, e))
}
