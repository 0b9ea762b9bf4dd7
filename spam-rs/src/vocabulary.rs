//! Shared vocabulary and additive smoothing
//!
//! The vocabulary is the union of both classes' words. Smoothing then adds `k`
//! to every vocabulary word in each class, so every word is estimable in both
//! classes with a nonzero probability.

use std::collections::HashSet;

use tracing::debug;

use crate::counter::WordCounts;
use crate::error::Result;

/// Default smoothing constant (minimal word occurrence)
pub const DEFAULT_SMOOTHING: u64 = 1;

/// Largest smoothing constant accepted by configuration
pub const MAX_SMOOTHING: u64 = 1_000_000;

/// Every distinct word observed across both corpora
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: HashSet<String>,
}

impl Vocabulary {
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// Merges per-class counts into a vocabulary and smooths them
#[derive(Debug, Clone, Copy)]
pub struct VocabularyBuilder {
    smoothing: u64,
}

impl VocabularyBuilder {
    /// Create a builder with smoothing constant `k`
    pub fn new(smoothing: u64) -> Self {
        Self { smoothing }
    }

    pub fn smoothing(&self) -> u64 {
        self.smoothing
    }

    /// Union the vocabularies and add `k` to every word in both count maps
    ///
    /// Fails if a smoothed count overflows.
    pub fn build(&self, spam: &mut WordCounts, ham: &mut WordCounts) -> Result<Vocabulary> {
        let words: HashSet<String> = spam
            .words()
            .chain(ham.words())
            .map(str::to_string)
            .collect();

        for word in &words {
            spam.add(word, self.smoothing)?;
            ham.add(word, self.smoothing)?;
        }

        debug!(
            words = words.len(),
            smoothing = self.smoothing,
            "Vocabulary built and smoothed"
        );

        Ok(Vocabulary { words })
    }
}

impl Default for VocabularyBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_SMOOTHING)
    }
}
