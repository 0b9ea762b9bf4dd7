//! Word frequency counting

use std::collections::HashMap;

use crate::error::{Result, SpamError};
use crate::tokenizer::Tokenizer;

/// Occurrence count per normalized word for one class
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCounts {
    counts: HashMap<String, u64>,
}

impl WordCounts {
    /// Create an empty count map
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every token of a corpus
    pub fn from_corpus(text: &str) -> Result<Self> {
        let mut counts = Self::new();
        counts.add_text(text)?;
        Ok(counts)
    }

    /// Tokenize text and add its tokens to the counts
    pub fn add_text(&mut self, text: &str) -> Result<()> {
        let tokenizer = Tokenizer::new(text);
        for token in tokenizer.tokens() {
            self.add(token, 1)?;
        }
        Ok(())
    }

    /// Add `amount` occurrences of a word, inserting it if absent
    ///
    /// Fails without modifying the map if the count would overflow.
    pub fn add(&mut self, word: &str, amount: u64) -> Result<()> {
        match self.counts.get_mut(word) {
            Some(count) => {
                *count = count
                    .checked_add(amount)
                    .ok_or_else(|| SpamError::CountOverflow {
                        word: word.to_string(),
                    })?;
            }
            None => {
                self.counts.insert(word.to_string(), amount);
            }
        }
        Ok(())
    }

    /// Occurrences of a word, `None` if it was never seen
    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Sum of all counts, widened so it cannot overflow
    pub fn total(&self) -> u128 {
        self.counts.values().map(|&count| u128::from(count)).sum()
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for WordCounts {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        Self {
            counts: iter
                .into_iter()
                .map(|(word, count)| (word.into(), count))
                .collect(),
        }
    }
}
