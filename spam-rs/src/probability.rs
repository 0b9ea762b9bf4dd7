//! Conditional probability estimation
//!
//! P(word | class) is the word's smoothed count divided by the total smoothed
//! word mass of the class.

use std::collections::HashMap;

use crate::counter::WordCounts;

/// Probability of `word` within a class count map
///
/// Returns `None` when the word is absent from the map or the map is empty.
/// Sums the whole map on every call; use [`ProbabilityEstimator`] when
/// estimating many words against the same class.
pub fn probability(word: &str, counts: &WordCounts) -> Option<f64> {
    ProbabilityEstimator::new(counts).probability(word)
}

/// Estimator bound to one class, with the class total computed once
#[derive(Debug, Clone, Copy)]
pub struct ProbabilityEstimator<'a> {
    counts: &'a WordCounts,
    total: u128,
}

impl<'a> ProbabilityEstimator<'a> {
    pub fn new(counts: &'a WordCounts) -> Self {
        Self {
            counts,
            total: counts.total(),
        }
    }

    /// Total word-occurrence mass of the class
    pub fn total(&self) -> u128 {
        self.total
    }

    /// P(word | class), `None` if the word is not in the class map
    pub fn probability(&self, word: &str) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        let count = self.counts.get(word)?;
        Some(count as f64 / self.total as f64)
    }
}

/// Per-word conditional probabilities for one class
///
/// Built fresh for each classification from the words of the input text.
#[derive(Debug, Clone, Default)]
pub struct WordProbabilities {
    probabilities: HashMap<String, f64>,
}

impl WordProbabilities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached probability of a word, estimating it on first use
    pub fn get_or_estimate(
        &mut self,
        word: &str,
        estimator: &ProbabilityEstimator<'_>,
    ) -> Option<f64> {
        if let Some(&p) = self.probabilities.get(word) {
            return Some(p);
        }
        let p = estimator.probability(word)?;
        self.probabilities.insert(word.to_string(), p);
        Some(p)
    }

    pub fn get(&self, word: &str) -> Option<f64> {
        self.probabilities.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class_counts() -> WordCounts {
        WordCounts::from_iter([("free", 4), ("hello", 1)])
    }

    #[test]
    fn test_probability() {
        let counts = class_counts();
        let p = probability("free", &counts).unwrap();
        assert!((p - 0.8).abs() < 1e-12);
        let p = probability("hello", &counts).unwrap();
        assert!((p - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_absent_word_is_not_applicable() {
        let counts = class_counts();
        assert_eq!(probability("money", &counts), None);
        assert_eq!(probability("free", &WordCounts::new()), None);
    }

    #[test]
    fn test_estimator_caches_total() {
        let counts = class_counts();
        let estimator = ProbabilityEstimator::new(&counts);
        assert_eq!(estimator.total(), 5);
        let sum: f64 = counts.words().filter_map(|w| estimator.probability(w)).sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_word_probabilities_memoize() {
        let counts = class_counts();
        let estimator = ProbabilityEstimator::new(&counts);
        let mut probabilities = WordProbabilities::new();

        assert_eq!(probabilities.get_or_estimate("free", &estimator), Some(0.8));
        assert_eq!(probabilities.get_or_estimate("free", &estimator), Some(0.8));
        assert_eq!(probabilities.get_or_estimate("money", &estimator), None);
        assert_eq!(probabilities.len(), 1);
        assert_eq!(probabilities.get("free"), Some(0.8));
    }
}
