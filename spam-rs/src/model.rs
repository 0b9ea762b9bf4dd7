//! Trained Naive Bayes model
//!
//! Training counts both corpora, builds the shared vocabulary and smooths the
//! counts. The resulting model is immutable and can classify any number of
//! inputs.

use tracing::info;

use crate::config::TrainingConfig;
use crate::corpus::Corpus;
use crate::counter::WordCounts;
use crate::error::{Result, SpamError};
use crate::vocabulary::{Vocabulary, VocabularyBuilder, DEFAULT_SMOOTHING};

/// Default prior probability of each class (balanced corpora)
pub const DEFAULT_PRIOR: f64 = 0.5;

/// Training parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingOptions {
    /// Smoothing constant added to every vocabulary word
    pub smoothing: u64,
    /// Prior probability used for both classes
    pub prior: f64,
}

impl Default for TrainingOptions {
    fn default() -> Self {
        Self {
            smoothing: DEFAULT_SMOOTHING,
            prior: DEFAULT_PRIOR,
        }
    }
}

/// Vocabulary plus the smoothed spam and ham count maps
#[derive(Debug, Clone)]
pub struct TrainedModel {
    vocabulary: Vocabulary,
    spam: WordCounts,
    ham: WordCounts,
    options: TrainingOptions,
}

impl TrainedModel {
    /// Train from the two corpora
    pub fn train(spam: &Corpus, ham: &Corpus, options: TrainingOptions) -> Result<Self> {
        Self::from_counts(
            WordCounts::from_corpus(spam.text())?,
            WordCounts::from_corpus(ham.text())?,
            options,
        )
    }

    /// Build a model from raw (unsmoothed) per-class counts
    pub fn from_counts(
        mut spam: WordCounts,
        mut ham: WordCounts,
        options: TrainingOptions,
    ) -> Result<Self> {
        let builder = VocabularyBuilder::new(options.smoothing);
        let vocabulary = builder.build(&mut spam, &mut ham)?;

        info!(
            vocabulary = vocabulary.len(),
            smoothing = builder.smoothing(),
            spam_words = %spam.total(),
            ham_words = %ham.total(),
            "Model trained"
        );

        Ok(Self {
            vocabulary,
            spam,
            ham,
            options,
        })
    }

    /// Load the configured corpus files and train
    pub fn from_config(config: &TrainingConfig) -> Result<Self> {
        if config.spam_paths.is_empty() {
            return Err(SpamError::EmptyCorpusList("spam"));
        }
        if config.ham_paths.is_empty() {
            return Err(SpamError::EmptyCorpusList("ham"));
        }

        info!(
            spam_files = config.spam_paths.len(),
            ham_files = config.ham_paths.len(),
            "Loading training corpora"
        );
        let spam = Corpus::load(&config.spam_paths)?;
        let ham = Corpus::load(&config.ham_paths)?;

        Self::train(&spam, &ham, config.options())
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Smoothed spam counts
    pub fn spam_counts(&self) -> &WordCounts {
        &self.spam
    }

    /// Smoothed ham counts
    pub fn ham_counts(&self) -> &WordCounts {
        &self.ham
    }

    pub fn prior(&self) -> f64 {
        self.options.prior
    }

    pub fn smoothing(&self) -> u64 {
        self.options.smoothing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probability::probability;

    #[test]
    fn test_train_from_corpora() {
        let model = TrainedModel::train(
            &Corpus::from("free money now"),
            &Corpus::from("meeting schedule today"),
            TrainingOptions::default(),
        )
        .unwrap();

        assert_eq!(model.vocabulary().len(), 6);
        assert_eq!(model.spam_counts().get("free"), Some(2));
        assert_eq!(model.spam_counts().get("meeting"), Some(1));
        assert_eq!(model.ham_counts().get("free"), Some(1));
        assert_eq!(model.ham_counts().get("meeting"), Some(2));
        assert_eq!(model.prior(), 0.5);
        assert_eq!(model.smoothing(), 1);
    }

    #[test]
    fn test_every_vocabulary_word_has_positive_probability() {
        let model = TrainedModel::train(
            &Corpus::from("Win a FREE prize! Click now, win big."),
            &Corpus::from("Lunch at noon? The report is attached."),
            TrainingOptions::default(),
        )
        .unwrap();

        for word in model.vocabulary().iter() {
            assert!(probability(word, model.spam_counts()).unwrap() > 0.0);
            assert!(probability(word, model.ham_counts()).unwrap() > 0.0);
        }
    }

    #[test]
    fn test_from_config_requires_paths() {
        let config = TrainingConfig {
            spam_paths: vec![],
            ..TrainingConfig::default()
        };
        let err = TrainedModel::from_config(&config).unwrap_err();
        assert!(matches!(err, SpamError::EmptyCorpusList("spam")));

        let config = TrainingConfig {
            ham_paths: vec![],
            ..TrainingConfig::default()
        };
        let err = TrainedModel::from_config(&config).unwrap_err();
        assert!(matches!(err, SpamError::EmptyCorpusList("ham")));
    }

    #[test]
    fn test_oversized_smoothing_fails_training() {
        let options = TrainingOptions {
            smoothing: u64::MAX,
            ..TrainingOptions::default()
        };
        let err = TrainedModel::train(
            &Corpus::from("free free money"),
            &Corpus::from("meeting"),
            options,
        )
        .unwrap_err();
        assert!(matches!(err, SpamError::CountOverflow { .. }));
    }
}
