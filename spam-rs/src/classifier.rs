//! Naive Bayes classification
//!
//! Each class score starts at the prior and is multiplied by P(word | class) for
//! every input token found in the vocabulary, once per occurrence. Tokens outside
//! the vocabulary contribute nothing. Scores are kept as natural logarithms, so
//! the products become sums and long inputs do not underflow.

use std::fmt;

use tracing::debug;

use crate::error::{Result, SpamError};
use crate::model::TrainedModel;
use crate::probability::{ProbabilityEstimator, WordProbabilities};
use crate::tokenizer::Tokenizer;

/// Classification outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Spam,
    NotSpam,
}

impl Label {
    pub fn is_spam(&self) -> bool {
        matches!(self, Label::Spam)
    }

    /// Verdict line printed by the CLI
    pub fn message(&self) -> &'static str {
        match self {
            Label::Spam => "This is spam!",
            Label::NotSpam => "This is not spam.",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Spam => write!(f, "spam"),
            Label::NotSpam => write!(f, "not spam"),
        }
    }
}

/// Running score of one class, stored as ln(prior × Π P(word | class))
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ClassScore {
    log_score: f64,
}

impl ClassScore {
    pub fn from_prior(prior: f64) -> Self {
        Self {
            log_score: prior.ln(),
        }
    }

    /// Multiply in one word probability
    pub fn update(&mut self, probability: f64) {
        self.log_score += probability.ln();
    }

    pub fn log_score(&self) -> f64 {
        self.log_score
    }

    /// Score as a plain product (may underflow to 0 for long inputs)
    pub fn probability(&self) -> f64 {
        self.log_score.exp()
    }
}

/// Full result of scoring one input text
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: Label,
    pub spam: ClassScore,
    pub ham: ClassScore,
    /// Input tokens found in the vocabulary, repeats included
    pub matched_tokens: usize,
}

/// Classifier over a trained model
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    model: &'a TrainedModel,
}

impl<'a> Classifier<'a> {
    pub fn new(model: &'a TrainedModel) -> Self {
        Self { model }
    }

    /// Classify a text as spam or not spam
    pub fn classify(&self, text: &str) -> Result<Label> {
        self.score(text).map(|classification| classification.label)
    }

    /// Score a text under both classes and decide
    ///
    /// Equal scores resolve to [`Label::NotSpam`].
    pub fn score(&self, text: &str) -> Result<Classification> {
        let vocabulary = self.model.vocabulary();
        let spam_estimator = ProbabilityEstimator::new(self.model.spam_counts());
        let ham_estimator = ProbabilityEstimator::new(self.model.ham_counts());

        let mut spam_probabilities = WordProbabilities::new();
        let mut ham_probabilities = WordProbabilities::new();

        let mut spam = ClassScore::from_prior(self.model.prior());
        let mut ham = ClassScore::from_prior(self.model.prior());
        let mut matched_tokens = 0;

        let tokenizer = Tokenizer::new(text);
        for token in tokenizer.tokens().filter(|token| vocabulary.contains(token)) {
            let p_spam = spam_probabilities
                .get_or_estimate(token, &spam_estimator)
                .ok_or_else(|| SpamError::UnsmoothedWord {
                    word: token.to_string(),
                    class: "spam",
                })?;
            let p_ham = ham_probabilities
                .get_or_estimate(token, &ham_estimator)
                .ok_or_else(|| SpamError::UnsmoothedWord {
                    word: token.to_string(),
                    class: "ham",
                })?;

            spam.update(p_spam);
            ham.update(p_ham);
            matched_tokens += 1;
        }

        let label = if spam > ham { Label::Spam } else { Label::NotSpam };

        debug!(
            matched_tokens,
            distinct_words = spam_probabilities.len(),
            spam_log_score = spam.log_score(),
            ham_log_score = ham.log_score(),
            %label,
            "Text classified"
        );

        Ok(Classification {
            label,
            spam,
            ham,
            matched_tokens,
        })
    }
}
