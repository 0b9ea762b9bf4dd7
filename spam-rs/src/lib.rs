//! spam-rs: Naive Bayes spam classifier
//!
//! Classifies a text as spam or not spam with a bag-of-words Naive Bayes model
//! trained from a spam corpus and a ham corpus.
//!
//! # Pipeline
//!
//! - [`tokenizer`]: lowercase, strip digits, split on whitespace and `, . : / ? !`
//! - [`counter`]: word frequency table per corpus
//! - [`vocabulary`]: shared vocabulary and add-k (Laplace) smoothing
//! - [`probability`]: P(word | class) from the smoothed counts
//! - [`classifier`]: prior × product of word probabilities, compared per class
//!
//! # Example
//!
//! ```
//! use spam_rs::{Classifier, Corpus, Label, TrainedModel, TrainingOptions};
//!
//! let model = TrainedModel::train(
//!     &Corpus::from("free money now"),
//!     &Corpus::from("meeting schedule today"),
//!     TrainingOptions::default(),
//! )
//! .unwrap();
//!
//! let label = Classifier::new(&model).classify("free money").unwrap();
//! assert_eq!(label, Label::Spam);
//! ```

pub mod classifier;
pub mod config;
pub mod corpus;
pub mod counter;
pub mod error;
pub mod model;
pub mod probability;
pub mod tokenizer;
pub mod vocabulary;

// Re-export commonly used types
pub use classifier::{ClassScore, Classification, Classifier, Label};
pub use config::Config;
pub use corpus::Corpus;
pub use counter::WordCounts;
pub use error::{Result, SpamError};
pub use model::{TrainedModel, TrainingOptions};
pub use vocabulary::{Vocabulary, VocabularyBuilder};
