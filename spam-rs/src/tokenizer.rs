//! Text tokenization
//!
//! Text is lowercased, digits are turned into separators, and the result is
//! split on whitespace and the punctuation marks `, . : / ? !`. Empty tokens are
//! never produced.

/// Punctuation characters that separate tokens (in addition to whitespace)
pub const PUNCTUATION_DELIMITERS: [char; 6] = [',', '.', ':', '/', '?', '!'];

/// Normalized text ready to be split into tokens
///
/// Calling [`Tokenizer::tokens`] again restarts the sequence from the beginning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenizer {
    normalized: String,
}

impl Tokenizer {
    /// Normalize raw text
    pub fn new(text: &str) -> Self {
        let normalized = text
            .to_lowercase()
            .chars()
            .map(|c| if c.is_ascii_digit() { ' ' } else { c })
            .collect();

        Self { normalized }
    }

    /// Lazy sequence of tokens borrowed from the normalized text
    pub fn tokens(&self) -> impl Iterator<Item = &str> + Clone + '_ {
        self.normalized
            .split(is_delimiter)
            .filter(|token| !token.is_empty())
    }
}

/// Whether a character separates two tokens
pub fn is_delimiter(c: char) -> bool {
    c.is_ascii_whitespace() || PUNCTUATION_DELIMITERS.contains(&c)
}

/// Tokenize text into owned tokens
pub fn tokenize(text: &str) -> Vec<String> {
    Tokenizer::new(text).tokens().map(str::to_string).collect()
}
