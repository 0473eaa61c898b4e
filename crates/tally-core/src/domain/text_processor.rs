//! Text normalization, tokenization, and word statistics.
//!
//! A [`TextProcessor`] owns one immutable text value. Every operation is a
//! pure read over that value, so calls may happen in any order and any
//! number of times with identical results.

use std::any::Any;
use std::borrow::Cow;

use tracing::{debug, info, instrument, warn};

use crate::domain::error::DomainError;

/// Number of tokens echoed into the tokenize event.
const SAMPLE_TOKENS: usize = 3;

/// Whitespace for trimming and splitting: Unicode `White_Space` plus the
/// information separators U+001C..=U+001F.
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Turns raw text into normalized text, tokens, and word statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextProcessor {
    text: String,
}

impl TextProcessor {
    /// Create a processor that owns `text`.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        info!(text_length = text.len(), "Text processor initialized");
        Self { text }
    }

    /// Create a processor from bytes the caller has already read.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvalidEncoding`] if `bytes` is not valid UTF-8.
    pub fn from_utf8(bytes: Vec<u8>) -> Result<Self, DomainError> {
        let text = String::from_utf8(bytes).map_err(|e| DomainError::InvalidEncoding {
            reason: e.utf8_error().to_string(),
        })?;
        Ok(Self::new(text))
    }

    /// The raw text this processor was built from.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Trim outer whitespace and collapse every run of tabs to one space.
    ///
    /// Runs of spaces and newlines are left alone. Idempotent.
    pub fn normalize(&self) -> String {
        let trimmed = self.text.trim_matches(is_space);
        let mut result = String::with_capacity(trimmed.len());
        let mut in_tab_run = false;

        for ch in trimmed.chars() {
            if ch == '\t' {
                if !in_tab_run {
                    result.push(' ');
                }
                in_tab_run = true;
            } else {
                result.push(ch);
                in_tab_run = false;
            }
        }

        debug!(
            original_length = self.text.len(),
            processed_length = result.len(),
            "Text normalized"
        );
        result
    }

    /// Split the normalized text on whitespace runs.
    ///
    /// Blank text yields an empty vector, never a vector holding one empty
    /// token. Tokens keep their casing and punctuation.
    pub fn tokenize(&self) -> Vec<&str> {
        // Normalization only trims and turns tabs into spaces, so splitting
        // the raw text yields the tokens of the normalized text.
        let tokens: Vec<&str> = self.text.split(is_space).filter(|t| !t.is_empty()).collect();

        debug!(
            token_count = tokens.len(),
            sample_tokens = ?&tokens[..tokens.len().min(SAMPLE_TOKENS)],
            "Text tokenized"
        );
        tokens
    }

    /// Number of tokens in the text.
    #[instrument(level = "trace", skip_all, fields(input_length = self.text.len()))]
    pub fn count_words(&self) -> usize {
        let count = self.tokenize().len();
        info!(
            word_count = count,
            input_length = self.text.len(),
            "Word count completed"
        );
        count
    }

    /// Number of tokens exactly equal to `word` (case-sensitive).
    ///
    /// `word` is compared as-is: no trimming, no case folding. The empty
    /// string never matches because tokens are never empty.
    pub fn word_frequency(&self, word: &str) -> usize {
        let tokens = self.tokenize();
        let frequency = tokens.iter().filter(|token| **token == word).count();

        info!(
            word,
            frequency,
            total_tokens = tokens.len(),
            "Word frequency calculated"
        );
        frequency
    }

    /// Checked form of [`Self::word_frequency`] for callers holding a value
    /// whose type is only known at runtime.
    ///
    /// Accepts `String`, `&'static str`, `Box<str>` and `Cow<'static, str>`.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvalidArgument`] naming the received type for any
    /// other value.
    pub fn try_word_frequency<W: Any>(&self, word: &W) -> Result<usize, DomainError> {
        match as_text(word) {
            Some(word) => Ok(self.word_frequency(word)),
            None => {
                let err = DomainError::InvalidArgument {
                    expected: "str",
                    received: std::any::type_name::<W>().to_string(),
                };
                warn!(error = %err, "Word frequency rejected non-text argument");
                Err(err)
            }
        }
    }
}

fn as_text<W: Any>(value: &W) -> Option<&str> {
    let value = value as &dyn Any;
    if let Some(s) = value.downcast_ref::<String>() {
        return Some(s.as_str());
    }
    if let Some(s) = value.downcast_ref::<&'static str>() {
        return Some(*s);
    }
    if let Some(s) = value.downcast_ref::<Box<str>>() {
        return Some(&**s);
    }
    value
        .downcast_ref::<Cow<'static, str>>()
        .map(|s| s.as_ref())
}
