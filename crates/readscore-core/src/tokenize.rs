//! Pattern-driven tokenizing.
//!
//! A [`TokenPattern`] is a compiled regular expression describing the shape
//! of a token. Matching is leftmost-first and non-overlapping: each token
//! starts at or after the end of the previous one. Patterns that can match
//! the empty string still advance at least one position per step, so the
//! token sequence is always finite.

use regex::Regex;

use crate::error::{DocumentError, DocumentResult};

/// A compiled token shape.
#[derive(Debug, Clone)]
pub struct TokenPattern {
    regex: Regex,
}

impl TokenPattern {
    /// Compile a token pattern.
    ///
    /// Fails with [`DocumentError::InvalidPattern`] when `pattern` is not a
    /// valid regular expression.
    pub fn new(pattern: &str) -> DocumentResult<Self> {
        let regex = Regex::new(pattern).map_err(|e| DocumentError::InvalidPattern {
            pattern: pattern.to_string(),
            source: Box::new(e),
        })?;
        Ok(Self { regex })
    }

    /// Wrap an already-compiled regex.
    pub const fn from_regex(regex: Regex) -> Self {
        Self { regex }
    }

    /// The pattern source.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Lazily yield the tokens of `text` in order of occurrence.
    ///
    /// Calling this again on the same text restarts the scan and yields the
    /// same sequence.
    pub fn tokens<'t>(&self, text: &'t str) -> impl Iterator<Item = &'t str> {
        self.regex.find_iter(text).map(|m| m.as_str())
    }

    /// Number of tokens in `text`.
    pub fn count(&self, text: &str) -> usize {
        self.regex.find_iter(text).count()
    }
}

/// Collect every token of `text` that matches `pattern`.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn tokenize<'t>(text: &'t str, pattern: &str) -> DocumentResult<Vec<&'t str>> {
    let pattern = TokenPattern::new(pattern)?;
    Ok(pattern.tokens(text).collect())
}
