//! Document that re-tokenizes its text for every count.

use super::{Document, SENTENCE_PATTERN, WORD_PATTERN};
use crate::syllables::count_syllables;

/// A document that derives every count straight from its text.
///
/// Nothing is cached, so each getter is a full pass over the text.
#[derive(Debug, Clone)]
pub struct BasicDocument<'t> {
    text: &'t str,
}

impl<'t> BasicDocument<'t> {
    /// Create a document over `text`.
    pub const fn new(text: &'t str) -> Self {
        Self { text }
    }
}

impl Document for BasicDocument<'_> {
    fn text(&self) -> &str {
        self.text
    }

    fn num_words(&self) -> usize {
        WORD_PATTERN.count(self.text)
    }

    fn num_sentences(&self) -> usize {
        SENTENCE_PATTERN.count(self.text)
    }

    fn num_syllables(&self) -> usize {
        WORD_PATTERN.tokens(self.text).map(count_syllables).sum()
    }
}
