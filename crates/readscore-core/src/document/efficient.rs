//! Document that counts everything in a single tokenizing pass.

use regex::Regex;
use std::sync::LazyLock;

use super::Document;
use crate::syllables::count_syllables;
use crate::tokenize::TokenPattern;

/// Either a run of sentence terminators or a run of ASCII letters.
static WORD_OR_TERMINATOR: LazyLock<TokenPattern> = LazyLock::new(|| {
    TokenPattern::from_regex(Regex::new(r"[!?.]+|[a-zA-Z]+").expect("valid regex"))
});

/// A document whose counts are computed once, at construction.
#[derive(Debug, Clone)]
pub struct EfficientDocument<'t> {
    text: &'t str,
    words: usize,
    sentences: usize,
    syllables: usize,
}

impl<'t> EfficientDocument<'t> {
    /// Create a document over `text` and compute its counts.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn new(text: &'t str) -> Self {
        let mut words = 0;
        let mut sentences = 0;
        let mut syllables = 0;
        let mut last_was_word = false;

        for token in WORD_OR_TERMINATOR.tokens(text) {
            last_was_word = is_word(token);
            if last_was_word {
                words += 1;
                syllables += count_syllables(token);
            } else {
                sentences += 1;
            }
        }

        // Text that ends without a terminator still closes a sentence.
        if last_was_word {
            sentences += 1;
        }

        tracing::trace!(words, sentences, syllables, "counted document");

        Self {
            text,
            words,
            sentences,
            syllables,
        }
    }
}

fn is_word(token: &str) -> bool {
    token.starts_with(|c: char| c.is_ascii_alphabetic())
}

impl Document for EfficientDocument<'_> {
    fn text(&self) -> &str {
        self.text
    }

    fn num_words(&self) -> usize {
        self.words
    }

    fn num_sentences(&self) -> usize {
        self.sentences
    }

    fn num_syllables(&self) -> usize {
        self.syllables
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::BasicDocument;

    #[test]
    fn terminator_runs_count_once() {
        let doc = EfficientDocument::new("Wait?!... Really!!!");
        assert_eq!(doc.num_sentences(), 2);
        assert_eq!(doc.num_words(), 2);
    }

    #[test]
    fn unterminated_tail_counts_as_sentence() {
        let doc = EfficientDocument::new("First. second part");
        assert_eq!(doc.num_sentences(), 2);
    }

    #[test]
    fn agrees_with_basic_document() {
        let text = "It was the best of times. It was the worst of times! Was it?";
        let fast = EfficientDocument::new(text);
        let slow = BasicDocument::new(text);
        assert_eq!(fast.num_words(), slow.num_words());
        assert_eq!(fast.num_sentences(), slow.num_sentences());
        assert_eq!(fast.num_syllables(), slow.num_syllables());
    }
}
