//! Documents and the Flesch reading-ease score.
//!
//! A [`Document`] owns its text and reports word, sentence and syllable
//! totals. Two variants are provided:
//!
//! - [`BasicDocument`] - re-tokenizes the text on every query
//! - [`EfficientDocument`] - tokenizes once at construction and caches counts
//!
//! Both share the same tokenizer and syllable estimator and agree on the
//! resulting totals for ordinary prose.

mod basic;
mod efficient;

pub use basic::BasicDocument;
pub use efficient::EfficientDocument;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::error::{DocumentError, DocumentResult};
use crate::tokenize::TokenPattern;

/// Runs of ASCII letters.
pub(crate) static WORD_PATTERN: LazyLock<TokenPattern> = LazyLock::new(|| {
    TokenPattern::from_regex(Regex::new(r"[a-zA-Z]+").expect("valid regex"))
});

/// Text between sentence terminators, starting at a non-space character.
pub(crate) static SENTENCE_PATTERN: LazyLock<TokenPattern> = LazyLock::new(|| {
    TokenPattern::from_regex(Regex::new(r"[^.!?\s][^.!?]*").expect("valid regex"))
});

/// The readability capability shared by every document variant.
pub trait Document {
    /// The full text of the document.
    fn text(&self) -> &str;

    /// Number of words.
    fn num_words(&self) -> usize;

    /// Number of sentences.
    fn num_sentences(&self) -> usize;

    /// Total syllables across all words.
    fn num_syllables(&self) -> usize;

    /// Flesch reading-ease score of this document.
    ///
    /// Fails with [`DocumentError::NoSentences`] or [`DocumentError::NoWords`]
    /// when either ratio would divide by zero.
    fn flesch_score(&self) -> DocumentResult<f64> {
        flesch_score(self.num_words(), self.num_sentences(), self.num_syllables())
    }
}

/// Flesch reading-ease score from precomputed totals.
///
/// `206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words)`
///
/// Higher is easier to read. Typical prose lands between 0 and 100, but the
/// formula is unbounded in both directions.
pub fn flesch_score(words: usize, sentences: usize, syllables: usize) -> DocumentResult<f64> {
    if sentences == 0 {
        return Err(DocumentError::NoSentences);
    }
    if words == 0 {
        return Err(DocumentError::NoWords);
    }

    let words_per_sentence = words as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words as f64;
    Ok(84.6f64.mul_add(-syllables_per_word, 1.015f64.mul_add(-words_per_sentence, 206.835)))
}

/// Which document variant to build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum DocumentKind {
    /// Re-tokenize for each count.
    Basic,
    /// Tokenize once and cache the counts.
    #[default]
    Efficient,
}

impl DocumentKind {
    /// Returns the variant name as used in config files and on the CLI.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Efficient => "efficient",
        }
    }

    /// Build a document of this kind over `text`.
    pub fn build<'t>(self, text: &'t str) -> Box<dyn Document + 't> {
        match self {
            Self::Basic => Box::new(BasicDocument::new(text)),
            Self::Efficient => Box::new(EfficientDocument::new(text)),
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// (text, syllables, words, sentences)
    const GOLDEN: &[(&str, usize, usize, usize)] = &[
        (
            "This is a test.  How many???  Senteeeeeeeeeences are here... there should be 5!  Right?",
            16,
            13,
            5,
        ),
        ("", 0, 0, 0),
        (
            "sentence, with, lots, of, commas.!  (And some poaren)).  The output is: 7.5.",
            15,
            11,
            4,
        ),
        ("many???  Senteeeeeeeeeences are", 6, 3, 2),
        (
            "Here is a series of test sentences. Your program should find 3 sentences, 33 words, \
             and 49 syllables. Not every word will have the correct amount of syllables \
             (example, for example), but most of them will.",
            49,
            33,
            3,
        ),
        ("Segue", 2, 1, 1),
        ("Sentence", 2, 1, 1),
        ("Sentences?!", 3, 1, 1),
        (
            "Lorem ipsum dolor sit amet, qui ex choro quodsi moderatius, nam dolores explicari \
             forensibus ad.",
            32,
            15,
            1,
        ),
    ];

    fn assert_golden(kind: DocumentKind) {
        for &(text, syllables, words, sentences) in GOLDEN {
            let doc = kind.build(text);
            assert_eq!(doc.text(), text);
            assert_eq!(doc.num_syllables(), syllables, "{kind} syllables: {text:?}");
            assert_eq!(doc.num_words(), words, "{kind} words: {text:?}");
            assert_eq!(doc.num_sentences(), sentences, "{kind} sentences: {text:?}");
        }
    }

    #[test]
    fn basic_document_golden_counts() {
        assert_golden(DocumentKind::Basic);
    }

    #[test]
    fn efficient_document_golden_counts() {
        assert_golden(DocumentKind::Efficient);
    }

    #[test]
    fn flesch_matches_formula() {
        let score = flesch_score(33, 3, 49).unwrap();
        assert!((score - 70.051_818_181_818_2).abs() < 1e-9, "{score}");

        let score = flesch_score(1, 1, 2).unwrap();
        assert!((score - 36.62).abs() < 1e-9, "{score}");
    }

    #[test]
    fn flesch_from_document() {
        let doc = BasicDocument::new("Hello world.");
        let score = doc.flesch_score().unwrap();
        assert!((score - 77.905).abs() < 1e-9, "{score}");
    }

    #[test]
    fn flesch_without_sentences_errors() {
        assert!(matches!(flesch_score(0, 0, 0), Err(DocumentError::NoSentences)));
        let doc = EfficientDocument::new("");
        assert!(matches!(doc.flesch_score(), Err(DocumentError::NoSentences)));
    }

    #[test]
    fn flesch_without_words_errors() {
        assert!(matches!(flesch_score(0, 2, 0), Err(DocumentError::NoWords)));
        // Sentences of digits only contain no words.
        let doc = BasicDocument::new("42. 7.");
        assert!(matches!(doc.flesch_score(), Err(DocumentError::NoWords)));
    }

    #[test]
    fn kind_round_trips_through_serde_names() {
        let kind: DocumentKind = serde_json::from_str("\"basic\"").unwrap();
        assert_eq!(kind, DocumentKind::Basic);
        assert_eq!(DocumentKind::default().as_str(), "efficient");
        assert_eq!(DocumentKind::Basic.to_string(), "basic");
    }
}
