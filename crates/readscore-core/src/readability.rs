//! Readability scoring using Flesch reading ease.
//!
//! Formula: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`
//!
//! Higher score = more readable. Around 60-70 reads as plain English; below 30
//! is dense academic prose.

use serde::{Deserialize, Serialize};

use crate::document::DocumentKind;
use crate::error::DocumentResult;
use crate::markdown;

/// Result of readability analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadabilityReport {
    /// Flesch reading-ease score.
    pub score: f64,
    /// Number of words detected.
    pub words: usize,
    /// Number of sentences detected.
    pub sentences: usize,
    /// Total syllable count.
    pub syllables: usize,
    /// Document variant that produced the counts.
    pub document: DocumentKind,
    /// Minimum acceptable score (if provided).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_score: Option<f64>,
    /// Whether the score falls below the minimum.
    pub below_min: bool,
}

/// Score the readability of `text`.
///
/// # Arguments
///
/// * `text` - The text to analyze.
/// * `strip_md` - If `true`, strip markdown formatting before analysis.
/// * `kind` - Which document variant computes the counts.
/// * `min_score` - Optional minimum acceptable score.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn check_readability(
    text: &str,
    strip_md: bool,
    kind: DocumentKind,
    min_score: Option<f64>,
) -> DocumentResult<ReadabilityReport> {
    let prose = if strip_md {
        markdown::strip_to_prose(text)
    } else {
        text.to_string()
    };

    let doc = kind.build(&prose);
    let words = doc.num_words();
    let sentences = doc.num_sentences();
    let syllables = doc.num_syllables();
    let score = doc.flesch_score()?;

    let below_min = min_score.is_some_and(|min| score < min);

    Ok(ReadabilityReport {
        score,
        words,
        sentences,
        syllables,
        document: kind,
        min_score,
        below_min,
    })
}
