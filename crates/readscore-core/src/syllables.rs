//! Heuristic syllable estimation.
//!
//! Counts maximal vowel runs (`a e i o u y`, either case) and removes one
//! syllable for a silent trailing `e`. Approximate by nature: no dictionary,
//! no phonetics.

use regex::Regex;
use std::sync::LazyLock;

/// Separators between sub-tokens of a word: ASCII whitespace and `, . ? ! ( )`.
/// Unicode spaces such as U+00A0 are part of the piece.
static SUB_TOKEN_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\n\x0B\f\r,.?!()]+").expect("valid regex"));

/// A maximal vowel run.
static VOWEL_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[AEIOUYaeiouy]+").expect("valid regex"));

/// Vowels that keep a trailing `e` voiced. Lowercase only.
const fn is_lower_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Estimate the number of syllables in `word`.
///
/// `word` is split on ASCII whitespace and `, . ? ! ( )`. Trailing empty pieces
/// are dropped; any remaining empty piece (a leading separator, or an input
/// with no content at all) makes the whole word count as `0`.
///
/// Every vowel run in a piece counts as one syllable. A piece ending in a
/// lowercase `e` loses one syllable when it has more than one vowel run and
/// the character before the `e` is not a lowercase vowel.
pub fn count_syllables(word: &str) -> usize {
    let mut pieces: Vec<&str> = SUB_TOKEN_SEPARATOR.split(word).collect();
    while pieces.len() > 1 && pieces.last().is_some_and(|p| p.is_empty()) {
        pieces.pop();
    }

    let mut total: usize = 0;
    for piece in pieces {
        if piece.is_empty() {
            return 0;
        }

        let runs = VOWEL_RUN.find_iter(piece).count();
        total += runs;

        if runs > 1 && ends_in_silent_e(piece) {
            total = total.saturating_sub(1);
        }
    }
    total
}

/// True when `piece` ends in `e` preceded by anything but a lowercase vowel.
fn ends_in_silent_e(piece: &str) -> bool {
    let mut rev = piece.chars().rev();
    if rev.next() != Some('e') {
        return false;
    }
    !rev.next().is_some_and(is_lower_vowel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_vowel_run() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("Flesch"), 1);
    }

    #[test]
    fn silent_e_is_dropped() {
        // "i" and "e" runs, "k" before the final e
        assert_eq!(count_syllables("like"), 1);
        assert_eq!(count_syllables("Hope"), 1);
    }

    #[test]
    fn lone_vowel_run_keeps_its_e() {
        assert_eq!(count_syllables("the"), 1);
        assert_eq!(count_syllables("e"), 1);
        assert_eq!(count_syllables("be"), 1);
    }

    #[test]
    fn vowel_before_e_keeps_it_voiced() {
        assert_eq!(count_syllables("free"), 1);
        assert_eq!(count_syllables("Segue"), 2);
    }

    #[test]
    fn uppercase_e_is_never_silent() {
        assert_eq!(count_syllables("CASE"), 2);
    }

    #[test]
    fn y_counts_as_a_vowel() {
        assert_eq!(count_syllables("rhythm"), 1);
        assert_eq!(count_syllables("Syzygy"), 3);
    }

    #[test]
    fn no_vowels_is_zero() {
        assert_eq!(count_syllables("psst"), 0);
        assert_eq!(count_syllables("7"), 0);
    }

    #[test]
    fn sub_tokens_are_summed() {
        assert_eq!(count_syllables("hello, world"), 3);
        assert_eq!(count_syllables("bake,like"), 2);
        assert_eq!(count_syllables("hello."), 2);
    }

    #[test]
    fn empty_sub_token_zeroes_the_word() {
        assert_eq!(count_syllables(""), 0);
        assert_eq!(count_syllables("..."), 0);
        assert_eq!(count_syllables("   "), 0);
        assert_eq!(count_syllables(" hello"), 0);
        assert_eq!(count_syllables("(parenthetical)"), 0);
    }

    #[test]
    fn only_ascii_whitespace_separates() {
        assert_eq!(count_syllables("\u{a0}like"), 1);
        assert_eq!(count_syllables("like\u{2003}cake"), 3);
        assert_eq!(count_syllables("like cake"), 2);
        assert_eq!(count_syllables("\x0Blike"), 0);
    }

    #[test]
    fn never_negative_for_awkward_inputs() {
        for word in ["e", "ee", "eye", "queue", "e e e", "Ee", "ye", "aye"] {
            // usize already rules out negatives; this guards against wraparound
            assert!(count_syllables(word) < word.len() + 1, "{word}");
        }
    }
}
