//! Syllables command — per-word syllable estimates.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use readscore_core::count_syllables;

/// Arguments for the `syllables` subcommand.
#[derive(Args, Debug)]
pub struct SyllablesArgs {
    /// Words to estimate.
    #[arg(required = true)]
    pub words: Vec<String>,
}

#[derive(Debug, Serialize)]
struct WordSyllables {
    word: String,
    syllables: usize,
}

#[derive(Debug, Serialize)]
struct SyllablesReport {
    words: Vec<WordSyllables>,
    total: usize,
}

impl SyllablesReport {
    fn new(words: Vec<String>) -> Self {
        let words: Vec<WordSyllables> = words
            .into_iter()
            .map(|word| WordSyllables {
                syllables: count_syllables(&word),
                word,
            })
            .collect();
        let total = words.iter().map(|w| w.syllables).sum();
        Self { words, total }
    }
}

/// Print the estimated syllable count of each word.
#[instrument(name = "cmd_syllables", skip_all, fields(words = args.words.len()))]
pub fn cmd_syllables(args: SyllablesArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(words = ?args.words, "executing syllables command");

    let report = SyllablesReport::new(args.words);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for entry in &report.words {
            println!("{}\t{}", entry.word, entry.syllables);
        }
        if report.words.len() > 1 {
            println!("{}\t{}", "total".dimmed(), report.total);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_sums_words() {
        let report = SyllablesReport::new(vec!["like".into(), "Syzygy".into(), "cat".into()]);
        let counts: Vec<usize> = report.words.iter().map(|w| w.syllables).collect();
        assert_eq!(counts, vec![1, 3, 1]);
        assert_eq!(report.total, 5);
    }

    #[test]
    fn report_serializes_words_in_order() {
        let report = SyllablesReport::new(vec!["hello".into(), "the".into()]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["words"][0]["word"], "hello");
        assert_eq!(json["words"][0]["syllables"], 2);
        assert_eq!(json["total"], 3);
    }
}
