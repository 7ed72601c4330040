//! Score command — Flesch reading-ease scoring.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use readscore_core::{DocumentKind, readability};

use super::read_input_file;

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Document variant used to count words, sentences and syllables.
    #[arg(long, value_enum)]
    pub document: Option<DocumentKind>,

    /// Minimum acceptable reading-ease score.
    #[arg(long)]
    pub min_score: Option<f64>,
}

/// Score the readability of a file using Flesch reading ease.
#[instrument(name = "cmd_score", skip_all, fields(file = %args.file))]
pub fn cmd_score(
    args: ScoreArgs,
    global_json: bool,
    config_min_score: Option<f64>,
    config_document: Option<DocumentKind>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, min_score = ?args.min_score, "executing score command");

    let content = read_input_file(&args.file, max_input_bytes)?;

    let strip_md = args.file.extension() == Some("md");
    let min_score = args.min_score.or(config_min_score);
    let kind = args.document.or(config_document).unwrap_or_default();

    let report = readability::check_readability(&content, strip_md, kind, min_score)
        .with_context(|| format!("failed to score readability of {}", args.file))?;

    debug!(
        words = report.words,
        sentences = report.sentences,
        syllables = report.syllables,
        document = %report.document,
        "scored document"
    );

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    if report.below_min {
        let min = report.min_score.unwrap_or(0.0);
        bail!(
            "{} scores {:.1} (min: {:.0}). Shorten sentences or prefer shorter words.",
            args.file,
            report.score,
            min,
        );
    }

    if global_json {
        return Ok(());
    }

    if let Some(min) = report.min_score {
        println!(
            "{} {} scores {:.1} (min: {:.0})",
            "PASS:".green(),
            args.file,
            report.score,
            min,
        );
    } else {
        println!("{:.1}", report.score);
    }

    Ok(())
}
