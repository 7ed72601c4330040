//! Tokens command — list the substrings of a file that match a pattern.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use readscore_core::TokenPattern;

use super::read_input_file;

/// Arguments for the `tokens` subcommand.
#[derive(Args, Debug)]
pub struct TokensArgs {
    /// File to tokenize.
    pub file: Utf8PathBuf,

    /// Regular expression describing one token.
    #[arg(short, long, default_value = "[a-zA-Z]+")]
    pub pattern: String,

    /// Print only the number of tokens.
    #[arg(long)]
    pub count: bool,
}

#[derive(Debug, Serialize)]
struct TokensReport<'a> {
    pattern: &'a str,
    count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    tokens: Option<Vec<&'a str>>,
}

/// Tokenize a file with a caller-supplied pattern.
#[instrument(name = "cmd_tokens", skip_all, fields(file = %args.file, pattern = %args.pattern))]
pub fn cmd_tokens(
    args: TokensArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(count_only = args.count, "executing tokens command");

    let pattern = TokenPattern::new(&args.pattern)?;
    let content = read_input_file(&args.file, max_input_bytes)?;

    if global_json {
        let tokens: Vec<&str> = pattern.tokens(&content).collect();
        let report = TokensReport {
            pattern: pattern.as_str(),
            count: tokens.len(),
            tokens: (!args.count).then_some(tokens),
        };
        let json = serde_json::to_string_pretty(&report)
            .with_context(|| format!("failed to serialize tokens of {}", args.file))?;
        println!("{json}");
    } else if args.count {
        println!("{}", pattern.count(&content));
    } else {
        for token in pattern.tokens(&content) {
            println!("{token}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_pattern_is_reported_before_reading() {
        let args = TokensArgs {
            file: Utf8PathBuf::from("/does/not/exist.txt"),
            pattern: "(".to_string(),
            count: false,
        };
        let err = cmd_tokens(args, false, None).unwrap_err();
        assert!(err.to_string().contains("invalid token pattern"));
    }

    #[test]
    fn count_only_report_omits_tokens() {
        let report = TokensReport {
            pattern: "[a-z]+",
            count: 2,
            tokens: None,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["count"], 2);
        assert!(json.get("tokens").is_none());
    }
}
