//! Core library for readscore.
//!
//! Word, sentence and syllable counting plus the Flesch reading-ease score,
//! used by the `readscore` CLI and any downstream consumers.
//!
//! # Modules
//!
//! - [`tokenize`] - Pattern-driven tokenizing
//! - [`syllables`] - Heuristic syllable estimation
//! - [`document`] - Document variants and the Flesch formula
//! - [`readability`] - One-call readability report
//! - [`markdown`] - Markdown to prose conversion
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use readscore_core::{Document, EfficientDocument};
//!
//! let doc = EfficientDocument::new("The cat sat on the mat. The dog ran fast.");
//! assert_eq!(doc.num_words(), 10);
//! assert_eq!(doc.num_sentences(), 2);
//! let score = doc.flesch_score().expect("text has words and sentences");
//! assert!(score > 100.0);
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod document;
pub mod error;
pub mod markdown;
pub mod readability;
pub mod syllables;
pub mod tokenize;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use document::{BasicDocument, Document, DocumentKind, EfficientDocument, flesch_score};
pub use error::{ConfigError, ConfigResult, DocumentError, DocumentResult};
pub use readability::{ReadabilityReport, check_readability};
pub use syllables::count_syllables;
pub use tokenize::{TokenPattern, tokenize};

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
