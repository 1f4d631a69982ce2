// src/lib.rs
//! Dictionary-driven sentiment classification.
//!
//! A document is scored against positive / negative / neutral word lists with
//! a Naive-Bayes-style product: every token found in a category's list doubles
//! that category's score, which starts from the category prior. Scores are
//! then normalized to shares rounded to three decimals.
//!
//! ```no_run
//! use std::sync::Arc;
//! use lexicon_sentiment::{Analyzer, AnalyzerConfig, EmbeddedWordLists, WordDictionary};
//!
//! # fn main() -> anyhow::Result<()> {
//! let dictionary = WordDictionary::load(&EmbeddedWordLists)?;
//! let analyzer = Analyzer::with_defaults(AnalyzerConfig::load_default()?, Arc::new(dictionary))?;
//! let analysis = analyzer.analyze("not good at all")?;
//! println!("{} {:?}", analysis.category(), analysis.scores());
//! # Ok(())
//! # }
//! ```

pub mod analyze;
pub mod category;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod metrics;

// ---- Re-exports for stable public API ----
pub use crate::analyze::{
    remove_negation_spacing, Analysis, Analyzer, LengthTokenValidator, SpaceTokenizer,
    TokenValidator, Tokenizer,
};
pub use crate::category::Category;
pub use crate::config::AnalyzerConfig;
pub use crate::dictionary::{
    Dictionary, DirectoryWordLists, EmbeddedWordLists, WordDictionary, WordListProvider,
};
pub use crate::error::{Error, Result};
