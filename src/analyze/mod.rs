// src/analyze/mod.rs
//! Analysis pipeline entry.
//!
//! Order:
//! 1) Negation-space removal (`"not good"` → `"notgood"`)
//! 2) Tokenization
//! 3) Token validation (length bounds, ignored words)
//! 4) Per-category score: prior × 2^(matching tokens)
//! 5) Normalization + rounding → [`Analysis`]

pub(crate) mod debug;
pub mod result;
pub mod scoring;
pub mod tokenizer;
pub mod validator;

use crate::analyze::debug::anon_hash;
use crate::category::Category;
use crate::config::AnalyzerConfig;
use crate::dictionary::Dictionary;
use crate::error::{Error, Result};
use crate::metrics;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

// Re-export convenient types.
pub use crate::analyze::result::Analysis;
pub use crate::analyze::scoring::{category_score, normalize, round_half_away, Normalized};
pub use crate::analyze::tokenizer::{SpaceTokenizer, Tokenizer};
pub use crate::analyze::validator::{LengthTokenValidator, TokenValidator};

/// Dictionary-driven sentiment analyzer.
///
/// Collaborators are shared (`Arc`), so cloning is cheap and one dictionary
/// can back any number of analyzers across threads.
#[derive(Clone)]
pub struct Analyzer {
    config: AnalyzerConfig,
    dictionary: Arc<dyn Dictionary>,
    tokenizer: Arc<dyn Tokenizer>,
    validator: Arc<dyn TokenValidator>,
}

impl fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analyzer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Analyzer {
    /// Build an analyzer from explicit collaborators.
    ///
    /// Fails with [`Error::InvalidConfig`] for unusable priors/bounds and with
    /// [`Error::InvalidCollaborator`] when the dictionary has no word set for
    /// a configured category.
    pub fn new(
        config: AnalyzerConfig,
        dictionary: Arc<dyn Dictionary>,
        tokenizer: Arc<dyn Tokenizer>,
        validator: Arc<dyn TokenValidator>,
    ) -> Result<Self> {
        config.validate()?;
        if let Some(missing) = config
            .categories()
            .find(|c| !dictionary.has_category(c.as_str()))
        {
            return Err(Error::InvalidCollaborator(format!(
                "dictionary has no word set for category `{missing}`"
            )));
        }
        Ok(Self {
            config,
            dictionary,
            tokenizer,
            validator,
        })
    }

    /// Build with the stock [`SpaceTokenizer`] and a [`LengthTokenValidator`]
    /// taking its bounds from `config`.
    pub fn with_defaults(config: AnalyzerConfig, dictionary: Arc<dyn Dictionary>) -> Result<Self> {
        let validator = LengthTokenValidator::from_config(&config);
        Self::new(
            config,
            dictionary,
            Arc::new(SpaceTokenizer),
            Arc::new(validator),
        )
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn dictionary(&self) -> &dyn Dictionary {
        self.dictionary.as_ref()
    }

    pub fn tokenizer(&self) -> &dyn Tokenizer {
        self.tokenizer.as_ref()
    }

    pub fn validator(&self) -> &dyn TokenValidator {
        self.validator.as_ref()
    }

    /// Fuse every negation word with the word after it, using the
    /// dictionary's negation list.
    pub fn remove_negation_spacing(&self, document: &str) -> String {
        remove_negation_spacing(document, self.dictionary.negation_words())
    }

    /// Full analysis: normalized scores plus winning category.
    pub fn analyze(&self, document: &str) -> Result<Analysis> {
        let fused = self.remove_negation_spacing(document);
        let tokens = self.tokenizer.tokenize(&fused);

        let ignored = self.dictionary.ignored_words();
        let scored: Vec<&str> = tokens
            .iter()
            .map(String::as_str)
            .filter(|t| self.validator.should_be_calculated(t, ignored))
            .collect();

        let raw: BTreeMap<Category, f64> = self
            .config
            .priors
            .iter()
            .map(|(&category, &prior)| {
                let score = category_score(&scored, category, prior, self.dictionary.as_ref());
                (category, score)
            })
            .collect();

        let normalized = match normalize(&raw, self.config.precision) {
            Ok(n) => n,
            Err(e) => {
                metrics::record_normalization_error();
                warn!(
                    target: "sentiment",
                    id = %anon_hash(document),
                    scored = scored.len(),
                    error = %e,
                    "normalization failed"
                );
                return Err(e);
            }
        };

        let analysis = Analysis::from_normalized(normalized.rounded, normalized.shares, scored.len());
        debug!(
            target: "sentiment",
            id = %anon_hash(document),
            tokens = tokens.len(),
            scored = scored.len(),
            category = %analysis.category(),
            "document analyzed"
        );
        metrics::record_analysis(analysis.category(), scored.len());
        Ok(analysis)
    }

    /// Normalized scores only.
    pub fn scores(&self, document: &str) -> Result<BTreeMap<Category, f64>> {
        self.analyze(document).map(|a| a.scores().clone())
    }

    /// Winning category only.
    pub fn classify(&self, document: &str) -> Result<Category> {
        self.analyze(document).map(|a| a.category())
    }
}

/// For each negation word in order, if it occurs anywhere in the document,
/// replace every `"<word> "` with `"<word>"`. Each pass runs on the output of
/// the previous one. Matching is case-sensitive and substring-based. Empty
/// negation words are skipped.
pub fn remove_negation_spacing<S: AsRef<str>>(document: &str, negation_words: &[S]) -> String {
    let mut doc = document.to_string();
    for word in negation_words {
        let word = word.as_ref();
        if word.is_empty() || !doc.contains(word) {
            continue;
        }
        doc = doc.replace(&format!("{word} "), word);
    }
    doc
}
