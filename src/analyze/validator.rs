//! Token validation: which tokens take part in scoring.

use crate::config::AnalyzerConfig;

/// Decides whether a token participates in scoring.
pub trait TokenValidator: Send + Sync {
    fn has_valid_length(&self, token: &str) -> bool;

    /// Exact, case-sensitive membership in the ignored list.
    fn is_on_ignored_words(&self, token: &str, ignored_words: &[String]) -> bool {
        ignored_words.iter().any(|w| w == token)
    }

    fn should_be_calculated(&self, token: &str, ignored_words: &[String]) -> bool {
        self.has_valid_length(token) && !self.is_on_ignored_words(token, ignored_words)
    }
}

/// Inclusive length bounds measured in UTF-8 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthTokenValidator {
    pub min_token_length: usize,
    pub max_token_length: usize,
}

impl Default for LengthTokenValidator {
    fn default() -> Self {
        Self {
            min_token_length: 1,
            max_token_length: 15,
        }
    }
}

impl LengthTokenValidator {
    pub fn new(min_token_length: usize, max_token_length: usize) -> Self {
        Self {
            min_token_length,
            max_token_length,
        }
    }

    pub fn from_config(cfg: &AnalyzerConfig) -> Self {
        Self::new(cfg.min_token_length, cfg.max_token_length)
    }
}

impl TokenValidator for LengthTokenValidator {
    fn has_valid_length(&self, token: &str) -> bool {
        (self.min_token_length..=self.max_token_length).contains(&token.len())
    }
}
