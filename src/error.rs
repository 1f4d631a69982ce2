//! Library error type.
//!
//! Lookups on unknown categories are not errors: they answer `false`, an empty
//! word list or a zero score.

/// Errors surfaced by dictionary loading, analyzer construction and scoring.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A collaborator handed to the analyzer cannot serve the configuration,
    /// e.g. a dictionary without a word set for a configured category.
    #[error("invalid collaborator: {0}")]
    InvalidCollaborator(String),

    /// Priors or token bounds are unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The per-category scores summed to zero or to a non-finite value, so
    /// they cannot be normalized.
    #[error("cannot normalize scores: total is {total}")]
    DegenerateNormalization { total: f64 },

    /// A word list could not be loaded from its provider.
    #[error("failed to load word list `{name}`: {source}")]
    WordList {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn word_list(name: &str, source: std::io::Error) -> Self {
        Error::WordList {
            name: name.to_string(),
            source,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
