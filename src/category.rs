//! Sentiment categories.
//!
//! The set is closed: positive, negative, neutral. The declaration order is
//! also the iteration order used for scoring and for tie-breaks, so `Ord` and
//! `Category::ALL` must stay in sync.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Positive,
    Negative,
    Neutral,
}

impl Category {
    /// All categories in scoring / tie-break order.
    pub const ALL: [Category; 3] = [Category::Positive, Category::Negative, Category::Neutral];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Positive => "positive",
            Category::Negative => "negative",
            Category::Neutral => "neutral",
        }
    }

    /// Exact, allocation-free name lookup (lower-case names only).
    /// Used on the per-token hot path; `FromStr` is the lenient variant.
    #[inline]
    pub fn from_name(name: &str) -> Option<Category> {
        match name {
            "positive" => Some(Category::Positive),
            "negative" => Some(Category::Negative),
            "neutral" => Some(Category::Neutral),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a name is not one of the fixed categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category `{}`", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(Category::Positive),
            "negative" => Ok(Category::Negative),
            "neutral" => Ok(Category::Neutral),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}
