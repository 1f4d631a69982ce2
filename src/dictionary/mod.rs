//! # Dictionary
//!
//! Category membership lookups backing the scorer, plus the two auxiliary
//! lists (ignored words, negation words).
//!
//! - Membership only: a word either belongs to a category or it doesn't.
//! - Lookups are exact and case-sensitive; the pipeline lower-cases tokens
//!   before asking.
//! - Unknown category names answer `false` / empty instead of failing.
//! - Immutable once built, so one instance can back many analyzers and threads.

pub mod wordlists;

use crate::category::Category;
use crate::error::Result;
use std::collections::{HashMap, HashSet};
use tracing::info;

pub use wordlists::{
    unescape, DirectoryWordLists, EmbeddedWordLists, WordListProvider, IGNORE_LIST, NEGATION_LIST,
};

/// Lookup capability the analyzer depends on.
pub trait Dictionary: Send + Sync {
    /// True iff `word` is a member of `category`'s word set.
    fn is_word_found_on_category(&self, word: &str, category: &str) -> bool;

    /// Member words of `category`, sorted; empty for unknown categories.
    fn words_for(&self, category: &str) -> Vec<&str>;

    /// Whether a word set exists for `category` (possibly empty).
    fn has_category(&self, category: &str) -> bool;

    /// Negation words, in the order they are applied.
    fn negation_words(&self) -> &[String];

    /// Words excluded from scoring.
    fn ignored_words(&self) -> &[String];

    fn positive_words(&self) -> Vec<&str> {
        self.words_for(Category::Positive.as_str())
    }

    fn negative_words(&self) -> Vec<&str> {
        self.words_for(Category::Negative.as_str())
    }

    fn neutral_words(&self) -> Vec<&str> {
        self.words_for(Category::Neutral.as_str())
    }
}

/// Default in-memory dictionary backed by hash sets.
///
/// Every category of [`Category::ALL`] always has a word set, possibly empty.
#[derive(Debug, Clone)]
pub struct WordDictionary {
    categories: HashMap<Category, HashSet<String>>,
    ignored: Vec<String>,
    negations: Vec<String>,
}

impl Default for WordDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl WordDictionary {
    /// Empty dictionary: all categories present with empty word sets.
    pub fn new() -> Self {
        Self {
            categories: Category::ALL
                .iter()
                .map(|&c| (c, HashSet::new()))
                .collect(),
            ignored: Vec::new(),
            negations: Vec::new(),
        }
    }

    /// Add words to a category (builder style). Entries are trimmed, blanks dropped.
    pub fn with_words<I, S>(mut self, category: Category, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = self.categories.entry(category).or_default();
        set.extend(clean(words));
        self
    }

    /// Append ignored words (builder style).
    pub fn with_ignored<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ignored.extend(clean(words));
        self
    }

    /// Append negation words (builder style). Order is kept.
    pub fn with_negations<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.negations.extend(clean(words));
        self
    }

    /// Build from a word-list provider: one list per category plus the
    /// `ignore` and `negation` lists. The auxiliary lists are unescaped
    /// (`don\'t` → `don't`).
    pub fn load<P>(provider: &P) -> Result<Self>
    where
        P: WordListProvider + ?Sized,
    {
        let mut dict = Self::new();
        for category in Category::ALL {
            let words = provider.load_words_for(category.as_str())?;
            dict = dict.with_words(category, words);
        }

        let ignored = provider.load_words_for(IGNORE_LIST)?;
        dict = dict.with_ignored(ignored.iter().map(|w| unescape(w.trim())));

        let negations = provider.load_words_for(NEGATION_LIST)?;
        dict = dict.with_negations(negations.iter().map(|w| unescape(w.trim())));

        info!(
            positive = dict.len_of(Category::Positive),
            negative = dict.len_of(Category::Negative),
            neutral = dict.len_of(Category::Neutral),
            ignored = dict.ignored.len(),
            negations = dict.negations.len(),
            "dictionary loaded"
        );
        Ok(dict)
    }

    /// Number of words in a category.
    pub fn len_of(&self, category: Category) -> usize {
        self.categories.get(&category).map_or(0, HashSet::len)
    }

    #[inline]
    fn set_for(&self, category: &str) -> Option<&HashSet<String>> {
        Category::from_name(category).and_then(|c| self.categories.get(&c))
    }
}

impl Dictionary for WordDictionary {
    fn is_word_found_on_category(&self, word: &str, category: &str) -> bool {
        self.set_for(category).is_some_and(|set| set.contains(word))
    }

    fn words_for(&self, category: &str) -> Vec<&str> {
        let mut words: Vec<&str> = self
            .set_for(category)
            .map(|set| set.iter().map(String::as_str).collect())
            .unwrap_or_default();
        words.sort_unstable();
        words
    }

    fn has_category(&self, category: &str) -> bool {
        self.set_for(category).is_some()
    }

    fn negation_words(&self) -> &[String] {
        &self.negations
    }

    fn ignored_words(&self) -> &[String] {
        &self.ignored
    }
}

fn clean<I, S>(words: I) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words.into_iter().filter_map(|w| {
        let t = w.as_ref().trim();
        (!t.is_empty()).then(|| t.to_string())
    })
}
