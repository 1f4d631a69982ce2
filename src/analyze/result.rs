//! Analysis outcome: normalized scores plus the winning category.

use crate::category::Category;
use serde::Serialize;
use std::collections::BTreeMap;

/// Immutable result of analyzing one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    category: Category,
    scores: BTreeMap<Category, f64>,
    /// Tokens that passed validation and were scored.
    token_count: usize,
    #[serde(skip)]
    shares: Option<BTreeMap<Category, f64>>,
}

impl Analysis {
    /// Wrap already-normalized scores. Ties go to the first category in
    /// [`Category::ALL`] order.
    pub fn new(scores: BTreeMap<Category, f64>) -> Self {
        Self::build(scores, None, 0)
    }

    pub(crate) fn from_normalized(
        scores: BTreeMap<Category, f64>,
        shares: BTreeMap<Category, f64>,
        token_count: usize,
    ) -> Self {
        Self::build(scores, Some(shares), token_count)
    }

    fn build(
        scores: BTreeMap<Category, f64>,
        shares: Option<BTreeMap<Category, f64>>,
        token_count: usize,
    ) -> Self {
        let category = pick_category(&scores, shares.as_ref());
        Self {
            category,
            scores,
            token_count,
            shares,
        }
    }

    pub fn scores(&self) -> &BTreeMap<Category, f64> {
        &self.scores
    }

    /// Score of one category; 0.0 when it wasn't scored.
    pub fn score_for(&self, category: Category) -> f64 {
        self.scores.get(&category).copied().unwrap_or(0.0)
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn token_count(&self) -> usize {
        self.token_count
    }

    /// Normalized fractions before rounding, when produced by an analyzer.
    pub fn unrounded_scores(&self) -> Option<&BTreeMap<Category, f64>> {
        self.shares.as_ref()
    }
}

/// Highest rounded score wins. On a rounded tie the larger unrounded share
/// wins; exact ties keep the earlier category.
fn pick_category(
    scores: &BTreeMap<Category, f64>,
    shares: Option<&BTreeMap<Category, f64>>,
) -> Category {
    let score_of = |c: Category| scores.get(&c).copied().unwrap_or(0.0);
    let share_of = |c: Category| {
        shares
            .and_then(|m| m.get(&c).copied())
            .unwrap_or_else(|| score_of(c))
    };

    let mut best = Category::ALL[0];
    for &candidate in &Category::ALL[1..] {
        let (s, b) = (score_of(candidate), score_of(best));
        if s > b || (s == b && share_of(candidate) > share_of(best)) {
            best = candidate;
        }
    }
    best
}
