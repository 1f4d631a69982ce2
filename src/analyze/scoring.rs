//! Scoring helpers: per-category accumulation and normalization.
//!
//! Per category:  score = prior * Π (1 + [token ∈ category])
//! i.e. every scored token that is a member of the category's word set doubles
//! the running score; non-members leave it unchanged.
//!
//! Normalization divides by the sum over categories and rounds each share
//! half away from zero to `precision` decimal places.

use crate::category::Category;
use crate::dictionary::Dictionary;
use crate::error::{Error, Result};
use std::collections::BTreeMap;

/// Added to |scaled| before rounding so that decimal halves which are not
/// exactly representable (0.0125 → 12.499999…) still round away from zero.
const HALF_SNAP: f64 = 1e-9;

/// Unnormalized score of `category` for already-validated tokens.
pub fn category_score<D>(tokens: &[&str], category: Category, prior: f64, dictionary: &D) -> f64
where
    D: Dictionary + ?Sized,
{
    let mut score = 1.0_f64;
    for token in tokens {
        let membership = u8::from(dictionary.is_word_found_on_category(token, category.as_str()));
        score *= f64::from(membership + 1);
    }
    score * prior
}

/// Normalized scores: `rounded` is what callers see, `shares` keeps the
/// unrounded fractions for tie-breaking.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub rounded: BTreeMap<Category, f64>,
    pub shares: BTreeMap<Category, f64>,
}

/// Divide every score by the total and round.
///
/// Fails with [`Error::DegenerateNormalization`] when the total is zero or
/// not finite (e.g. the product overflowed on a very long document).
pub fn normalize(raw: &BTreeMap<Category, f64>, precision: u32) -> Result<Normalized> {
    let total: f64 = raw.values().sum();
    if total == 0.0 || !total.is_finite() {
        return Err(Error::DegenerateNormalization { total });
    }

    let mut rounded = BTreeMap::new();
    let mut shares = BTreeMap::new();
    for (&category, &score) in raw {
        let share = score / total;
        shares.insert(category, share);
        rounded.insert(category, round_half_away(share, precision));
    }
    Ok(Normalized { rounded, shares })
}

/// Round to `places` decimals, halves away from zero.
pub fn round_half_away(value: f64, places: u32) -> f64 {
    let factor = 10_f64.powi(places as i32);
    let scaled = value * factor;
    (scaled + scaled.signum() * HALF_SNAP).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordDictionary;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn rounding_halves_go_away_from_zero() {
        assert!(approx(round_half_away(0.0125, 3), 0.013));
        assert!(approx(round_half_away(0.0005, 3), 0.001));
        assert!(approx(round_half_away(0.9995, 3), 1.0));
        assert!(approx(round_half_away(1.0005, 3), 1.001));
        assert!(approx(round_half_away(-0.0125, 3), -0.013));
        assert!(approx(round_half_away(0.2345, 3), 0.235));
    }

    #[test]
    fn rounding_below_half_goes_down() {
        assert!(approx(round_half_away(0.1234, 3), 0.123));
        assert!(approx(round_half_away(0.00049, 3), 0.0));
        assert!(approx(round_half_away(0.333333333334, 3), 0.333));
        assert_eq!(round_half_away(0.0, 3), 0.0);
    }

    #[test]
    fn members_double_the_score() {
        let d = WordDictionary::new().with_words(Category::Positive, ["good", "great"]);
        let s = category_score(&["good", "great", "day"], Category::Positive, 0.5, &d);
        assert!(approx(s, 2.0));
        let n = category_score(&["good", "great", "day"], Category::Negative, 0.5, &d);
        assert!(approx(n, 0.5));
    }

    #[test]
    fn repeated_members_count_each_time() {
        let d = WordDictionary::new().with_words(Category::Negative, ["bad"]);
        let s = category_score(&["bad", "bad", "bad"], Category::Negative, 1.0, &d);
        assert!(approx(s, 8.0));
    }

    #[test]
    fn no_tokens_leaves_the_prior() {
        let d = WordDictionary::new();
        assert!(approx(category_score(&[], Category::Neutral, 0.25, &d), 0.25));
    }

    #[test]
    fn normalize_divides_and_rounds() {
        let raw = BTreeMap::from([
            (Category::Positive, 2.0 * 0.333333333333),
            (Category::Negative, 0.333333333333),
            (Category::Neutral, 0.333333333334),
        ]);
        let n = normalize(&raw, 3).unwrap();
        assert!(approx(n.rounded[&Category::Positive], 0.5));
        assert!(approx(n.rounded[&Category::Negative], 0.25));
        assert!(approx(n.rounded[&Category::Neutral], 0.25));
        let share_sum: f64 = n.shares.values().sum();
        assert!(approx(share_sum, 1.0));
    }

    #[test]
    fn normalize_rejects_zero_and_non_finite_totals() {
        let zero = BTreeMap::from([(Category::Positive, 0.0), (Category::Negative, 0.0)]);
        assert!(matches!(
            normalize(&zero, 3),
            Err(Error::DegenerateNormalization { total }) if total == 0.0
        ));

        let inf = BTreeMap::from([(Category::Positive, f64::INFINITY), (Category::Negative, 1.0)]);
        assert!(matches!(
            normalize(&inf, 3),
            Err(Error::DegenerateNormalization { .. })
        ));

        let nan = BTreeMap::from([(Category::Positive, f64::NAN)]);
        assert!(normalize(&nan, 3).is_err());
    }
}
