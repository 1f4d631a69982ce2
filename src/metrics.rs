//! Metrics emitted through the `metrics` facade.
//!
//! The library only records; installing a recorder/exporter (Prometheus or
//! otherwise) is up to the embedding application. Without one, every call is
//! a no-op.

use crate::category::Category;
use metrics::{counter, describe_counter, describe_histogram, histogram};
use once_cell::sync::OnceCell;

pub const DOCUMENTS_TOTAL: &str = "sentiment_documents_total";
pub const TOKENS_SCORED: &str = "sentiment_tokens_scored";
pub const NORMALIZATION_ERRORS_TOTAL: &str = "sentiment_normalization_errors_total";

/// One-time metric descriptions.
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!(DOCUMENTS_TOTAL, "Documents analyzed, by winning category.");
        describe_histogram!(TOKENS_SCORED, "Tokens per document that passed validation.");
        describe_counter!(
            NORMALIZATION_ERRORS_TOTAL,
            "Analyses rejected because scores could not be normalized."
        );
    });
}

pub(crate) fn record_analysis(category: Category, scored_tokens: usize) {
    ensure_metrics_described();
    counter!(DOCUMENTS_TOTAL, "category" => category.as_str()).increment(1);
    histogram!(TOKENS_SCORED).record(scored_tokens as f64);
}

pub(crate) fn record_normalization_error() {
    ensure_metrics_described();
    counter!(NORMALIZATION_ERRORS_TOTAL).increment(1);
}
