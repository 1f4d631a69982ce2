// tests/analyzer_e2e.rs
// End-to-end scoring scenarios against a small inline dictionary.

use std::sync::Arc;

use lexicon_sentiment::{
    Analyzer, AnalyzerConfig, Category, Dictionary, Error, LengthTokenValidator, SpaceTokenizer,
    TokenValidator, Tokenizer, WordDictionary,
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn dict() -> WordDictionary {
    WordDictionary::new()
        .with_words(Category::Positive, ["good"])
        .with_words(Category::Negative, ["bad"])
        .with_negations(["not"])
}

fn analyzer() -> Analyzer {
    Analyzer::with_defaults(AnalyzerConfig::default(), Arc::new(dict())).expect("analyzer")
}

#[test]
fn single_positive_word() {
    let r = analyzer().analyze("good").unwrap();
    let s = r.scores();
    assert!(approx(s[&Category::Positive], 0.5), "{s:?}");
    assert!(approx(s[&Category::Negative], 0.25), "{s:?}");
    assert!(approx(s[&Category::Neutral], 0.25), "{s:?}");
    assert_eq!(r.category(), Category::Positive);
    assert_eq!(r.token_count(), 1);
}

#[test]
fn negated_word_scores_like_no_evidence() {
    let r = analyzer().analyze("not good").unwrap();
    let s = r.scores();
    for c in Category::ALL {
        assert!(approx(s[&c], 0.333), "{c}: {s:?}");
    }
    // Equal rounded scores: neutral's prior is marginally higher.
    assert_eq!(r.category(), Category::Neutral);

    let shares = r.unrounded_scores().expect("analyzer keeps unrounded shares");
    assert!(shares[&Category::Neutral] > shares[&Category::Positive]);
}

#[test]
fn uppercase_input_is_lowercased_before_lookup() {
    let r = analyzer().analyze("BAD").unwrap();
    assert_eq!(r.category(), Category::Negative);
}

#[test]
fn uppercase_negation_is_not_fused() {
    // Negation matching runs before lower-casing and is case-sensitive,
    // so "Not good" stays two tokens and "good" still counts.
    let r = analyzer().analyze("Not good").unwrap();
    assert_eq!(r.category(), Category::Positive);
}

#[test]
fn crlf_separates_tokens() {
    let r = analyzer().analyze("bad\r\nbad").unwrap();
    assert_eq!(r.token_count(), 2);
    // negative = 4p, others p → 4/6
    assert!(approx(r.score_for(Category::Negative), 0.667));
    assert!(approx(r.score_for(Category::Positive), 0.167));
    assert!(approx(r.score_for(Category::Neutral), 0.167));
}

#[test]
fn empty_and_blank_documents_fall_back_to_priors() {
    for doc in ["", "   ", "\t"] {
        let r = analyzer().analyze(doc).unwrap();
        assert_eq!(r.category(), Category::Neutral, "doc={doc:?}");
        assert!(approx(r.score_for(Category::Positive), 0.333));
    }
    assert_eq!(analyzer().analyze("").unwrap().token_count(), 0);
}

#[test]
fn ignored_and_overlong_tokens_do_not_count() {
    let d = dict().with_ignored(["good"]);
    let a = Analyzer::with_defaults(AnalyzerConfig::default(), Arc::new(d)).unwrap();
    let r = a.analyze("good goodgoodgoodgoodgood").unwrap();
    assert_eq!(r.token_count(), 0);
    assert_eq!(r.category(), Category::Neutral);
}

#[test]
fn mixed_evidence_cancels_out() {
    let r = analyzer().analyze("good bad").unwrap();
    assert!(approx(r.score_for(Category::Positive), r.score_for(Category::Negative)));
    // positive 2p, negative 2p, neutral p → 0.4 / 0.4 / 0.2
    assert!(approx(r.score_for(Category::Positive), 0.4));
    assert!(approx(r.score_for(Category::Neutral), 0.2));
    // exact tie between positive and negative → first in order
    assert_eq!(r.category(), Category::Positive);
}

#[test]
fn shared_dictionary_backs_several_analyzers() {
    let shared: Arc<dyn Dictionary> = Arc::new(dict());
    let strict = AnalyzerConfig {
        max_token_length: 3,
        ..AnalyzerConfig::default()
    };
    let a = Analyzer::with_defaults(AnalyzerConfig::default(), shared.clone()).unwrap();
    let b = Analyzer::with_defaults(strict, shared.clone()).unwrap();

    assert_eq!(a.classify("good").unwrap(), Category::Positive);
    // "good" is 4 bytes, over b's bound
    assert_eq!(b.classify("good").unwrap(), Category::Neutral);
    assert!(Arc::strong_count(&shared) >= 3);
}

#[test]
fn custom_collaborators_are_used() {
    // Tokenizer that splits on any whitespace; validator that accepts all.
    struct WhitespaceTokenizer;
    impl Tokenizer for WhitespaceTokenizer {
        fn tokenize(&self, document: &str) -> Vec<String> {
            document
                .split_whitespace()
                .map(str::to_lowercase)
                .collect()
        }
    }
    struct AcceptAll;
    impl TokenValidator for AcceptAll {
        fn has_valid_length(&self, _token: &str) -> bool {
            true
        }
    }

    let a = Analyzer::new(
        AnalyzerConfig::default(),
        Arc::new(dict()),
        Arc::new(WhitespaceTokenizer),
        Arc::new(AcceptAll),
    )
    .unwrap();
    let r = a.analyze("bad\tbad").unwrap();
    assert_eq!(r.token_count(), 2);
    assert_eq!(r.category(), Category::Negative);

    // Stock tokenizer keeps "bad\tbad" as one token that matches nothing.
    let stock = Analyzer::new(
        AnalyzerConfig::default(),
        Arc::new(dict()),
        Arc::new(SpaceTokenizer),
        Arc::new(LengthTokenValidator::default()),
    )
    .unwrap();
    assert_eq!(stock.classify("bad\tbad").unwrap(), Category::Neutral);
}

#[test]
fn two_category_configuration() {
    let cfg = AnalyzerConfig::from_toml_str(
        r#"
        [priors]
        positive = 0.5
        negative = 0.5
        "#,
    )
    .unwrap();
    let a = Analyzer::with_defaults(cfg, Arc::new(dict())).unwrap();
    let r = a.analyze("bad").unwrap();
    assert_eq!(r.scores().len(), 2);
    assert!(approx(r.score_for(Category::Negative), 0.667));
    assert!(approx(r.score_for(Category::Positive), 0.333));
    assert_eq!(r.score_for(Category::Neutral), 0.0);
    assert_eq!(r.category(), Category::Negative);
}

#[test]
fn overflowing_product_is_reported() {
    let d = WordDictionary::new().with_words(Category::Positive, ["x"]);
    let a = Analyzer::with_defaults(AnalyzerConfig::default(), Arc::new(d)).unwrap();
    // 2^1100 does not fit in an f64.
    let doc = vec!["x"; 1100].join(" ");
    let err = a.analyze(&doc).unwrap_err();
    assert!(
        matches!(err, Error::DegenerateNormalization { total } if !total.is_finite()),
        "{err:?}"
    );
    assert!(a.classify(&doc).is_err());

    // Long but representable stays fine.
    let ok = vec!["x"; 900].join(" ");
    assert_eq!(a.classify(&ok).unwrap(), Category::Positive);
}
