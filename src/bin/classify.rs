//! Classify a document from the command line and print the analysis as JSON.
//!
//!   classify not good at all
//!   echo "great service" | classify
//!
//! Env:
//! - SENTIMENT_CONFIG_PATH   analyzer config (TOML/JSON), else config/analyzer.toml, else defaults
//! - SENTIMENT_WORDLIST_DIR  directory with positive/negative/neutral/ignore/negation lists,
//!                           else the lists embedded in the crate
//! - RUST_LOG                log filter (default `lexicon_sentiment=info,warn`)

use anyhow::Context;
use lexicon_sentiment::{
    Analyzer, AnalyzerConfig, DirectoryWordLists, EmbeddedWordLists, WordDictionary,
};
use std::io::Read;
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const ENV_WORDLIST_DIR: &str = "SENTIMENT_WORDLIST_DIR";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("lexicon_sentiment=info,warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = AnalyzerConfig::load_default()?;
    let dictionary = match std::env::var(ENV_WORDLIST_DIR) {
        Ok(dir) => WordDictionary::load(&DirectoryWordLists::new(&dir))
            .with_context(|| format!("loading word lists from {dir}"))?,
        Err(_) => WordDictionary::load(&EmbeddedWordLists)?,
    };
    let analyzer = Analyzer::with_defaults(config, Arc::new(dictionary))?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let document = if args.is_empty() {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading document from stdin")?;
        buf.trim_end_matches(['\n', '\r']).to_string()
    } else {
        args.join(" ")
    };

    let analysis = analyzer.analyze(&document)?;
    println!("{}", serde_json::to_string_pretty(&analysis)?);
    Ok(())
}
