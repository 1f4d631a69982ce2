//! Configuration loading (TOML/JSON files with env-var override).

pub mod analyzer;

pub use analyzer::{AnalyzerConfig, DEFAULT_CONFIG_PATH, ENV_CONFIG_PATH};
