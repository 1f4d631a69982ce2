// src/config/analyzer.rs
use crate::category::Category;
use crate::error::Error;
use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_CONFIG_PATH: &str = "SENTIMENT_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "config/analyzer.toml";

/// Allowed drift of the summed priors away from 1.0.
const PRIOR_SUM_TOLERANCE: f64 = 1e-6;

pub(crate) fn default_priors() -> BTreeMap<Category, f64> {
    BTreeMap::from([
        (Category::Positive, 0.333333333333),
        (Category::Negative, 0.333333333333),
        (Category::Neutral, 0.333333333334),
    ])
}
fn default_min_token_length() -> usize {
    1
}
fn default_max_token_length() -> usize {
    15
}
fn default_precision() -> u32 {
    3
}

/// Scoring configuration: which categories take part (with their priors),
/// token length bounds for the stock validator, and rounding precision.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzerConfig {
    /// Prior weight per category. The key set is the category set scored.
    pub priors: BTreeMap<Category, f64>,
    /// Inclusive lower bound on token length (bytes).
    pub min_token_length: usize,
    /// Inclusive upper bound on token length (bytes).
    pub max_token_length: usize,
    /// Decimal places kept after normalization.
    pub precision: u32,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            priors: default_priors(),
            min_token_length: default_min_token_length(),
            max_token_length: default_max_token_length(),
            precision: default_precision(),
        }
    }
}

/// On-disk shape. Category keys stay strings here so that unknown names get a
/// readable error instead of a serde variant mismatch.
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    priors: Option<BTreeMap<String, f64>>,
    #[serde(default = "default_min_token_length")]
    min_token_length: usize,
    #[serde(default = "default_max_token_length")]
    max_token_length: usize,
    #[serde(default = "default_precision")]
    precision: u32,
}

impl TryFrom<RawConfig> for AnalyzerConfig {
    type Error = Error;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let priors = match raw.priors {
            None => default_priors(),
            Some(map) => {
                let mut out = BTreeMap::new();
                for (name, prior) in map {
                    let category = name
                        .parse::<Category>()
                        .map_err(|e| Error::InvalidConfig(e.to_string()))?;
                    out.insert(category, prior);
                }
                out
            }
        };
        let cfg = AnalyzerConfig {
            priors,
            min_token_length: raw.min_token_length,
            max_token_length: raw.max_token_length,
            precision: raw.precision,
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

impl AnalyzerConfig {
    /// Categories taking part in scoring, in tie-break order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.priors.keys().copied()
    }

    pub fn prior(&self, category: Category) -> Option<f64> {
        self.priors.get(&category).copied()
    }

    /// Check the invariants scoring relies on.
    pub fn validate(&self) -> Result<(), Error> {
        if self.priors.is_empty() {
            return Err(Error::InvalidConfig("no categories configured".into()));
        }
        for (category, prior) in &self.priors {
            if !prior.is_finite() || *prior <= 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "prior for `{category}` must be a positive finite number, got {prior}"
                )));
            }
        }
        let sum: f64 = self.priors.values().sum();
        if (sum - 1.0).abs() > PRIOR_SUM_TOLERANCE {
            return Err(Error::InvalidConfig(format!(
                "priors must sum to 1.0, got {sum}"
            )));
        }
        if self.max_token_length == 0 {
            return Err(Error::InvalidConfig(
                "max_token_length must be at least 1".into(),
            ));
        }
        if self.min_token_length > self.max_token_length {
            return Err(Error::InvalidConfig(format!(
                "min_token_length ({}) exceeds max_token_length ({})",
                self.min_token_length, self.max_token_length
            )));
        }
        // 10^precision has to stay exact in f64.
        if self.precision > 15 {
            return Err(Error::InvalidConfig(format!(
                "precision must be at most 15, got {}",
                self.precision
            )));
        }
        Ok(())
    }

    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        let raw: RawConfig = toml::from_str(s).context("parsing analyzer config (TOML)")?;
        Ok(AnalyzerConfig::try_from(raw)?)
    }

    pub fn from_json_str(s: &str) -> anyhow::Result<Self> {
        let raw: RawConfig = serde_json::from_str(s).context("parsing analyzer config (JSON)")?;
        Ok(AnalyzerConfig::try_from(raw)?)
    }

    /// Load from an explicit path; `.json` is parsed as JSON, anything else as TOML.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading analyzer config from {}", path.display()))?;
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let cfg = if ext == "json" {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        };
        cfg.with_context(|| format!("invalid analyzer config at {}", path.display()))
    }

    /// Resolve configuration using env var + fallbacks:
    /// 1) $SENTIMENT_CONFIG_PATH (must exist)
    /// 2) config/analyzer.toml
    /// 3) built-in defaults
    pub fn load_default() -> anyhow::Result<Self> {
        if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if pb.exists() {
                return Self::load_from_file(&pb);
            }
            return Err(anyhow!(
                "{ENV_CONFIG_PATH} points to non-existent path {}",
                pb.display()
            ));
        }
        let default_path = PathBuf::from(DEFAULT_CONFIG_PATH);
        if default_path.exists() {
            return Self::load_from_file(&default_path);
        }
        Ok(Self::default())
    }
}
