//! Configuration loader and path helpers.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + `APP_*` env vars
//! (`__` separates nested keys). `SentimentConfig` is the typed view of the
//! `[sentiment]` table that the annotation core consumes.
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::SentimentLabel;

pub const DEFAULT_TRANSFORMER_MODEL: &str = "cardiffnlp/twitter-roberta-base-sentiment-latest";

pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::new().merge(Toml::file("config.toml"));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file("config.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("config.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("config.test.toml")),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        let config = Self { figment };
        config.sentiment()?;
        Ok(config)
    }

    pub fn from_figment(figment: Figment) -> Self {
        Self { figment }
    }

    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }

    /// Typed `[sentiment]` settings with defaults filled in, validated.
    pub fn sentiment(&self) -> Result<SentimentConfig> {
        let settings: SentimentConfig = self
            .figment
            .clone()
            .join(Serialized::default("sentiment", SentimentConfig::default()))
            .extract_inner("sentiment")
            .map_err(|e| Error::InvalidConfig(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }
}

/// Every option the annotation core reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentConfig {
    /// Words taken on each side of a brand mention.
    pub context_window: usize,
    pub transformer_weight: f32,
    pub lexicon_weight: f32,
    pub positive_threshold: f32,
    pub negative_threshold: f32,
    pub transformer_batch_size: usize,
    /// Opaque model identifier handed to the contextual scorer.
    pub transformer_model: String,
    /// Local directory holding `config.json`, `tokenizer.json` and weights.
    pub model_dir: Option<String>,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            context_window: 15,
            transformer_weight: 0.6,
            lexicon_weight: 0.4,
            positive_threshold: 0.05,
            negative_threshold: -0.05,
            transformer_batch_size: 32,
            transformer_model: DEFAULT_TRANSFORMER_MODEL.to_string(),
            model_dir: None,
        }
    }
}

impl SentimentConfig {
    pub fn validate(&self) -> Result<()> {
        let weights = [("transformer_weight", self.transformer_weight), ("lexicon_weight", self.lexicon_weight)];
        for (name, weight) in weights {
            if !weight.is_finite() || weight < 0.0 {
                return Err(Error::InvalidConfig(format!("{name} must be a finite non-negative number, got {weight}")));
            }
        }
        let thresholds =
            [("positive_threshold", self.positive_threshold), ("negative_threshold", self.negative_threshold)];
        for (name, threshold) in thresholds {
            if !(-1.0..=1.0).contains(&threshold) {
                return Err(Error::InvalidConfig(format!("{name} must lie in [-1, 1], got {threshold}")));
            }
        }
        if self.negative_threshold > self.positive_threshold {
            return Err(Error::InvalidConfig(format!(
                "negative_threshold ({}) exceeds positive_threshold ({})",
                self.negative_threshold, self.positive_threshold
            )));
        }
        if self.transformer_batch_size == 0 {
            return Err(Error::InvalidConfig("transformer_batch_size must be at least 1".to_string()));
        }
        if self.transformer_model.trim().is_empty() {
            return Err(Error::InvalidConfig("transformer_model must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn label(&self, score: f32) -> SentimentLabel {
        if score >= self.positive_threshold {
            SentimentLabel::Positive
        } else if score <= self.negative_threshold {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
/// If `p` is absolute, it's returned as-is; otherwise `base.join(p)` is returned.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}
