//! solepulse-contextual
//!
//! Contextual sentiment scorers behind `solepulse_core::traits::ContextualScorer`:
//! - `TransformerScorer`: a sequence-classification transformer run with
//!   candle, loaded lazily on first use (feature `transformer`, on by default)
//! - `FakeScorer`: deterministic hash-based scores for tests and dry runs
//! - `UnavailableScorer`: always reports the scorer as unavailable
//!
//! Without the `transformer` feature `TransformerScorer` still exists but
//! every non-empty request fails with `Error::Unavailable`.

mod fake;
pub mod labels;

#[cfg(feature = "transformer")]
pub mod device;
#[cfg(feature = "transformer")]
mod tokenize;
#[cfg(feature = "transformer")]
mod transformer;
#[cfg(not(feature = "transformer"))]
#[path = "transformer_stub.rs"]
mod transformer;

use std::path::PathBuf;
use tracing::info;

use solepulse_core::config::{expand_path, SentimentConfig};
use solepulse_core::error::{Error, Result};
use solepulse_core::traits::ContextualScorer;

pub use fake::FakeScorer;
pub use labels::LabelMap;
pub use transformer::TransformerScorer;

/// Hard cap on tokens per snippet.
pub const MAX_TOKENS: usize = 512;

/// Scorer whose backing runtime is never available.
pub struct UnavailableScorer {
    model_id: String,
    reason: String,
}

impl UnavailableScorer {
    pub fn new(model_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { model_id: model_id.into(), reason: reason.into() }
    }
}

impl ContextualScorer for UnavailableScorer {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    fn score(&self, text: &str) -> Result<f32> {
        if text.trim().is_empty() {
            return Ok(0.0);
        }
        Err(Error::Unavailable(self.reason.clone()))
    }

    fn score_batch(&self, texts: &[String]) -> Result<Vec<f32>> {
        if texts.iter().all(|t| t.trim().is_empty()) {
            return Ok(vec![0.0; texts.len()]);
        }
        Err(Error::Unavailable(self.reason.clone()))
    }
}

/// Scorer selected by environment and settings. `APP_USE_FAKE_SENTIMENT=1`
/// (or `true`) picks the fake scorer; otherwise the lazily loading
/// transformer scorer. Never loads a model.
pub fn default_scorer(settings: &SentimentConfig) -> Box<dyn ContextualScorer> {
    let use_fake = std::env::var("APP_USE_FAKE_SENTIMENT")
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    if use_fake {
        info!("using fake contextual scorer");
        return Box::new(FakeScorer::new(&settings.transformer_model));
    }
    let model_dir = resolve_model_dir(settings);
    Box::new(TransformerScorer::new(&settings.transformer_model, model_dir, settings.transformer_batch_size))
}

/// Model directory: `model_dir` from settings, then `APP_MODEL_DIR`, then
/// `models/<model id>` with `/` replaced by `--`. Existence is not checked.
pub fn resolve_model_dir(settings: &SentimentConfig) -> PathBuf {
    if let Some(dir) = settings.model_dir.as_deref().filter(|d| !d.trim().is_empty()) {
        return expand_path(dir);
    }
    if let Ok(dir) = std::env::var("APP_MODEL_DIR") {
        if !dir.trim().is_empty() {
            return expand_path(dir);
        }
    }
    PathBuf::from("models").join(settings.transformer_model.replace('/', "--"))
}
