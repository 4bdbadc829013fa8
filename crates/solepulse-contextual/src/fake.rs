use std::hash::{Hash, Hasher};
use twox_hash::XxHash64;

use solepulse_core::error::Result;
use solepulse_core::traits::ContextualScorer;

/// Deterministic stand-in for a real model: each snippet hashes to a fixed
/// score in `[-1, 1]`. Empty snippets score `0.0`.
pub struct FakeScorer {
    model_id: String,
}

impl FakeScorer {
    pub fn new(model_id: impl Into<String>) -> Self {
        Self { model_id: model_id.into() }
    }
}

impl ContextualScorer for FakeScorer {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    fn score(&self, text: &str) -> Result<f32> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(0.0);
        }
        let mut hasher = XxHash64::with_seed(0);
        text.hash(&mut hasher);
        let h = hasher.finish();
        let unit = ((h >> 32) as u32) as f32 / u32::MAX as f32;
        Ok((unit * 2.0 - 1.0).clamp(-1.0, 1.0))
    }

    fn score_batch(&self, texts: &[String]) -> Result<Vec<f32>> {
        texts.iter().map(|t| self.score(t)).collect()
    }
}
