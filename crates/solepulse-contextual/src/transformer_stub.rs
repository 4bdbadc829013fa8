use std::path::{Path, PathBuf};

use solepulse_core::error::{Error, Result};
use solepulse_core::traits::ContextualScorer;

/// Build without the `transformer` feature: there is no runtime to load, so
/// every non-empty request reports `Error::Unavailable`.
pub struct TransformerScorer {
    model_id: String,
    model_dir: PathBuf,
}

impl TransformerScorer {
    pub fn new(model_id: impl Into<String>, model_dir: impl Into<PathBuf>, _batch_size: usize) -> Self {
        Self { model_id: model_id.into(), model_dir: model_dir.into() }
    }

    pub fn model_dir(&self) -> &Path {
        &self.model_dir
    }

    fn unavailable(&self) -> Error {
        Error::Unavailable(format!("{}: built without the `transformer` feature", self.model_id))
    }
}

impl ContextualScorer for TransformerScorer {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    fn score(&self, text: &str) -> Result<f32> {
        if text.trim().is_empty() {
            return Ok(0.0);
        }
        Err(self.unavailable())
    }

    fn score_batch(&self, texts: &[String]) -> Result<Vec<f32>> {
        if texts.iter().all(|t| t.trim().is_empty()) {
            return Ok(vec![0.0; texts.len()]);
        }
        Err(self.unavailable())
    }
}
