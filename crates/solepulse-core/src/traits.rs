use crate::error::Result;

/// A swappable scorer for short brand-context snippets.
///
/// Scores are in `[-1, 1]`. An empty snippet scores `0.0`. Implementations
/// backed by an optional runtime return [`crate::error::Error::Unavailable`]
/// from the first scoring call when that runtime is missing.
pub trait ContextualScorer: Send + Sync {
    /// Stable identifier of the backing model (e.g. a hub id or `fake`).
    fn model_id(&self) -> &str;
    fn score(&self, text: &str) -> Result<f32>;
    /// Score a batch; output has the same length and order as `texts`.
    fn score_batch(&self, texts: &[String]) -> Result<Vec<f32>>;
}
