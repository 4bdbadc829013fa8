//! Mapping from classifier output positions to sentiment polarity.

use serde_json::Value;

use solepulse_core::error::{Error, Result};

/// Positions of the positive and negative classes among `num_labels`
/// classifier outputs. Any other class counts as neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelMap {
    pub num_labels: usize,
    pub positive: usize,
    pub negative: usize,
}

impl Default for LabelMap {
    /// negative / neutral / positive, the usual three-way layout.
    fn default() -> Self {
        Self { num_labels: 3, positive: 2, negative: 0 }
    }
}

impl LabelMap {
    /// Reads `id2label` from a model's `config.json`. A label containing
    /// "positive" (or equal to `pos` / `label_2`) is the positive class, and
    /// likewise for negative. A missing table falls back to the default
    /// three-way layout.
    pub fn from_model_config(config: &Value) -> Result<Self> {
        let Some(table) = config.get("id2label").and_then(Value::as_object) else {
            return Ok(Self::default());
        };
        let mut positive = None;
        let mut negative = None;
        for (id, label) in table {
            let id: usize =
                id.parse().map_err(|_| Error::InvalidConfig(format!("non-numeric label id '{id}'")))?;
            let Some(label) = label.as_str().map(str::to_lowercase) else { continue };
            if label.contains("positive") || label == "pos" || label == "label_2" {
                positive = Some(id);
            } else if label.contains("negative") || label == "neg" || label == "label_0" {
                negative = Some(id);
            }
        }
        let num_labels = table.len();
        match (positive, negative) {
            (Some(positive), Some(negative)) if positive < num_labels && negative < num_labels => {
                Ok(Self { num_labels, positive, negative })
            }
            _ => Err(Error::InvalidConfig(format!("id2label has no usable positive/negative classes: {table:?}"))),
        }
    }

    /// `P(positive) - P(negative)` for one row of class probabilities.
    pub fn polarity(&self, probs: &[f32]) -> f32 {
        let p = |i: usize| probs.get(i).copied().unwrap_or(0.0);
        (p(self.positive) - p(self.negative)).clamp(-1.0, 1.0)
    }
}
