use anyhow::{anyhow, Context};
use candle_core::{DType, Device, Tensor, D};
use candle_nn::VarBuilder;
use candle_transformers::models::xlm_roberta::{Config as RobertaConfig, XLMRobertaForSequenceClassification};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokenizers::{Tokenizer, TruncationParams};
use tracing::{debug, info, warn};

use solepulse_core::error::{Error, Result};
use solepulse_core::traits::ContextualScorer;

use crate::device::select_device;
use crate::labels::LabelMap;
use crate::tokenize::encode_batch;
use crate::MAX_TOKENS;

struct LoadedModel {
    model: XLMRobertaForSequenceClassification,
    tokenizer: Tokenizer,
    device: Device,
    labels: LabelMap,
    pad_id: u32,
}

/// Sentiment classifier over a local RoBERTa-family checkpoint
/// (`config.json`, `tokenizer.json`, `model.safetensors` or
/// `pytorch_model.bin`).
///
/// Construction only records where the model lives. The first non-empty
/// request loads it; a failed load is remembered and every later request
/// reports `Error::Unavailable` with the same reason.
pub struct TransformerScorer {
    model_id: String,
    model_dir: PathBuf,
    batch_size: usize,
    loaded: OnceCell<std::result::Result<LoadedModel, String>>,
}

impl TransformerScorer {
    pub fn new(model_id: impl Into<String>, model_dir: impl Into<PathBuf>, batch_size: usize) -> Self {
        Self {
            model_id: model_id.into(),
            model_dir: model_dir.into(),
            batch_size: batch_size.max(1),
            loaded: OnceCell::new(),
        }
    }

    pub fn model_dir(&self) -> &Path {
        &self.model_dir
    }

    fn model(&self) -> Result<&LoadedModel> {
        let loaded = self.loaded.get_or_init(|| {
            load_model(&self.model_id, &self.model_dir).map_err(|e| {
                warn!(model = %self.model_id, dir = %self.model_dir.display(), "contextual model unavailable: {e:#}");
                format!("{}: {e:#}", self.model_id)
            })
        });
        loaded.as_ref().map_err(|reason| Error::Unavailable(reason.clone()))
    }

    fn run_chunk(&self, model: &LoadedModel, texts: &[&str]) -> anyhow::Result<Vec<f32>> {
        let (input_ids, attention_mask) =
            encode_batch(&model.tokenizer, texts, MAX_TOKENS, model.pad_id, &model.device)?;
        let token_type_ids = input_ids.zeros_like()?;
        let logits = model.model.forward(&input_ids, &attention_mask, &token_type_ids)?;
        let probs = candle_nn::ops::softmax(&logits.to_dtype(DType::F32)?, D::Minus1)?;
        let rows: Vec<Vec<f32>> = probs.to_device(&Device::Cpu)?.to_vec2()?;
        if rows.len() != texts.len() {
            return Err(anyhow!("classifier returned {} rows for {} inputs", rows.len(), texts.len()));
        }
        Ok(rows.iter().map(|row| model.labels.polarity(row)).collect())
    }
}

impl ContextualScorer for TransformerScorer {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    fn score(&self, text: &str) -> Result<f32> {
        let scores = self.score_batch(&[text.to_string()])?;
        Ok(scores.first().copied().unwrap_or(0.0))
    }

    fn score_batch(&self, texts: &[String]) -> Result<Vec<f32>> {
        let mut scores = vec![0.0f32; texts.len()];
        let pending: Vec<usize> =
            texts.iter().enumerate().filter(|(_, t)| !t.trim().is_empty()).map(|(i, _)| i).collect();
        if pending.is_empty() {
            return Ok(scores);
        }
        let model = self.model()?;
        let start = Instant::now();
        for chunk in pending.chunks(self.batch_size) {
            let batch: Vec<&str> = chunk.iter().map(|&i| texts[i].as_str()).collect();
            let chunk_scores = self.run_chunk(model, &batch).map_err(|e| Error::Scoring(format!("{e:#}")))?;
            for (&i, s) in chunk.iter().zip(chunk_scores) {
                scores[i] = s;
            }
        }
        debug!(snippets = pending.len(), elapsed_ms = start.elapsed().as_millis() as u64, "contextual batch scored");
        Ok(scores)
    }
}

fn load_model(model_id: &str, dir: &Path) -> anyhow::Result<LoadedModel> {
    if !dir.is_dir() {
        return Err(anyhow!("model directory {} does not exist", dir.display()));
    }
    let device = select_device();
    info!(model = model_id, dir = %dir.display(), "loading contextual sentiment model");

    let tokenizer_path = dir.join("tokenizer.json");
    let mut tokenizer = Tokenizer::from_file(&tokenizer_path)
        .map_err(|e| anyhow!("Failed to load tokenizer from {}: {}", tokenizer_path.display(), e))?;
    tokenizer
        .with_truncation(Some(TruncationParams { max_length: MAX_TOKENS, ..Default::default() }))
        .map_err(|e| anyhow!("Failed to configure truncation: {}", e))?;

    let config_path = dir.join("config.json");
    let raw = std::fs::read_to_string(&config_path).with_context(|| format!("reading {}", config_path.display()))?;
    let json: serde_json::Value = serde_json::from_str(&raw).context("Failed to parse config.json")?;
    let config: RobertaConfig = serde_json::from_value(json.clone()).context("Unsupported model config")?;
    let labels = LabelMap::from_model_config(&json)?;
    debug!(num_labels = labels.num_labels, positive = labels.positive, negative = labels.negative, "label layout");

    let vb = weights(dir, &device)?;
    let model = XLMRobertaForSequenceClassification::new(labels.num_labels, &config, vb)
        .context("Failed to build classifier")?;
    info!(model = model_id, "contextual sentiment model loaded");
    Ok(LoadedModel { model, tokenizer, device, labels, pad_id: config.pad_token_id as u32 })
}

fn weights(dir: &Path, device: &Device) -> anyhow::Result<VarBuilder<'static>> {
    let safetensors = dir.join("model.safetensors");
    if safetensors.exists() {
        // SAFETY: the file is mapped read-only and not modified while the model is alive.
        let vb = unsafe { VarBuilder::from_mmaped_safetensors(&[safetensors], DType::F32, device)? };
        return Ok(vb);
    }
    let bin = dir.join("pytorch_model.bin");
    if bin.exists() {
        let tensors = candle_core::pickle::read_all(&bin)?;
        let map: std::collections::HashMap<String, Tensor> = tensors.into_iter().collect();
        return Ok(VarBuilder::from_tensors(map, DType::F32, device));
    }
    Err(anyhow!("no model.safetensors or pytorch_model.bin in {}", dir.display()))
}
