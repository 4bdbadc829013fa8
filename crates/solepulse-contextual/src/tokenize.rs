use anyhow::{anyhow, Result};
use candle_core::{Device, Tensor};
use tokenizers::Tokenizer;

/// Encodes `texts` as one right-padded batch: `(input_ids, attention_mask)`,
/// both `[batch, longest]`. Sequences longer than `max_len` are truncated.
pub fn encode_batch(
    tokenizer: &Tokenizer,
    texts: &[&str],
    max_len: usize,
    pad_id: u32,
    device: &Device,
) -> Result<(Tensor, Tensor)> {
    let encodings = tokenizer
        .encode_batch(texts.to_vec(), true)
        .map_err(|e| anyhow!("Tokenization failed: {}", e))?;
    let longest = encodings.iter().map(|e| e.get_ids().len().min(max_len)).max().unwrap_or(0).max(1);

    let mut ids: Vec<u32> = Vec::with_capacity(texts.len() * longest);
    let mut mask: Vec<u32> = Vec::with_capacity(texts.len() * longest);
    for enc in &encodings {
        let mut row_ids = enc.get_ids().to_vec();
        let mut row_mask = enc.get_attention_mask().to_vec();
        row_ids.truncate(max_len);
        row_mask.truncate(max_len);
        row_ids.resize(longest, pad_id);
        row_mask.resize(longest, 0);
        ids.extend(row_ids);
        mask.extend(row_mask);
    }
    let input_ids = Tensor::from_vec(ids, (texts.len(), longest), device)?;
    let attention_mask = Tensor::from_vec(mask, (texts.len(), longest), device)?;
    Ok((input_ids, attention_mask))
}
