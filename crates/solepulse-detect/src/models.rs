use regex::Regex;
use tracing::debug;

use solepulse_core::error::Result;
use solepulse_core::registry::ModelCatalog;
use solepulse_core::types::{push_unique, EntityKind, Mention};

use crate::offset::CharOffsets;
use crate::pattern::{alias_pattern, longest_first};

struct CompiledAlias {
    model: String,
    brand: String,
    reference_price: f64,
    alias: String,
    pattern: Regex,
}

/// Owning brand and reference price of a catalog model.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelInfo {
    pub canonical: String,
    pub brand: String,
    pub reference_price: f64,
}

/// Product model detector with overlap suppression.
///
/// Patterns are tried in catalog order, each model's aliases longest first.
/// A match is dropped when its span intersects one already accepted, so a
/// character range contributes to at most one model mention. Across
/// different models the earlier catalog entry wins.
pub struct ModelDetector {
    patterns: Vec<CompiledAlias>,
    catalog: ModelCatalog,
}

impl ModelDetector {
    pub fn new(catalog: &ModelCatalog) -> Result<Self> {
        let mut patterns = Vec::new();
        for entry in catalog.entries() {
            for alias in longest_first(&entry.aliases) {
                patterns.push(CompiledAlias {
                    model: entry.canonical.clone(),
                    brand: entry.brand.clone(),
                    reference_price: entry.reference_price,
                    pattern: alias_pattern(&alias)?,
                    alias,
                });
            }
        }
        debug!(models = catalog.len(), patterns = patterns.len(), "compiled model patterns");
        Ok(Self { patterns, catalog: catalog.clone() })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(&ModelCatalog::default())
    }

    /// Non-overlapping model mentions, ordered by start offset.
    pub fn detect(&self, text: &str) -> Vec<Mention> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        let offsets = CharOffsets::new(text);
        let mut accepted: Vec<(usize, usize)> = Vec::new();
        let mut mentions = Vec::new();
        for compiled in &self.patterns {
            for m in compiled.pattern.find_iter(text) {
                let (start, end) = (m.start(), m.end());
                if accepted.iter().any(|&(s, e)| start < e && s < end) {
                    continue;
                }
                accepted.push((start, end));
                let (char_start, char_end) = offsets.span(start, end);
                mentions.push(Mention {
                    kind: EntityKind::Model,
                    canonical: compiled.model.clone(),
                    alias: compiled.alias.clone(),
                    surface: m.as_str().to_string(),
                    start: char_start,
                    end: char_end,
                    brand: Some(compiled.brand.clone()),
                    reference_price: Some(compiled.reference_price),
                });
            }
        }
        mentions.sort_by_key(|m| m.start);
        mentions
    }

    /// Canonical model names in first-occurrence order, without duplicates.
    pub fn detect_models(&self, text: &str) -> Vec<String> {
        let mut models = Vec::new();
        for m in self.detect(text) {
            push_unique(&mut models, &m.canonical);
        }
        models
    }

    pub fn info(&self, canonical: &str) -> Option<ModelInfo> {
        self.catalog.get(canonical).map(|e| ModelInfo {
            canonical: e.canonical.clone(),
            brand: e.brand.clone(),
            reference_price: e.reference_price,
        })
    }

    /// `(model, brand, reference price)` for every catalog entry, in
    /// catalog order. Used to join against external marketplace prices.
    pub fn price_reference(&self) -> impl Iterator<Item = (&str, &str, f64)> + '_ {
        self.catalog.entries().iter().map(|e| (e.canonical.as_str(), e.brand.as_str(), e.reference_price))
    }
}
