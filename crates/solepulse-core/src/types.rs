//! Domain types shared by the detectors, scorers and the annotator.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type RecordId = String;

/// Which registry a mention was resolved against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Brand,
    Model,
}

/// One detected occurrence of a canonical entity in a text.
///
/// - `canonical`: registry key the alias resolved to
/// - `alias`: the registry alias whose pattern fired
/// - `surface`: the literal text as it appears in the source
/// - `start`/`end`: half-open, 0-based character offsets into the source
/// - `brand`/`reference_price`: owning brand and price, models only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mention {
    pub kind: EntityKind,
    pub canonical: String,
    pub alias: String,
    pub surface: String,
    pub start: usize,
    pub end: usize,
    pub brand: Option<String>,
    pub reference_price: Option<f64>,
}

impl Mention {
    pub fn overlaps(&self, other: &Mention) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// The ±N word neighbourhood of a brand mention.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextWindow {
    pub text: String,
    pub before: Vec<String>,
    pub after: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandMention {
    pub mention: Mention,
    pub context: ContextWindow,
}

impl BrandMention {
    pub fn brand(&self) -> &str {
        &self.mention.canonical
    }
}

/// Purchase-intent classification of one text.
///
/// `all_intents` follows the classifier's priority order and
/// `primary_intent` is its first element, so the two are `None`/empty
/// together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentResult {
    pub primary_intent: Option<String>,
    pub all_intents: Vec<String>,
    pub matched_patterns: HashMap<String, Vec<String>>,
}

impl IntentResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn from_matches(matches: Vec<(String, Vec<String>)>) -> Self {
        let all_intents: Vec<String> = matches.iter().map(|(name, _)| name.clone()).collect();
        let primary_intent = all_intents.first().cloned();
        Self { primary_intent, all_intents, matched_patterns: matches.into_iter().collect() }
    }
}

/// One input record handed to the annotator.
///
/// Missing text and URL fields deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub id: RecordId,
    #[serde(default, alias = "full_text")]
    pub text: String,
    #[serde(default, alias = "extracted_urls")]
    pub urls: Vec<String>,
}

impl InputRecord {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self { id: id.into(), text: text.into(), urls: Vec::new() }
    }

    pub fn with_urls(mut self, urls: Vec<String>) -> Self {
        self.urls = urls;
        self
    }
}

/// Structured output for one input record.
///
/// `contextual_score` is `None` when no contextual value was computed, which
/// is distinct from a computed score of `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub id: RecordId,
    pub lexicon_score: f32,
    pub contextual_score: Option<f32>,
    pub hybrid_score: f32,
    pub brands: Vec<String>,
    pub models: Vec<String>,
    pub channels: Vec<String>,
    pub primary_intent: Option<String>,
    pub all_intents: Vec<String>,
}

/// Three-way label derived from a score and the configured thresholds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

/// Push `item` unless it is already present, keeping first-occurrence order.
pub fn push_unique(items: &mut Vec<String>, item: &str) {
    if !items.iter().any(|existing| existing == item) {
        items.push(item.to_string());
    }
}
