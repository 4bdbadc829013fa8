//! solepulse-hybrid
//!
//! The annotation orchestrator: runs every detector over a batch of records,
//! scores brand context windows with the contextual scorer in one batched
//! call, and blends the result with the lexicon score.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use solepulse_core::config::{Config, SentimentConfig};
use solepulse_core::error::Result;
use solepulse_core::registry::{AliasRegistry, ChannelRegistry, IntentRegistry, ModelCatalog};
use solepulse_core::traits::ContextualScorer;
use solepulse_core::types::{push_unique, Annotation, InputRecord, SentimentLabel};
use solepulse_detect::{BrandDetector, ChannelDetector, IntentClassifier, ModelDetector};
use solepulse_lexicon::LexiconAnalyzer;

/// The four pattern-based detectors an annotator runs.
pub struct Detectors {
    pub brands: BrandDetector,
    pub models: ModelDetector,
    pub channels: ChannelDetector,
    pub intents: IntentClassifier,
}

impl Detectors {
    /// Built-in vocabulary with the given context half-width in words.
    pub fn with_defaults(context_window: usize) -> Result<Self> {
        Self::from_registries(
            &AliasRegistry::default(),
            &ModelCatalog::default(),
            &ChannelRegistry::default(),
            &IntentRegistry::default(),
            context_window,
        )
    }

    pub fn from_registries(
        brands: &AliasRegistry,
        models: &ModelCatalog,
        channels: &ChannelRegistry,
        intents: &IntentRegistry,
        context_window: usize,
    ) -> Result<Self> {
        Ok(Self {
            brands: BrandDetector::new(brands, context_window)?,
            models: ModelDetector::new(models)?,
            channels: ChannelDetector::new(channels)?,
            intents: IntentClassifier::new(intents)?,
        })
    }
}

/// Per-record detection output before contextual scoring.
struct Detected {
    lexicon_score: f32,
    windows: Vec<String>,
    brands: Vec<String>,
    models: Vec<String>,
    channels: Vec<String>,
    primary_intent: Option<String>,
    all_intents: Vec<String>,
}

pub struct HybridAnnotator {
    settings: SentimentConfig,
    detectors: Detectors,
    lexicon: LexiconAnalyzer,
    // None disables contextual scoring
    scorer: Option<Box<dyn ContextualScorer>>,
}

impl HybridAnnotator {
    /// Annotator over the built-in vocabulary. `scorer = None` runs
    /// lexicon-only: no record gets a contextual score.
    pub fn new(settings: &SentimentConfig, scorer: Option<Box<dyn ContextualScorer>>) -> Result<Self> {
        settings.validate()?;
        let detectors = Detectors::with_defaults(settings.context_window)?;
        Ok(Self::with_detectors(settings, detectors, scorer))
    }

    pub fn with_detectors(
        settings: &SentimentConfig,
        detectors: Detectors,
        scorer: Option<Box<dyn ContextualScorer>>,
    ) -> Self {
        if let Some(scorer) = &scorer {
            debug!(model = scorer.model_id(), "contextual scoring enabled");
        }
        Self { settings: settings.clone(), detectors, lexicon: LexiconAnalyzer::new(), scorer }
    }

    /// Settings from `config`, scorer chosen by `solepulse_contextual::default_scorer`.
    pub fn from_config(config: &Config, use_contextual: bool) -> anyhow::Result<Self> {
        let settings = config.sentiment()?;
        let scorer = use_contextual.then(|| solepulse_contextual::default_scorer(&settings));
        Ok(Self::new(&settings, scorer)?)
    }

    pub fn settings(&self) -> &SentimentConfig {
        &self.settings
    }

    pub fn detectors(&self) -> &Detectors {
        &self.detectors
    }

    pub fn contextual_enabled(&self) -> bool {
        self.scorer.is_some()
    }

    /// One annotation per record, in input order. Never fails: a missing or
    /// failing contextual scorer degrades to lexicon scoring of the same
    /// context windows.
    pub fn annotate(&self, records: &[InputRecord]) -> Vec<Annotation> {
        let texts: Vec<String> = records.iter().map(|r| r.text.clone()).collect();
        let lexicon_scores = self.lexicon.score_batch(&texts);
        let detected: Vec<Detected> =
            records.iter().zip(lexicon_scores).map(|(r, lexicon_score)| self.detect(r, lexicon_score)).collect();
        let windows: Vec<String> = detected.iter().flat_map(|d| d.windows.iter().cloned()).collect();
        debug!(records = records.len(), windows = windows.len(), "annotating batch");

        let mut window_scores = self.score_windows(&windows).into_iter();
        let annotations: Vec<Annotation> = records
            .iter()
            .zip(detected)
            .map(|(record, d)| {
                let contextual = if d.windows.is_empty() || !self.contextual_enabled() {
                    None
                } else {
                    let own: Vec<f32> = window_scores.by_ref().take(d.windows.len()).collect();
                    mean(&own)
                };
                self.finish(record, d, contextual)
            })
            .collect();

        let counts = LabelCounts::from_annotations(&annotations, &self.settings);
        info!(
            records = annotations.len(),
            positive = counts.positive,
            neutral = counts.neutral,
            negative = counts.negative,
            "batch annotated"
        );
        annotations
    }

    pub fn annotate_one(&self, record: &InputRecord) -> Annotation {
        let d = self.detect(record, self.lexicon.score(&record.text));
        let contextual = if d.windows.is_empty() || !self.contextual_enabled() {
            None
        } else {
            mean(&self.score_windows(&d.windows))
        };
        self.finish(record, d, contextual)
    }

    pub fn label(&self, annotation: &Annotation) -> SentimentLabel {
        self.settings.label(annotation.hybrid_score)
    }

    fn detect(&self, record: &InputRecord, lexicon_score: f32) -> Detected {
        let text = record.text.as_str();
        let intent = self.detectors.intents.classify(text);
        let mut brands = Vec::new();
        let mut windows = Vec::new();
        for bm in self.detectors.brands.detect(text) {
            push_unique(&mut brands, bm.brand());
            windows.push(bm.context.text);
        }
        Detected {
            lexicon_score,
            windows,
            brands,
            models: self.detectors.models.detect_models(text),
            channels: self.detectors.channels.detect(text, &record.urls),
            primary_intent: intent.primary_intent,
            all_intents: intent.all_intents,
        }
    }

    /// Contextual scores for `windows`, falling back to the lexicon when the
    /// scorer is unavailable, fails or returns the wrong number of scores.
    /// Empty when contextual scoring is disabled.
    fn score_windows(&self, windows: &[String]) -> Vec<f32> {
        let Some(scorer) = &self.scorer else { return Vec::new() };
        if windows.is_empty() {
            return Vec::new();
        }
        match scorer.score_batch(windows) {
            Ok(scores) if scores.len() == windows.len() => return scores,
            Ok(scores) => warn!(
                model = scorer.model_id(),
                expected = windows.len(),
                got = scores.len(),
                "contextual scorer returned a short batch, using lexicon scores"
            ),
            Err(e) if e.is_unavailable() => {
                info!(model = scorer.model_id(), "contextual scorer unavailable, using lexicon scores: {e}")
            }
            Err(e) => warn!(model = scorer.model_id(), "contextual scoring failed, using lexicon scores: {e}"),
        }
        self.lexicon.score_batch(windows)
    }

    fn finish(&self, record: &InputRecord, d: Detected, contextual: Option<f32>) -> Annotation {
        let hybrid_score = match contextual {
            Some(c) => {
                (self.settings.transformer_weight * c + self.settings.lexicon_weight * d.lexicon_score).clamp(-1.0, 1.0)
            }
            None => d.lexicon_score,
        };
        Annotation {
            id: record.id.clone(),
            lexicon_score: d.lexicon_score,
            contextual_score: contextual,
            hybrid_score,
            brands: d.brands,
            models: d.models,
            channels: d.channels,
            primary_intent: d.primary_intent,
            all_intents: d.all_intents,
        }
    }
}

/// Hybrid-label tally over a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCounts {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl LabelCounts {
    pub fn from_annotations(annotations: &[Annotation], settings: &SentimentConfig) -> Self {
        let mut counts = Self::default();
        for a in annotations {
            match settings.label(a.hybrid_score) {
                SentimentLabel::Positive => counts.positive += 1,
                SentimentLabel::Neutral => counts.neutral += 1,
                SentimentLabel::Negative => counts.negative += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }
}

fn mean(scores: &[f32]) -> Option<f32> {
    if scores.is_empty() {
        return None;
    }
    Some(scores.iter().sum::<f32>() / scores.len() as f32)
}
