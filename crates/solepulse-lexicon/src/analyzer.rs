use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::lexicon::{is_negation, BOOSTER, CAPS_INCR, NEGATION_SCALAR, VALENCE};

// Normalisation constant: roughly the largest raw sum seen in practice.
const ALPHA: f32 = 15.0;
const EXCLAIM_INCR: f32 = 0.292;
const MAX_EXCLAIMS: usize = 4;
const QUESTION_INCR: f32 = 0.18;
const QUESTION_CAP: f32 = 0.96;
// How far back boosters and negations reach.
const LOOKBACK: usize = 3;

/// Proportions of negative, neutral and positive signal plus the normalised
/// compound score in `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarityScores {
    pub neg: f32,
    pub neu: f32,
    pub pos: f32,
    pub compound: f32,
}

impl PolarityScores {
    pub fn neutral() -> Self {
        Self { neg: 0.0, neu: 1.0, pos: 0.0, compound: 0.0 }
    }
}

/// Deterministic rule-based scorer. Cheap to construct and stateless, so a
/// single instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct LexiconAnalyzer {
    overrides: HashMap<String, f32>,
}

impl LexiconAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzer with extra or replacement valences, e.g. for a niche community.
    /// Keys are matched lowercase; values are clamped to the `[-4, 4]` scale.
    pub fn with_overrides<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f32)>,
        S: Into<String>,
    {
        let overrides: HashMap<String, f32> =
            entries.into_iter().map(|(w, v)| (w.into().to_lowercase(), v.clamp(-4.0, 4.0))).collect();
        debug!(overrides = overrides.len(), "lexicon analyzer with overrides");
        Self { overrides }
    }

    /// Compound sentiment of `text` in `[-1, 1]`; `0.0` for empty text.
    pub fn score(&self, text: &str) -> f32 {
        self.polarity_scores(text).compound
    }

    pub fn score_batch(&self, texts: &[String]) -> Vec<f32> {
        texts.iter().map(|t| self.score(t)).collect()
    }

    pub fn polarity_scores(&self, text: &str) -> PolarityScores {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return PolarityScores::neutral();
        }
        let caps_differ = caps_differential(&tokens);
        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();

        let mut sentiments: Vec<f32> = Vec::with_capacity(tokens.len());
        for (i, word) in lowered.iter().enumerate() {
            if BOOSTER.contains_key(word.as_str()) {
                sentiments.push(0.0);
                continue;
            }
            let Some(mut valence) = self.valence(word) else {
                sentiments.push(0.0);
                continue;
            };
            if caps_differ && is_all_caps(tokens[i]) {
                valence += CAPS_INCR * valence.signum();
            }
            for back in 1..=LOOKBACK.min(i) {
                let prev = &lowered[i - back];
                if self.valence(prev).is_none() {
                    let damp = match back {
                        1 => 1.0,
                        2 => 0.95,
                        _ => 0.9,
                    };
                    valence += booster_scalar(prev, tokens[i - back], valence, caps_differ) * damp;
                }
                if is_negation(prev) {
                    valence *= NEGATION_SCALAR;
                }
            }
            sentiments.push(valence);
        }
        apply_but(&lowered, &mut sentiments);

        let emphasis = punctuation_emphasis(text);
        let mut sum: f32 = sentiments.iter().sum();
        if sum > 0.0 {
            sum += emphasis;
        } else if sum < 0.0 {
            sum -= emphasis;
        }
        let compound = normalize(sum);

        let mut pos_sum: f32 = sentiments.iter().filter(|s| **s > 0.0).map(|s| s + 1.0).sum();
        let mut neg_sum: f32 = sentiments.iter().filter(|s| **s < 0.0).map(|s| s - 1.0).sum();
        let neu_count = sentiments.iter().filter(|s| **s == 0.0).count() as f32;
        if pos_sum > neg_sum.abs() {
            pos_sum += emphasis;
        } else if pos_sum < neg_sum.abs() {
            neg_sum -= emphasis;
        }
        let total = pos_sum + neg_sum.abs() + neu_count;
        if total <= 0.0 {
            return PolarityScores::neutral();
        }
        PolarityScores { neg: (neg_sum / total).abs(), neu: neu_count / total, pos: pos_sum / total, compound }
    }

    fn valence(&self, word: &str) -> Option<f32> {
        self.overrides.get(word).copied().or_else(|| VALENCE.get(word).copied())
    }
}

/// Whitespace tokens with surrounding punctuation stripped. Emoticons are
/// kept verbatim; other tokens shorter than two characters are dropped.
fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .filter_map(|raw| {
            if VALENCE.contains_key(raw.to_lowercase().as_str()) && !raw.chars().any(char::is_alphanumeric) {
                return Some(raw);
            }
            let word = raw.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'');
            let word = word.trim_matches('\'');
            (word.chars().count() > 1).then_some(word)
        })
        .collect()
}

fn is_all_caps(word: &str) -> bool {
    word.chars().any(char::is_alphabetic) && !word.chars().any(char::is_lowercase)
}

/// True when some, but not all, tokens are shouted.
fn caps_differential(tokens: &[&str]) -> bool {
    let shouted = tokens.iter().filter(|t| is_all_caps(t)).count();
    shouted > 0 && shouted < tokens.len()
}

fn booster_scalar(lower: &str, original: &str, valence: f32, caps_differ: bool) -> f32 {
    let Some(&base) = BOOSTER.get(lower) else { return 0.0 };
    let mut scalar = if valence < 0.0 { -base } else { base };
    if caps_differ && is_all_caps(original) {
        scalar += if valence < 0.0 { -CAPS_INCR } else { CAPS_INCR };
    }
    scalar
}

/// Clauses after "but" dominate: earlier sentiment is halved, later is
/// amplified by half.
fn apply_but(lowered: &[String], sentiments: &mut [f32]) {
    let Some(pivot) = lowered.iter().position(|w| w == "but") else { return };
    for (i, s) in sentiments.iter_mut().enumerate() {
        if i < pivot {
            *s *= 0.5;
        } else if i > pivot {
            *s *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f32 {
    let exclaims = text.matches('!').count().min(MAX_EXCLAIMS) as f32 * EXCLAIM_INCR;
    let questions = text.matches('?').count();
    let questions = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f32 * QUESTION_INCR,
        _ => QUESTION_CAP,
    };
    exclaims + questions
}

fn normalize(sum: f32) -> f32 {
    if sum == 0.0 {
        return 0.0;
    }
    (sum / (sum * sum + ALPHA).sqrt()).clamp(-1.0, 1.0)
}
