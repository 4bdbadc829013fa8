use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use solepulse_core::error::Result;
use solepulse_core::registry::AliasRegistry;
use solepulse_core::types::{push_unique, BrandMention, ContextWindow, EntityKind, Mention};

use crate::offset::CharOffsets;
use crate::pattern::alias_pattern;

pub const DEFAULT_CONTEXT_WINDOW: usize = 15;
// Character radius used when a match cannot be placed on a word.
const FALLBACK_RADIUS: usize = 50;

struct CompiledAlias {
    brand: String,
    alias: String,
    pattern: Regex,
}

/// Brand mention detector.
///
/// Every alias of every brand is scanned independently and all matches are
/// kept: brand mentions may overlap (e.g. "Air Jordan" and "Jordan").
pub struct BrandDetector {
    patterns: Vec<CompiledAlias>,
    window: usize,
}

impl BrandDetector {
    pub fn new(registry: &AliasRegistry, window: usize) -> Result<Self> {
        let mut patterns = Vec::new();
        for entry in registry.entries() {
            // no case folding here: "Puma" and "PUMA" both fire
            for alias in &entry.aliases {
                let pattern = alias_pattern(alias)?;
                patterns.push(CompiledAlias { brand: entry.canonical.clone(), alias: alias.clone(), pattern });
            }
        }
        debug!(brands = registry.len(), patterns = patterns.len(), "compiled brand patterns");
        Ok(Self { patterns, window })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(&AliasRegistry::default(), DEFAULT_CONTEXT_WINDOW)
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// All brand mentions in `text`, ordered by start offset.
    pub fn detect(&self, text: &str) -> Vec<BrandMention> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        let words = word_spans(text);
        let offsets = CharOffsets::new(text);
        let mut mentions = Vec::new();
        for compiled in &self.patterns {
            for m in compiled.pattern.find_iter(text) {
                let (start, end) = offsets.span(m.start(), m.end());
                mentions.push(BrandMention {
                    mention: Mention {
                        kind: EntityKind::Brand,
                        canonical: compiled.brand.clone(),
                        alias: compiled.alias.clone(),
                        surface: m.as_str().to_string(),
                        start,
                        end,
                        brand: None,
                        reference_price: None,
                    },
                    context: self.context(text, &words, m.start(), m.end()),
                });
            }
        }
        mentions.sort_by_key(|bm| bm.mention.start);
        mentions
    }

    /// Canonical brand names in first-occurrence order, without duplicates.
    pub fn detect_brands(&self, text: &str) -> Vec<String> {
        let mut brands = Vec::new();
        for bm in self.detect(text) {
            push_unique(&mut brands, bm.brand());
        }
        brands
    }

    fn context(&self, text: &str, words: &[(usize, usize)], byte_start: usize, byte_end: usize) -> ContextWindow {
        let Some(idx) = words.iter().position(|&(_, end)| end >= byte_start) else {
            return radius_window(text, byte_start, byte_end);
        };
        let lo = idx.saturating_sub(self.window);
        let hi = (idx + self.window + 1).min(words.len());
        let word = |&(s, e): &(usize, usize)| text[s..e].to_string();
        let before: Vec<String> = words[lo..idx].iter().map(word).collect();
        let after: Vec<String> = words[idx + 1..hi].iter().map(word).collect();
        let window: Vec<String> = words[lo..hi].iter().map(word).collect();
        ContextWindow { text: window.join(" "), before, after }
    }
}

/// Fixed-radius window around a match that no word span covers. Registry
/// aliases are trimmed, so every match found by `detect` lands on a word and
/// this path is kept for callers of `context` with partial word tables.
fn radius_window(text: &str, byte_start: usize, byte_end: usize) -> ContextWindow {
    let lo = text[..byte_start].char_indices().rev().nth(FALLBACK_RADIUS - 1).map_or(0, |(i, _)| i);
    let hi = text[byte_end..].char_indices().nth(FALLBACK_RADIUS).map_or(text.len(), |(i, _)| byte_end + i);
    ContextWindow { text: text[lo..hi].to_string(), before: Vec::new(), after: Vec::new() }
}

/// Byte spans of the whitespace-separated words of `text`.
fn word_spans(text: &str) -> Vec<(usize, usize)> {
    static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+").expect("static word pattern"));
    WORD.find_iter(text).map(|m| (m.start(), m.end())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_window_spans_fifty_chars_each_side() {
        let text = format!("{}Nike{}", "a".repeat(80), "b".repeat(80));
        let ctx = radius_window(&text, 80, 84);
        assert_eq!(ctx.text, format!("{}Nike{}", "a".repeat(50), "b".repeat(50)));
        assert!(ctx.before.is_empty());
        assert!(ctx.after.is_empty());
    }

    #[test]
    fn radius_window_is_clamped_to_text() {
        let ctx = radius_window("Nike rocks", 0, 4);
        assert_eq!(ctx.text, "Nike rocks");
    }

    #[test]
    fn radius_window_counts_characters() {
        let text = format!("{}Nike", "é".repeat(70));
        let ctx = radius_window(&text, 140, 144);
        assert_eq!(ctx.text, format!("{}Nike", "é".repeat(50)));
    }

    #[test]
    fn context_uses_radius_when_no_word_covers_match() {
        let detector = BrandDetector::with_defaults().expect("brand detector");
        let text = "Nike shoes";
        let ctx = detector.context(text, &[], 0, 4);
        assert_eq!(ctx.text, "Nike shoes");
        assert!(ctx.before.is_empty());
    }
}
