use regex::Regex;
use tracing::debug;

use solepulse_core::error::Result;
use solepulse_core::registry::IntentRegistry;
use solepulse_core::types::IntentResult;

use crate::pattern::raw_pattern;

struct CompiledCategory {
    name: String,
    patterns: Vec<Regex>,
}

/// Purchase-intent classifier over prioritised regex categories.
///
/// Every category is evaluated; the result lists the matched ones in
/// priority order (not text order) and the first of them is primary.
pub struct IntentClassifier {
    categories: Vec<CompiledCategory>,
}

impl IntentClassifier {
    pub fn new(registry: &IntentRegistry) -> Result<Self> {
        let mut categories = Vec::with_capacity(registry.categories().len());
        for category in registry.categories() {
            let patterns = category
                .patterns
                .iter()
                .map(|p| raw_pattern(&category.name, p))
                .collect::<Result<Vec<_>>>()?;
            categories.push(CompiledCategory { name: category.name.clone(), patterns });
        }
        debug!(categories = categories.len(), "compiled intent patterns");
        Ok(Self { categories })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(&IntentRegistry::default())
    }

    pub fn classify(&self, text: &str) -> IntentResult {
        if text.is_empty() {
            return IntentResult::none();
        }
        let mut matches: Vec<(String, Vec<String>)> = Vec::new();
        for category in &self.categories {
            let snippets: Vec<String> = category
                .patterns
                .iter()
                .flat_map(|p| p.find_iter(text).map(|m| m.as_str().to_string()))
                .collect();
            if !snippets.is_empty() {
                matches.push((category.name.clone(), snippets));
            }
        }
        IntentResult::from_matches(matches)
    }

    /// Category names, highest priority first.
    pub fn priority(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }
}
