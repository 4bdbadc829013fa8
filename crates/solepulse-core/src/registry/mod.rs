//! Curated vocabularies: brands, models, retail channels and intent rules.
//!
//! Registries are plain immutable values. `Default` yields the built-in
//! sneaker vocabulary; `from_entries` builds a substitute registry, which is
//! how detectors are exercised with custom data. Iteration order is the
//! insertion order and is observable: model overlap resolution and intent
//! priority both depend on it.

mod brands;
mod channels;
mod intents;
mod models;

use serde::{Deserialize, Serialize};

/// Canonical brand name with its surface-form aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasEntry {
    pub canonical: String,
    pub aliases: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasRegistry {
    entries: Vec<AliasEntry>,
}

impl AliasRegistry {
    /// Empty aliases are dropped; a later entry with an existing canonical
    /// name replaces the earlier one in place.
    pub fn from_entries<I, S, A>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<A>)>,
        S: Into<String>,
        A: Into<String>,
    {
        let mut out: Vec<AliasEntry> = Vec::new();
        for (canonical, aliases) in entries {
            let entry = AliasEntry { canonical: canonical.into(), aliases: clean_aliases(aliases) };
            match out.iter_mut().find(|e| e.canonical == entry.canonical) {
                Some(existing) => *existing = entry,
                None => out.push(entry),
            }
        }
        Self { entries: out }
    }

    pub fn entries(&self) -> &[AliasEntry] {
        &self.entries
    }

    pub fn get(&self, canonical: &str) -> Option<&AliasEntry> {
        self.entries.iter().find(|e| e.canonical == canonical)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for AliasRegistry {
    fn default() -> Self {
        Self::from_entries(brands::BRAND_ALIASES.iter().map(|(name, aliases)| (*name, aliases.to_vec())))
    }
}

/// Product model: owning brand, reference retail price and aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelEntry {
    pub canonical: String,
    pub brand: String,
    pub reference_price: f64,
    pub aliases: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelCatalog {
    entries: Vec<ModelEntry>,
}

impl ModelCatalog {
    /// Negative or non-finite prices are clamped to `0.0`.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = ModelEntry>,
    {
        let mut out: Vec<ModelEntry> = Vec::new();
        for mut entry in entries {
            if !entry.reference_price.is_finite() || entry.reference_price < 0.0 {
                entry.reference_price = 0.0;
            }
            entry.aliases = clean_aliases(entry.aliases);
            match out.iter_mut().find(|e| e.canonical == entry.canonical) {
                Some(existing) => *existing = entry,
                None => out.push(entry),
            }
        }
        Self { entries: out }
    }

    pub fn entries(&self) -> &[ModelEntry] {
        &self.entries
    }

    pub fn get(&self, canonical: &str) -> Option<&ModelEntry> {
        self.entries.iter().find(|e| e.canonical == canonical)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self::from_entries(models::MODEL_CATALOG.iter().map(|(name, brand, price, aliases)| ModelEntry {
            canonical: (*name).to_string(),
            brand: (*brand).to_string(),
            reference_price: *price,
            aliases: aliases.iter().map(|a| (*a).to_string()).collect(),
        }))
    }
}

/// Retail channels keyed by bare domain and by free-text keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelRegistry {
    domains: Vec<(String, String)>,
    keywords: Vec<(String, String)>,
}

impl ChannelRegistry {
    /// Domains and keywords are stored lowercase; a leading `www.` on a
    /// domain is dropped.
    pub fn from_entries<D, K, S1, S2, S3, S4>(domains: D, keywords: K) -> Self
    where
        D: IntoIterator<Item = (S1, S2)>,
        K: IntoIterator<Item = (S3, S4)>,
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
        S4: Into<String>,
    {
        let mut domain_map: Vec<(String, String)> = Vec::new();
        for (domain, channel) in domains {
            let domain = domain.into().trim().to_lowercase();
            let domain = domain.strip_prefix("www.").map(str::to_string).unwrap_or(domain);
            if domain.is_empty() {
                continue;
            }
            upsert(&mut domain_map, domain, channel.into());
        }
        let mut keyword_map: Vec<(String, String)> = Vec::new();
        for (keyword, channel) in keywords {
            let keyword = keyword.into().trim().to_lowercase();
            if keyword.is_empty() {
                continue;
            }
            upsert(&mut keyword_map, keyword, channel.into());
        }
        Self { domains: domain_map, keywords: keyword_map }
    }

    pub fn channel_for_domain(&self, domain: &str) -> Option<&str> {
        self.domains.iter().find(|(d, _)| d == domain).map(|(_, c)| c.as_str())
    }

    pub fn channel_for_keyword(&self, keyword: &str) -> Option<&str> {
        self.keywords.iter().find(|(k, _)| k == keyword).map(|(_, c)| c.as_str())
    }

    pub fn domains(&self) -> &[(String, String)] {
        &self.domains
    }

    pub fn keywords(&self) -> &[(String, String)] {
        &self.keywords
    }
}

impl Default for ChannelRegistry {
    fn default() -> Self {
        Self::from_entries(channels::DOMAIN_TO_CHANNEL.iter().copied(), channels::KEYWORD_TO_CHANNEL.iter().copied())
    }
}

/// One intent category and its regex sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentCategory {
    pub name: String,
    pub patterns: Vec<String>,
}

/// Intent categories in priority order (highest first).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentRegistry {
    categories: Vec<IntentCategory>,
}

impl IntentRegistry {
    pub fn from_entries<I, S, P>(categories: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<P>)>,
        S: Into<String>,
        P: Into<String>,
    {
        let mut out: Vec<IntentCategory> = Vec::new();
        for (name, patterns) in categories {
            let category = IntentCategory {
                name: name.into(),
                patterns: patterns.into_iter().map(Into::into).filter(|p: &String| !p.is_empty()).collect(),
            };
            match out.iter_mut().find(|c| c.name == category.name) {
                Some(existing) => *existing = category,
                None => out.push(category),
            }
        }
        Self { categories: out }
    }

    pub fn categories(&self) -> &[IntentCategory] {
        &self.categories
    }

    /// Category names, highest priority first.
    pub fn priority(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }
}

impl Default for IntentRegistry {
    fn default() -> Self {
        Self::from_entries(intents::INTENT_PATTERNS.iter().map(|(name, patterns)| (*name, patterns.to_vec())))
    }
}

fn clean_aliases<A: Into<String>>(aliases: Vec<A>) -> Vec<String> {
    aliases.into_iter().map(Into::into).filter(|a: &String| !a.trim().is_empty()).collect()
}

fn upsert(map: &mut Vec<(String, String)>, key: String, value: String) {
    match map.iter_mut().find(|(k, _)| *k == key) {
        Some(slot) => slot.1 = value,
        None => map.push((key, value)),
    }
}
