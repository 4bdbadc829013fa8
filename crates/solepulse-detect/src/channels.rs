use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use solepulse_core::error::Result;
use solepulse_core::registry::ChannelRegistry;
use solepulse_core::types::push_unique;

use crate::pattern::alternation_pattern;

/// Retail channel detection from outbound URLs and free-text keywords.
pub struct ChannelDetector {
    registry: ChannelRegistry,
    // None when the registry has no keywords
    keywords: Option<Regex>,
}

impl ChannelDetector {
    pub fn new(registry: &ChannelRegistry) -> Result<Self> {
        let mut phrases: Vec<&str> = registry.keywords().iter().map(|(k, _)| k.as_str()).collect();
        phrases.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
        let keywords = if phrases.is_empty() { None } else { Some(alternation_pattern("channel keywords", &phrases)?) };
        Ok(Self { registry: registry.clone(), keywords })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(&ChannelRegistry::default())
    }

    /// Channels for the URLs' domains, in URL order. Unknown domains and
    /// unparseable URLs contribute nothing.
    pub fn detect_from_urls<S: AsRef<str>>(&self, urls: &[S]) -> Vec<String> {
        let mut channels = Vec::new();
        for url in urls {
            let Some(domain) = domain_from_url(url.as_ref()) else { continue };
            if let Some(channel) = self.registry.channel_for_domain(&domain) {
                push_unique(&mut channels, channel);
            }
        }
        channels
    }

    /// Channels named by keywords in `text`, in match order.
    pub fn detect_from_text(&self, text: &str) -> Vec<String> {
        let mut channels = Vec::new();
        let Some(pattern) = &self.keywords else { return channels };
        for m in pattern.find_iter(text) {
            if let Some(channel) = self.registry.channel_for_keyword(&m.as_str().to_lowercase()) {
                push_unique(&mut channels, channel);
            }
        }
        channels
    }

    /// URL-derived channels first, then keyword-derived ones not yet seen.
    pub fn detect<S: AsRef<str>>(&self, text: &str, urls: &[S]) -> Vec<String> {
        let mut channels = self.detect_from_urls(urls);
        for channel in self.detect_from_text(text) {
            push_unique(&mut channels, &channel);
        }
        channels
    }
}

/// Bare lowercase host of `url` without a leading `www.`; a scheme is
/// assumed when missing.
pub fn domain_from_url(url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }
    let parsed = if url.starts_with("http") { Url::parse(url) } else { Url::parse(&format!("https://{url}")) }.ok()?;
    let host = parsed.host_str()?.to_lowercase();
    let host = host.strip_prefix("www.").map(str::to_string).unwrap_or(host);
    Some(host)
}

/// Inline `http(s)://` URLs in `text`, for records that arrive without a
/// pre-extracted URL list.
pub fn extract_urls(text: &str) -> Vec<String> {
    static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r#"https?://[^\s)\]>"']+"#).expect("static url pattern"));
    URL.find_iter(text).map(|m| m.as_str().to_string()).collect()
}
