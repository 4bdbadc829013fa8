//! Shared alias-pattern compilation.

use regex::Regex;
use solepulse_core::error::{Error, Result};

/// Case-insensitive, whole-word pattern for a literal alias.
///
/// Word boundaries follow the regex engine's `\b` (alphanumeric or
/// underscore on one side only). A boundary is only required on an edge of
/// the alias that is itself a word character, so `Next%` or `361°` still
/// match when followed by a space.
pub fn alias_pattern(alias: &str) -> Result<Regex> {
    compile(alias, &format!("(?i){}", bounded(alias)))
}

/// One alternation over several literal aliases, each bounded like
/// [`alias_pattern`]. Callers order `aliases` by preference: the leftmost
/// alternative that matches at a position wins.
pub fn alternation_pattern<S: AsRef<str>>(name: &str, aliases: &[S]) -> Result<Regex> {
    let body = aliases.iter().map(|a| bounded(a.as_ref())).collect::<Vec<_>>().join("|");
    compile(name, &format!("(?i){body}"))
}

fn bounded(alias: &str) -> String {
    let is_word = |c: Option<char>| c.is_some_and(|c| c.is_alphanumeric() || c == '_');
    let lead = if is_word(alias.chars().next()) { r"\b" } else { "" };
    let trail = if is_word(alias.chars().last()) { r"\b" } else { "" };
    format!("{lead}{}{trail}", regex::escape(alias))
}

/// Compile a raw, case-insensitive regex source.
pub fn raw_pattern(name: &str, source: &str) -> Result<Regex> {
    compile(name, &format!("(?i){source}"))
}

fn compile(name: &str, source: &str) -> Result<Regex> {
    Regex::new(source).map_err(|e| Error::InvalidPattern { name: name.to_string(), reason: e.to_string() })
}

/// Longest alias first by character count; ties keep registry order.
pub fn longest_first(aliases: &[String]) -> Vec<String> {
    let mut sorted = aliases.to_vec();
    sorted.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
    sorted
}
