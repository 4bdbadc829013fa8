//! JSON Lines plumbing for the `solepulse` binary: turning exported posts and
//! comments into input records and merging annotations back into them.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

use solepulse_core::types::{Annotation, InputRecord, SentimentLabel};
use solepulse_detect::extract_urls;

/// One parsed input line: the original object plus the record built from it.
#[derive(Debug, Clone)]
pub struct SourceRow {
    pub original: Map<String, Value>,
    pub record: InputRecord,
}

/// `*.jsonl` files under `input` in path order, or `input` itself when it
/// is a file.
pub fn input_files(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }
    if !input.is_dir() {
        anyhow::bail!("input {} does not exist", input.display());
    }
    let mut files: Vec<PathBuf> = WalkDir::new(input)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().and_then(|s| s.to_str()) == Some("jsonl"))
        .collect();
    files.sort();
    Ok(files)
}

/// Every JSON object line of `path`. Blank lines are skipped; malformed or
/// non-object lines are logged and skipped.
pub fn read_rows(path: &Path) -> Result<Vec<SourceRow>> {
    let content = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("input");
    let mut rows = Vec::new();
    for (n, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<Value>(line) {
            Ok(Value::Object(original)) => {
                let record = record_from_object(&original, &format!("{stem}:{}", n + 1));
                rows.push(SourceRow { original, record });
            }
            Ok(_) => warn!(file = %path.display(), line = n + 1, "skipping non-object line"),
            Err(e) => warn!(file = %path.display(), line = n + 1, "skipping malformed line: {e}"),
        }
    }
    Ok(rows)
}

/// Builds the record for one exported post or comment.
///
/// - id: `id` (string or number), else `fallback_id`
/// - text: `full_text`, else `title` and `selftext` joined, else `body`
/// - urls: `extracted_urls`, else URLs found in the text
pub fn record_from_object(obj: &Map<String, Value>, fallback_id: &str) -> InputRecord {
    let id = match obj.get("id") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => fallback_id.to_string(),
    };
    let text = text_of(obj);
    let urls: Vec<String> = match obj.get("extracted_urls").and_then(Value::as_array) {
        Some(list) => list.iter().filter_map(Value::as_str).map(str::to_string).collect(),
        None => extract_urls(&text),
    };
    InputRecord::new(id, text).with_urls(urls)
}

fn text_of(obj: &Map<String, Value>) -> String {
    let field = |key: &str| obj.get(key).and_then(Value::as_str).map(str::trim).filter(|s| !s.is_empty());
    if let Some(full) = field("full_text") {
        return full.to_string();
    }
    let parts: Vec<&str> = [field("title"), field("selftext")].into_iter().flatten().collect();
    if !parts.is_empty() {
        return parts.join("\n");
    }
    field("body").unwrap_or_default().to_string()
}

/// The original object with the annotation columns and the hybrid label
/// added. Existing columns of the same name are replaced; `id` is kept.
pub fn merge_annotation(
    mut original: Map<String, Value>,
    annotation: &Annotation,
    label: SentimentLabel,
) -> Result<Value> {
    let Value::Object(columns) = serde_json::to_value(annotation)? else {
        anyhow::bail!("annotation did not serialize to an object");
    };
    for (key, value) in columns {
        if key == "id" && original.contains_key("id") {
            continue;
        }
        original.insert(key, value);
    }
    original.insert("sentiment_label".to_string(), serde_json::to_value(label)?);
    Ok(Value::Object(original))
}
