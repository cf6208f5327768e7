//! Flattening of scraper feature bags into searchable text.
//!
//! Scrapers deliver features in several shapes: a flat object, an object
//! nested under `"_raw"`, a list of loose text fragments, or occasionally a
//! plain string. Anything else contributes nothing — malformed input must
//! degrade to an empty haystack, never an error.

use serde_json::Value;

/// Flattens a raw feature bag into `"key: value"` fragments joined with
/// spaces. Does not lowercase; the caller owns case folding.
pub(crate) fn flatten_features(features: &Value) -> String {
    let mut fragments: Vec<String> = Vec::new();
    collect(features, &mut fragments);
    fragments.join(" ")
}

fn collect(value: &Value, fragments: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, entry) in map {
                if key == "_raw" {
                    // Unwrap the nested bag instead of emitting "_raw: ...".
                    collect(entry, fragments);
                } else if let Some(text) = scalar_text(entry) {
                    fragments.push(format!("{key}: {text}"));
                } else if entry.is_array() || entry.is_object() {
                    collect(entry, fragments);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                if let Some(text) = scalar_text(item) {
                    fragments.push(text);
                } else {
                    collect(item, fragments);
                }
            }
        }
        other => {
            if let Some(text) = scalar_text(other) {
                fragments.push(text);
            }
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}
