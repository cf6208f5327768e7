//! Place-name normalization shared by the gazetteer and the geocode cache.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalizes a place name into a lookup key: lowercase, diacritics stripped
/// (NFKD, combining marks dropped), punctuation turned into spaces, runs of
/// whitespace collapsed, trimmed.
///
/// Pure and idempotent — normalizing an already-normalized key is a no-op.
#[must_use]
pub fn normalize_name(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    for c in text.nfkd().filter(|c| !is_combining_mark(*c)) {
        if c.is_alphanumeric() {
            cleaned.extend(c.to_lowercase());
        } else {
            cleaned.push(' ');
        }
    }
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}
