//! Text normalization and filename slugs.
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

static UNSAFE_RUN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^A-Za-z0-9._-]+").expect("BUG: invalid UNSAFE_RUN_RE regex literal")
});

/// Renders a payload value as trimmed text. `null` becomes the empty string;
/// numbers and booleans use their JSON spelling.
pub fn normalize_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.trim().to_string(),
        other => other.to_string().trim().to_string(),
    }
}

/// The normalized text, or `None` when it is empty.
pub fn non_empty_text(value: &Value) -> Option<String> {
    Some(normalize_text(value)).filter(|s| !s.is_empty())
}

/// Makes `value` safe for use in a download filename: accents are stripped
/// through NFKD decomposition, every run of characters outside
/// `[A-Za-z0-9._-]` becomes a single `_`, and leading/trailing `_` are
/// trimmed. Falls back to `fallback` when nothing is left.
pub fn slugify_filename(value: &str, fallback: &str) -> String {
    let raw = match value.trim() {
        "" => fallback,
        trimmed => trimmed,
    };
    let decomposed: String = raw.nfkd().filter(|c| !is_combining_mark(*c)).collect();
    let cleaned = UNSAFE_RUN_RE.replace_all(&decomposed, "_");
    let cleaned = cleaned.trim_matches('_');
    if cleaned.is_empty() { fallback.to_string() } else { cleaned.to_string() }
}
