//! Prompt assembly for the reasoning endpoint.
//!
//! The outbound prompt is the instruction text, a `Context:` marker, and the
//! pretty-printed payload. The whole payload is serialized, including
//! `promptOverride` when present.

use serde_json::Value;

/// Reserved payload key that replaces the default instruction.
pub const PROMPT_OVERRIDE_KEY: &str = "promptOverride";

/// Pick the instruction text: a non-empty string `promptOverride` wins,
/// anything else falls back to the default.
pub fn instruction<'a>(payload: &'a Value, default: &'a str) -> &'a str {
    payload
        .get(PROMPT_OVERRIDE_KEY)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .unwrap_or(default)
}

/// Build the full prompt string sent upstream.
///
/// The payload is serialized with 2-space indentation and non-ASCII
/// characters preserved literally.
pub fn build(instruction: &str, payload: &Value) -> String {
    // Pretty-printing a Value only fails on non-string map keys, which Value
    // cannot hold.
    let context = serde_json::to_string_pretty(payload).unwrap_or_else(|_| "{}".to_string());
    format!("{instruction}\nContext:\n{context}")
}
