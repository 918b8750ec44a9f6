//! Best-effort JSON extraction from free-text model completions.
//!
//! Models asked to "return ONLY a valid JSON object" still wrap their answer
//! in prose or markdown often enough that the caller cannot parse the
//! completion directly. The heuristic here takes the widest brace-delimited
//! span (first `{` to last `}`) and tries to parse it.
//!
//! Known limitation: the scan is not nesting-aware. A completion containing
//! two independent JSON objects yields a span covering both, which fails to
//! parse and falls through to the caller's fallback. This is deliberate and
//! covered by tests rather than silently corrected.

use serde_json::Value as JsonValue;

/// Extract and parse the widest brace-delimited JSON object from `text`.
///
/// Returns `None` when no braces are present or the span is not valid JSON.
/// Pure function: the same input always yields the same output.
pub fn json_object(text: &str) -> Option<JsonValue> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    serde_json::from_str(&text[start..=end]).ok()
}
