//! Upstream error-body inspection.

use serde_json::Value;

/// Longest raw body slice echoed back when no structured message is found.
const RAW_BODY_LIMIT: usize = 200;

/// Pull a human-readable message out of a provider error body.
///
/// Handles the `{"error": {"message": ...}}` shape used by the chat
/// completions family, plain `{"error": "..."}` and `{"message": "..."}`
/// bodies, and Gemini's `promptFeedback.blockReason`. Falls back to a
/// truncated slice of the raw body.
pub fn error_message(body: &str) -> String {
    let Ok(payload) = serde_json::from_str::<Value>(body) else {
        return raw_fallback(body);
    };

    if let Some(reason) = payload
        .pointer("/promptFeedback/blockReason")
        .and_then(Value::as_str)
    {
        return format!("content blocked: {}", reason.replace('_', " ").to_lowercase());
    }

    match payload.get("error") {
        Some(Value::String(message)) => message.clone(),
        Some(Value::Object(map)) => {
            if let Some(Value::String(message)) = map.get("message") {
                message.clone()
            } else if let Some(Value::String(kind)) = map.get("type") {
                kind.clone()
            } else {
                Value::Object(map.clone()).to_string()
            }
        }
        _ => match payload.get("message") {
            Some(Value::String(message)) => message.clone(),
            _ => raw_fallback(body),
        },
    }
}

fn raw_fallback(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "empty response body".to_string();
    }
    let mut end = trimmed.len().min(RAW_BODY_LIMIT);
    while !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    trimmed[..end].to_string()
}
