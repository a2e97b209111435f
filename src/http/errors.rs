//! Non-2xx response classification.
//!
//! Fineract reports failures through a JSON envelope:
//!
//! ```json
//! {
//!   "developerMessage": "...",
//!   "httpStatusCode": "403",
//!   "defaultUserMessage": "...",
//!   "errors": [{ "defaultUserMessage": "...", "developerMessage": "..." }]
//! }
//! ```
//!
//! The classifier prefers the most user-facing message available, falling
//! back to the HTTP reason phrase.

use reqwest::header::HeaderMap;

use crate::error::FineractError;

/// Map a non-2xx response into a [`FineractError`].
pub fn classify_http_error(
    status: u16,
    body: &str,
    _headers: &HeaderMap,
    fallback_reason: Option<&str>,
) -> FineractError {
    let details: Option<serde_json::Value> = serde_json::from_str(body).ok();

    let message = details
        .as_ref()
        .and_then(envelope_message)
        .or_else(|| fallback_reason.map(str::to_string))
        .unwrap_or_else(|| format!("HTTP {status}"));

    if status == 401 {
        return FineractError::Authentication(message);
    }

    FineractError::Api {
        code: status,
        message,
        details,
    }
}

fn envelope_message(envelope: &serde_json::Value) -> Option<String> {
    let direct = envelope
        .get("defaultUserMessage")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty());
    if let Some(msg) = direct {
        return Some(msg.to_string());
    }

    let nested = envelope
        .get("errors")
        .and_then(|v| v.as_array())
        .and_then(|errors| errors.first())
        .and_then(|first| {
            first
                .get("defaultUserMessage")
                .or_else(|| first.get("developerMessage"))
        })
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty());
    if let Some(msg) = nested {
        return Some(msg.to_string());
    }

    envelope
        .get("developerMessage")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
