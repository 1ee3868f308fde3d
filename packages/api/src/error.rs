//! Normalized API failures.
//!
//! Backends disagree on error bodies (`{"message": ..}`, `{"error": ..}`,
//! `{"detail": [{"msg": ..}]}`, `{"errors": {"field": [..]}}`, plain text).
//! [`ApiError::from_response`] folds them all into one human-readable message.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("invalid API URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Build the error for a non-2xx response from its status and raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = extract_message(body).unwrap_or_else(|| reason(status));
        if status == StatusCode::UNAUTHORIZED.as_u16() {
            ApiError::Unauthorized(message)
        } else {
            ApiError::Status { status, message }
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Unauthorized(_) => Some(StatusCode::UNAUTHORIZED.as_u16()),
            _ => None,
        }
    }

    /// Banner text for a failed `action` ("load appointments", "save record").
    /// Transport and parse failures stay generic.
    pub fn user_message(&self, action: &str) -> String {
        match self {
            ApiError::Network(_) | ApiError::Decode(_) | ApiError::InvalidUrl(_) => {
                format!("Failed to {action}")
            }
            ApiError::Unauthorized(message) | ApiError::Status { message, .. } => {
                format!("Failed to {action}: {message}")
            }
        }
    }
}

fn reason(status: u16) -> String {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {status}"))
}

fn extract_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(body) {
        Ok(value) => message_from_json(&value),
        // Plain-text bodies are used as-is unless they look like an HTML page.
        Err(_) if body.len() <= 200 && !body.starts_with('<') => Some(body.to_string()),
        Err(_) => None,
    }
}

fn message_from_json(value: &Value) -> Option<String> {
    if let Some(s) = value.as_str() {
        return non_empty(s);
    }
    for key in ["message", "error", "detail"] {
        if let Some(found) = value.get(key).and_then(flatten) {
            return Some(found);
        }
    }
    let errors = value.get("errors")?.as_object()?;
    let joined: Vec<String> = errors.values().filter_map(flatten).collect();
    non_empty(&joined.join("; "))
}

fn flatten(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => non_empty(s),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(flatten).collect();
            non_empty(&parts.join("; "))
        }
        Value::Object(map) => ["msg", "message"]
            .iter()
            .find_map(|k| map.get(*k).and_then(flatten)),
        _ => None,
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_keys() {
        assert_eq!(
            ApiError::from_response(400, r#"{"message":"Slot taken"}"#).to_string(),
            "Slot taken"
        );
        assert_eq!(
            ApiError::from_response(409, r#"{"error":"Duplicate phone"}"#).to_string(),
            "Duplicate phone"
        );
        assert_eq!(
            ApiError::from_response(422, r#"{"detail":[{"msg":"field required"},{"msg":"bad date"}]}"#)
                .to_string(),
            "field required; bad date"
        );
        assert_eq!(
            ApiError::from_response(422, r#"{"errors":{"email":["taken"],"name":["too long"]}}"#)
                .to_string(),
            "taken; too long"
        );
    }

    #[test]
    fn test_fallback_to_reason_phrase() {
        assert_eq!(ApiError::from_response(404, "").to_string(), "Not Found");
        assert_eq!(
            ApiError::from_response(502, "<html><body>Bad gateway</body></html>").to_string(),
            "Bad Gateway"
        );
        assert_eq!(ApiError::from_response(500, "{}").to_string(), "Internal Server Error");
        assert_eq!(ApiError::from_response(503, "try later").to_string(), "try later");
    }

    #[test]
    fn test_unauthorized_is_distinguished() {
        let err = ApiError::from_response(401, r#"{"message":"Token expired"}"#);
        assert!(err.is_unauthorized());
        assert_eq!(err.status(), Some(401));
        assert!(!ApiError::from_response(403, "").is_unauthorized());
    }

    #[test]
    fn test_user_message() {
        let err = ApiError::from_response(400, r#"{"message":"Slot taken"}"#);
        assert_eq!(err.user_message("save appointment"), "Failed to save appointment: Slot taken");
        assert_eq!(
            ApiError::Network("connection refused".into()).user_message("load appointments"),
            "Failed to load appointments"
        );
    }
}
