//! Client error types

use serde_json::Value;
use thiserror::Error;

use crate::forms::ValidationError;

/// Errors talking to the wellness backend
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Request could not be sent or the response could not be read
    #[error("Network error: {0}")]
    Network(String),

    /// Request could not be built
    #[error("Request error: {0}")]
    Request(String),

    /// Non-2xx response
    #[error("API error {status}: {}", message.as_deref().unwrap_or("no details"))]
    Api { status: u16, message: Option<String> },

    /// 2xx response whose body is not the expected JSON
    #[error("Server error (status {status}): invalid response")]
    InvalidResponse { status: u16 },
}

impl ClientError {
    /// Build an [`ClientError::Api`] from a failed response body
    ///
    /// Recognises `{"detail": "..."}`, `{"message": "..."}` and FastAPI's
    /// validation form `{"detail": [{"msg": "..."}, ...]}`.
    pub fn from_error_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| extract_message(&v));
        ClientError::Api { status, message }
    }

    /// Message supplied by the server, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text for an error toast
    ///
    /// Server-provided messages are used verbatim; unreadable success bodies
    /// report the generic server error; everything else uses `fallback`.
    pub fn toast_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Api {
                message: Some(m), ..
            } => m.clone(),
            ClientError::InvalidResponse { .. } => self.to_string(),
            _ => fallback.to_string(),
        }
    }
}

fn extract_message(body: &Value) -> Option<String> {
    match body.get("detail") {
        Some(Value::String(s)) => return Some(s.clone()),
        Some(Value::Array(items)) => {
            let msgs: Vec<String> = items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.clone()),
                    other => other.get("msg").and_then(Value::as_str).map(str::to_string),
                })
                .collect();
            if !msgs.is_empty() {
                return Some(msgs.join("; "));
            }
        }
        _ => {}
    }

    body.get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Why a create call did not produce a record
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CreateError {
    /// Rejected before any request was sent
    #[error("{0}")]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Client(#[from] ClientError),
}

impl CreateError {
    pub fn toast_message(&self, fallback: &str) -> String {
        match self {
            CreateError::Invalid(e) => e.to_string(),
            CreateError::Client(e) => e.toast_message(fallback),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_string() {
        let err = ClientError::from_error_body(404, r#"{"detail": "Goal not found"}"#);
        assert_eq!(err.server_message(), Some("Goal not found"));
        assert_eq!(err.toast_message("Failed to create goal"), "Goal not found");
    }

    #[test]
    fn test_message_field() {
        let err = ClientError::from_error_body(500, r#"{"message": "database is locked"}"#);
        assert_eq!(err.server_message(), Some("database is locked"));
    }

    #[test]
    fn test_validation_detail_array() {
        let body = r#"{"detail": [
            {"loc": ["body", "mood_level"], "msg": "field required", "type": "value_error.missing"},
            {"loc": ["body", "notes"], "msg": "str type expected", "type": "type_error.str"}
        ]}"#;
        let err = ClientError::from_error_body(422, body);
        assert_eq!(
            err.server_message(),
            Some("field required; str type expected")
        );
    }

    #[test]
    fn test_unparseable_body_falls_back() {
        let err = ClientError::from_error_body(502, "<html>Bad Gateway</html>");
        assert_eq!(err, ClientError::Api { status: 502, message: None });
        assert_eq!(err.to_string(), "API error 502: no details");
        assert_eq!(
            err.toast_message("Failed to save mood entry"),
            "Failed to save mood entry"
        );
    }

    #[test]
    fn test_invalid_response_embeds_status() {
        let err = ClientError::InvalidResponse { status: 200 };
        assert_eq!(
            err.toast_message("Failed to log activity"),
            "Server error (status 200): invalid response"
        );
    }

    #[test]
    fn test_network_uses_fallback() {
        let err = ClientError::Network("connection refused".into());
        assert_eq!(err.toast_message("Failed to log activity"), "Failed to log activity");
    }
}
