use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Error code the backend uses to signal an invalidated bearer token.
pub const EXPIRED_TOKEN_CODE: &str = "EXPIRED_TOKEN";

/// One entry of the backend's structured error list.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BackendError {
    pub code: String,
    #[serde(default)]
    pub message: String,
}

/// Error body shape: `{"errors": [{"code", "message"}]}`.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct ErrorBody {
    #[serde(default)]
    pub errors: Vec<BackendError>,
}

impl ErrorBody {
    /// Tolerant parse: anything that is not a well-formed error list is
    /// treated as an empty one.
    pub fn from_payload(payload: &str) -> Self {
        serde_json::from_str(payload).unwrap_or_default()
    }

    pub fn has_expired_token(&self) -> bool {
        self.errors.iter().any(|e| e.code == EXPIRED_TOKEN_CODE)
    }
}

/// True iff the raw error payload carries an error list where some entry's
/// code is `EXPIRED_TOKEN`. Malformed or absent lists are not expiry.
pub fn is_token_expired_payload(payload: &str) -> bool {
    ErrorBody::from_payload(payload).has_expired_token()
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// The bearer token was rejected as expired; the session must be
    /// invalidated and the user sent back through login.
    #[error("session expired; log in again")]
    SessionExpired,

    /// An authorized call was attempted without a token.
    #[error("not logged in")]
    NotAuthenticated,

    /// Any other non-success response from the backend.
    #[error("backend returned {status}: {message}")]
    Backend {
        status: StatusCode,
        message: String,
        errors: Vec<BackendError>,
    },

    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ApiError {
    pub fn is_session_expired(&self) -> bool {
        matches!(self, ApiError::SessionExpired)
    }

    /// Classify a failed response: expiry is detected structurally, anything
    /// else becomes a terminal `Backend` error (no retries).
    pub async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status();
        let payload = response.text().await.unwrap_or_default();
        let body = ErrorBody::from_payload(&payload);
        if body.has_expired_token() {
            return ApiError::SessionExpired;
        }
        let message = body
            .errors
            .first()
            .map(|e| e.message.clone())
            .filter(|m| !m.is_empty())
            .unwrap_or(payload);
        ApiError::Backend {
            status,
            message,
            errors: body.errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_expired_token_code() {
        let payload = r#"{"errors": [{"code": "EXPIRED_TOKEN", "message": "token expired"}]}"#;
        assert!(is_token_expired_payload(payload));
    }

    #[test]
    fn detects_expired_token_among_others() {
        let payload = r#"{"errors": [
            {"code": "SOMETHING_ELSE", "message": "nope"},
            {"code": "EXPIRED_TOKEN", "message": "token expired"}
        ]}"#;
        assert!(is_token_expired_payload(payload));
    }

    #[test]
    fn other_codes_are_not_expiry() {
        let payload = r#"{"errors": [{"code": "NOT_FOUND", "message": "no such movie"}]}"#;
        assert!(!is_token_expired_payload(payload));
    }

    #[test]
    fn malformed_payloads_are_not_expiry() {
        assert!(!is_token_expired_payload(""));
        assert!(!is_token_expired_payload("not json"));
        assert!(!is_token_expired_payload("{}"));
        assert!(!is_token_expired_payload(r#"{"errors": "EXPIRED_TOKEN"}"#));
        assert!(!is_token_expired_payload(r#"{"errors": []}"#));
        // The sentinel in a message, not a code, must not trigger.
        assert!(!is_token_expired_payload(
            r#"{"errors": [{"code": "X", "message": "EXPIRED_TOKEN"}]}"#
        ));
    }
}
