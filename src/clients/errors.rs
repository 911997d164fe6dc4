//! HTTP-specific error types for the Management API client.
//!
//! - [`HttpResponseError`]: Non-2xx responses, decoded from Auth0's error body
//! - [`InvalidHttpRequestError`]: A request that fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use auth0_management::clients::HttpError;
//!
//! match clients.get("abc123", GetParams::default()).await {
//!     Ok(app) => println!("Found: {}", app["name"]),
//!     Err(HttpError::Response(e)) if e.is_not_found() => println!("No such app"),
//!     Err(HttpError::Response(e)) => println!("API error {} ({}): {}", e.code, e.error_code, e.message),
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error code used when the response body carries none.
pub const UNKNOWN_ERROR_CODE: &str = "a0.sdk.internal.unknown";

/// Error returned when the Management API answers with a non-2xx status.
///
/// Auth0 error bodies look like
/// `{"statusCode":404,"error":"Not Found","message":"The client does not exist","errorCode":"inexistent_client"}`.
/// `error_code` prefers `errorCode`, then `error`, then
/// [`UNKNOWN_ERROR_CODE`]. `message` is the body's `message` field, or the
/// raw body text when the response was not JSON.
///
/// # Example
///
/// ```rust
/// use auth0_management::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     error_code: "inexistent_client".to_string(),
///     message: "The client does not exist".to_string(),
/// };
///
/// assert!(error.is_not_found());
/// assert_eq!(error.to_string(), "404: The client does not exist");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The Auth0 error code (e.g. `inexistent_client`).
    pub error_code: String,
    /// The human-readable message from the response body.
    pub message: String,
}

impl HttpResponseError {
    /// Builds an error from a status code and the decoded response body.
    #[must_use]
    pub fn from_body(code: u16, body: &serde_json::Value) -> Self {
        let error_code = body
            .get("errorCode")
            .or_else(|| body.get("error"))
            .and_then(serde_json::Value::as_str)
            .unwrap_or(UNKNOWN_ERROR_CODE)
            .to_string();

        let message = match body {
            serde_json::Value::String(text) => text.clone(),
            _ => body
                .get("message")
                .and_then(serde_json::Value::as_str)
                .unwrap_or_default()
                .to_string(),
        };

        Self {
            code,
            error_code,
            message,
        }
    }

    /// Returns `true` if the remote entity does not exist (HTTP 404).
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        self.code == 404
    }
}

/// Error returned when an HTTP request fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PATCH request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
///
/// This is the `Error` type of [`HttpClient`](crate::clients::HttpClient)'s
/// [`Transport`](crate::clients::Transport) implementation, and therefore
/// what every [`ResourceClient`](crate::management::ResourceClient) call
/// returns when backed by it.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code, if the server answered.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }

    /// Returns `true` if the server reported that the entity does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Response(e) if e.is_not_found())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_body_prefers_error_code() {
        let body = json!({
            "statusCode": 404,
            "error": "Not Found",
            "message": "The client does not exist",
            "errorCode": "inexistent_client"
        });
        let error = HttpResponseError::from_body(404, &body);

        assert_eq!(error.code, 404);
        assert_eq!(error.error_code, "inexistent_client");
        assert_eq!(error.message, "The client does not exist");
    }

    #[test]
    fn test_from_body_falls_back_to_error_field() {
        let body = json!({"statusCode": 400, "error": "Bad Request", "message": "Payload validation error"});
        let error = HttpResponseError::from_body(400, &body);

        assert_eq!(error.error_code, "Bad Request");
        assert_eq!(error.message, "Payload validation error");
    }

    #[test]
    fn test_from_body_without_known_fields() {
        let error = HttpResponseError::from_body(500, &json!({}));

        assert_eq!(error.error_code, UNKNOWN_ERROR_CODE);
        assert_eq!(error.message, "");
    }

    #[test]
    fn test_from_body_plain_text() {
        let error = HttpResponseError::from_body(502, &json!("Bad Gateway"));

        assert_eq!(error.error_code, UNKNOWN_ERROR_CODE);
        assert_eq!(error.message, "Bad Gateway");
    }

    #[test]
    fn test_display_includes_status_and_message() {
        let error = HttpResponseError {
            code: 403,
            error_code: "insufficient_scope".to_string(),
            message: "Insufficient scope, expected any of: read:clients".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "403: Insufficient scope, expected any of: read:clients"
        );
    }

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "patch".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use patch without specifying data.");
    }

    #[test]
    fn test_http_error_helpers() {
        let not_found = HttpError::Response(HttpResponseError::from_body(404, &json!({})));
        assert!(not_found.is_not_found());
        assert_eq!(not_found.status_code(), Some(404));

        let invalid = HttpError::InvalidRequest(InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        });
        assert!(!invalid.is_not_found());
        assert_eq!(invalid.status_code(), None);
    }
}
