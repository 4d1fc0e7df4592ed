//! Error types for requests dispatched to the ClickUp API.
//!
//! Every failure of a logical request surfaces as one variant of the closed
//! [`ClickUpError`] enum. Variants that originate from an HTTP error status
//! carry an [`ApiErrorDetails`] with the server's message, the status code and
//! the raw error payload, so callers can branch programmatically.
//!
//! # Error Kinds
//!
//! | kind | variants |
//! |---|---|
//! | [`ErrorKind::Authentication`] | [`ClickUpError::Authentication`] (401) |
//! | [`ErrorKind::NotFound`] | [`ClickUpError::NotFound`] (404) |
//! | [`ErrorKind::Validation`] | [`ClickUpError::Validation`] (400) |
//! | [`ErrorKind::RateLimit`] | [`ClickUpError::RateLimitExceeded`] (429) |
//! | [`ErrorKind::Generic`] | everything else |
//!
//! # Example
//!
//! ```rust,ignore
//! use clickup_api::{ClickUpError, ErrorKind};
//!
//! match client.tasks().get("abc").await {
//!     Ok(task) => println!("{}", task.name),
//!     Err(ClickUpError::NotFound(details)) => println!("gone: {}", details.message),
//!     Err(e) if e.kind() == ErrorKind::RateLimit => println!("slow down"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```

use std::fmt;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::error::ConfigError;

/// The taxonomy an error belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The token was rejected (HTTP 401).
    Authentication,
    /// The requested resource does not exist (HTTP 404).
    NotFound,
    /// The request payload was rejected (HTTP 400).
    Validation,
    /// The rate limit was exceeded and not (or no longer) retried (HTTP 429).
    RateLimit,
    /// Any other failure.
    Generic,
}

/// Details of an error reported by the remote API.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApiErrorDetails {
    /// Human-readable message, taken from the `err` field when present.
    pub message: String,
    /// The HTTP status code of the response.
    pub status: Option<u16>,
    /// The raw error payload returned by the server (empty when unparseable).
    pub payload: Map<String, Value>,
}

impl ApiErrorDetails {
    /// Creates error details with an empty payload.
    #[must_use]
    pub fn new(message: impl Into<String>, status: Option<u16>) -> Self {
        Self {
            message: message.into(),
            status,
            payload: Map::new(),
        }
    }

    /// Attaches a raw server payload.
    #[must_use]
    pub fn with_payload(mut self, payload: Map<String, Value>) -> Self {
        self.payload = payload;
        self
    }

    /// Returns ClickUp's error code (the `ECODE` field), if present.
    #[must_use]
    pub fn error_code(&self) -> Option<&str> {
        self.payload.get("ECODE").and_then(Value::as_str)
    }
}

impl fmt::Display for ApiErrorDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Error returned when a request is rejected before being sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The endpoint path is empty after normalization.
    #[error("Endpoint path cannot be empty.")]
    EmptyPath,

    /// A JSON body and a file upload were both supplied.
    #[error("Cannot send a JSON body together with a file upload.")]
    BodyWithFile,
}

/// Unified error type for every ClickUp API call.
#[derive(Debug, Error)]
pub enum ClickUpError {
    /// The API token was rejected (HTTP 401).
    #[error("Authentication failed: {0}")]
    Authentication(ApiErrorDetails),

    /// The requested resource does not exist (HTTP 404).
    #[error("{0}")]
    NotFound(ApiErrorDetails),

    /// The request payload was rejected (HTTP 400).
    #[error("Validation failed: {0}")]
    Validation(ApiErrorDetails),

    /// The rate limit was exceeded and retries were disabled or exhausted.
    #[error("{0}")]
    RateLimitExceeded(ApiErrorDetails),

    /// Any other HTTP error status.
    #[error("HTTP error: {0}")]
    Api(ApiErrorDetails),

    /// The request could not be completed at the transport level.
    #[error("Request failed after {retries} retries: {source}")]
    Transport {
        /// The number of retries performed before giving up.
        retries: u32,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The response did not have the expected shape.
    #[error("Unexpected response: {message}")]
    Decode {
        /// What was expected.
        message: String,
        /// The underlying JSON error, if any.
        #[source]
        source: Option<serde_json::Error>,
    },

    /// The request failed validation before being sent.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// The client could not be configured.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ClickUpError {
    /// Creates a [`ClickUpError::Decode`] without an underlying JSON error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
            source: None,
        }
    }

    /// Returns the taxonomy this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Authentication(_) => ErrorKind::Authentication,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Validation(_) => ErrorKind::Validation,
            Self::RateLimitExceeded(_) => ErrorKind::RateLimit,
            Self::Api(_)
            | Self::Transport { .. }
            | Self::Decode { .. }
            | Self::InvalidRequest(_)
            | Self::Config(_) => ErrorKind::Generic,
        }
    }

    /// Returns the server-reported details, when the error came from an HTTP status.
    #[must_use]
    pub const fn details(&self) -> Option<&ApiErrorDetails> {
        match self {
            Self::Authentication(d)
            | Self::NotFound(d)
            | Self::Validation(d)
            | Self::RateLimitExceeded(d)
            | Self::Api(d) => Some(d),
            _ => None,
        }
    }

    /// Returns the HTTP status code, when the error came from an HTTP status.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.details().and_then(|d| d.status)
    }

    /// Returns the raw server payload, when the error came from an HTTP status.
    #[must_use]
    pub fn payload(&self) -> Option<&Map<String, Value>> {
        self.details().map(|d| &d.payload)
    }

    /// Returns `true` if repeating the request later may succeed.
    ///
    /// Covers exhausted rate limits, transport failures and 5xx statuses.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::RateLimitExceeded(_) | Self::Transport { .. } => true,
            Self::Api(details) => details.status.is_some_and(|code| code >= 500),
            _ => false,
        }
    }
}

impl From<serde_json::Error> for ClickUpError {
    fn from(error: serde_json::Error) -> Self {
        Self::Decode {
            message: error.to_string(),
            source: Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn details(status: u16) -> ApiErrorDetails {
        ApiErrorDetails::new("Team not authorized", Some(status))
    }

    #[test]
    fn test_kind_maps_each_variant() {
        assert_eq!(
            ClickUpError::Authentication(details(401)).kind(),
            ErrorKind::Authentication
        );
        assert_eq!(ClickUpError::NotFound(details(404)).kind(), ErrorKind::NotFound);
        assert_eq!(
            ClickUpError::Validation(details(400)).kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            ClickUpError::RateLimitExceeded(details(429)).kind(),
            ErrorKind::RateLimit
        );
        assert_eq!(ClickUpError::Api(details(500)).kind(), ErrorKind::Generic);
        assert_eq!(
            ClickUpError::unexpected("missing key").kind(),
            ErrorKind::Generic
        );
        assert_eq!(
            ClickUpError::from(InvalidHttpRequestError::EmptyPath).kind(),
            ErrorKind::Generic
        );
    }

    #[test]
    fn test_status_and_payload_accessors() {
        let payload = json!({"err": "Oauth token not found", "ECODE": "OAUTH_019"});
        let error = ClickUpError::Authentication(
            ApiErrorDetails::new("Oauth token not found", Some(401))
                .with_payload(payload.as_object().unwrap().clone()),
        );

        assert_eq!(error.status(), Some(401));
        assert_eq!(
            error.payload().unwrap().get("ECODE"),
            Some(&json!("OAUTH_019"))
        );
        assert_eq!(error.details().unwrap().error_code(), Some("OAUTH_019"));
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ClickUpError::Api(ApiErrorDetails::new("boom", Some(502))).to_string(),
            "HTTP error: boom"
        );
        assert_eq!(
            ClickUpError::NotFound(ApiErrorDetails::new("Resource not found: task/1", Some(404)))
                .to_string(),
            "Resource not found: task/1"
        );
        assert_eq!(
            ClickUpError::unexpected("missing 'team' key").to_string(),
            "Unexpected response: missing 'team' key"
        );
    }

    #[test]
    fn test_non_http_errors_have_no_status() {
        let error = ClickUpError::unexpected("nope");
        assert!(error.status().is_none());
        assert!(error.payload().is_none());
    }

    #[test]
    fn test_is_retryable() {
        assert!(ClickUpError::RateLimitExceeded(details(429)).is_retryable());
        assert!(ClickUpError::Api(details(503)).is_retryable());
        assert!(!ClickUpError::Api(details(403)).is_retryable());
        assert!(!ClickUpError::NotFound(details(404)).is_retryable());
        assert!(!ClickUpError::Validation(details(400)).is_retryable());
        assert!(!ClickUpError::unexpected("bad shape").is_retryable());
    }

    #[test]
    fn test_from_serde_json_error_keeps_source() {
        let json_error = serde_json::from_str::<Value>("{not json").unwrap_err();
        let error: ClickUpError = json_error.into();
        assert!(matches!(error, ClickUpError::Decode { source: Some(_), .. }));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_invalid_request_messages() {
        assert_eq!(
            InvalidHttpRequestError::EmptyPath.to_string(),
            "Endpoint path cannot be empty."
        );
        assert_eq!(
            InvalidHttpRequestError::BodyWithFile.to_string(),
            "Cannot send a JSON body together with a file upload."
        );
    }
}
