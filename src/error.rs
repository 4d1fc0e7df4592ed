//! Error types for the ClickUp API client.
//!
//! This module contains error types used throughout the crate for configuration
//! and validation errors. Errors raised while talking to the remote API live in
//! [`crate::clients::ClickUpError`].
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use clickup_api::{ApiToken, ConfigError};
//!
//! let result = ApiToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiToken)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API token cannot be empty.
    #[error("API token cannot be empty. Please provide a ClickUp personal token or OAuth access token.")]
    EmptyApiToken,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a URL with an http or https scheme (e.g., 'https://api.clickup.com/api/v2').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A required environment variable is not set.
    #[error("Environment variable '{name}' is not set.")]
    MissingEnvVar {
        /// The name of the environment variable.
        name: &'static str,
    },

    /// The underlying HTTP transport could not be created.
    #[error("Failed to create HTTP client: {reason}")]
    HttpClientBuild {
        /// The reason reported by the transport.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_token_error_message() {
        let error = ConfigError::EmptyApiToken;
        let message = error.to_string();
        assert!(message.contains("API token cannot be empty"));
    }

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "ftp://nope".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("ftp://nope"));
        assert!(message.contains("http or https"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "api_token" };
        let message = error.to_string();
        assert!(message.contains("api_token"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_missing_env_var_names_variable() {
        let error = ConfigError::MissingEnvVar {
            name: "CLICKUP_API_TOKEN",
        };
        assert_eq!(
            error.to_string(),
            "Environment variable 'CLICKUP_API_TOKEN' is not set."
        );
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyApiToken;
        let _: &dyn std::error::Error = &error;
    }
}
