//! OAuth-specific error types.

use thiserror::Error;

/// Errors that can occur while exchanging an authorization code.
///
/// # Example
///
/// ```rust
/// use clickup_api::auth::oauth::OAuthError;
///
/// let error = OAuthError::TokenExchangeFailed {
///     status: 400,
///     message: "Code already used".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "OAuth token exchange failed with status 400: Code already used"
/// );
/// ```
#[derive(Debug, Error)]
pub enum OAuthError {
    /// ClickUp rejected the client id, client secret or code (HTTP 401).
    #[error("OAuth token exchange failed: {message}")]
    InvalidCredentials {
        /// The message reported by ClickUp.
        message: String,
    },

    /// The token endpoint returned another error status, or a body without
    /// an access token.
    #[error("OAuth token exchange failed with status {status}: {message}")]
    TokenExchangeFailed {
        /// The HTTP status code returned.
        status: u16,
        /// The message reported by ClickUp, or a description of the bad body.
        message: String,
    },

    /// The token endpoint could not be reached.
    #[error("OAuth token exchange request failed: {0}")]
    Http(#[from] reqwest::Error),
}

// Verify OAuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OAuthError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_credentials_message() {
        let error = OAuthError::InvalidCredentials {
            message: "Client secret invalid".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "OAuth token exchange failed: Client secret invalid"
        );
    }

    #[test]
    fn test_oauth_error_implements_std_error() {
        let error: &dyn std::error::Error = &OAuthError::TokenExchangeFailed {
            status: 500,
            message: "boom".to_string(),
        };
        assert!(error.source().is_none());
    }
}
