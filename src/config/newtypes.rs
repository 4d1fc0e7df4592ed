//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated ClickUp API token.
///
/// ClickUp accepts either a personal token (`pk_...`) or an OAuth access token.
/// The value is sent verbatim in the `Authorization` header, so callers must
/// supply exactly what the API expects. No `Bearer ` prefix is added.
///
/// # Security
///
/// The `Debug` implementation masks the token, displaying only
/// `ApiToken(*****)`.
///
/// # Example
///
/// ```rust
/// use clickup_api::ApiToken;
///
/// let token = ApiToken::new("pk_12345_ABCDEF").unwrap();
/// assert_eq!(token.as_ref(), "pk_12345_ABCDEF");
/// assert_eq!(format!("{:?}", token), "ApiToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Creates a new validated API token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiToken`] if the token is empty or whitespace.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyApiToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for ApiToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(*****)")
    }
}

/// A validated base URL for the ClickUp REST API.
///
/// Trailing slashes are trimmed on construction so that joining a relative
/// path always produces exactly one `/` separator.
///
/// # Example
///
/// ```rust
/// use clickup_api::BaseUrl;
///
/// let url = BaseUrl::new("https://api.clickup.com/api/v2/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.clickup.com/api/v2");
/// assert_eq!(url.join("/task/42"), "https://api.clickup.com/api/v2/task/42");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// The documented REST root of the ClickUp API.
    pub const DEFAULT: &'static str = "https://api.clickup.com/api/v2";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no `http`/`https`
    /// scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');

        let rest = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"))
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
        if host.is_empty() || host.starts_with(':') {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Joins a relative endpoint path onto this base URL with exactly one `/`.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.0, path.trim_start_matches('/'))
    }

    /// Returns this URL with its trailing `/v<N>` segment replaced by
    /// `/{version}`. A URL without a version segment gets one appended.
    #[must_use]
    pub fn with_version(&self, version: &str) -> Self {
        let root = match self.0.rsplit_once('/') {
            Some((root, last))
                if last.len() > 1
                    && last.starts_with('v')
                    && last[1..].bytes().all(|b| b.is_ascii_digit()) =>
            {
                root
            }
            _ => self.0.as_str(),
        };
        Self(format!("{root}/{version}"))
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
