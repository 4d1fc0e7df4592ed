//! Configuration types for the ClickUp API client.
//!
//! This module provides the configuration used to construct a client session:
//! credentials, the REST root, transport timeout and the retry/rate-limit policy.
//!
//! # Overview
//!
//! - [`ClickUpConfig`]: The configuration struct holding all session settings
//! - [`ClickUpConfigBuilder`]: A builder for constructing [`ClickUpConfig`] instances
//! - [`ApiToken`]: A validated API token with masked debug output
//! - [`BaseUrl`]: A validated REST root URL
//!
//! # Example
//!
//! ```rust
//! use clickup_api::{ApiToken, ClickUpConfig};
//! use std::time::Duration;
//!
//! let config = ClickUpConfig::builder()
//!     .api_token(ApiToken::new("pk_123").unwrap())
//!     .max_retries(5)
//!     .retry_delay(Duration::from_millis(500))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.max_retries(), 5);
//! ```

mod newtypes;

pub use newtypes::{ApiToken, BaseUrl};

use std::time::Duration;

use crate::error::ConfigError;

/// Environment variable holding the API token for [`ClickUpConfig::from_env`].
pub const TOKEN_ENV_VAR: &str = "CLICKUP_API_TOKEN";

/// Environment variable overriding the base URL for [`ClickUpConfig::from_env`].
pub const BASE_URL_ENV_VAR: &str = "CLICKUP_BASE_URL";

/// Configuration for a ClickUp client session.
///
/// # Thread Safety
///
/// `ClickUpConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Defaults
///
/// | setting | default |
/// |---|---|
/// | `base_url` | `https://api.clickup.com/api/v2` |
/// | `timeout` | 30 seconds (per HTTP attempt) |
/// | `max_retries` | 3 |
/// | `retry_delay` | 1 second |
/// | `retry_rate_limited_requests` | `true` |
/// | `rate_limit_buffer` | 5 seconds |
#[derive(Clone, Debug)]
pub struct ClickUpConfig {
    api_token: ApiToken,
    base_url: BaseUrl,
    timeout: Duration,
    max_retries: u32,
    retry_delay: Duration,
    retry_rate_limited_requests: bool,
    rate_limit_buffer: Duration,
    user_agent_prefix: Option<String>,
}

impl ClickUpConfig {
    /// Default per-attempt transport timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
    /// Default maximum number of retries for one logical request.
    pub const DEFAULT_MAX_RETRIES: u32 = 3;
    /// Default base retry delay.
    pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);
    /// Default safety buffer added to the server-declared reset time.
    pub const DEFAULT_RATE_LIMIT_BUFFER: Duration = Duration::from_secs(5);

    /// Creates a new builder for constructing a `ClickUpConfig`.
    #[must_use]
    pub fn builder() -> ClickUpConfigBuilder {
        ClickUpConfigBuilder::new()
    }

    /// Builds a configuration from the process environment.
    ///
    /// Reads the token from `CLICKUP_API_TOKEN` and, when set, the base URL
    /// from `CLICKUP_BASE_URL`. All other settings use their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if the token variable is unset,
    /// or the validation error of the offending value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let token = std::env::var(TOKEN_ENV_VAR)
            .map_err(|_| ConfigError::MissingEnvVar { name: TOKEN_ENV_VAR })?;

        let mut builder = Self::builder().api_token(ApiToken::new(token)?);
        if let Ok(url) = std::env::var(BASE_URL_ENV_VAR) {
            builder = builder.base_url(BaseUrl::new(url)?);
        }
        builder.build()
    }

    /// Returns the API token.
    #[must_use]
    pub const fn api_token(&self) -> &ApiToken {
        &self.api_token
    }

    /// Returns the REST root URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the per-attempt transport timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the maximum number of retries for one logical request.
    #[must_use]
    pub const fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Returns the base retry delay.
    ///
    /// Transport failures back off exponentially from this value; it is also the
    /// fallback wait for a 429 response without a `Retry-After` header.
    #[must_use]
    pub const fn retry_delay(&self) -> Duration {
        self.retry_delay
    }

    /// Returns whether 429 responses are retried automatically.
    #[must_use]
    pub const fn retry_rate_limited_requests(&self) -> bool {
        self.retry_rate_limited_requests
    }

    /// Returns the safety buffer added to the rate-limit reset time.
    #[must_use]
    pub const fn rate_limit_buffer(&self) -> Duration {
        self.rate_limit_buffer
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify ClickUpConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClickUpConfig>();
};

/// Builder for constructing [`ClickUpConfig`] instances.
///
/// `api_token` is required; every other field has a default (see
/// [`ClickUpConfig`]).
///
/// # Example
///
/// ```rust
/// use clickup_api::{ApiToken, BaseUrl, ClickUpConfig};
/// use std::time::Duration;
///
/// let config = ClickUpConfig::builder()
///     .api_token(ApiToken::new("pk_123").unwrap())
///     .base_url(BaseUrl::new("http://localhost:9000/api/v2").unwrap())
///     .timeout(Duration::from_secs(10))
///     .retry_rate_limited_requests(false)
///     .rate_limit_buffer(Duration::from_secs(1))
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
///
/// assert!(!config.retry_rate_limited_requests());
/// ```
#[derive(Debug, Default)]
pub struct ClickUpConfigBuilder {
    api_token: Option<ApiToken>,
    base_url: Option<BaseUrl>,
    timeout: Option<Duration>,
    max_retries: Option<u32>,
    retry_delay: Option<Duration>,
    retry_rate_limited_requests: Option<bool>,
    rate_limit_buffer: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl ClickUpConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API token (required).
    #[must_use]
    pub fn api_token(mut self, token: ApiToken) -> Self {
        self.api_token = Some(token);
        self
    }

    /// Sets the REST root URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the per-attempt transport timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the maximum number of retries for one logical request.
    #[must_use]
    pub const fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// Sets the base retry delay.
    #[must_use]
    pub const fn retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = Some(delay);
        self
    }

    /// Sets whether 429 responses are retried automatically.
    #[must_use]
    pub const fn retry_rate_limited_requests(mut self, retry: bool) -> Self {
        self.retry_rate_limited_requests = Some(retry);
        self
    }

    /// Sets the safety buffer added to the server-declared reset time.
    #[must_use]
    pub const fn rate_limit_buffer(mut self, buffer: Duration) -> Self {
        self.rate_limit_buffer = Some(buffer);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ClickUpConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_token` is not set.
    pub fn build(self) -> Result<ClickUpConfig, ConfigError> {
        let api_token = self
            .api_token
            .ok_or(ConfigError::MissingRequiredField { field: "api_token" })?;

        Ok(ClickUpConfig {
            api_token,
            base_url: self.base_url.unwrap_or_default(),
            timeout: self.timeout.unwrap_or(ClickUpConfig::DEFAULT_TIMEOUT),
            max_retries: self
                .max_retries
                .unwrap_or(ClickUpConfig::DEFAULT_MAX_RETRIES),
            retry_delay: self
                .retry_delay
                .unwrap_or(ClickUpConfig::DEFAULT_RETRY_DELAY),
            retry_rate_limited_requests: self.retry_rate_limited_requests.unwrap_or(true),
            rate_limit_buffer: self
                .rate_limit_buffer
                .unwrap_or(ClickUpConfig::DEFAULT_RATE_LIMIT_BUFFER),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_api_token() {
        let result = ClickUpConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_token" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = ClickUpConfig::builder()
            .api_token(ApiToken::new("pk_1").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), BaseUrl::DEFAULT);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.max_retries(), 3);
        assert_eq!(config.retry_delay(), Duration::from_secs(1));
        assert!(config.retry_rate_limited_requests());
        assert_eq!(config.rate_limit_buffer(), Duration::from_secs(5));
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = ClickUpConfig::builder()
            .api_token(ApiToken::new("pk_1").unwrap())
            .base_url(BaseUrl::new("http://127.0.0.1:1234/api/v2").unwrap())
            .timeout(Duration::from_secs(2))
            .max_retries(0)
            .retry_delay(Duration::from_millis(10))
            .retry_rate_limited_requests(false)
            .rate_limit_buffer(Duration::ZERO)
            .user_agent_prefix("Tests/1.0")
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), "http://127.0.0.1:1234/api/v2");
        assert_eq!(config.timeout(), Duration::from_secs(2));
        assert_eq!(config.max_retries(), 0);
        assert_eq!(config.retry_delay(), Duration::from_millis(10));
        assert!(!config.retry_rate_limited_requests());
        assert_eq!(config.rate_limit_buffer(), Duration::ZERO);
        assert_eq!(config.user_agent_prefix(), Some("Tests/1.0"));
    }

    #[test]
    fn test_config_debug_does_not_leak_token() {
        let config = ClickUpConfig::builder()
            .api_token(ApiToken::new("pk_very_secret").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("ClickUpConfig"));
        assert!(!debug_str.contains("pk_very_secret"));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ClickUpConfig>();
    }
}
