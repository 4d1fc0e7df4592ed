//! Request dispatcher for ClickUp API communication.
//!
//! This module provides the [`HttpClient`] type, which turns a logical
//! [`HttpRequest`] into one or more HTTP attempts with authentication,
//! pre-flight rate-limit throttling, retry with backoff and typed error
//! translation.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use chrono::Utc;
use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use serde_json::{json, Value};

use crate::clients::errors::{ApiErrorDetails, ClickUpError};
use crate::clients::http_request::{ApiVersion, HttpMethod, HttpRequest};
use crate::clients::http_response::{HttpResponse, RateLimitInfo};
use crate::clients::rate_limit::RateLimitState;
use crate::clients::sleeper::{Sleeper, TokioSleeper};
use crate::config::{ApiToken, BaseUrl, ClickUpConfig};
use crate::error::ConfigError;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Message of the error returned once 429 responses are no longer retried.
const RATE_LIMIT_EXHAUSTED: &str = "Rate limit exceeded and max retries reached";

/// Returns the current wall-clock time in epoch seconds.
#[allow(clippy::cast_precision_loss)]
fn epoch_seconds() -> f64 {
    Utc::now().timestamp_millis() as f64 / 1000.0
}

/// HTTP client that dispatches requests to the ClickUp API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - The `Authorization` header (the token is sent verbatim)
/// - Pre-flight throttling when the rate limit budget runs low
/// - Retries for 429 responses and transport failures
/// - Translation of error statuses into [`ClickUpError`]
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`. Share one instance via `Arc` so that all
/// tasks see the same rate-limit state and connection pool.
///
/// # Example
///
/// ```rust,ignore
/// use clickup_api::clients::{HttpClient, HttpMethod, HttpRequest};
/// use clickup_api::{ApiToken, ClickUpConfig};
///
/// let config = ClickUpConfig::builder()
///     .api_token(ApiToken::new("pk_123")?)
///     .build()?;
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "team").build()?;
/// let teams = client.execute(&request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client (connection pool).
    client: reqwest::Client,
    /// REST root every path is joined onto.
    base_url: BaseUrl,
    /// Token sent in the `Authorization` header.
    api_token: ApiToken,
    /// Headers added to every JSON request.
    default_headers: HashMap<String, String>,
    max_retries: u32,
    retry_delay: Duration,
    retry_rate_limited_requests: bool,
    rate_limit_buffer: Duration,
    /// Last observed rate limit window. Never locked across an `.await`.
    rate_limit: Mutex<RateLimitState>,
    sleeper: Arc<dyn Sleeper>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new dispatcher from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the underlying transport
    /// cannot be created (e.g., TLS initialization failure).
    pub fn new(config: &ClickUpConfig) -> Result<Self, ConfigError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}ClickUp API Library v{SDK_VERSION} | Rust");

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .user_agent(user_agent)
            .build()
            .map_err(|e| ConfigError::HttpClientBuild {
                reason: e.to_string(),
            })?;

        let mut default_headers = HashMap::new();
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
            api_token: config.api_token().clone(),
            default_headers,
            max_retries: config.max_retries(),
            retry_delay: config.retry_delay(),
            retry_rate_limited_requests: config.retry_rate_limited_requests(),
            rate_limit_buffer: config.rate_limit_buffer(),
            rate_limit: Mutex::new(RateLimitState::new(epoch_seconds())),
            sleeper: Arc::new(TokioSleeper),
        })
    }

    /// Replaces the sleeper used for throttling and retry backoff.
    #[must_use]
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the headers added to every JSON request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns a snapshot of the current rate-limit state.
    #[must_use]
    pub fn rate_limit_state(&self) -> RateLimitState {
        *self
            .rate_limit
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Dispatches a logical request and returns the parsed JSON body.
    ///
    /// Returns `{}` for `204 No Content` and for 2xx responses with an empty
    /// body. Any other successful body is returned unmodified; unwrapping
    /// envelopes is left to the caller.
    ///
    /// # Retry Behavior
    ///
    /// 429 responses and transport failures share one attempt counter, so a
    /// logical request makes at most `max_retries + 1` HTTP calls.
    ///
    /// - **429**: waits `Retry-After` seconds (or the base retry delay), then
    ///   re-checks the throttle before sending again. Only when
    ///   `retry_rate_limited_requests` is enabled.
    /// - **Transport failure**: waits `retry_delay * 2^attempt`, then resends
    ///   without re-checking the throttle.
    /// - **404 and every other error status**: never retried.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if:
    /// - The request fails validation (`InvalidRequest`)
    /// - The server answers with an error status (`NotFound`, `Authentication`,
    ///   `Validation`, `RateLimitExceeded`, `Api`)
    /// - The transport fails after all retries (`Transport`)
    /// - A successful body is not valid JSON (`Decode`)
    pub async fn execute(&self, request: &HttpRequest) -> Result<Value, ClickUpError> {
        request.verify()?;

        let url = match request.api_version {
            ApiVersion::V2 => self.base_url.join(&request.path),
            version => self.base_url.with_version(version.as_str()).join(&request.path),
        };
        let mut attempt: u32 = 0;

        'throttled: loop {
            self.throttle().await;

            loop {
                tracing::debug!(
                    method = %request.http_method,
                    url = %url,
                    attempt,
                    "Dispatching ClickUp request"
                );

                let response = match self.send_once(&url, request).await {
                    Ok(response) => response,
                    Err(error) => {
                        if attempt >= self.max_retries {
                            return Err(ClickUpError::Transport {
                                retries: attempt,
                                source: error,
                            });
                        }
                        let backoff = self
                            .retry_delay
                            .saturating_mul(2u32.saturating_pow(attempt));
                        tracing::warn!(
                            error = %error,
                            backoff_secs = backoff.as_secs_f64(),
                            attempt,
                            "Request to {} failed, retrying",
                            request.path
                        );
                        self.sleeper.sleep(backoff).await;
                        attempt += 1;
                        continue;
                    }
                };

                self.update_rate_limit(&response.rate_limit);

                match response.code {
                    404 => {
                        let message = Self::error_message(&response)
                            .unwrap_or_else(|| format!("Resource not found: {}", request.path));
                        return Err(ClickUpError::NotFound(Self::details(message, &response)));
                    }
                    429 => {
                        if self.retry_rate_limited_requests && attempt < self.max_retries {
                            let wait = response
                                .retry_after
                                .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
                                .unwrap_or(self.retry_delay);
                            tracing::warn!(
                                retry_after_secs = wait.as_secs_f64(),
                                attempt,
                                "Rate limited on {}, retrying",
                                request.path
                            );
                            self.sleeper.sleep(wait).await;
                            attempt += 1;
                            continue 'throttled;
                        }
                        return Err(ClickUpError::RateLimitExceeded(Self::details(
                            RATE_LIMIT_EXHAUSTED.to_string(),
                            &response,
                        )));
                    }
                    code if code >= 400 => return Err(Self::status_error(&response)),
                    204 => return Ok(json!({})),
                    _ => {
                        return response.json().map_err(|e| ClickUpError::Decode {
                            message: format!("invalid JSON body from {}", request.path),
                            source: Some(e),
                        });
                    }
                }
            }
        }
    }

    /// Sleeps until the rate limit window resets when the budget is low.
    async fn throttle(&self) {
        let delay = self
            .rate_limit_state()
            .throttle_delay(epoch_seconds(), self.rate_limit_buffer);

        if let Some(delay) = delay {
            tracing::info!(
                wait_secs = delay.as_secs_f64(),
                "Rate limit nearly exhausted, waiting for reset"
            );
            self.sleeper.sleep(delay).await;
        }
    }

    fn update_rate_limit(&self, info: &RateLimitInfo) {
        if info.is_empty() {
            return;
        }
        self.rate_limit
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .update(info);
    }

    /// Performs a single HTTP attempt.
    async fn send_once(
        &self,
        url: &str,
        request: &HttpRequest,
    ) -> Result<HttpResponse, reqwest::Error> {
        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
            HttpMethod::Put => self.client.put(url),
            HttpMethod::Delete => self.client.delete(url),
        };

        req_builder = req_builder.header(AUTHORIZATION, self.api_token.as_ref());

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(file) = &request.file {
            // reqwest sets the multipart Content-Type with its boundary
            let part = Part::bytes(file.bytes.clone()).file_name(file.file_name.clone());
            req_builder = req_builder.multipart(Form::new().part(file.field_name.clone(), part));
        } else {
            for (key, value) in &self.default_headers {
                req_builder = req_builder.header(key, value);
            }
            if let Some(body) = &request.body {
                req_builder = req_builder.body(body.to_string());
            }
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let text = res.text().await?;

        Ok(HttpResponse::new(code, headers, text))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Returns the `err` field of an error body, if any.
    fn error_message(response: &HttpResponse) -> Option<String> {
        response
            .error_payload()
            .get("err")
            .and_then(Value::as_str)
            .map(String::from)
    }

    fn details(message: String, response: &HttpResponse) -> ApiErrorDetails {
        ApiErrorDetails::new(message, Some(response.code)).with_payload(response.error_payload())
    }

    /// Maps an error status other than 404 and 429 to its error variant.
    fn status_error(response: &HttpResponse) -> ClickUpError {
        let message =
            Self::error_message(response).unwrap_or_else(|| format!("HTTP {}", response.code));
        let details = Self::details(message, response);

        match response.code {
            401 => ClickUpError::Authentication(details),
            400 => ClickUpError::Validation(details),
            _ => ClickUpError::Api(details),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ClickUpConfig {
        ClickUpConfig::builder()
            .api_token(ApiToken::new("pk_test_token").unwrap())
            .build()
            .unwrap()
    }

    fn response(code: u16, body: &str) -> HttpResponse {
        HttpResponse::new(code, HashMap::new(), body.to_string())
    }

    #[test]
    fn test_client_stores_base_url() {
        let client = HttpClient::new(&test_config()).unwrap();
        assert_eq!(client.base_url().as_ref(), "https://api.clickup.com/api/v2");
    }

    #[test]
    fn test_default_headers_are_json() {
        let client = HttpClient::new(&test_config()).unwrap();
        let headers = client.default_headers();

        assert_eq!(headers.get("Accept"), Some(&"application/json".to_string()));
        assert_eq!(
            headers.get("Content-Type"),
            Some(&"application/json".to_string())
        );
        assert!(!headers.contains_key("Authorization"));
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let client = HttpClient::new(&test_config()).unwrap();
        let debug = format!("{:?}", client);
        assert!(!debug.contains("pk_test_token"));
    }

    #[test]
    fn test_initial_rate_limit_state() {
        let client = HttpClient::new(&test_config()).unwrap();
        let state = client.rate_limit_state();
        assert_eq!(state.remaining, RateLimitState::INITIAL_REMAINING);
        assert!((state.reset - epoch_seconds()).abs() < 5.0);
    }

    #[test]
    fn test_update_rate_limit_ignores_empty_info() {
        let client = HttpClient::new(&test_config()).unwrap();
        let before = client.rate_limit_state();
        client.update_rate_limit(&RateLimitInfo::default());
        assert_eq!(client.rate_limit_state(), before);

        client.update_rate_limit(&RateLimitInfo {
            remaining: Some(7),
            reset: None,
        });
        assert_eq!(client.rate_limit_state().remaining, 7);
    }

    #[test]
    fn test_status_error_mapping() {
        assert!(matches!(
            HttpClient::status_error(&response(401, r#"{"err":"Token invalid"}"#)),
            ClickUpError::Authentication(_)
        ));
        assert!(matches!(
            HttpClient::status_error(&response(400, "{}")),
            ClickUpError::Validation(_)
        ));
        assert!(matches!(
            HttpClient::status_error(&response(403, "{}")),
            ClickUpError::Api(_)
        ));
        assert!(matches!(
            HttpClient::status_error(&response(503, "")),
            ClickUpError::Api(_)
        ));
    }

    #[test]
    fn test_status_error_message_prefers_err_field() {
        let error = HttpClient::status_error(&response(401, r#"{"err":"Token invalid"}"#));
        assert_eq!(error.details().unwrap().message, "Token invalid");

        let error = HttpClient::status_error(&response(500, "oops"));
        assert_eq!(error.details().unwrap().message, "HTTP 500");
        assert!(error.payload().unwrap().is_empty());
    }
}
