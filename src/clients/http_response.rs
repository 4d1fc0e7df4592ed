//! HTTP response types for the ClickUp API client.
//!
//! This module provides the [`HttpResponse`] type, which holds one physical
//! response together with the ClickUp-specific header values parsed from it.

use std::collections::HashMap;

use serde_json::{Map, Value};

/// Rate limit information parsed from `X-RateLimit-*` response headers.
///
/// Each field is `None` when its header is missing or cannot be parsed.
///
/// # Example
///
/// ```rust
/// use clickup_api::clients::RateLimitInfo;
///
/// let info = RateLimitInfo::parse(Some("42"), Some("1700000000.5"));
/// assert_eq!(info.remaining, Some(42));
/// assert_eq!(info.reset, Some(1_700_000_000.5));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RateLimitInfo {
    /// Requests remaining in the current window (`X-RateLimit-Remaining`).
    pub remaining: Option<u32>,
    /// Window reset time in epoch seconds (`X-RateLimit-Reset`).
    pub reset: Option<f64>,
}

impl RateLimitInfo {
    /// Parses the raw header values.
    ///
    /// A negative remaining count is clamped to zero.
    #[must_use]
    pub fn parse(remaining: Option<&str>, reset: Option<&str>) -> Self {
        Self {
            remaining: remaining
                .and_then(|v| v.trim().parse::<i64>().ok())
                .map(|v| u32::try_from(v.max(0)).unwrap_or(u32::MAX)),
            reset: reset
                .and_then(|v| v.trim().parse::<f64>().ok())
                .filter(|v| v.is_finite()),
        }
    }

    /// Returns `true` if neither header was usable.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining.is_none() && self.reset.is_none()
    }
}

/// A single HTTP response from the ClickUp API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub text: String,
    /// Rate limit information from the `X-RateLimit-*` headers.
    pub rate_limit: RateLimitInfo,
    /// Seconds to wait before retrying (from `Retry-After`).
    pub retry_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the ClickUp-specific headers.
    ///
    /// Header names are expected in lowercase.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, text: String) -> Self {
        let first = |name: &str| {
            headers
                .get(name)
                .and_then(|values| values.first())
                .map(String::as_str)
        };

        let rate_limit =
            RateLimitInfo::parse(first("x-ratelimit-remaining"), first("x-ratelimit-reset"));

        let retry_after = first("retry-after")
            .and_then(|value| value.trim().parse::<f64>().ok())
            .filter(|secs| secs.is_finite() && *secs >= 0.0);

        Self {
            code,
            headers,
            text,
            rate_limit,
            retry_after,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Parses the body as JSON.
    ///
    /// An empty body is treated as an empty JSON object.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if the body is not valid JSON.
    pub fn json(&self) -> Result<Value, serde_json::Error> {
        if self.text.trim().is_empty() {
            return Ok(Value::Object(Map::new()));
        }
        serde_json::from_str(&self.text)
    }

    /// Returns the body as an error payload.
    ///
    /// Yields an empty map when the body is not a JSON object.
    #[must_use]
    pub fn error_payload(&self) -> Map<String, Value> {
        match serde_json::from_str::<Value>(&self.text) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), vec![(*v).to_string()]))
            .collect()
    }

    #[test]
    fn test_is_ok_for_2xx_only() {
        for code in 200..=299 {
            assert!(HttpResponse::new(code, HashMap::new(), String::new()).is_ok());
        }
        for code in [400, 401, 404, 429, 500] {
            assert!(!HttpResponse::new(code, HashMap::new(), String::new()).is_ok());
        }
    }

    #[test]
    fn test_rate_limit_headers_parsed() {
        let response = HttpResponse::new(
            200,
            headers(&[
                ("x-ratelimit-remaining", "97"),
                ("x-ratelimit-reset", "1712345678"),
            ]),
            String::new(),
        );
        assert_eq!(response.rate_limit.remaining, Some(97));
        assert_eq!(response.rate_limit.reset, Some(1_712_345_678.0));
    }

    #[test]
    fn test_missing_or_garbage_rate_limit_headers_are_none() {
        let response = HttpResponse::new(200, HashMap::new(), String::new());
        assert!(response.rate_limit.is_empty());

        let response = HttpResponse::new(
            200,
            headers(&[("x-ratelimit-remaining", "lots"), ("x-ratelimit-reset", "NaN")]),
            String::new(),
        );
        assert!(response.rate_limit.is_empty());
    }

    #[test]
    fn test_negative_remaining_clamps_to_zero() {
        let info = RateLimitInfo::parse(Some("-3"), None);
        assert_eq!(info.remaining, Some(0));

        let info = RateLimitInfo::parse(Some("99999999999"), None);
        assert_eq!(info.remaining, Some(u32::MAX));
    }

    #[test]
    fn test_retry_after_parsing() {
        let response = HttpResponse::new(429, headers(&[("retry-after", "2")]), String::new());
        assert_eq!(response.retry_after, Some(2.0));

        let response = HttpResponse::new(429, headers(&[("retry-after", "-1")]), String::new());
        assert!(response.retry_after.is_none());

        let response = HttpResponse::new(
            429,
            headers(&[("retry-after", "Wed, 21 Oct 2015 07:28:00 GMT")]),
            String::new(),
        );
        assert!(response.retry_after.is_none());
    }

    #[test]
    fn test_empty_body_is_empty_object() {
        let response = HttpResponse::new(200, HashMap::new(), "  ".to_string());
        assert_eq!(response.json().unwrap(), json!({}));
    }

    #[test]
    fn test_json_body_passes_through() {
        let response = HttpResponse::new(200, HashMap::new(), r#"{"id":"42"}"#.to_string());
        assert_eq!(response.json().unwrap(), json!({"id": "42"}));
    }

    #[test]
    fn test_error_payload_extracts_object_or_empty() {
        let response = HttpResponse::new(
            400,
            HashMap::new(),
            r#"{"err":"Task name invalid","ECODE":"INPUT_005"}"#.to_string(),
        );
        let payload = response.error_payload();
        assert_eq!(payload.get("err"), Some(&json!("Task name invalid")));

        let response = HttpResponse::new(502, HashMap::new(), "<html>Bad Gateway</html>".into());
        assert!(response.error_payload().is_empty());

        let response = HttpResponse::new(400, HashMap::new(), "[1,2]".into());
        assert!(response.error_payload().is_empty());
    }
}
