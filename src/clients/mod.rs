//! HTTP client types for ClickUp API communication.
//!
//! This module provides the request dispatch layer for making authenticated
//! requests to the ClickUp API. It handles request/response processing,
//! rate-limit throttling, retry logic and typed error translation.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async request dispatcher
//! - [`HttpRequest`]: One logical request to be sent to the API
//! - [`HttpResponse`]: A single physical response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`FileUpload`]: A file sent as `multipart/form-data`
//! - [`RateLimitState`]: The last observed rate limit window
//! - [`Sleeper`]: Pluggable suspension used for throttling and backoff
//! - [`ClickUpError`]: The error returned by every API call
//! - [`rest::RestClient`]: Higher-level REST helper with typed responses
//!
//! # Example
//!
//! ```rust,ignore
//! use clickup_api::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let client = HttpClient::new(&config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "team/123/space")
//!     .query_param("archived", "false")
//!     .build()?;
//!
//! let spaces = client.execute(&request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! - **429 (Rate Limited)**: Retries after `Retry-After` seconds, or the base
//!   retry delay if absent, when automatic retries are enabled
//! - **Transport failures**: Retries with exponential backoff from the base delay
//! - **Other error statuses**: Returned immediately without retry
//!
//! Both retry paths draw from the same `max_retries` budget.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod rate_limit;
pub mod rest;
mod sleeper;

pub use errors::{ApiErrorDetails, ClickUpError, ErrorKind, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{ApiVersion, FileUpload, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, RateLimitInfo};
pub use rate_limit::RateLimitState;
pub use sleeper::{SleepFuture, Sleeper, TokioSleeper};

// Re-export REST client types at the clients module level
pub use rest::RestClient;
