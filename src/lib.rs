//! # ClickUp API Rust Client
//!
//! An async client for the ClickUp REST API (v2), built around a request
//! dispatcher that applies authentication, proactive rate-limit throttling,
//! bounded retries and typed error translation to every call.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ClickUpConfig`] and [`ClickUpConfigBuilder`]
//! - Validated newtypes for the API token and base URL
//! - The [`clients::HttpClient`] dispatcher with rate-limit handling and retries
//! - Typed resource handles for workspaces, spaces, folders, lists, tasks,
//!   checklists, custom fields, comments, tags, time entries, views, docs,
//!   guests, webhooks and goals, reachable from the [`ClickUp`] facade
//! - Folder, list and task creation from templates
//! - OAuth 2.0 authorization code flow via [`auth::oauth`]
//! - Webhook signature verification via [`webhooks`]
//!
//! ## Quick Start
//!
//! ```rust
//! use clickup_api::{ApiToken, ClickUpConfig};
//! use std::time::Duration;
//!
//! let config = ClickUpConfig::builder()
//!     .api_token(ApiToken::new("pk_123").unwrap())
//!     .max_retries(5)
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.max_retries(), 5);
//! ```
//!
//! ## Making Requests
//!
//! ```rust,ignore
//! use clickup_api::{ClickUp, models::{CreateTask, Priority, TaskQuery}};
//!
//! let client = ClickUp::with_token("pk_123")?;
//!
//! let payload = CreateTask {
//!     priority: Some(Priority::High),
//!     ..CreateTask::new("Ship it")
//! };
//! let task = client.tasks().create("901", &payload).await?;
//!
//! let page = client.tasks().list("901", &TaskQuery::new()).await?;
//! println!("{} tasks, more: {}", page.len(), page.has_more);
//! ```
//!
//! ## Rate Limiting
//!
//! ClickUp reports the remaining request budget in `X-RateLimit-*` headers.
//! When few requests remain the dispatcher sleeps until the window resets
//! (plus a configurable buffer) before sending. A 429 response is retried
//! after `Retry-After` seconds when automatic retries are enabled.
//!
//! ## Error Handling
//!
//! Every API call returns [`ClickUpError`]; use [`ClickUpError::kind`] to
//! branch on the error taxonomy:
//!
//! ```rust,ignore
//! use clickup_api::{ClickUpError, ErrorKind};
//!
//! match client.tasks().get("abc").await {
//!     Err(e) if e.kind() == ErrorKind::NotFound => println!("no such task"),
//!     other => println!("{other:?}"),
//! }
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events and installs no subscriber. Throttle
//! waits log at `info`, retries at `warn`, and each dispatched request at
//! `debug`. Tokens are never logged.

pub mod auth;
mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod resources;
pub mod webhooks;

// Re-export public types at crate root for convenience
pub use client::ClickUp;
pub use config::{ApiToken, BaseUrl, ClickUpConfig, ClickUpConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiErrorDetails, ApiVersion, ClickUpError, ErrorKind, FileUpload, HttpClient, HttpMethod, HttpRequest,
    HttpRequestBuilder, HttpResponse, InvalidHttpRequestError, RateLimitState, RestClient,
    Sleeper,
};

// Re-export OAuth types for convenience
pub use auth::oauth::{
    authorization_url, exchange_code, OAuthError, StateParam, TokenResponse,
};
