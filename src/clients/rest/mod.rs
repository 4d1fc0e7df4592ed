//! REST convenience client for the ClickUp API.
//!
//! This module provides a higher-level REST client built on top of the
//! [`HttpClient`](crate::clients::HttpClient) dispatcher that offers
//! per-method helpers and typed deserialization of responses.
//!
//! # Overview
//!
//! - [`RestClient`]: `get()`, `post()`, `put()`, `delete()` and `upload()`,
//!   plus `*_as` variants that deserialize into a model type and
//!   [`RestClient::get_field`] for unwrapping a response envelope
//!
//! # Example
//!
//! ```rust,ignore
//! use clickup_api::clients::RestClient;
//! use clickup_api::models::Workspace;
//!
//! let rest = RestClient::new(http_client);
//!
//! // Raw JSON
//! let body = rest.get("team", None).await?;
//!
//! // Envelope unwrapped and deserialized
//! let teams: Vec<Workspace> = rest.get_field("team", None, "teams").await?;
//! ```
//!
//! # Path Normalization
//!
//! - Leading slashes are stripped: `/team` -> `team`
//! - Empty paths are rejected with
//!   [`InvalidHttpRequestError::EmptyPath`](crate::clients::InvalidHttpRequestError::EmptyPath)

mod client;

pub use client::{Query, RestClient};
pub(crate) use client::take_field;
