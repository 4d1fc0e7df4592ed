//! Verification of incoming ClickUp webhook deliveries.
//!
//! ClickUp signs every delivery with the `secret` returned when the webhook
//! was created (see [`crate::resources::Webhooks::create`]). The signature is
//! the lowercase hex HMAC-SHA256 of the raw request body and arrives in the
//! [`HEADER_SIGNATURE`] header.
//!
//! This module only checks signatures and decodes payloads; receiving HTTP
//! requests is left to your web framework.
//!
//! # Example
//!
//! ```rust
//! use clickup_api::webhooks::{compute_signature, verify_event, verify_signature};
//!
//! let body = br#"{"event":"taskCreated","task_id":"9hx","webhook_id":"wh1"}"#;
//! let signature = compute_signature(body, "whsec");
//!
//! assert!(verify_signature(body, &signature, "whsec"));
//!
//! let event = verify_event(body, &signature, "whsec").unwrap();
//! assert_eq!(event.event, "taskCreated");
//! assert_eq!(event.task_id.as_deref(), Some("9hx"));
//! ```

mod errors;
mod verification;

pub use errors::WebhookError;
pub use verification::{
    compute_signature, verify_event, verify_signature, WebhookEvent, HEADER_SIGNATURE,
};
