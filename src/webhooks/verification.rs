//! HMAC-SHA256 signature computation and checking.

use hmac::{Hmac, Mac};
use serde::Deserialize;
use serde_json::Value;
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::models::de;
use crate::webhooks::WebhookError;

type HmacSha256 = Hmac<Sha256>;

/// HTTP header carrying the delivery signature.
pub const HEADER_SIGNATURE: &str = "X-Signature";

/// A decoded webhook delivery.
///
/// Only the envelope is typed; event-specific data stays in
/// [`history_items`](Self::history_items) and [`extra`](Self::extra).
#[derive(Clone, Debug, Deserialize)]
pub struct WebhookEvent {
    /// The event name (e.g. `taskCreated`, `taskStatusUpdated`).
    pub event: String,
    /// The webhook that produced this delivery.
    #[serde(deserialize_with = "de::string_id")]
    pub webhook_id: String,
    /// The affected task, for task events.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub task_id: Option<String>,
    /// The affected list, for list events.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub list_id: Option<String>,
    /// What changed.
    #[serde(default)]
    pub history_items: Vec<Value>,
    /// Any other top-level fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Computes the signature ClickUp would send for `body`.
///
/// # Example
///
/// ```rust
/// use clickup_api::webhooks::compute_signature;
///
/// let signature = compute_signature(b"payload", "secret");
/// assert_eq!(signature.len(), 64);
/// ```
#[must_use]
#[allow(clippy::missing_panics_doc)] // HMAC accepts any key size, so this never panics
pub fn compute_signature(body: &[u8], secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(body);
    hex::encode(mac.finalize().into_bytes())
}

/// Checks a signature header against the raw body, in constant time.
///
/// Hex case and surrounding whitespace in the header are ignored.
#[must_use]
pub fn verify_signature(body: &[u8], signature_header: &str, secret: &str) -> bool {
    let computed = compute_signature(body, secret);
    let received = signature_header.trim().to_ascii_lowercase();
    computed.as_bytes().ct_eq(received.as_bytes()).into()
}

/// Verifies a delivery and decodes its envelope.
///
/// # Errors
///
/// Returns [`WebhookError::InvalidSignature`] if the signature does not match,
/// or [`WebhookError::InvalidPayload`] if the body is not a webhook event.
pub fn verify_event(
    body: &[u8],
    signature_header: &str,
    secret: &str,
) -> Result<WebhookEvent, WebhookError> {
    if !verify_signature(body, signature_header, secret) {
        return Err(WebhookError::InvalidSignature);
    }
    Ok(serde_json::from_slice(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 4231 test case 2.
    #[test]
    fn test_compute_signature_known_vector() {
        assert_eq!(
            compute_signature(b"what do ya want for nothing?", "Jefe"),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_verify_signature_accepts_matching_signature() {
        let body = br#"{"event":"taskUpdated"}"#;
        let signature = compute_signature(body, "whsec");
        assert!(verify_signature(body, &signature, "whsec"));
        assert!(verify_signature(body, &signature.to_uppercase(), "whsec"));
        assert!(verify_signature(body, &format!(" {signature}\n"), "whsec"));
    }

    #[test]
    fn test_verify_signature_rejects_tampering() {
        let signature = compute_signature(b"original", "whsec");
        assert!(!verify_signature(b"tampered", &signature, "whsec"));
        assert!(!verify_signature(b"original", &signature, "other"));
        assert!(!verify_signature(b"original", "", "whsec"));
        assert!(!verify_signature(b"original", &signature[..10], "whsec"));
    }

    #[test]
    fn test_verify_event_decodes_envelope() {
        let body = br#"{
            "event": "taskStatusUpdated",
            "webhook_id": "7689a169",
            "task_id": 1234,
            "history_items": [{"field": "status"}],
            "team_id": "9"
        }"#;
        let signature = compute_signature(body, "whsec");

        let event = verify_event(body, &signature, "whsec").unwrap();
        assert_eq!(event.event, "taskStatusUpdated");
        assert_eq!(event.webhook_id, "7689a169");
        assert_eq!(event.task_id.as_deref(), Some("1234"));
        assert!(event.list_id.is_none());
        assert_eq!(event.history_items.len(), 1);
        assert_eq!(event.extra.get("team_id"), Some(&Value::from("9")));
    }

    #[test]
    fn test_verify_event_checks_signature_before_parsing() {
        let error = verify_event(b"not json", "deadbeef", "whsec").unwrap_err();
        assert!(matches!(error, WebhookError::InvalidSignature));

        let signature = compute_signature(b"not json", "whsec");
        let error = verify_event(b"not json", &signature, "whsec").unwrap_err();
        assert!(matches!(error, WebhookError::InvalidPayload(_)));
    }
}
