//! Webhook verification errors.

use thiserror::Error;

/// Errors raised while verifying a webhook delivery.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The signature header does not match the body.
    #[error("Webhook signature verification failed")]
    InvalidSignature,

    /// The body is signed correctly but is not a webhook event.
    #[error("Invalid webhook payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_signature_message() {
        assert_eq!(
            WebhookError::InvalidSignature.to_string(),
            "Webhook signature verification failed"
        );
    }

    #[test]
    fn test_invalid_payload_wraps_json_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = WebhookError::from(json_error);
        assert!(error.to_string().starts_with("Invalid webhook payload"));
        assert!(std::error::Error::source(&error).is_some());
    }
}
