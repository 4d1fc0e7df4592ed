//! State parameter handling for OAuth CSRF protection.

use std::fmt;

use rand::distributions::Alphanumeric;
use rand::Rng;
use subtle::ConstantTimeEq;

/// OAuth state parameter.
///
/// Send it with the authorization redirect and compare it against the
/// `state` query parameter of the callback.
///
/// # Example
///
/// ```rust
/// use clickup_api::auth::oauth::StateParam;
///
/// let state = StateParam::new();
/// assert_eq!(state.as_ref().len(), 15);
/// assert!(state.matches(state.as_ref()));
/// assert!(!state.matches("forged"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateParam(String);

// Verify StateParam is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StateParam>();
};

impl StateParam {
    const NONCE_LENGTH: usize = 15;

    /// Creates a state with a random 15-character alphanumeric nonce.
    #[must_use]
    pub fn new() -> Self {
        let nonce: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(Self::NONCE_LENGTH)
            .map(char::from)
            .collect();
        Self(nonce)
    }

    /// Wraps a caller-provided state string as-is.
    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Compares against a received state in constant time.
    #[must_use]
    pub fn matches(&self, received: &str) -> bool {
        self.0.as_bytes().ct_eq(received.as_bytes()).into()
    }
}

impl Default for StateParam {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StateParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StateParam {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_generates_15_char_alphanumeric_nonce() {
        let state = StateParam::new();
        assert_eq!(state.as_ref().len(), 15);
        assert!(state.as_ref().chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_new_generates_unique_nonces() {
        let a = StateParam::new();
        let b = StateParam::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_from_raw_wraps_string_unchanged() {
        let state = StateParam::from_raw("return-to=/inbox");
        assert_eq!(state.as_ref(), "return-to=/inbox");
        assert_eq!(state.to_string(), "return-to=/inbox");
    }

    #[test]
    fn test_matches_rejects_other_values() {
        let state = StateParam::from_raw("abc123");
        assert!(state.matches("abc123"));
        assert!(!state.matches("abc124"));
        assert!(!state.matches("abc1234"));
        assert!(!state.matches(""));
    }
}
