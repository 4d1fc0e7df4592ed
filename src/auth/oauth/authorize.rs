//! Authorization URL construction.

use crate::auth::oauth::StateParam;

/// The page ClickUp users are sent to in order to grant access.
pub const AUTHORIZE_URL: &str = "https://app.clickup.com/api";

/// Builds the URL that starts the authorization code flow.
///
/// All values are percent-encoded.
///
/// # Example
///
/// ```rust
/// use clickup_api::auth::oauth::{authorization_url, StateParam};
///
/// let state = StateParam::from_raw("xyz");
/// let url = authorization_url("abc", "https://example.com/cb", &state);
/// assert_eq!(
///     url,
///     "https://app.clickup.com/api?client_id=abc&redirect_uri=https%3A%2F%2Fexample.com%2Fcb&state=xyz"
/// );
/// ```
#[must_use]
pub fn authorization_url(client_id: &str, redirect_uri: &str, state: &StateParam) -> String {
    format!(
        "{AUTHORIZE_URL}?client_id={}&redirect_uri={}&state={}",
        urlencoding::encode(client_id),
        urlencoding::encode(redirect_uri),
        urlencoding::encode(state.as_ref()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_url_encodes_every_parameter() {
        let state = StateParam::from_raw("a b&c");
        let url = authorization_url("id/1", "http://localhost:3000/cb?x=1", &state);

        assert!(url.starts_with("https://app.clickup.com/api?"));
        assert!(url.contains("client_id=id%2F1"));
        assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A3000%2Fcb%3Fx%3D1"));
        assert!(url.ends_with("state=a%20b%26c"));
    }

    #[test]
    fn test_authorization_url_carries_generated_state() {
        let state = StateParam::new();
        let url = authorization_url("abc", "https://example.com", &state);
        assert!(url.ends_with(&format!("state={state}")));
    }
}
