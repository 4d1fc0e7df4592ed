//! Authorization code exchange.
//!
//! The token endpoint lives under the regular API base URL and does not need
//! an API token, so these functions use their own short-lived transport
//! rather than a configured client.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::auth::oauth::OAuthError;
use crate::config::BaseUrl;

/// The access token returned by a successful exchange.
#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    /// The access token. Pass it to [`crate::ApiToken::new`].
    pub access_token: String,
    /// The token type, when reported (normally `Bearer`).
    #[serde(default)]
    pub token_type: Option<String>,
}

impl std::fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &"*****")
            .field("token_type", &self.token_type)
            .finish()
    }
}

#[derive(Debug, Serialize)]
struct TokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    code: &'a str,
}

/// Exchanges an authorization code for an access token.
///
/// # Errors
///
/// - [`OAuthError::InvalidCredentials`] if ClickUp answers 401
/// - [`OAuthError::TokenExchangeFailed`] for any other error status or a
///   body without an access token
/// - [`OAuthError::Http`] if the endpoint cannot be reached
pub async fn exchange_code(
    client_id: &str,
    client_secret: &str,
    code: &str,
) -> Result<TokenResponse, OAuthError> {
    exchange_code_with_base_url(&BaseUrl::default(), client_id, client_secret, code).await
}

/// Exchanges an authorization code against a custom API base URL.
///
/// # Errors
///
/// Same as [`exchange_code`].
pub async fn exchange_code_with_base_url(
    base_url: &BaseUrl,
    client_id: &str,
    client_secret: &str,
    code: &str,
) -> Result<TokenResponse, OAuthError> {
    let token_url = base_url.join("oauth/token");
    let request_body = TokenRequest {
        client_id,
        client_secret,
        code,
    };

    tracing::debug!(url = %token_url, "exchanging OAuth authorization code");

    let response = reqwest::Client::new()
        .post(&token_url)
        .json(&request_body)
        .send()
        .await?;

    let status = response.status().as_u16();
    let text = response.text().await?;

    if !(200..300).contains(&status) {
        let message = error_message(&text, status);
        return Err(if status == 401 {
            OAuthError::InvalidCredentials { message }
        } else {
            OAuthError::TokenExchangeFailed { status, message }
        });
    }

    serde_json::from_str(&text).map_err(|e| OAuthError::TokenExchangeFailed {
        status,
        message: format!("Failed to parse token response: {e}"),
    })
}

/// Takes the `err` field of a JSON error body, falling back to the status.
fn error_message(text: &str, status: u16) -> String {
    serde_json::from_str::<Value>(text)
        .ok()
        .and_then(|body| body.get("err").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| format!("HTTP {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn base_url(server: &MockServer) -> BaseUrl {
        BaseUrl::new(format!("{}/api/v2", server.uri())).unwrap()
    }

    #[tokio::test]
    async fn test_exchange_code_posts_credentials_and_returns_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v2/oauth/token"))
            .and(body_json(json!({
                "client_id": "cid",
                "client_secret": "secret",
                "code": "code-1"
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"access_token": "tok_abc", "token_type": "Bearer"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let token = exchange_code_with_base_url(&base_url(&server), "cid", "secret", "code-1")
            .await
            .unwrap();

        assert_eq!(token.access_token, "tok_abc");
        assert_eq!(token.token_type.as_deref(), Some("Bearer"));
    }

    #[tokio::test]
    async fn test_exchange_code_401_is_invalid_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v2/oauth/token"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({"err": "Client secret invalid", "ECODE": "OAUTH_019"})),
            )
            .mount(&server)
            .await;

        let error = exchange_code_with_base_url(&base_url(&server), "cid", "bad", "code")
            .await
            .unwrap_err();

        match error {
            OAuthError::InvalidCredentials { message } => {
                assert_eq!(message, "Client secret invalid");
            }
            other => panic!("expected InvalidCredentials, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_exchange_code_other_status_is_exchange_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v2/oauth/token"))
            .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
            .mount(&server)
            .await;

        let error = exchange_code_with_base_url(&base_url(&server), "cid", "secret", "code")
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            OAuthError::TokenExchangeFailed { status: 500, ref message } if message == "HTTP 500"
        ));
    }

    #[tokio::test]
    async fn test_exchange_code_body_without_token_is_exchange_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v2/oauth/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .mount(&server)
            .await;

        let error = exchange_code_with_base_url(&base_url(&server), "cid", "secret", "code")
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            OAuthError::TokenExchangeFailed { status: 200, .. }
        ));
    }

    #[test]
    fn test_token_response_debug_masks_token() {
        let token = TokenResponse {
            access_token: "tok_secret".to_string(),
            token_type: None,
        };
        assert!(!format!("{token:?}").contains("tok_secret"));
    }
}
