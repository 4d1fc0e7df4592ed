//! OAuth 2.0 authorization code flow for ClickUp apps.
//!
//! ClickUp apps obtain a user's access token in three steps:
//!
//! 1. **Authorization** ([`authorization_url`]): Redirect the user to ClickUp
//!    with your client id, redirect URI and a fresh [`StateParam`].
//! 2. **Callback**: ClickUp redirects back with `code` and `state`. Check the
//!    state with [`StateParam::matches`] before going further.
//! 3. **Token exchange** ([`exchange_code`]): Trade the code for a
//!    [`TokenResponse`] whose `access_token` feeds [`crate::ApiToken`].
//!
//! ClickUp access tokens do not expire, so there is no refresh step.
//!
//! # Example
//!
//! ```rust,ignore
//! use clickup_api::auth::oauth::{authorization_url, exchange_code, StateParam};
//! use clickup_api::{ApiToken, ClickUp};
//!
//! let state = StateParam::new();
//! let url = authorization_url("client-id", "https://example.com/callback", &state);
//! // Redirect the user to `url` and remember `state`.
//!
//! // In the callback handler:
//! if !state.matches(&callback_state) {
//!     return Err("state mismatch".into());
//! }
//! let token = exchange_code("client-id", "client-secret", &callback_code).await?;
//! let client = ClickUp::with_token(&token.access_token)?;
//! ```

mod authorize;
mod error;
mod state;
mod token;

pub use authorize::{authorization_url, AUTHORIZE_URL};
pub use error::OAuthError;
pub use state::StateParam;
pub use token::{exchange_code, exchange_code_with_base_url, TokenResponse};
