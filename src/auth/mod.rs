//! Authentication helpers for ClickUp apps.
//!
//! Personal API tokens need nothing from this module: pass them straight to
//! [`crate::ApiToken::new`]. Apps acting on behalf of other users go through
//! the [`oauth`] authorization code flow to obtain an access token first.

pub mod oauth;
