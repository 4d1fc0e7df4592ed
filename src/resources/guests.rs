//! Guest endpoints.
//!
//! Guests exist only on Enterprise workspaces. Other plans answer with an
//! API error.

use crate::clients::rest::take_field;
use crate::clients::{ClickUpError, RestClient};
use crate::models::{Guest, GuestInvite, UpdateGuest};

/// Handle for guest endpoints.
#[derive(Clone, Debug)]
pub struct Guests {
    rest: RestClient,
}

impl Guests {
    pub(crate) const fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// Invites a guest to a workspace.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the response has no
    /// `user` key.
    pub async fn invite(
        &self,
        workspace_id: &str,
        invite: &GuestInvite,
    ) -> Result<Guest, ClickUpError> {
        let body = self
            .rest
            .post(
                &format!("team/{workspace_id}/guest"),
                serde_json::to_value(invite)?,
            )
            .await?;
        take_field(body, "user")
    }

    /// Fetches one guest.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the response has no
    /// `user` key.
    pub async fn get(&self, workspace_id: &str, guest_id: &str) -> Result<Guest, ClickUpError> {
        self.rest
            .get_field(&format!("team/{workspace_id}/guest/{guest_id}"), None, "user")
            .await
    }

    /// Edits a guest's name or permissions.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the response has no
    /// `user` key.
    pub async fn update(
        &self,
        workspace_id: &str,
        guest_id: &str,
        payload: &UpdateGuest,
    ) -> Result<Guest, ClickUpError> {
        let body = self
            .rest
            .put(
                &format!("team/{workspace_id}/guest/{guest_id}"),
                serde_json::to_value(payload)?,
            )
            .await?;
        take_field(body, "user")
    }

    /// Removes a guest from a workspace.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails.
    pub async fn remove(&self, workspace_id: &str, guest_id: &str) -> Result<(), ClickUpError> {
        self.rest
            .delete(&format!("team/{workspace_id}/guest/{guest_id}"), None)
            .await?;
        Ok(())
    }
}
