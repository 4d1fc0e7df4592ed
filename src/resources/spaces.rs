//! Space endpoints.

use crate::clients::{ClickUpError, RestClient};
use crate::models::{CreateSpace, Space, UpdateSpace};

use super::flag;

/// Handle for space endpoints.
#[derive(Clone, Debug)]
pub struct Spaces {
    rest: RestClient,
}

impl Spaces {
    pub(crate) const fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// Lists the spaces of a workspace.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the response has no
    /// `spaces` key.
    pub async fn list(&self, workspace_id: &str, archived: bool) -> Result<Vec<Space>, ClickUpError> {
        self.rest
            .get_field(
                &format!("team/{workspace_id}/space"),
                Some(flag("archived", archived)),
                "spaces",
            )
            .await
    }

    /// Fetches one space.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the body is not a space.
    pub async fn get(&self, space_id: &str) -> Result<Space, ClickUpError> {
        self.rest.get_as(&format!("space/{space_id}"), None).await
    }

    /// Creates a space in a workspace.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the body is not a space.
    pub async fn create(
        &self,
        workspace_id: &str,
        payload: &CreateSpace,
    ) -> Result<Space, ClickUpError> {
        self.rest
            .post_as(&format!("team/{workspace_id}/space"), payload)
            .await
    }

    /// Updates a space.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the body is not a space.
    pub async fn update(&self, space_id: &str, payload: &UpdateSpace) -> Result<Space, ClickUpError> {
        self.rest.put_as(&format!("space/{space_id}"), payload).await
    }

    /// Deletes a space.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails.
    pub async fn delete(&self, space_id: &str) -> Result<(), ClickUpError> {
        self.rest.delete(&format!("space/{space_id}"), None).await?;
        Ok(())
    }
}
