//! Workspace (team) endpoints.

use crate::clients::{ClickUpError, RestClient};
use crate::models::Workspace;

/// Handle for `team` endpoints.
#[derive(Clone, Debug)]
pub struct Workspaces {
    rest: RestClient,
}

impl Workspaces {
    pub(crate) const fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// Lists the workspaces the token can access.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the response has no
    /// `teams` key.
    pub async fn list(&self) -> Result<Vec<Workspace>, ClickUpError> {
        self.rest.get_field("team", None, "teams").await
    }

    /// Fetches one workspace.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError::NotFound`] for an unknown id, or
    /// [`ClickUpError::Decode`] if the response has no `team` key.
    pub async fn get(&self, workspace_id: &str) -> Result<Workspace, ClickUpError> {
        self.rest
            .get_field(&format!("team/{workspace_id}"), None, "team")
            .await
    }
}
