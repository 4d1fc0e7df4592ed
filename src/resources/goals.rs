//! Goal endpoints.

use crate::clients::rest::take_field;
use crate::clients::{ClickUpError, RestClient};
use crate::models::{CreateGoal, CreateKeyResult, Goal, KeyResult, UpdateGoal, UpdateKeyResult};

use super::flag;

/// Handle for goal endpoints.
#[derive(Clone, Debug)]
pub struct Goals {
    rest: RestClient,
}

impl Goals {
    pub(crate) const fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// Lists the goals of a workspace.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the response has no
    /// `goals` key.
    pub async fn list(
        &self,
        workspace_id: &str,
        include_completed: bool,
    ) -> Result<Vec<Goal>, ClickUpError> {
        self.rest
            .get_field(
                &format!("team/{workspace_id}/goal"),
                Some(flag("include_completed", include_completed)),
                "goals",
            )
            .await
    }

    /// Fetches one goal with its key results.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the response has no
    /// `goal` key.
    pub async fn get(&self, goal_id: &str) -> Result<Goal, ClickUpError> {
        self.rest
            .get_field(&format!("goal/{goal_id}"), None, "goal")
            .await
    }

    /// Creates a goal.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the response has no
    /// `goal` key.
    pub async fn create(&self, workspace_id: &str, payload: &CreateGoal) -> Result<Goal, ClickUpError> {
        let body = self
            .rest
            .post(
                &format!("team/{workspace_id}/goal"),
                serde_json::to_value(payload)?,
            )
            .await?;
        take_field(body, "goal")
    }

    /// Updates a goal.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the response has no
    /// `goal` key.
    pub async fn update(&self, goal_id: &str, payload: &UpdateGoal) -> Result<Goal, ClickUpError> {
        let body = self
            .rest
            .put(&format!("goal/{goal_id}"), serde_json::to_value(payload)?)
            .await?;
        take_field(body, "goal")
    }

    /// Deletes a goal.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails.
    pub async fn delete(&self, goal_id: &str) -> Result<(), ClickUpError> {
        self.rest.delete(&format!("goal/{goal_id}"), None).await?;
        Ok(())
    }

    /// Adds a key result to a goal.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the response has no
    /// `key_result` key.
    pub async fn create_key_result(
        &self,
        goal_id: &str,
        payload: &CreateKeyResult,
    ) -> Result<KeyResult, ClickUpError> {
        let body = self
            .rest
            .post(
                &format!("goal/{goal_id}/key_result"),
                serde_json::to_value(payload)?,
            )
            .await?;
        take_field(body, "key_result")
    }

    /// Edits a key result, e.g. to record progress in `steps_current`.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the response has no
    /// `key_result` key.
    pub async fn update_key_result(
        &self,
        key_result_id: &str,
        payload: &UpdateKeyResult,
    ) -> Result<KeyResult, ClickUpError> {
        let body = self
            .rest
            .put(
                &format!("key_result/{key_result_id}"),
                serde_json::to_value(payload)?,
            )
            .await?;
        take_field(body, "key_result")
    }

    /// Deletes a key result.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails.
    pub async fn delete_key_result(&self, key_result_id: &str) -> Result<(), ClickUpError> {
        self.rest
            .delete(&format!("key_result/{key_result_id}"), None)
            .await?;
        Ok(())
    }
}
