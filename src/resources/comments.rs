//! Comment endpoints.

use crate::clients::{ClickUpError, RestClient};
use crate::models::{Comment, CreateComment, UpdateComment};

/// Handle for comment endpoints.
#[derive(Clone, Debug)]
pub struct Comments {
    rest: RestClient,
}

impl Comments {
    pub(crate) const fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// Lists the comments on a task, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the response has no
    /// `comments` key.
    pub async fn list_for_task(&self, task_id: &str) -> Result<Vec<Comment>, ClickUpError> {
        self.rest
            .get_field(&format!("task/{task_id}/comment"), None, "comments")
            .await
    }

    /// Adds a comment to a task.
    ///
    /// The API only echoes the new id and date, so the returned comment's
    /// text is filled from the payload.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the body is not a
    /// comment.
    pub async fn create_for_task(
        &self,
        task_id: &str,
        payload: &CreateComment,
    ) -> Result<Comment, ClickUpError> {
        let mut comment: Comment = self
            .rest
            .post_as(&format!("task/{task_id}/comment"), payload)
            .await?;
        if comment.text.is_empty() {
            comment.text.clone_from(&payload.comment_text);
        }
        Ok(comment)
    }

    /// Edits a comment.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails.
    pub async fn update(&self, comment_id: &str, payload: &UpdateComment) -> Result<(), ClickUpError> {
        self.rest
            .put(&format!("comment/{comment_id}"), serde_json::to_value(payload)?)
            .await?;
        Ok(())
    }

    /// Deletes a comment.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails.
    pub async fn delete(&self, comment_id: &str) -> Result<(), ClickUpError> {
        self.rest
            .delete(&format!("comment/{comment_id}"), None)
            .await?;
        Ok(())
    }
}
