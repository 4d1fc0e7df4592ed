//! View endpoints.

use crate::clients::rest::take_field;
use crate::clients::{ClickUpError, RestClient};
use crate::models::{CreateView, Task, UpdateView, View, ViewParent};

/// Handle for view endpoints.
#[derive(Clone, Debug)]
pub struct Views {
    rest: RestClient,
}

impl Views {
    pub(crate) const fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// Lists the views of a workspace, space, folder or list.
    ///
    /// The built-in required views are not included.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the response has no
    /// `views` key.
    pub async fn list(&self, parent: &ViewParent) -> Result<Vec<View>, ClickUpError> {
        self.rest.get_field(&parent.views_path(), None, "views").await
    }

    /// Creates a view.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the response has no
    /// `view` key.
    pub async fn create(
        &self,
        parent: &ViewParent,
        payload: &CreateView,
    ) -> Result<View, ClickUpError> {
        let body = self
            .rest
            .post(&parent.views_path(), serde_json::to_value(payload)?)
            .await?;
        take_field(body, "view")
    }

    /// Fetches one view.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the response has no
    /// `view` key.
    pub async fn get(&self, view_id: &str) -> Result<View, ClickUpError> {
        self.rest
            .get_field(&format!("view/{view_id}"), None, "view")
            .await
    }

    /// Updates a view.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the response has no
    /// `view` key.
    pub async fn update(&self, view_id: &str, payload: &UpdateView) -> Result<View, ClickUpError> {
        let body = self
            .rest
            .put(&format!("view/{view_id}"), serde_json::to_value(payload)?)
            .await?;
        take_field(body, "view")
    }

    /// Deletes a view.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails.
    pub async fn delete(&self, view_id: &str) -> Result<(), ClickUpError> {
        self.rest.delete(&format!("view/{view_id}"), None).await?;
        Ok(())
    }

    /// Fetches one page of the tasks shown in a view.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the response has no
    /// `tasks` key.
    pub async fn tasks(&self, view_id: &str, page: u32) -> Result<Vec<Task>, ClickUpError> {
        self.rest
            .get_field(
                &format!("view/{view_id}/task"),
                Some(vec![("page".to_string(), page.to_string())]),
                "tasks",
            )
            .await
    }
}
