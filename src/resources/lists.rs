//! List endpoints.

use serde_json::Value;

use crate::clients::{ClickUpError, RestClient};
use crate::models::{CreateList, CreatedFromTemplate, FromTemplate, TaskList, UpdateList};

use super::flag;

/// Handle for list endpoints.
#[derive(Clone, Debug)]
pub struct Lists {
    rest: RestClient,
}

impl Lists {
    pub(crate) const fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// Lists the lists of a folder.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the response has no
    /// `lists` key.
    pub async fn list_in_folder(
        &self,
        folder_id: &str,
        archived: bool,
    ) -> Result<Vec<TaskList>, ClickUpError> {
        self.rest
            .get_field(
                &format!("folder/{folder_id}/list"),
                Some(flag("archived", archived)),
                "lists",
            )
            .await
    }

    /// Lists the lists that sit directly in a space.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the response has no
    /// `lists` key.
    pub async fn list_folderless(
        &self,
        space_id: &str,
        archived: bool,
    ) -> Result<Vec<TaskList>, ClickUpError> {
        self.rest
            .get_field(
                &format!("space/{space_id}/list"),
                Some(flag("archived", archived)),
                "lists",
            )
            .await
    }

    /// Fetches one list.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the body is not a list.
    pub async fn get(&self, list_id: &str) -> Result<TaskList, ClickUpError> {
        self.rest.get_as(&format!("list/{list_id}"), None).await
    }

    /// Creates a list in a folder.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the body is not a list.
    pub async fn create_in_folder(
        &self,
        folder_id: &str,
        payload: &CreateList,
    ) -> Result<TaskList, ClickUpError> {
        self.rest
            .post_as(&format!("folder/{folder_id}/list"), payload)
            .await
    }

    /// Creates a list directly in a space.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the body is not a list.
    pub async fn create_folderless(
        &self,
        space_id: &str,
        payload: &CreateList,
    ) -> Result<TaskList, ClickUpError> {
        self.rest
            .post_as(&format!("space/{space_id}/list"), payload)
            .await
    }

    /// Creates a list in a folder from a list template.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the body has no `id`.
    pub async fn create_in_folder_from_template(
        &self,
        folder_id: &str,
        template_id: &str,
        payload: &FromTemplate,
    ) -> Result<CreatedFromTemplate, ClickUpError> {
        self.rest
            .post_as(
                &format!("folder/{folder_id}/list_template/{template_id}"),
                payload,
            )
            .await
    }

    /// Creates a list directly in a space from a list template.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the body has no `id`.
    pub async fn create_folderless_from_template(
        &self,
        space_id: &str,
        template_id: &str,
        payload: &FromTemplate,
    ) -> Result<CreatedFromTemplate, ClickUpError> {
        self.rest
            .post_as(
                &format!("space/{space_id}/list_template/{template_id}"),
                payload,
            )
            .await
    }

    /// Updates a list.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the body is not a list.
    pub async fn update(&self, list_id: &str, payload: &UpdateList) -> Result<TaskList, ClickUpError> {
        self.rest.put_as(&format!("list/{list_id}"), payload).await
    }

    /// Deletes a list.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails.
    pub async fn delete(&self, list_id: &str) -> Result<(), ClickUpError> {
        self.rest.delete(&format!("list/{list_id}"), None).await?;
        Ok(())
    }

    /// Adds an existing task to an additional list.
    ///
    /// Requires the Tasks in Multiple Lists ClickApp.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails.
    pub async fn add_task(&self, list_id: &str, task_id: &str) -> Result<(), ClickUpError> {
        self.rest
            .post(&format!("list/{list_id}/task/{task_id}"), Value::Null)
            .await?;
        Ok(())
    }

    /// Removes a task from an additional list.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails.
    pub async fn remove_task(&self, list_id: &str, task_id: &str) -> Result<(), ClickUpError> {
        self.rest
            .delete(&format!("list/{list_id}/task/{task_id}"), None)
            .await?;
        Ok(())
    }
}
