//! Folder endpoints.

use serde_json::json;

use crate::clients::{ClickUpError, RestClient};
use crate::models::{CreatedFromTemplate, Folder, FromTemplate};

use super::flag;

/// Handle for folder endpoints.
#[derive(Clone, Debug)]
pub struct Folders {
    rest: RestClient,
}

impl Folders {
    pub(crate) const fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// Lists the folders of a space.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the response has no
    /// `folders` key.
    pub async fn list(&self, space_id: &str, archived: bool) -> Result<Vec<Folder>, ClickUpError> {
        self.rest
            .get_field(
                &format!("space/{space_id}/folder"),
                Some(flag("archived", archived)),
                "folders",
            )
            .await
    }

    /// Fetches one folder.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the body is not a folder.
    pub async fn get(&self, folder_id: &str) -> Result<Folder, ClickUpError> {
        self.rest.get_as(&format!("folder/{folder_id}"), None).await
    }

    /// Creates a folder in a space.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the body is not a folder.
    pub async fn create(&self, space_id: &str, name: &str) -> Result<Folder, ClickUpError> {
        self.rest
            .post_as(&format!("space/{space_id}/folder"), &json!({ "name": name }))
            .await
    }

    /// Creates a folder in a space from a folder template.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the body has no `id`.
    pub async fn create_from_template(
        &self,
        space_id: &str,
        template_id: &str,
        payload: &FromTemplate,
    ) -> Result<CreatedFromTemplate, ClickUpError> {
        self.rest
            .post_as(
                &format!("space/{space_id}/folder_template/{template_id}"),
                payload,
            )
            .await
    }

    /// Renames a folder.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the body is not a folder.
    pub async fn update(&self, folder_id: &str, name: &str) -> Result<Folder, ClickUpError> {
        self.rest
            .put_as(&format!("folder/{folder_id}"), &json!({ "name": name }))
            .await
    }

    /// Deletes a folder.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails.
    pub async fn delete(&self, folder_id: &str) -> Result<(), ClickUpError> {
        self.rest.delete(&format!("folder/{folder_id}"), None).await?;
        Ok(())
    }
}
