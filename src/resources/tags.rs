//! Space tag endpoints.
//!
//! Tags are addressed by name. Names are percent-encoded in paths, so names
//! with spaces or slashes are safe to pass as-is.

use serde_json::json;

use crate::clients::{ClickUpError, RestClient};
use crate::models::Tag;

/// Handle for space tag endpoints.
#[derive(Clone, Debug)]
pub struct Tags {
    rest: RestClient,
}

impl Tags {
    pub(crate) const fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// Lists the tags of a space.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the response has no
    /// `tags` key.
    pub async fn list(&self, space_id: &str) -> Result<Vec<Tag>, ClickUpError> {
        self.rest
            .get_field(&format!("space/{space_id}/tag"), None, "tags")
            .await
    }

    /// Creates a tag in a space.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails.
    pub async fn create(&self, space_id: &str, tag: &Tag) -> Result<(), ClickUpError> {
        self.rest
            .post(&format!("space/{space_id}/tag"), json!({ "tag": tag }))
            .await?;
        Ok(())
    }

    /// Renames or recolors the tag called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails.
    pub async fn update(&self, space_id: &str, name: &str, tag: &Tag) -> Result<(), ClickUpError> {
        let path = format!("space/{space_id}/tag/{}", urlencoding::encode(name));
        self.rest.put(&path, json!({ "tag": tag })).await?;
        Ok(())
    }

    /// Deletes the tag called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails.
    pub async fn delete(&self, space_id: &str, name: &str) -> Result<(), ClickUpError> {
        let path = format!("space/{space_id}/tag/{}", urlencoding::encode(name));
        self.rest.delete(&path, None).await?;
        Ok(())
    }
}
