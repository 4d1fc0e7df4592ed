//! Checklist endpoints.
//!
//! Item operations answer with the whole parent checklist, which is what they
//! return.

use serde_json::json;

use crate::clients::rest::take_field;
use crate::clients::{ClickUpError, RestClient};
use crate::models::{Checklist, UpdateChecklistItem};

/// Handle for checklist endpoints.
#[derive(Clone, Debug)]
pub struct Checklists {
    rest: RestClient,
}

impl Checklists {
    pub(crate) const fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// Adds a checklist to a task.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the response has no
    /// `checklist` key.
    pub async fn create(&self, task_id: &str, name: &str) -> Result<Checklist, ClickUpError> {
        let body = self
            .rest
            .post(&format!("task/{task_id}/checklist"), json!({ "name": name }))
            .await?;
        take_field(body, "checklist")
    }

    /// Renames or moves a checklist.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the response has no
    /// `checklist` key.
    pub async fn update(
        &self,
        checklist_id: &str,
        name: Option<&str>,
        position: Option<u32>,
    ) -> Result<Checklist, ClickUpError> {
        let mut body = json!({});
        if let Some(name) = name {
            body["name"] = json!(name);
        }
        if let Some(position) = position {
            body["position"] = json!(position);
        }
        let body = self
            .rest
            .put(&format!("checklist/{checklist_id}"), body)
            .await?;
        take_field(body, "checklist")
    }

    /// Deletes a checklist.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails.
    pub async fn delete(&self, checklist_id: &str) -> Result<(), ClickUpError> {
        self.rest
            .delete(&format!("checklist/{checklist_id}"), None)
            .await?;
        Ok(())
    }

    /// Adds an item, optionally assigned to a user.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the response has no
    /// `checklist` key.
    pub async fn create_item(
        &self,
        checklist_id: &str,
        name: &str,
        assignee: Option<&str>,
    ) -> Result<Checklist, ClickUpError> {
        let mut body = json!({ "name": name });
        if let Some(assignee) = assignee {
            body["assignee"] = json!(assignee);
        }
        let body = self
            .rest
            .post(&format!("checklist/{checklist_id}/checklist_item"), body)
            .await?;
        take_field(body, "checklist")
    }

    /// Edits an item.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the response has no
    /// `checklist` key.
    pub async fn update_item(
        &self,
        checklist_id: &str,
        item_id: &str,
        payload: &UpdateChecklistItem,
    ) -> Result<Checklist, ClickUpError> {
        let body = self
            .rest
            .put(
                &format!("checklist/{checklist_id}/checklist_item/{item_id}"),
                serde_json::to_value(payload)?,
            )
            .await?;
        take_field(body, "checklist")
    }

    /// Deletes an item.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails.
    pub async fn delete_item(&self, checklist_id: &str, item_id: &str) -> Result<(), ClickUpError> {
        self.rest
            .delete(
                &format!("checklist/{checklist_id}/checklist_item/{item_id}"),
                None,
            )
            .await?;
        Ok(())
    }
}
