//! Time tracking endpoints.
//!
//! Entries are scoped to a workspace. Every response wraps its payload in a
//! `data` key.

use serde_json::{json, Value};

use crate::clients::rest::take_field;
use crate::clients::{ClickUpError, RestClient};
use crate::models::{CreateTimeEntry, Tag, TimeEntry, TimeEntryQuery, UpdateTimeEntry};

/// Handle for time tracking endpoints.
#[derive(Clone, Debug)]
pub struct TimeEntries {
    rest: RestClient,
}

impl TimeEntries {
    pub(crate) const fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// Lists time entries in a workspace.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the response has no
    /// `data` key.
    pub async fn list(
        &self,
        workspace_id: &str,
        query: &TimeEntryQuery,
    ) -> Result<Vec<TimeEntry>, ClickUpError> {
        self.rest
            .get_field(
                &format!("team/{workspace_id}/time_entries"),
                Some(query.to_query()),
                "data",
            )
            .await
    }

    /// Fetches one time entry.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the response has no
    /// `data` key.
    pub async fn get(&self, workspace_id: &str, entry_id: &str) -> Result<TimeEntry, ClickUpError> {
        self.rest
            .get_field(
                &format!("team/{workspace_id}/time_entries/{entry_id}"),
                None,
                "data",
            )
            .await
    }

    /// Returns the change history of a time entry as raw records.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the response has no
    /// `data` key.
    pub async fn history(
        &self,
        workspace_id: &str,
        entry_id: &str,
    ) -> Result<Vec<Value>, ClickUpError> {
        self.rest
            .get_field(
                &format!("team/{workspace_id}/time_entries/{entry_id}/history"),
                None,
                "data",
            )
            .await
    }

    /// Returns the running timer of `assignee` (the token owner when
    /// `None`), or `None` when no timer is running.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails.
    pub async fn running(
        &self,
        workspace_id: &str,
        assignee: Option<&str>,
    ) -> Result<Option<TimeEntry>, ClickUpError> {
        let query = assignee.map(|id| vec![("assignee".to_string(), id.to_string())]);
        let body = self
            .rest
            .get(&format!("team/{workspace_id}/time_entries/current"), query)
            .await?;
        match body.get("data") {
            None | Some(Value::Null) => Ok(None),
            Some(_) => take_field(body, "data").map(Some),
        }
    }

    /// Records a finished time entry. An unset start is filled with the
    /// current time.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the response has no
    /// `data` key.
    pub async fn create(
        &self,
        workspace_id: &str,
        payload: &CreateTimeEntry,
    ) -> Result<TimeEntry, ClickUpError> {
        let mut payload = payload.clone();
        payload
            .start
            .get_or_insert_with(|| chrono::Utc::now().timestamp_millis());
        let body = self
            .rest
            .post(
                &format!("team/{workspace_id}/time_entries"),
                serde_json::to_value(&payload)?,
            )
            .await?;
        take_field(body, "data")
    }

    /// Edits a time entry.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails.
    pub async fn update(
        &self,
        workspace_id: &str,
        entry_id: &str,
        payload: &UpdateTimeEntry,
    ) -> Result<(), ClickUpError> {
        self.rest
            .put(
                &format!("team/{workspace_id}/time_entries/{entry_id}"),
                serde_json::to_value(payload)?,
            )
            .await?;
        Ok(())
    }

    /// Deletes a time entry.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails.
    pub async fn delete(&self, workspace_id: &str, entry_id: &str) -> Result<(), ClickUpError> {
        self.rest
            .delete(&format!("team/{workspace_id}/time_entries/{entry_id}"), None)
            .await?;
        Ok(())
    }

    /// Starts a timer on a task.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the response has no
    /// `data` key.
    pub async fn start(&self, workspace_id: &str, task_id: &str) -> Result<TimeEntry, ClickUpError> {
        let body = self
            .rest
            .post(
                &format!("team/{workspace_id}/time_entries/start"),
                json!({ "tid": task_id }),
            )
            .await?;
        take_field(body, "data")
    }

    /// Stops the running timer of the token owner.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the response has no
    /// `data` key.
    pub async fn stop(&self, workspace_id: &str) -> Result<TimeEntry, ClickUpError> {
        let body = self
            .rest
            .post(&format!("team/{workspace_id}/time_entries/stop"), Value::Null)
            .await?;
        take_field(body, "data")
    }

    /// Lists every time entry tag used in a workspace.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the response has no
    /// `data` key.
    pub async fn tags(&self, workspace_id: &str) -> Result<Vec<Tag>, ClickUpError> {
        self.rest
            .get_field(&format!("team/{workspace_id}/time_entries/tags"), None, "data")
            .await
    }

    /// Applies tags to several time entries.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails.
    pub async fn add_tags(
        &self,
        workspace_id: &str,
        entry_ids: &[&str],
        tags: &[Tag],
    ) -> Result<(), ClickUpError> {
        self.rest
            .post(
                &format!("team/{workspace_id}/time_entries/tags"),
                json!({ "time_entry_ids": entry_ids, "tags": tags }),
            )
            .await?;
        Ok(())
    }

    /// Removes tags from several time entries.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails.
    pub async fn remove_tags(
        &self,
        workspace_id: &str,
        entry_ids: &[&str],
        tags: &[Tag],
    ) -> Result<(), ClickUpError> {
        self.rest
            .delete_with_body(
                &format!("team/{workspace_id}/time_entries/tags"),
                json!({ "time_entry_ids": entry_ids, "tags": tags }),
            )
            .await?;
        Ok(())
    }

    /// Renames and recolors a time entry tag across the workspace.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails.
    pub async fn rename_tag(
        &self,
        workspace_id: &str,
        name: &str,
        replacement: &Tag,
    ) -> Result<(), ClickUpError> {
        self.rest
            .put(
                &format!("team/{workspace_id}/time_entries/tags"),
                json!({
                    "name": name,
                    "new_name": replacement.name,
                    "tag_bg": replacement.tag_bg,
                    "tag_fg": replacement.tag_fg,
                }),
            )
            .await?;
        Ok(())
    }
}
