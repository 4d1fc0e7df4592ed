//! Task endpoints.

use serde_json::{json, Value};

use crate::clients::rest::take_field;
use crate::clients::{ClickUpError, FileUpload, RestClient};
use crate::models::{
    Attachment, CreateTask, CreatedFromTemplate, Task, TaskPage, TaskQuery, UpdateTask,
};

/// Handle for task endpoints.
#[derive(Clone, Debug)]
pub struct Tasks {
    rest: RestClient,
}

impl Tasks {
    pub(crate) const fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// Fetches one page of the tasks in a list.
    ///
    /// Use [`TaskQuery::next_page`] while [`TaskPage::has_more`] is set to
    /// walk the remaining pages.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut query = TaskQuery::new().include_closed(true);
    /// loop {
    ///     let page = client.tasks().list("901", &query).await?;
    ///     let more = page.has_more;
    ///     for task in page {
    ///         println!("{}", task.name);
    ///     }
    ///     if !more {
    ///         break;
    ///     }
    ///     query = query.next_page();
    /// }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the response has no
    /// `tasks` key.
    pub async fn list(&self, list_id: &str, query: &TaskQuery) -> Result<TaskPage, ClickUpError> {
        let body = self
            .rest
            .get(&format!("list/{list_id}/task"), Some(query.to_query()))
            .await?;

        // Newer responses carry `last_page`, older ones `has_more`.
        let has_more = body
            .get("has_more")
            .and_then(Value::as_bool)
            .or_else(|| body.get("last_page").and_then(Value::as_bool).map(|last| !last))
            .unwrap_or(false);

        Ok(TaskPage {
            tasks: take_field(body, "tasks")?,
            page: query.page,
            has_more,
        })
    }

    /// Fetches one task.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the body is not a task.
    pub async fn get(&self, task_id: &str) -> Result<Task, ClickUpError> {
        self.rest.get_as(&format!("task/{task_id}"), None).await
    }

    /// Creates a task in a list.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the body is not a task.
    pub async fn create(&self, list_id: &str, payload: &CreateTask) -> Result<Task, ClickUpError> {
        self.rest
            .post_as(&format!("list/{list_id}/task"), payload)
            .await
    }

    /// Creates a task in a list from a task template.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the body has no `id`.
    pub async fn create_from_template(
        &self,
        list_id: &str,
        template_id: &str,
        name: &str,
    ) -> Result<CreatedFromTemplate, ClickUpError> {
        self.rest
            .post_as(
                &format!("list/{list_id}/taskTemplate/{template_id}"),
                &json!({ "name": name }),
            )
            .await
    }

    /// Updates a task.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the body is not a task.
    pub async fn update(&self, task_id: &str, payload: &UpdateTask) -> Result<Task, ClickUpError> {
        self.rest.put_as(&format!("task/{task_id}"), payload).await
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails.
    pub async fn delete(&self, task_id: &str) -> Result<(), ClickUpError> {
        self.rest.delete(&format!("task/{task_id}"), None).await?;
        Ok(())
    }

    /// Applies an existing space tag to a task.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails.
    pub async fn add_tag(&self, task_id: &str, tag_name: &str) -> Result<(), ClickUpError> {
        let path = format!("task/{task_id}/tag/{}", urlencoding::encode(tag_name));
        self.rest.post(&path, Value::Null).await?;
        Ok(())
    }

    /// Removes a tag from a task.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails.
    pub async fn remove_tag(&self, task_id: &str, tag_name: &str) -> Result<(), ClickUpError> {
        let path = format!("task/{task_id}/tag/{}", urlencoding::encode(tag_name));
        self.rest.delete(&path, None).await?;
        Ok(())
    }

    /// Uploads a file as a task attachment.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let bytes = std::fs::read("report.pdf")?;
    /// let attachment = client
    ///     .tasks()
    ///     .upload_attachment("9hx", FileUpload::new("report.pdf", bytes))
    ///     .await?;
    /// println!("{}", attachment.url.unwrap_or_default());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the body is not an
    /// attachment.
    pub async fn upload_attachment(
        &self,
        task_id: &str,
        file: FileUpload,
    ) -> Result<Attachment, ClickUpError> {
        let body = self
            .rest
            .upload(&format!("task/{task_id}/attachment"), file)
            .await?;
        Ok(serde_json::from_value(body)?)
    }
}
