//! Doc endpoints.
//!
//! Docs are only available on the v3 API. Requests go through the same
//! dispatcher, so they share its rate-limit state and retry policy.

use serde_json::Value;

use crate::clients::rest::Query;
use crate::clients::{ApiVersion, ClickUpError, HttpMethod, RestClient};
use crate::models::{CreateDoc, CreatePage, Doc, DocPage, DocPageResult, DocQuery, UpdatePage};

/// Handle for doc endpoints.
#[derive(Clone, Debug)]
pub struct Docs {
    rest: RestClient,
}

impl Docs {
    pub(crate) const fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    async fn v3(
        &self,
        method: HttpMethod,
        path: &str,
        query: Option<Query>,
        body: Option<Value>,
    ) -> Result<Value, ClickUpError> {
        self.rest
            .versioned(ApiVersion::V3, method, path, query, body)
            .await
    }

    /// Searches the docs of a workspace, one cursor page at a time.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut query = DocQuery::new();
    /// loop {
    ///     let result = client.docs().search("512", &query).await?;
    ///     for doc in &result.docs {
    ///         println!("{}", doc.name);
    ///     }
    ///     if !result.has_more() {
    ///         break;
    ///     }
    ///     query = query.after(&result);
    /// }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the body does not
    /// match.
    pub async fn search(
        &self,
        workspace_id: &str,
        query: &DocQuery,
    ) -> Result<DocPageResult, ClickUpError> {
        let body = self
            .v3(
                HttpMethod::Get,
                &format!("workspaces/{workspace_id}/docs"),
                Some(query.to_query()),
                None,
            )
            .await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Fetches one doc.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the body is not a doc.
    pub async fn get(&self, workspace_id: &str, doc_id: &str) -> Result<Doc, ClickUpError> {
        let body = self
            .v3(
                HttpMethod::Get,
                &format!("workspaces/{workspace_id}/docs/{doc_id}"),
                None,
                None,
            )
            .await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Creates a doc.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the body is not a doc.
    pub async fn create(&self, workspace_id: &str, payload: &CreateDoc) -> Result<Doc, ClickUpError> {
        let body = self
            .v3(
                HttpMethod::Post,
                &format!("workspaces/{workspace_id}/docs"),
                None,
                Some(serde_json::to_value(payload)?),
            )
            .await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Returns the page tree of a doc without page bodies.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the body is not a
    /// page array.
    pub async fn page_listing(
        &self,
        workspace_id: &str,
        doc_id: &str,
        max_page_depth: i32,
    ) -> Result<Vec<DocPage>, ClickUpError> {
        let body = self
            .v3(
                HttpMethod::Get,
                &format!("workspaces/{workspace_id}/docs/{doc_id}/pageListing"),
                Some(vec![("max_page_depth".to_string(), max_page_depth.to_string())]),
                None,
            )
            .await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Returns the pages of a doc with their bodies in `content_format`.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the body is not a
    /// page array.
    pub async fn pages(
        &self,
        workspace_id: &str,
        doc_id: &str,
        max_page_depth: i32,
        content_format: &str,
    ) -> Result<Vec<DocPage>, ClickUpError> {
        let body = self
            .v3(
                HttpMethod::Get,
                &format!("workspaces/{workspace_id}/docs/{doc_id}/pages"),
                Some(vec![
                    ("max_page_depth".to_string(), max_page_depth.to_string()),
                    ("content_format".to_string(), content_format.to_string()),
                ]),
                None,
            )
            .await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Fetches one page.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the body is not a page.
    pub async fn get_page(
        &self,
        workspace_id: &str,
        doc_id: &str,
        page_id: &str,
        content_format: &str,
    ) -> Result<DocPage, ClickUpError> {
        let body = self
            .v3(
                HttpMethod::Get,
                &format!("workspaces/{workspace_id}/docs/{doc_id}/pages/{page_id}"),
                Some(vec![("content_format".to_string(), content_format.to_string())]),
                None,
            )
            .await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Adds a page to a doc.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the body is not a page.
    pub async fn create_page(
        &self,
        workspace_id: &str,
        doc_id: &str,
        payload: &CreatePage,
    ) -> Result<DocPage, ClickUpError> {
        let body = self
            .v3(
                HttpMethod::Post,
                &format!("workspaces/{workspace_id}/docs/{doc_id}/pages"),
                None,
                Some(serde_json::to_value(payload)?),
            )
            .await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Edits a page.
    ///
    /// ClickUp answers with an empty body, so nothing is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails.
    pub async fn update_page(
        &self,
        workspace_id: &str,
        doc_id: &str,
        page_id: &str,
        payload: &UpdatePage,
    ) -> Result<(), ClickUpError> {
        self.v3(
            HttpMethod::Put,
            &format!("workspaces/{workspace_id}/docs/{doc_id}/pages/{page_id}"),
            None,
            Some(serde_json::to_value(payload)?),
        )
        .await?;
        Ok(())
    }

    /// Deletes a page.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails.
    pub async fn delete_page(
        &self,
        workspace_id: &str,
        doc_id: &str,
        page_id: &str,
    ) -> Result<(), ClickUpError> {
        self.v3(
            HttpMethod::Delete,
            &format!("workspaces/{workspace_id}/docs/{doc_id}/pages/{page_id}"),
            None,
            None,
        )
        .await?;
        Ok(())
    }

    /// Deletes a doc.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails.
    pub async fn delete(&self, workspace_id: &str, doc_id: &str) -> Result<(), ClickUpError> {
        self.v3(
            HttpMethod::Delete,
            &format!("workspaces/{workspace_id}/docs/{doc_id}"),
            None,
            None,
        )
        .await?;
        Ok(())
    }
}
