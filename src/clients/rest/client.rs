//! REST client implementation for the ClickUp API.
//!
//! This module provides the [`RestClient`] type for making REST API requests
//! through the shared dispatcher with path normalization and typed responses.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::clients::{
    ApiVersion, ClickUpError, FileUpload, HttpClient, HttpMethod, HttpRequest,
    InvalidHttpRequestError,
};

/// Ordered query parameters. Keys may repeat.
pub type Query = Vec<(String, String)>;

/// REST API client for the ClickUp API.
///
/// Cloning a `RestClient` is cheap: every clone shares the same dispatcher,
/// and therefore the same connection pool and rate-limit state.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use clickup_api::clients::RestClient;
/// use serde_json::json;
///
/// let rest = RestClient::new(http_client);
///
/// // GET request
/// let teams = rest.get("team", None).await?;
///
/// // POST request with body
/// let task = rest.post("list/901/task", json!({"name": "Ship it"})).await?;
/// ```
#[derive(Clone, Debug)]
pub struct RestClient {
    /// The shared request dispatcher.
    http_client: Arc<HttpClient>,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client on top of a shared dispatcher.
    #[must_use]
    pub const fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Returns the underlying dispatcher.
    #[must_use]
    pub const fn http_client(&self) -> &Arc<HttpClient> {
        &self.http_client
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - The REST API path (e.g., "team", "task/abc123")
    /// * `query` - Optional query parameters
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError::InvalidRequest`] if the path is empty, or any
    /// error produced by the dispatcher.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let query = vec![("archived".to_string(), "false".to_string())];
    /// let spaces = client.get("team/123/space", Some(query)).await?;
    /// ```
    pub async fn get(&self, path: &str, query: Option<Query>) -> Result<Value, ClickUpError> {
        self.make_request(HttpMethod::Get, path, None, query, None)
            .await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// Pass `Value::Null` to send no body at all.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError::InvalidRequest`] if the path is empty, or any
    /// error produced by the dispatcher.
    pub async fn post(&self, path: &str, body: Value) -> Result<Value, ClickUpError> {
        self.make_request(HttpMethod::Post, path, Some(body), None, None)
            .await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError::InvalidRequest`] if the path is empty, or any
    /// error produced by the dispatcher.
    pub async fn put(&self, path: &str, body: Value) -> Result<Value, ClickUpError> {
        self.make_request(HttpMethod::Put, path, Some(body), None, None)
            .await
    }

    /// Sends a DELETE request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError::InvalidRequest`] if the path is empty, or any
    /// error produced by the dispatcher.
    pub async fn delete(&self, path: &str, query: Option<Query>) -> Result<Value, ClickUpError> {
        self.make_request(HttpMethod::Delete, path, None, query, None)
            .await
    }

    /// Sends a DELETE request that carries a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError::InvalidRequest`] if the path is empty, or any
    /// error produced by the dispatcher.
    pub async fn delete_with_body(&self, path: &str, body: Value) -> Result<Value, ClickUpError> {
        self.make_request(HttpMethod::Delete, path, Some(body), None, None)
            .await
    }

    /// Sends a request to another API generation.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let docs = client
    ///     .versioned(ApiVersion::V3, HttpMethod::Get, "workspaces/1/docs", None, None)
    ///     .await?;
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError::InvalidRequest`] if the path is empty, or any
    /// error produced by the dispatcher.
    pub async fn versioned(
        &self,
        version: ApiVersion,
        method: HttpMethod,
        path: &str,
        query: Option<Query>,
        body: Option<Value>,
    ) -> Result<Value, ClickUpError> {
        let request = Self::build_request(method, path, body, query, None)?;
        let request = HttpRequest {
            api_version: version,
            ..request
        };
        self.http_client.execute(&request).await
    }

    /// Uploads a file as `multipart/form-data` with a POST request.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError::InvalidRequest`] if the path is empty, or any
    /// error produced by the dispatcher.
    pub async fn upload(&self, path: &str, file: FileUpload) -> Result<Value, ClickUpError> {
        self.make_request(HttpMethod::Post, path, None, None, Some(file))
            .await
    }

    /// Sends a GET request and deserializes the whole body.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError::Decode`] if the body does not match `T`.
    pub async fn get_as<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<Query>,
    ) -> Result<T, ClickUpError> {
        let body = self.get(path, query).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Sends a POST request with a serialized payload and deserializes the body.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError::Decode`] if the payload cannot be serialized or
    /// the body does not match `T`.
    pub async fn post_as<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        payload: &B,
    ) -> Result<T, ClickUpError> {
        let body = self.post(path, serde_json::to_value(payload)?).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Sends a PUT request with a serialized payload and deserializes the body.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError::Decode`] if the payload cannot be serialized or
    /// the body does not match `T`.
    pub async fn put_as<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        payload: &B,
    ) -> Result<T, ClickUpError> {
        let body = self.put(path, serde_json::to_value(payload)?).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Sends a GET request and deserializes one field of the response envelope.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// // GET team -> {"teams": [...]}
    /// let teams: Vec<Workspace> = client.get_field("team", None, "teams").await?;
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError::Decode`] if the key is missing or its value
    /// does not match `T`.
    pub async fn get_field<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<Query>,
        key: &str,
    ) -> Result<T, ClickUpError> {
        let body = self.get(path, query).await?;
        take_field(body, key)
    }

    /// Internal helper to build and send requests.
    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
        query: Option<Query>,
        file: Option<FileUpload>,
    ) -> Result<Value, ClickUpError> {
        let request = Self::build_request(method, path, body, query, file)?;
        self.http_client.execute(&request).await
    }

    fn build_request(
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
        query: Option<Query>,
        file: Option<FileUpload>,
    ) -> Result<HttpRequest, ClickUpError> {
        let normalized_path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, normalized_path);

        if let Some(body_value) = body.filter(|b| !b.is_null()) {
            builder = builder.body(body_value);
        }

        if let Some(query_params) = query {
            builder = builder.query(query_params);
        }

        if let Some(file) = file {
            builder = builder.file(file);
        }

        Ok(builder.build()?)
    }
}

/// Removes `key` from a JSON object body and deserializes it.
///
/// # Errors
///
/// Returns [`ClickUpError::Decode`] if the body has no such key or the value
/// does not match `T`.
pub(crate) fn take_field<T: DeserializeOwned>(mut body: Value, key: &str) -> Result<T, ClickUpError> {
    let value = body
        .get_mut(key)
        .map(Value::take)
        .ok_or_else(|| ClickUpError::unexpected(format!("missing '{key}' key in response")))?;
    Ok(serde_json::from_value(value)?)
}

/// Strips leading `/` characters and rejects empty paths.
fn normalize_path(path: &str) -> Result<String, InvalidHttpRequestError> {
    let path = path.trim().trim_start_matches('/');

    if path.is_empty() {
        return Err(InvalidHttpRequestError::EmptyPath);
    }

    Ok(path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // === Path Normalization Tests ===

    #[test]
    fn test_normalize_path_strips_leading_slash() {
        assert_eq!(normalize_path("/team").unwrap(), "team");
        assert_eq!(normalize_path("//task/abc").unwrap(), "task/abc");
    }

    #[test]
    fn test_normalize_path_keeps_nested_paths() {
        assert_eq!(
            normalize_path("space/9/tag/needs%20review").unwrap(),
            "space/9/tag/needs%20review"
        );
    }

    #[test]
    fn test_normalize_path_empty_path_returns_error() {
        assert!(matches!(
            normalize_path(""),
            Err(InvalidHttpRequestError::EmptyPath)
        ));
        assert!(matches!(
            normalize_path("/"),
            Err(InvalidHttpRequestError::EmptyPath)
        ));
    }

    // === Envelope Tests ===

    #[test]
    fn test_take_field_unwraps_envelope() {
        let names: Vec<String> = take_field(json!({"tags": ["a", "b"]}), "tags").unwrap();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_take_field_missing_key_is_decode_error() {
        let result: Result<Vec<String>, _> = take_field(json!({"teams": []}), "team");
        let error = result.unwrap_err();
        assert!(matches!(error, ClickUpError::Decode { .. }));
        assert!(error.to_string().contains("'team'"));
    }

    #[test]
    fn test_take_field_wrong_shape_is_decode_error() {
        let result: Result<Vec<String>, _> = take_field(json!({"tags": 5}), "tags");
        assert!(matches!(
            result,
            Err(ClickUpError::Decode { source: Some(_), .. })
        ));
    }

    #[test]
    fn test_rest_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RestClient>();
    }
}
