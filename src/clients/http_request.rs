//! HTTP request types for the ClickUp API client.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! describing one logical request to the dispatcher.

use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the ClickUp REST API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the method name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The REST API generation an endpoint belongs to.
///
/// Most endpoints live under `/api/v2`. Docs are only served by `/api/v3`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ApiVersion {
    /// The `v2` API, which the configured base URL points at.
    #[default]
    V2,
    /// The `v3` API.
    V3,
}

impl ApiVersion {
    /// Returns the version path segment.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::V2 => "v2",
            Self::V3 => "v3",
        }
    }
}

/// A file sent as a single part of a `multipart/form-data` request.
#[derive(Clone, PartialEq, Eq)]
pub struct FileUpload {
    /// The form field name (ClickUp expects `attachment`).
    pub field_name: String,
    /// The file name reported to the server.
    pub file_name: String,
    /// The file contents.
    pub bytes: Vec<u8>,
}

impl FileUpload {
    /// The form field name ClickUp uses for attachments.
    pub const DEFAULT_FIELD: &'static str = "attachment";

    /// Creates an upload under the default `attachment` field.
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            field_name: Self::DEFAULT_FIELD.to_string(),
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    /// Overrides the form field name.
    #[must_use]
    pub fn field_name(mut self, name: impl Into<String>) -> Self {
        self.field_name = name.into();
        self
    }
}

impl fmt::Debug for FileUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileUpload")
            .field("field_name", &self.field_name)
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// One logical request to the ClickUp API.
///
/// A logical request may span several physical HTTP attempts when the
/// dispatcher retries it.
///
/// # Example
///
/// ```rust
/// use clickup_api::clients::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let request = HttpRequest::builder(HttpMethod::Post, "list/123/task")
///     .body(json!({"name": "Write release notes"}))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.path, "list/123/task");
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The endpoint path, relative to the base URL.
    pub path: String,
    /// Query parameters in order. Keys may repeat (e.g. `statuses[]`).
    pub query: Option<Vec<(String, String)>>,
    /// The JSON body, if any.
    pub body: Option<serde_json::Value>,
    /// A file to upload as `multipart/form-data`, if any.
    pub file: Option<FileUpload>,
    /// The API generation to address.
    pub api_version: ApiVersion,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - the path is empty once leading slashes are removed
    /// - both `body` and `file` are set
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.path.trim_start_matches('/').trim().is_empty() {
            return Err(InvalidHttpRequestError::EmptyPath);
        }
        if self.body.is_some() && self.file.is_some() {
            return Err(InvalidHttpRequestError::BodyWithFile);
        }
        Ok(())
    }

    /// Returns `true` if this request uploads a file.
    #[must_use]
    pub const fn is_upload(&self) -> bool {
        self.file.is_some()
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    query: Option<Vec<(String, String)>>,
    body: Option<serde_json::Value>,
    file: Option<FileUpload>,
    api_version: ApiVersion,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            query: None,
            body: None,
            file: None,
            api_version: ApiVersion::V2,
        }
    }

    /// Sets the JSON body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = Some(query);
        self
    }

    /// Appends a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(Vec::new)
            .push((key.into(), value.into()));
        self
    }

    /// Attaches a file to upload.
    #[must_use]
    pub fn file(mut self, file: FileUpload) -> Self {
        self.file = Some(file);
        self
    }

    /// Addresses another API generation.
    #[must_use]
    pub const fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = version;
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            query: self.query,
            body: self.body,
            file: self.file,
            api_version: self.api_version,
        };
        request.verify()?;
        Ok(request)
    }
}
