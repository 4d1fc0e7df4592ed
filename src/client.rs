//! The [`ClickUp`] facade.

use std::sync::Arc;

use crate::clients::{ClickUpError, HttpClient, RestClient};
use crate::config::{ApiToken, ClickUpConfig};
use crate::models::User;
use crate::resources::{
    Checklists, Comments, CustomFields, Docs, Folders, Goals, Guests, Lists, Spaces, Tags, Tasks,
    TimeEntries, Views, Webhooks, Workspaces,
};

/// Entry point to the ClickUp API.
///
/// All resource handles returned by a `ClickUp` share one dispatcher, so they
/// share its connection pool and rate-limit state. Cloning is cheap and
/// clones share the same dispatcher too.
///
/// # Example
///
/// ```rust,ignore
/// use clickup_api::ClickUp;
///
/// let client = ClickUp::with_token("pk_123")?;
///
/// let me = client.get_authenticated_user().await?;
/// println!("Hello, {}", me.username.unwrap_or_default());
///
/// for team in client.workspaces().list().await? {
///     println!("{} ({})", team.name, team.id);
/// }
/// ```
#[derive(Clone, Debug)]
pub struct ClickUp {
    rest: RestClient,
}

// Verify ClickUp is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClickUp>();
};

impl ClickUp {
    /// Creates a client from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError::Config`] if the HTTP transport cannot be built.
    pub fn new(config: &ClickUpConfig) -> Result<Self, ClickUpError> {
        let http_client = HttpClient::new(config)?;
        Ok(Self::from_http_client(Arc::new(http_client)))
    }

    /// Creates a client with default settings for a token.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError::Config`] if the token is empty or the HTTP
    /// transport cannot be built.
    pub fn with_token(token: impl Into<String>) -> Result<Self, ClickUpError> {
        let config = ClickUpConfig::builder()
            .api_token(ApiToken::new(token)?)
            .build()?;
        Self::new(&config)
    }

    /// Wraps an existing dispatcher, e.g. one with a custom
    /// [`Sleeper`](crate::clients::Sleeper).
    #[must_use]
    pub const fn from_http_client(http_client: Arc<HttpClient>) -> Self {
        Self {
            rest: RestClient::new(http_client),
        }
    }

    /// Returns the shared dispatcher.
    #[must_use]
    pub const fn http_client(&self) -> &Arc<HttpClient> {
        self.rest.http_client()
    }

    /// Returns the untyped REST client, for endpoints without a handle.
    #[must_use]
    pub const fn rest(&self) -> &RestClient {
        &self.rest
    }

    /// Fetches the user the token belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the response has no
    /// `user` key.
    pub async fn get_authenticated_user(&self) -> Result<User, ClickUpError> {
        self.rest.get_field("user", None, "user").await
    }

    /// Workspace (team) endpoints.
    #[must_use]
    pub fn workspaces(&self) -> Workspaces {
        Workspaces::new(self.rest.clone())
    }

    /// Space endpoints.
    #[must_use]
    pub fn spaces(&self) -> Spaces {
        Spaces::new(self.rest.clone())
    }

    /// Folder endpoints.
    #[must_use]
    pub fn folders(&self) -> Folders {
        Folders::new(self.rest.clone())
    }

    /// List endpoints.
    #[must_use]
    pub fn lists(&self) -> Lists {
        Lists::new(self.rest.clone())
    }

    /// Task endpoints.
    #[must_use]
    pub fn tasks(&self) -> Tasks {
        Tasks::new(self.rest.clone())
    }

    /// Comment endpoints.
    #[must_use]
    pub fn comments(&self) -> Comments {
        Comments::new(self.rest.clone())
    }

    /// Space tag endpoints.
    #[must_use]
    pub fn tags(&self) -> Tags {
        Tags::new(self.rest.clone())
    }

    /// Webhook endpoints.
    #[must_use]
    pub fn webhooks(&self) -> Webhooks {
        Webhooks::new(self.rest.clone())
    }

    /// Goal endpoints.
    #[must_use]
    pub fn goals(&self) -> Goals {
        Goals::new(self.rest.clone())
    }

    /// Checklist endpoints.
    #[must_use]
    pub fn checklists(&self) -> Checklists {
        Checklists::new(self.rest.clone())
    }

    /// Time tracking endpoints.
    #[must_use]
    pub fn time_entries(&self) -> TimeEntries {
        TimeEntries::new(self.rest.clone())
    }

    /// View endpoints.
    #[must_use]
    pub fn views(&self) -> Views {
        Views::new(self.rest.clone())
    }

    /// Custom field endpoints.
    #[must_use]
    pub fn custom_fields(&self) -> CustomFields {
        CustomFields::new(self.rest.clone())
    }

    /// Guest endpoints (Enterprise workspaces).
    #[must_use]
    pub fn guests(&self) -> Guests {
        Guests::new(self.rest.clone())
    }

    /// Doc endpoints (v3 API).
    #[must_use]
    pub fn docs(&self) -> Docs {
        Docs::new(self.rest.clone())
    }

    /// Releases this handle.
    ///
    /// Pooled connections close once the last clone of the dispatcher is
    /// dropped.
    pub fn close(self) {
        tracing::debug!(
            remaining_handles = Arc::strong_count(self.rest.http_client()) - 1,
            "closing ClickUp client"
        );
    }
}
