//! Webhook subscription endpoints.

use crate::clients::rest::take_field;
use crate::clients::{ClickUpError, RestClient};
use crate::models::{CreateWebhook, UpdateWebhook, Webhook};

/// Handle for webhook endpoints.
#[derive(Clone, Debug)]
pub struct Webhooks {
    rest: RestClient,
}

impl Webhooks {
    pub(crate) const fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// Lists the webhooks the token created in a workspace.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the response has no
    /// `webhooks` key.
    pub async fn list(&self, workspace_id: &str) -> Result<Vec<Webhook>, ClickUpError> {
        self.rest
            .get_field(&format!("team/{workspace_id}/webhook"), None, "webhooks")
            .await
    }

    /// Creates a webhook.
    ///
    /// The returned webhook carries the signing `secret`; store it, since
    /// later reads do not include it. See [`crate::webhooks::verify_signature`].
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the response has no
    /// `webhook` key.
    pub async fn create(
        &self,
        workspace_id: &str,
        payload: &CreateWebhook,
    ) -> Result<Webhook, ClickUpError> {
        let body = self
            .rest
            .post(
                &format!("team/{workspace_id}/webhook"),
                serde_json::to_value(payload)?,
            )
            .await?;
        take_field(body, "webhook")
    }

    /// Updates a webhook.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the response has no
    /// `webhook` key.
    pub async fn update(
        &self,
        webhook_id: &str,
        payload: &UpdateWebhook,
    ) -> Result<Webhook, ClickUpError> {
        let body = self
            .rest
            .put(&format!("webhook/{webhook_id}"), serde_json::to_value(payload)?)
            .await?;
        take_field(body, "webhook")
    }

    /// Deletes a webhook.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails.
    pub async fn delete(&self, webhook_id: &str) -> Result<(), ClickUpError> {
        self.rest
            .delete(&format!("webhook/{webhook_id}"), None)
            .await?;
        Ok(())
    }
}
