//! Webhook subscriptions.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::de;

/// A webhook subscription on a workspace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webhook {
    /// The webhook id.
    #[serde(deserialize_with = "de::string_id")]
    pub id: String,
    /// Id of the user who created the webhook.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub userid: Option<String>,
    /// The workspace id.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub team_id: Option<String>,
    /// The URL events are delivered to.
    #[serde(default)]
    pub endpoint: String,
    /// The OAuth client that owns the webhook.
    #[serde(default)]
    pub client_id: Option<String>,
    /// Subscribed events (e.g. `taskCreated`), or `["*"]` for all.
    #[serde(default)]
    pub events: Vec<String>,
    /// Scope: only events for this task.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub task_id: Option<String>,
    /// Scope: only events for this list.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub list_id: Option<String>,
    /// Scope: only events for this folder.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub folder_id: Option<String>,
    /// Scope: only events for this space.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub space_id: Option<String>,
    /// Delivery health (`{"status", "fail_count"}`), kept raw.
    #[serde(default)]
    pub health: Option<Value>,
    /// Signing secret. Only returned when the webhook is created.
    #[serde(default)]
    pub secret: Option<String>,
}

/// Payload for creating a webhook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateWebhook {
    /// The URL events are delivered to.
    pub endpoint: String,
    /// Events to subscribe to.
    pub events: Vec<String>,
    /// Limit to one space.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_id: Option<String>,
    /// Limit to one folder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
    /// Limit to one list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,
    /// Limit to one task.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
}

impl CreateWebhook {
    /// Creates a payload subscribing `endpoint` to `events`.
    #[must_use]
    pub fn new<I, S>(endpoint: impl Into<String>, events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            endpoint: endpoint.into(),
            events: events.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

/// Payload for updating a webhook. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateWebhook {
    /// New delivery URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// New event subscriptions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,
    /// `active` or `inactive`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_webhook_create_response() {
        let webhook: Webhook = serde_json::from_value(json!({
            "id": "4b67ac88-e506-4a29-9d42-26e504e3435e",
            "userid": 183,
            "team_id": 108,
            "endpoint": "https://yourdomain.com/webhook",
            "client_id": "QVOQP06ZXC6CMGVFKB0ZT7J9Y7APOYGO",
            "events": ["taskCreated"],
            "task_id": null,
            "list_id": null,
            "folder_id": null,
            "space_id": null,
            "health": {"status": "active", "fail_count": 0},
            "secret": "O94IM25S7PXBPYTMNXLLET230SRP0S89COR7B1YOJ2ZIE8WQNK5UUKEF26W0Z5GA"
        }))
        .unwrap();

        assert_eq!(webhook.userid.as_deref(), Some("183"));
        assert_eq!(webhook.team_id.as_deref(), Some("108"));
        assert!(webhook.secret.is_some());
    }

    #[test]
    fn test_create_webhook_payload() {
        let payload = CreateWebhook {
            list_id: Some("901".into()),
            ..CreateWebhook::new("https://example.com/hook", ["taskCreated", "taskUpdated"])
        };
        assert_eq!(
            serde_json::to_value(payload).unwrap(),
            json!({
                "endpoint": "https://example.com/hook",
                "events": ["taskCreated", "taskUpdated"],
                "list_id": "901"
            })
        );
    }
}
