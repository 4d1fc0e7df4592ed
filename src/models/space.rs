//! Space records and payloads.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::{Member, Status};
use super::de;

/// A space: the top-level container inside a workspace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Space {
    /// The space id.
    #[serde(deserialize_with = "de::string_id")]
    pub id: String,
    /// The space name.
    pub name: String,
    /// The space color (hex).
    #[serde(default)]
    pub color: Option<String>,
    /// Whether the space is private.
    #[serde(default, deserialize_with = "de::lenient_bool")]
    pub private: bool,
    /// Whether admins can manage the space.
    #[serde(default)]
    pub admin_can_manage: Option<bool>,
    /// URL of the space avatar.
    #[serde(default)]
    pub avatar: Option<String>,
    /// Space members.
    #[serde(default)]
    pub members: Vec<Member>,
    /// Statuses available to tasks in this space.
    #[serde(default)]
    pub statuses: Vec<Status>,
    /// Whether tasks may have several assignees.
    #[serde(default, deserialize_with = "de::lenient_bool")]
    pub multiple_assignees: bool,
    /// ClickApp toggles (`due_dates`, `time_tracking`, `tags`, ...), kept raw.
    #[serde(default)]
    pub features: Map<String, Value>,
    /// Whether the space is archived.
    #[serde(default, deserialize_with = "de::lenient_bool")]
    pub archived: bool,
}

/// Payload for creating a space.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateSpace {
    /// The space name.
    pub name: String,
    /// Whether tasks may have several assignees.
    pub multiple_assignees: bool,
    /// ClickApp toggles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Map<String, Value>>,
    /// The space color (hex).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl CreateSpace {
    /// Creates a payload with only a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            multiple_assignees: true,
            ..Self::default()
        }
    }
}

/// Payload for updating a space. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateSpace {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New color (hex).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// New privacy setting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    /// Whether admins can manage the space.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_can_manage: Option<bool>,
    /// Whether tasks may have several assignees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_assignees: Option<bool>,
    /// ClickApp toggles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Map<String, Value>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_space_deserializes_with_features() {
        let space: Space = serde_json::from_value(json!({
            "id": 790,
            "name": "Updated Space Name",
            "private": false,
            "statuses": [{"status": "to do", "type": "open", "orderindex": 0, "color": "#d3d3d3"}],
            "multiple_assignees": false,
            "features": {"due_dates": {"enabled": false}}
        }))
        .unwrap();

        assert_eq!(space.id, "790");
        assert_eq!(space.statuses.len(), 1);
        assert!(space.features.contains_key("due_dates"));
        assert!(!space.archived);
    }

    #[test]
    fn test_update_space_skips_unset_fields() {
        let payload = UpdateSpace {
            name: Some("Renamed".into()),
            ..UpdateSpace::default()
        };
        assert_eq!(serde_json::to_value(payload).unwrap(), json!({"name": "Renamed"}));
    }
}
