//! Workspace (team) records.

use serde::{Deserialize, Serialize};

use super::common::Member;
use super::de;

/// A ClickUp workspace. The v2 API calls these "teams".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    /// The workspace id.
    #[serde(deserialize_with = "de::string_id")]
    pub id: String,
    /// The workspace name.
    pub name: String,
    /// The workspace color (hex).
    #[serde(default)]
    pub color: Option<String>,
    /// URL of the workspace avatar.
    #[serde(default)]
    pub avatar: Option<String>,
    /// Workspace members.
    #[serde(default)]
    pub members: Vec<Member>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_workspace_deserializes_team_payload() {
        let workspace: Workspace = serde_json::from_value(json!({
            "id": "1234",
            "name": "My ClickUp Workspace",
            "color": "#000000",
            "avatar": null,
            "members": [{"user": {"id": 123, "username": "John Doe"}}]
        }))
        .unwrap();

        assert_eq!(workspace.id, "1234");
        assert_eq!(workspace.members.len(), 1);
        assert_eq!(workspace.members[0].user.id, "123");
        assert!(workspace.avatar.is_none());
    }
}
