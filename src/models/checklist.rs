//! Task checklists.

use serde::{Deserialize, Serialize};

use super::common::User;
use super::de;

/// One line of a checklist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// The item id.
    #[serde(deserialize_with = "de::string_id")]
    pub id: String,
    /// The item text.
    pub name: String,
    /// Position within the checklist.
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub orderindex: Option<i64>,
    /// The user the item is assigned to.
    #[serde(default)]
    pub assignee: Option<User>,
    /// Whether the item is ticked.
    #[serde(default, deserialize_with = "de::lenient_bool")]
    pub resolved: bool,
    /// Id of the parent item when nested.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub parent: Option<String>,
}

/// A checklist attached to a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist {
    /// The checklist id.
    #[serde(deserialize_with = "de::string_id")]
    pub id: String,
    /// The owning task id.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub task_id: Option<String>,
    /// The checklist name.
    pub name: String,
    /// Position among the task's checklists.
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub orderindex: Option<i64>,
    /// Number of ticked items.
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub resolved: Option<i64>,
    /// Number of open items.
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub unresolved: Option<i64>,
    /// The items, in order.
    #[serde(default)]
    pub items: Vec<ChecklistItem>,
}

impl Checklist {
    /// Looks up an item by id.
    #[must_use]
    pub fn item(&self, item_id: &str) -> Option<&ChecklistItem> {
        self.items.iter().find(|item| item.id == item_id)
    }
}

/// Payload for editing a checklist item.
///
/// `assignee` and `parent` are tri-state: leave them `None` to keep the
/// current value, or set `Some(None)` to clear it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateChecklistItem {
    /// New text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Tick or untick the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<bool>,
    /// New assignee user id, or `Some(None)` to unassign.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<Option<String>>,
    /// New parent item id, or `Some(None)` to un-nest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Option<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_checklist_deserializes_items() {
        let checklist: Checklist = serde_json::from_value(json!({
            "id": "b955c4dc-b8a8-48d8-a0c6-b4200788a683",
            "task_id": "9hz",
            "name": "Release",
            "orderindex": 0,
            "resolved": 1,
            "unresolved": 1,
            "items": [
                {"id": "21e08dc8", "name": "Tag build", "orderindex": 0, "resolved": true, "parent": null},
                {"id": "3a77", "name": "Announce", "orderindex": "1", "resolved": false,
                 "assignee": {"id": 183, "username": "Ada"}}
            ]
        }))
        .unwrap();

        assert_eq!(checklist.items.len(), 2);
        assert!(checklist.item("21e08dc8").unwrap().resolved);
        assert_eq!(checklist.item("3a77").unwrap().orderindex, Some(1));
        assert_eq!(
            checklist.item("3a77").unwrap().assignee.as_ref().unwrap().id,
            "183"
        );
    }

    #[test]
    fn test_update_item_can_clear_assignee() {
        let payload = UpdateChecklistItem {
            resolved: Some(true),
            assignee: Some(None),
            ..UpdateChecklistItem::default()
        };
        assert_eq!(
            serde_json::to_value(payload).unwrap(),
            json!({"resolved": true, "assignee": null})
        );
    }
}
