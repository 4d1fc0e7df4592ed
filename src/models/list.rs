//! List records and payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{Location, Priority, PriorityInfo, User};
use super::de;

/// A list of tasks, inside a folder or directly inside a space.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskList {
    /// The list id.
    #[serde(deserialize_with = "de::string_id")]
    pub id: String,
    /// The list name.
    pub name: String,
    /// Position within the folder or space.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub orderindex: Option<String>,
    /// The list description.
    #[serde(default)]
    pub content: Option<String>,
    /// The list's own status badge (`{"status", "color", "hide_label"}`).
    #[serde(default)]
    pub status: Option<Value>,
    /// The list priority.
    #[serde(default)]
    pub priority: Option<PriorityInfo>,
    /// The list owner.
    #[serde(default)]
    pub assignee: Option<User>,
    /// Number of tasks in the list.
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub task_count: Option<i64>,
    /// Due date as a millisecond timestamp.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub due_date: Option<String>,
    /// Start date as a millisecond timestamp.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub start_date: Option<String>,
    /// The containing folder (hidden for folderless lists).
    #[serde(default)]
    pub folder: Option<Location>,
    /// The containing space.
    #[serde(default)]
    pub space: Option<Location>,
    /// Whether the list is archived.
    #[serde(default, deserialize_with = "de::lenient_bool")]
    pub archived: bool,
    /// Whether the list overrides the inherited statuses.
    #[serde(default)]
    pub override_statuses: Option<bool>,
    /// The caller's permission level on the list.
    #[serde(default)]
    pub permission_level: Option<String>,
}

impl TaskList {
    /// Returns the due date.
    #[must_use]
    pub fn due_at(&self) -> Option<DateTime<Utc>> {
        de::millis_to_datetime(self.due_date.as_deref())
    }

    /// Returns the start date.
    #[must_use]
    pub fn starts_at(&self) -> Option<DateTime<Utc>> {
        de::millis_to_datetime(self.start_date.as_deref())
    }
}

/// Payload for creating a list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateList {
    /// The list name.
    pub name: String,
    /// The list description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Due date as a millisecond timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<i64>,
    /// The list priority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    /// User id of the list owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// The list's status badge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl CreateList {
    /// Creates a payload with only a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Payload for updating a list. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateList {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// New due date as a millisecond timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<i64>,
    /// Whether the due date includes a time of day.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date_time: Option<bool>,
    /// New priority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    /// User id of the new owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Remove the list's status badge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unset_status: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_deserializes_folderless_payload() {
        let list: TaskList = serde_json::from_value(json!({
            "id": "124",
            "name": "Updated List Name",
            "orderindex": 1,
            "content": "Updated List Content",
            "status": {"status": "red", "color": "#e50000", "hide_label": true},
            "priority": {"priority": "high", "color": "#f50000"},
            "assignee": null,
            "task_count": null,
            "due_date": "1567780450202",
            "start_date": null,
            "folder": {"id": "456", "name": "Folder Name", "hidden": false, "access": true},
            "space": {"id": "789", "name": "Space Name", "access": true},
            "archived": false
        }))
        .unwrap();

        assert_eq!(list.priority.as_ref().unwrap().priority, Some(Priority::High));
        assert!(list.due_at().is_some());
        assert!(list.starts_at().is_none());
        assert_eq!(list.space.unwrap().id, "789");
    }

    #[test]
    fn test_create_list_serializes_priority_as_level() {
        let payload = CreateList {
            priority: Some(Priority::Urgent),
            ..CreateList::new("Backlog")
        };
        assert_eq!(
            serde_json::to_value(payload).unwrap(),
            json!({"name": "Backlog", "priority": 1})
        );
    }
}
