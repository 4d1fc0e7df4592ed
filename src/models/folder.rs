//! Folder records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Location, Status};
use super::de;
use super::list::TaskList;

/// A folder groups lists inside a space.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    /// The folder id.
    #[serde(deserialize_with = "de::string_id")]
    pub id: String,
    /// The folder name.
    pub name: String,
    /// Position within the space.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub orderindex: Option<String>,
    /// Whether the folder overrides the space statuses.
    #[serde(default)]
    pub override_statuses: Option<bool>,
    /// Whether the folder is hidden.
    #[serde(default)]
    pub hidden: Option<bool>,
    /// The containing space.
    #[serde(default)]
    pub space: Option<Location>,
    /// Number of tasks in the folder.
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub task_count: Option<i64>,
    /// Lists inside the folder.
    #[serde(default)]
    pub lists: Vec<TaskList>,
    /// Folder-level statuses, when overridden.
    #[serde(default)]
    pub statuses: Vec<Status>,
    /// Whether the folder is archived.
    #[serde(default, deserialize_with = "de::lenient_bool")]
    pub archived: bool,
    /// Creation time as a millisecond timestamp.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub date_created: Option<String>,
    /// Last update time as a millisecond timestamp.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub date_updated: Option<String>,
}

impl Folder {
    /// Returns the creation time.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        de::millis_to_datetime(self.date_created.as_deref())
    }

    /// Returns the last update time.
    #[must_use]
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        de::millis_to_datetime(self.date_updated.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_folder_with_nested_lists() {
        let folder: Folder = serde_json::from_value(json!({
            "id": "457",
            "name": "Updated Folder Name",
            "orderindex": 0,
            "override_statuses": false,
            "hidden": false,
            "space": {"id": "789", "name": "Space Name", "access": true},
            "task_count": "0",
            "lists": [{"id": "124", "name": "List", "orderindex": 1}],
            "date_created": 1567780450202_i64
        }))
        .unwrap();

        assert_eq!(folder.orderindex.as_deref(), Some("0"));
        assert_eq!(folder.task_count, Some(0));
        assert_eq!(folder.lists[0].id, "124");
        assert_eq!(
            folder.created_at().unwrap().timestamp_millis(),
            1_567_780_450_202
        );
        assert!(folder.updated_at().is_none());
    }
}
