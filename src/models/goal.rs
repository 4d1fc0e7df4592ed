//! Goals and their key results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::de;

/// How a key result measures progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyResultType {
    /// A numeric target.
    Number,
    /// A monetary target.
    Currency,
    /// Done or not done.
    Boolean,
    /// A percentage target.
    Percentage,
    /// Progress follows linked tasks or lists.
    Automatic,
    /// A type this client does not know about.
    #[serde(other)]
    Unknown,
}

/// A measurable target inside a goal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyResult {
    /// The key result id.
    #[serde(deserialize_with = "de::string_id")]
    pub id: String,
    /// The owning goal id.
    #[serde(default)]
    pub goal_id: Option<String>,
    /// The key result name.
    pub name: String,
    /// How progress is measured.
    #[serde(default, rename = "type")]
    pub kind: Option<KeyResultType>,
    /// Ids of the owners.
    #[serde(default, deserialize_with = "de::id_list")]
    pub owners: Vec<String>,
    /// Starting value.
    #[serde(default)]
    pub steps_start: Option<f64>,
    /// Target value.
    #[serde(default)]
    pub steps_end: Option<f64>,
    /// Current value.
    #[serde(default)]
    pub steps_current: Option<f64>,
    /// Unit label.
    #[serde(default)]
    pub unit: Option<String>,
    /// Linked task ids.
    #[serde(default)]
    pub task_ids: Vec<String>,
    /// Linked list ids.
    #[serde(default)]
    pub list_ids: Vec<String>,
    /// Free-form note.
    #[serde(default)]
    pub note: Option<String>,
}

/// A ClickUp goal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// The goal id.
    #[serde(deserialize_with = "de::string_id")]
    pub id: String,
    /// Short numeric id shown in the UI.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub pretty_id: Option<String>,
    /// The goal name.
    pub name: String,
    /// The workspace id.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub team_id: Option<String>,
    /// Id of the creator.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub creator: Option<String>,
    /// The goal color (hex).
    #[serde(default)]
    pub color: Option<String>,
    /// Creation time as a millisecond timestamp.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub date_created: Option<String>,
    /// Due date as a millisecond timestamp.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub due_date: Option<String>,
    /// The goal description.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the goal is private.
    #[serde(default, deserialize_with = "de::lenient_bool")]
    pub private: bool,
    /// Whether the goal is archived.
    #[serde(default, deserialize_with = "de::lenient_bool")]
    pub archived: bool,
    /// Whether the goal may have several owners.
    #[serde(default, deserialize_with = "de::lenient_bool")]
    pub multiple_owners: bool,
    /// Ids of the owners.
    #[serde(default, deserialize_with = "de::id_list")]
    pub owners: Vec<String>,
    /// The goal's key results.
    #[serde(default)]
    pub key_results: Vec<KeyResult>,
    /// Overall progress in percent.
    #[serde(default)]
    pub percent_completed: Option<f64>,
    /// Id of the goal folder, if any.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub folder_id: Option<String>,
}

impl Goal {
    /// Returns the due date.
    #[must_use]
    pub fn due_at(&self) -> Option<DateTime<Utc>> {
        de::millis_to_datetime(self.due_date.as_deref())
    }

    /// Returns the creation time.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        de::millis_to_datetime(self.date_created.as_deref())
    }
}

/// Payload for creating a goal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateGoal {
    /// The goal name.
    pub name: String,
    /// Due date as a millisecond timestamp.
    pub due_date: i64,
    /// The goal description.
    pub description: String,
    /// Whether the goal may have several owners.
    pub multiple_owners: bool,
    /// User ids of the owners.
    pub owners: Vec<i64>,
    /// The goal color (hex).
    pub color: String,
}

/// Payload for updating a goal. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateGoal {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New due date as a millisecond timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<i64>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// User ids to remove from the owners.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rem_owners: Vec<i64>,
    /// User ids to add to the owners.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub add_owners: Vec<i64>,
    /// New color (hex).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Payload for adding a key result to a goal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateKeyResult {
    /// The key result name.
    pub name: String,
    /// How progress is measured.
    #[serde(rename = "type")]
    pub kind: KeyResultType,
    /// Starting value.
    pub steps_start: f64,
    /// Target value.
    pub steps_end: f64,
    /// Unit label.
    pub unit: String,
    /// User ids of the owners.
    pub owners: Vec<i64>,
    /// Linked task ids, for automatic progress.
    pub task_ids: Vec<String>,
    /// Linked list ids, for automatic progress.
    pub list_ids: Vec<String>,
    /// Free-form note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl CreateKeyResult {
    /// Creates a numeric key result counting from `start` to `end`.
    #[must_use]
    pub fn number(name: impl Into<String>, start: f64, end: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: KeyResultType::Number,
            steps_start: start,
            steps_end: end,
            unit: unit.into(),
            owners: Vec::new(),
            task_ids: Vec::new(),
            list_ids: Vec::new(),
            note: None,
        }
    }
}

/// Payload for editing a key result. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateKeyResult {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New measurement type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<KeyResultType>,
    /// New starting value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps_start: Option<f64>,
    /// New target value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps_end: Option<f64>,
    /// Progress so far.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps_current: Option<f64>,
    /// New unit label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Replacement owner user ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owners: Option<Vec<i64>>,
    /// Replacement linked task ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_ids: Option<Vec<String>>,
    /// Replacement linked list ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_ids: Option<Vec<String>>,
    /// New note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_goal_deserializes_with_key_results() {
        let goal: Goal = serde_json::from_value(json!({
            "id": "e53a033c-900e-462d-a849-4a216b06d930",
            "pretty_id": "6",
            "name": "Goal Name",
            "team_id": "512",
            "creator": 183,
            "color": "#32a852",
            "date_created": "1568044355026",
            "due_date": "1568036964079",
            "description": "Goal Description",
            "private": false,
            "archived": false,
            "multiple_owners": true,
            "owners": [{"id": 182, "username": "Pat"}],
            "key_results": [{
                "id": "947d46ed-8480-49bc-8c57-e569747efe93",
                "goal_id": "e53a033c-900e-462d-a849-4a216b06d930",
                "name": "New Key Result Name",
                "type": "number",
                "unit": "km",
                "steps_start": 0,
                "steps_end": 10,
                "steps_current": 5,
                "owners": [183]
            }, {
                "id": "x",
                "name": "Odd",
                "type": "mystery"
            }],
            "percent_completed": 50
        }))
        .unwrap();

        assert_eq!(goal.creator.as_deref(), Some("183"));
        assert_eq!(goal.owners, vec!["182"]);
        assert_eq!(goal.key_results[0].kind, Some(KeyResultType::Number));
        assert_eq!(goal.key_results[0].owners, vec!["183"]);
        assert_eq!(goal.key_results[1].kind, Some(KeyResultType::Unknown));
        assert!(goal.due_at().is_some());
    }

    #[test]
    fn test_update_goal_skips_empty_owner_lists() {
        let payload = UpdateGoal {
            add_owners: vec![183],
            ..UpdateGoal::default()
        };
        assert_eq!(
            serde_json::to_value(payload).unwrap(),
            json!({"add_owners": [183]})
        );
    }

    #[test]
    fn test_create_key_result_serializes_type() {
        let payload = CreateKeyResult::number("Distance", 0.0, 10.0, "km");
        assert_eq!(
            serde_json::to_value(payload).unwrap(),
            json!({
                "name": "Distance",
                "type": "number",
                "steps_start": 0.0,
                "steps_end": 10.0,
                "unit": "km",
                "owners": [],
                "task_ids": [],
                "list_ids": []
            })
        );
    }
}
