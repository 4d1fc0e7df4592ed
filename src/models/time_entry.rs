//! Time tracking entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::User;
use super::de;
use super::tag::Tag;

/// The task a time entry is booked against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntryTask {
    /// The task id.
    #[serde(deserialize_with = "de::string_id")]
    pub id: String,
    /// The task name.
    #[serde(default)]
    pub name: Option<String>,
    /// The task's custom id, if custom ids are enabled.
    #[serde(default)]
    pub custom_id: Option<String>,
}

/// A tracked span of time.
///
/// A running timer has a negative `duration`; see [`TimeEntry::is_running`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// The entry id.
    #[serde(deserialize_with = "de::string_id")]
    pub id: String,
    /// The workspace id.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub wid: Option<String>,
    /// The task, if the entry is booked against one.
    #[serde(default)]
    pub task: Option<TimeEntryTask>,
    /// The user who tracked the time.
    #[serde(default)]
    pub user: Option<User>,
    /// Whether the time is billable.
    #[serde(default, deserialize_with = "de::lenient_bool")]
    pub billable: bool,
    /// Start as a millisecond timestamp.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub start: Option<String>,
    /// End as a millisecond timestamp. `None` while running.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub end: Option<String>,
    /// Duration in milliseconds, negative while running.
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub duration: Option<i64>,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Time entry tags.
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// Where the entry was recorded from.
    #[serde(default)]
    pub source: Option<String>,
    /// Last change as a millisecond timestamp.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub at: Option<String>,
}

impl TimeEntry {
    /// Returns the id of the task the entry is booked against.
    #[must_use]
    pub fn task_id(&self) -> Option<&str> {
        self.task.as_ref().map(|task| task.id.as_str())
    }

    /// Returns `true` while the timer is still running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.duration.is_some_and(|d| d < 0)
    }

    /// Returns the start time.
    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        de::millis_to_datetime(self.start.as_deref())
    }

    /// Returns the end time.
    #[must_use]
    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        de::millis_to_datetime(self.end.as_deref())
    }
}

/// Filters for listing time entries.
///
/// Without a date range ClickUp returns the last 30 days for the
/// authenticated user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeEntryQuery {
    /// Entries starting at or after this millisecond timestamp.
    pub start_date: Option<i64>,
    /// Entries starting at or before this millisecond timestamp.
    pub end_date: Option<i64>,
    /// Comma-separated user ids whose entries to return.
    pub assignee: Option<String>,
    /// Include the task tags of each entry.
    pub include_task_tags: bool,
    /// Include list, folder and space names.
    pub include_location_names: bool,
    /// Only entries in this space.
    pub space_id: Option<String>,
    /// Only entries in this folder.
    pub folder_id: Option<String>,
    /// Only entries in this list.
    pub list_id: Option<String>,
    /// Only entries for this task.
    pub task_id: Option<String>,
    /// Treat `task_id` as a custom task id. Requires `team_id`.
    pub custom_task_ids: bool,
    /// Workspace id, needed with custom task ids.
    pub team_id: Option<String>,
}

impl TimeEntryQuery {
    /// Creates an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the query to a date range in millisecond timestamps.
    #[must_use]
    pub const fn between(mut self, start: i64, end: i64) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Restricts the query to one task.
    #[must_use]
    pub fn task(mut self, task_id: impl Into<String>) -> Self {
        self.task_id = Some(task_id.into());
        self
    }

    /// Renders the set filters as key/value pairs.
    ///
    /// Flags are only sent when enabled, and `team_id` only accompanies
    /// `custom_task_ids`.
    #[must_use]
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();

        for (key, bound) in [("start_date", self.start_date), ("end_date", self.end_date)] {
            if let Some(bound) = bound {
                pairs.push((key.to_string(), bound.to_string()));
            }
        }

        for (key, enabled) in [
            ("include_task_tags", self.include_task_tags),
            ("include_location_names", self.include_location_names),
        ] {
            if enabled {
                pairs.push((key.to_string(), "true".to_string()));
            }
        }

        for (key, value) in [
            ("assignee", &self.assignee),
            ("space_id", &self.space_id),
            ("folder_id", &self.folder_id),
            ("list_id", &self.list_id),
            ("task_id", &self.task_id),
        ] {
            if let Some(value) = value {
                pairs.push((key.to_string(), value.clone()));
            }
        }

        if self.custom_task_ids {
            pairs.push(("custom_task_ids".to_string(), "true".to_string()));
            if let Some(team_id) = &self.team_id {
                pairs.push(("team_id".to_string(), team_id.clone()));
            }
        }

        pairs
    }
}

/// Payload for recording a finished time entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateTimeEntry {
    /// Free-form description.
    pub description: String,
    /// Start as a millisecond timestamp. Filled with the current time when
    /// left unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    /// Duration in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    /// Whether the time is billable.
    pub billable: bool,
    /// The task to book against.
    #[serde(rename = "tid", skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    /// Tags to apply.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

impl CreateTimeEntry {
    /// Creates a payload for `duration_ms` of work on a task.
    #[must_use]
    pub fn for_task(task_id: impl Into<String>, duration_ms: i64) -> Self {
        Self {
            task_id: Some(task_id.into()),
            duration: Some(duration_ms),
            ..Self::default()
        }
    }
}

/// Payload for editing a time entry. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateTimeEntry {
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New task.
    #[serde(rename = "tid", skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    /// New start as a millisecond timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    /// New duration in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    /// New billable flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    /// Replacement tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}
