//! Task records, payloads and list queries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{Location, Priority, PriorityInfo, Status, User};
use super::de;
use super::tag::Tag;

/// A ClickUp task.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// The task id.
    #[serde(deserialize_with = "de::string_id")]
    pub id: String,
    /// The workspace-specific custom id, when custom task ids are enabled.
    #[serde(default)]
    pub custom_id: Option<String>,
    /// The task name.
    pub name: String,
    /// Plain-text description.
    #[serde(default)]
    pub text_content: Option<String>,
    /// Description as entered.
    #[serde(default)]
    pub description: Option<String>,
    /// Markdown description, when requested.
    #[serde(default)]
    pub markdown_description: Option<String>,
    /// The current status.
    #[serde(default)]
    pub status: Option<Status>,
    /// Position within the list.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub orderindex: Option<String>,
    /// Creation time as a millisecond timestamp.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub date_created: Option<String>,
    /// Last update time as a millisecond timestamp.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub date_updated: Option<String>,
    /// Closing time as a millisecond timestamp.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub date_closed: Option<String>,
    /// Completion time as a millisecond timestamp.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub date_done: Option<String>,
    /// Whether the task is archived.
    #[serde(default, deserialize_with = "de::lenient_bool")]
    pub archived: bool,
    /// The task creator.
    #[serde(default)]
    pub creator: Option<User>,
    /// Assigned users.
    #[serde(default)]
    pub assignees: Vec<User>,
    /// Ids of watching users.
    #[serde(default, deserialize_with = "de::id_list")]
    pub watchers: Vec<String>,
    /// Checklists, kept raw.
    #[serde(default)]
    pub checklists: Vec<Value>,
    /// Tags on the task.
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// Id of the parent task, for subtasks.
    #[serde(default)]
    pub parent: Option<String>,
    /// The task priority.
    #[serde(default)]
    pub priority: Option<PriorityInfo>,
    /// Due date as a millisecond timestamp.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub due_date: Option<String>,
    /// Start date as a millisecond timestamp.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub start_date: Option<String>,
    /// Estimated duration in milliseconds.
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub time_estimate: Option<i64>,
    /// Tracked time in milliseconds.
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub time_spent: Option<i64>,
    /// Sprint points.
    #[serde(default)]
    pub points: Option<f64>,
    /// Custom field values, kept raw.
    #[serde(default)]
    pub custom_fields: Vec<Value>,
    /// The containing list.
    #[serde(default)]
    pub list: Option<Location>,
    /// The containing folder.
    #[serde(default)]
    pub folder: Option<Location>,
    /// The containing space.
    #[serde(default)]
    pub space: Option<Location>,
    /// The task's web URL.
    #[serde(default)]
    pub url: Option<String>,
    /// The owning workspace id.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub team_id: Option<String>,
}

impl Task {
    /// Returns the normalized priority level, if any.
    #[must_use]
    pub fn priority_level(&self) -> Option<Priority> {
        self.priority.as_ref().and_then(|p| p.priority)
    }

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

    /// Returns the closing time.
    #[must_use]
    pub fn closed_at(&self) -> Option<DateTime<Utc>> {
        de::millis_to_datetime(self.date_closed.as_deref())
    }

    /// Returns the completion time.
    #[must_use]
    pub fn done_at(&self) -> Option<DateTime<Utc>> {
        de::millis_to_datetime(self.date_done.as_deref())
    }

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

/// A file attached to a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// The attachment id.
    #[serde(deserialize_with = "de::string_id")]
    pub id: String,
    /// Upload time as a millisecond timestamp.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub date: Option<String>,
    /// The file name.
    #[serde(default)]
    pub title: Option<String>,
    /// The file extension.
    #[serde(default)]
    pub extension: Option<String>,
    /// URL of the small thumbnail.
    #[serde(default)]
    pub thumbnail_small: Option<String>,
    /// URL of the large thumbnail.
    #[serde(default)]
    pub thumbnail_large: Option<String>,
    /// Download URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Version number.
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub version: Option<i64>,
}

/// Payload for creating a task.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateTask {
    /// The task name.
    pub name: String,
    /// Plain-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Markdown description. Takes precedence over `description`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown_content: Option<String>,
    /// User ids to assign.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub assignees: Vec<String>,
    /// Tag names to apply.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Initial status name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Task priority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    /// Due date as a millisecond timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<i64>,
    /// Whether the due date includes a time of day.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date_time: Option<bool>,
    /// Estimated duration in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_estimate: Option<i64>,
    /// Start date as a millisecond timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<i64>,
    /// Whether the start date includes a time of day.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date_time: Option<bool>,
    /// Notify every assignee and watcher, including the creator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_all: Option<bool>,
    /// Parent task id, to create a subtask.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Id of a task to link to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links_to: Option<String>,
    /// Sprint points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,
}

impl CreateTask {
    /// Creates a payload with only a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Assignee changes for [`UpdateTask`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssigneeChanges {
    /// User ids to add.
    pub add: Vec<String>,
    /// User ids to remove.
    pub rem: Vec<String>,
}

/// Payload for updating a task. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateTask {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New plain-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New markdown description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown_content: Option<String>,
    /// New status name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// New priority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    /// New due date as a millisecond timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<i64>,
    /// Whether the due date includes a time of day.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date_time: Option<bool>,
    /// New estimate in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_estimate: Option<i64>,
    /// New start date as a millisecond timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<i64>,
    /// Whether the start date includes a time of day.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date_time: Option<bool>,
    /// Archive or unarchive the task.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    /// New sprint points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,
    /// Move the task under another parent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Assignees to add and remove.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignees: Option<AssigneeChanges>,
}

/// Filters and paging for listing the tasks of a list.
///
/// Pages are zero-based and hold up to 100 tasks.
///
/// # Example
///
/// ```rust
/// use clickup_api::models::TaskQuery;
///
/// let query = TaskQuery::new()
///     .status("open")
///     .status("in progress")
///     .include_closed(true);
///
/// let pairs = query.to_query();
/// assert!(pairs.contains(&("statuses[]".to_string(), "open".to_string())));
/// assert_eq!(query.next_page().page, 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQuery {
    /// Zero-based page number.
    pub page: u32,
    /// Include archived tasks.
    pub archived: bool,
    /// Sort field (`id`, `created`, `updated`, `due_date`).
    pub order_by: Option<String>,
    /// Reverse the sort order.
    pub reverse: bool,
    /// Include subtasks.
    pub subtasks: bool,
    /// Include closed tasks.
    pub include_closed: bool,
    /// Return descriptions as markdown.
    pub include_markdown_description: bool,
    /// Only tasks in these statuses.
    pub statuses: Vec<String>,
    /// Only tasks assigned to these user ids.
    pub assignees: Vec<String>,
    /// Only tasks watched by these user ids.
    pub watchers: Vec<String>,
    /// Only tasks with these tags.
    pub tags: Vec<String>,
    /// Only tasks with this priority.
    pub priority: Option<Priority>,
    /// Due after this millisecond timestamp.
    pub due_date_gt: Option<i64>,
    /// Due before this millisecond timestamp.
    pub due_date_lt: Option<i64>,
    /// Created after this millisecond timestamp.
    pub date_created_gt: Option<i64>,
    /// Created before this millisecond timestamp.
    pub date_created_lt: Option<i64>,
    /// Updated after this millisecond timestamp.
    pub date_updated_gt: Option<i64>,
    /// Updated before this millisecond timestamp.
    pub date_updated_lt: Option<i64>,
    /// Completed after this millisecond timestamp.
    pub date_done_gt: Option<i64>,
    /// Completed before this millisecond timestamp.
    pub date_done_lt: Option<i64>,
}

impl TaskQuery {
    /// Creates a query for the first page with no filters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page number.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Adds a status filter.
    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.statuses.push(status.into());
        self
    }

    /// Adds an assignee filter.
    #[must_use]
    pub fn assignee(mut self, user_id: impl Into<String>) -> Self {
        self.assignees.push(user_id.into());
        self
    }

    /// Adds a tag filter.
    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Sets whether closed tasks are included.
    #[must_use]
    pub const fn include_closed(mut self, include: bool) -> Self {
        self.include_closed = include;
        self
    }

    /// Sets whether subtasks are included.
    #[must_use]
    pub const fn subtasks(mut self, include: bool) -> Self {
        self.subtasks = include;
        self
    }

    /// Returns the same query for the following page.
    #[must_use]
    pub fn next_page(&self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            ..self.clone()
        }
    }

    /// Renders the query as ordered key/value pairs.
    ///
    /// Array filters repeat their `[]` key once per value.
    #[must_use]
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("archived".to_string(), self.archived.to_string()),
            ("reverse".to_string(), self.reverse.to_string()),
            ("subtasks".to_string(), self.subtasks.to_string()),
            ("include_closed".to_string(), self.include_closed.to_string()),
            (
                "include_markdown_description".to_string(),
                self.include_markdown_description.to_string(),
            ),
        ];

        if let Some(order_by) = &self.order_by {
            pairs.push(("order_by".to_string(), order_by.clone()));
        }

        for (key, values) in [
            ("statuses[]", &self.statuses),
            ("assignees[]", &self.assignees),
            ("watchers[]", &self.watchers),
            ("tags[]", &self.tags),
        ] {
            pairs.extend(values.iter().map(|v| (key.to_string(), v.clone())));
        }

        if let Some(priority) = self.priority {
            pairs.push(("priority".to_string(), priority.as_u8().to_string()));
        }

        for (key, bound) in [
            ("due_date_gt", self.due_date_gt),
            ("due_date_lt", self.due_date_lt),
            ("date_created_gt", self.date_created_gt),
            ("date_created_lt", self.date_created_lt),
            ("date_updated_gt", self.date_updated_gt),
            ("date_updated_lt", self.date_updated_lt),
            ("date_done_gt", self.date_done_gt),
            ("date_done_lt", self.date_done_lt),
        ] {
            if let Some(bound) = bound {
                pairs.push((key.to_string(), bound.to_string()));
            }
        }

        pairs
    }
}

/// One page of tasks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPage {
    /// The tasks on this page.
    pub tasks: Vec<Task>,
    /// The page number this page was fetched with.
    pub page: u32,
    /// Whether a following page exists.
    pub has_more: bool,
}

impl TaskPage {
    /// Returns the number of tasks on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if this page holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl IntoIterator for TaskPage {
    type Item = Task;
    type IntoIter = std::vec::IntoIter<Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.into_iter()
    }
}
