//! Task comments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::User;
use super::de;

/// A comment on a task.
///
/// ClickUp returns the comment body in several places depending on the
/// endpoint. [`Comment::text`] holds the first non-empty of `comment_text`,
/// `text` and the text of the first rich-text block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawComment")]
pub struct Comment {
    /// The comment id.
    pub id: String,
    /// The plain-text body.
    pub text: String,
    /// The rich-text blocks, kept raw.
    pub blocks: Vec<Value>,
    /// The author.
    pub user: Option<User>,
    /// Whether the comment is resolved.
    pub resolved: bool,
    /// The user the comment is assigned to.
    pub assignee: Option<User>,
    /// The user who assigned the comment.
    pub assigned_by: Option<User>,
    /// Creation time as a millisecond timestamp.
    pub date: Option<String>,
    /// Number of threaded replies.
    pub reply_count: Option<i64>,
}

impl Comment {
    /// Returns the creation time.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        de::millis_to_datetime(self.date.as_deref())
    }
}

#[derive(Deserialize)]
struct RawComment {
    #[serde(default, deserialize_with = "de::opt_string")]
    id: Option<String>,
    #[serde(default)]
    comment_text: Option<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    comment: Vec<Value>,
    #[serde(default)]
    user: Option<User>,
    #[serde(default, deserialize_with = "de::lenient_bool")]
    resolved: bool,
    #[serde(default)]
    assignee: Option<User>,
    #[serde(default)]
    assigned_by: Option<User>,
    #[serde(default, deserialize_with = "de::opt_string")]
    date: Option<String>,
    #[serde(default, deserialize_with = "de::opt_i64")]
    reply_count: Option<i64>,
}

impl From<RawComment> for Comment {
    fn from(raw: RawComment) -> Self {
        let block_text = raw
            .comment
            .first()
            .and_then(|block| block.get("text"))
            .and_then(Value::as_str)
            .map(String::from);

        let text = [raw.comment_text, raw.text, block_text]
            .into_iter()
            .flatten()
            .find(|t| !t.is_empty())
            .unwrap_or_default();

        Self {
            id: raw.id.unwrap_or_default(),
            text,
            blocks: raw.comment,
            user: raw.user,
            resolved: raw.resolved,
            assignee: raw.assignee,
            assigned_by: raw.assigned_by,
            date: raw.date,
            reply_count: raw.reply_count,
        }
    }
}

/// Payload for creating a comment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateComment {
    /// The plain-text body.
    pub comment_text: String,
    /// User id to assign the comment to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Notify every watcher, including the author.
    pub notify_all: bool,
}

impl CreateComment {
    /// Creates a payload with only a body.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            comment_text: text.into(),
            ..Self::default()
        }
    }
}

/// Payload for editing a comment. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateComment {
    /// New body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_text: Option<String>,
    /// User id to assign the comment to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Resolve or reopen the comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_comment_text_prefers_comment_text() {
        let comment: Comment = serde_json::from_value(json!({
            "id": "458",
            "comment": [{"text": "from block"}],
            "comment_text": "Task comment content",
            "user": {"id": 183, "username": "John Doe"},
            "resolved": false,
            "date": "1568036964079"
        }))
        .unwrap();

        assert_eq!(comment.text, "Task comment content");
        assert_eq!(comment.blocks.len(), 1);
        assert!(comment.created_at().is_some());
    }

    #[test]
    fn test_comment_text_falls_back_to_first_block() {
        let comment: Comment = serde_json::from_value(json!({
            "id": 459,
            "comment": [{"text": "from block"}, {"text": "second"}],
            "comment_text": "",
            "resolved": "true"
        }))
        .unwrap();

        assert_eq!(comment.id, "459");
        assert_eq!(comment.text, "from block");
        assert!(comment.resolved);
    }

    #[test]
    fn test_comment_without_any_text() {
        let comment: Comment = serde_json::from_value(json!({"id": "1"})).unwrap();
        assert_eq!(comment.text, "");
    }

    #[test]
    fn test_create_comment_payload() {
        let payload = CreateComment::new("Looks good");
        assert_eq!(
            serde_json::to_value(payload).unwrap(),
            json!({"comment_text": "Looks good", "notify_all": false})
        );
    }
}
