//! Types shared by several ClickUp resources.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::de;

/// A ClickUp user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// The user id.
    #[serde(deserialize_with = "de::string_id")]
    pub id: String,
    /// The display name. `None` for users who never set one.
    #[serde(default)]
    pub username: Option<String>,
    /// The email address.
    #[serde(default)]
    pub email: Option<String>,
    /// The avatar color (hex).
    #[serde(default)]
    pub color: Option<String>,
    /// URL of the profile picture.
    #[serde(default, rename = "profilePicture")]
    pub profile_picture: Option<String>,
    /// The user's initials.
    #[serde(default)]
    pub initials: Option<String>,
    /// Workspace role (1 owner, 2 admin, 3 member, 4 guest).
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub role: Option<i64>,
}

/// A workspace or space member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// The member's user record.
    pub user: User,
}

/// A task status as configured on a space, folder or list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// The status id. Not present on every endpoint.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub id: Option<String>,
    /// The status name (e.g. `"in progress"`).
    pub status: String,
    /// The status type (`open`, `custom`, `closed`, `done`).
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Position within the status list.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub orderindex: Option<String>,
    /// The status color (hex).
    #[serde(default)]
    pub color: Option<String>,
}

/// A reference to a containing list, folder or space.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// The container id.
    #[serde(deserialize_with = "de::string_id")]
    pub id: String,
    /// The container name.
    #[serde(default)]
    pub name: Option<String>,
    /// Whether the container is hidden.
    #[serde(default)]
    pub hidden: Option<bool>,
    /// Whether the caller can access the container.
    #[serde(default)]
    pub access: Option<bool>,
}

/// Task priority.
///
/// Serializes as the integer ClickUp expects in request payloads. Deserializes
/// from the priority word (`"urgent"`, `"high"`, `"normal"`, `"low"`), a
/// numeric string or an integer. Unknown words fall back to [`Priority::Normal`].
///
/// # Example
///
/// ```rust
/// use clickup_api::models::Priority;
///
/// let p: Priority = serde_json::from_str("\"high\"").unwrap();
/// assert_eq!(p, Priority::High);
/// assert_eq!(serde_json::to_string(&p).unwrap(), "2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub enum Priority {
    /// Priority 1.
    Urgent = 1,
    /// Priority 2.
    High = 2,
    /// Priority 3.
    #[default]
    Normal = 3,
    /// Priority 4.
    Low = 4,
}

impl Priority {
    /// Returns the numeric level (1 = urgent, 4 = low).
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns the priority for a numeric level, if in range.
    #[must_use]
    pub const fn from_level(level: i64) -> Option<Self> {
        match level {
            1 => Some(Self::Urgent),
            2 => Some(Self::High),
            3 => Some(Self::Normal),
            4 => Some(Self::Low),
            _ => None,
        }
    }

    /// Parses a priority word or numeric string.
    ///
    /// Returns `None` only for numbers outside `1..=4`.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        if let Ok(level) = label.parse::<i64>() {
            return Self::from_level(level);
        }
        Some(match label.to_ascii_lowercase().as_str() {
            "urgent" => Self::Urgent,
            "high" => Self::High,
            "low" => Self::Low,
            _ => Self::Normal,
        })
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64().and_then(Self::from_level),
            Value::String(s) => Self::from_label(s),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Urgent => "urgent",
            Self::High => "high",
            Self::Normal => "normal",
            Self::Low => "low",
        })
    }
}

impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value)
            .ok_or_else(|| D::Error::custom(format!("invalid priority: {value}")))
    }
}

/// Priority as returned inside task and list payloads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityInfo {
    /// The priority id.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub id: Option<String>,
    /// The normalized priority level.
    #[serde(default, deserialize_with = "lenient_priority")]
    pub priority: Option<Priority>,
    /// The priority color (hex).
    #[serde(default)]
    pub color: Option<String>,
    /// Position among priorities.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub orderindex: Option<String>,
}

fn lenient_priority<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Priority>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Priority::from_value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_with_numeric_id() {
        let user: User = serde_json::from_value(json!({
            "id": 183,
            "username": "John Doe",
            "email": "john@example.com",
            "color": "#827718",
            "profilePicture": "https://attachments.clickup.com/profilePictures/183.jpg",
            "initials": "JD",
            "role": 1,
            "week_start_day": 0
        }))
        .unwrap();

        assert_eq!(user.id, "183");
        assert_eq!(user.username.as_deref(), Some("John Doe"));
        assert!(user.profile_picture.is_some());
        assert_eq!(user.role, Some(1));
    }

    #[test]
    fn test_priority_from_words_numbers_and_strings() {
        for (value, expected) in [
            (json!("urgent"), Priority::Urgent),
            (json!("HIGH"), Priority::High),
            (json!("low"), Priority::Low),
            (json!("whatever"), Priority::Normal),
            (json!("2"), Priority::High),
            (json!(4), Priority::Low),
        ] {
            let p: Priority = serde_json::from_value(value).unwrap();
            assert_eq!(p, expected);
        }
    }

    #[test]
    fn test_priority_rejects_out_of_range_numbers() {
        assert!(serde_json::from_value::<Priority>(json!(9)).is_err());
        assert!(serde_json::from_value::<Priority>(json!("0")).is_err());
    }

    #[test]
    fn test_priority_serializes_as_level() {
        assert_eq!(serde_json::to_value(Priority::Urgent).unwrap(), json!(1));
        assert_eq!(Priority::Low.to_string(), "low");
    }

    #[test]
    fn test_priority_info_is_lenient() {
        let info: PriorityInfo = serde_json::from_value(json!({
            "id": "2",
            "priority": "high",
            "color": "#ffcc00",
            "orderindex": "2"
        }))
        .unwrap();
        assert_eq!(info.priority, Some(Priority::High));

        let info: PriorityInfo = serde_json::from_value(json!({"priority": 42})).unwrap();
        assert!(info.priority.is_none());
    }

    #[test]
    fn test_status_orderindex_number_or_string() {
        let a: Status =
            serde_json::from_value(json!({"status": "open", "type": "open", "orderindex": 0}))
                .unwrap();
        let b: Status =
            serde_json::from_value(json!({"status": "open", "orderindex": "0"})).unwrap();
        assert_eq!(a.orderindex, b.orderindex);
        assert_eq!(a.kind.as_deref(), Some("open"));
    }
}
