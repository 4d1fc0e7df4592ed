//! Workspace guests (Enterprise plans only).

use serde::{Deserialize, Serialize};

use super::de;

/// A guest user with their permission flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    /// The user id.
    #[serde(deserialize_with = "de::string_id")]
    pub id: String,
    /// The display name.
    #[serde(default)]
    pub username: Option<String>,
    /// The email address.
    #[serde(default)]
    pub email: Option<String>,
    /// The avatar color (hex).
    #[serde(default)]
    pub color: Option<String>,
    /// Whether the guest may edit tags.
    #[serde(default, deserialize_with = "de::lenient_bool")]
    pub can_edit_tags: bool,
    /// Whether the guest sees tracked time.
    #[serde(default, deserialize_with = "de::lenient_bool")]
    pub can_see_time_spent: bool,
    /// Whether the guest sees time estimates.
    #[serde(default, deserialize_with = "de::lenient_bool")]
    pub can_see_time_estimated: bool,
    /// Whether the guest may create views.
    #[serde(default, deserialize_with = "de::lenient_bool")]
    pub can_create_views: bool,
    /// Id of the custom role, if any.
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub custom_role_id: Option<i64>,
}

/// Permissions granted when inviting a guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuestInvite {
    /// Email address to invite.
    pub email: String,
    /// Allow editing tags.
    pub can_edit_tags: bool,
    /// Show tracked time.
    pub can_see_time_spent: bool,
    /// Show time estimates.
    pub can_see_time_estimated: bool,
    /// Allow creating views.
    pub can_create_views: bool,
    /// Custom role to assign.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_role_id: Option<i64>,
}

impl GuestInvite {
    /// Creates an invite with every permission granted.
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            can_edit_tags: true,
            can_see_time_spent: true,
            can_see_time_estimated: true,
            can_create_views: true,
            custom_role_id: None,
        }
    }
}

/// Payload for editing a guest. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateGuest {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Allow editing tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_edit_tags: Option<bool>,
    /// Show tracked time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_see_time_spent: Option<bool>,
    /// Show time estimates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_see_time_estimated: Option<bool>,
    /// Allow creating views.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_create_views: Option<bool>,
    /// Custom role to assign.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_role_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_invite_grants_everything_by_default() {
        assert_eq!(
            serde_json::to_value(GuestInvite::new("guest@example.com")).unwrap(),
            json!({
                "email": "guest@example.com",
                "can_edit_tags": true,
                "can_see_time_spent": true,
                "can_see_time_estimated": true,
                "can_create_views": true
            })
        );
    }
}
