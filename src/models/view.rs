//! Saved views (list, board, calendar and friends).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::de;

/// Where a view lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewParent {
    /// A workspace-level ("Everything") view.
    Workspace(String),
    /// A space view.
    Space(String),
    /// A folder view.
    Folder(String),
    /// A list view.
    List(String),
}

impl ViewParent {
    /// Returns the `view` collection path for this parent.
    #[must_use]
    pub fn views_path(&self) -> String {
        let (kind, id) = match self {
            Self::Workspace(id) => ("team", id),
            Self::Space(id) => ("space", id),
            Self::Folder(id) => ("folder", id),
            Self::List(id) => ("list", id),
        };
        format!("{kind}/{id}/view")
    }
}

/// A reference to the container a view belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewParentRef {
    /// The container id.
    #[serde(deserialize_with = "de::string_id")]
    pub id: String,
    /// The container type as a numeric code.
    #[serde(default, rename = "type", deserialize_with = "de::opt_i64")]
    pub kind: Option<i64>,
}

/// A saved view.
///
/// Grouping, sorting, filter and column settings are kept as raw JSON: their
/// shape depends on the view type and changes often.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct View {
    /// The view id.
    #[serde(deserialize_with = "de::string_id")]
    pub id: String,
    /// The view name.
    pub name: String,
    /// The view type (`list`, `board`, `calendar`, `gantt`, ...).
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// The container of the view.
    #[serde(default)]
    pub parent: Option<ViewParentRef>,
    /// Grouping settings.
    #[serde(default)]
    pub grouping: Value,
    /// Divide settings.
    #[serde(default)]
    pub divide: Value,
    /// Sorting settings.
    #[serde(default)]
    pub sorting: Value,
    /// Filter settings.
    #[serde(default)]
    pub filters: Value,
    /// Column settings.
    #[serde(default)]
    pub columns: Value,
    /// Sidebar settings.
    #[serde(default)]
    pub team_sidebar: Value,
    /// Remaining view settings.
    #[serde(default)]
    pub settings: Value,
    /// Whether the view is protected from edits.
    #[serde(default, deserialize_with = "de::lenient_bool")]
    pub protected: bool,
}

/// Payload for creating a view.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateView {
    /// The view name.
    pub name: String,
    /// The view type.
    #[serde(rename = "type")]
    pub kind: String,
    /// Grouping settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grouping: Option<Value>,
    /// Divide settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divide: Option<Value>,
    /// Sorting settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorting: Option<Value>,
    /// Filter settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Value>,
    /// Column settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Value>,
    /// Sidebar settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_sidebar: Option<Value>,
    /// Remaining view settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,
}

impl CreateView {
    /// Creates a payload with only a name and type.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            ..Self::default()
        }
    }
}

/// Payload for updating a view. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateView {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// New grouping settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grouping: Option<Value>,
    /// New divide settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divide: Option<Value>,
    /// New sorting settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorting: Option<Value>,
    /// New filter settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Value>,
    /// New column settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Value>,
    /// New sidebar settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_sidebar: Option<Value>,
    /// New remaining settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_views_path_per_parent() {
        assert_eq!(ViewParent::Workspace("1".into()).views_path(), "team/1/view");
        assert_eq!(ViewParent::Space("2".into()).views_path(), "space/2/view");
        assert_eq!(ViewParent::Folder("3".into()).views_path(), "folder/3/view");
        assert_eq!(ViewParent::List("4".into()).views_path(), "list/4/view");
    }

    #[test]
    fn test_view_keeps_settings_as_json() {
        let view: View = serde_json::from_value(json!({
            "id": "3c-105",
            "name": "Board",
            "type": "board",
            "parent": {"id": "512", "type": 7},
            "grouping": {"field": "status", "dir": 1},
            "protected": false
        }))
        .unwrap();

        assert_eq!(view.kind.as_deref(), Some("board"));
        assert_eq!(view.parent.as_ref().unwrap().kind, Some(7));
        assert_eq!(view.grouping["field"], "status");
        assert!(view.filters.is_null());
    }

    #[test]
    fn test_create_view_serializes_type() {
        let payload = CreateView::new("Sprint", "list");
        assert_eq!(
            serde_json::to_value(payload).unwrap(),
            json!({"name": "Sprint", "type": "list"})
        );
    }
}
