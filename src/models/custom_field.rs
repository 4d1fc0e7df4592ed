//! Custom field definitions.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::de;

/// Where custom field definitions are looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldScope {
    /// Fields defined at the workspace level.
    Workspace(String),
    /// Fields defined on a space.
    Space(String),
    /// Fields defined on a folder.
    Folder(String),
    /// Fields accessible from a list.
    List(String),
}

impl FieldScope {
    /// Returns the `field` collection path for this scope.
    #[must_use]
    pub fn fields_path(&self) -> String {
        let (kind, id) = match self {
            Self::Workspace(id) => ("team", id),
            Self::Space(id) => ("space", id),
            Self::Folder(id) => ("folder", id),
            Self::List(id) => ("list", id),
        };
        format!("{kind}/{id}/field")
    }
}

/// A custom field definition, or a field with its value on a task.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomField {
    /// The field id.
    #[serde(deserialize_with = "de::string_id")]
    pub id: String,
    /// The field name.
    pub name: String,
    /// The field type (`drop_down`, `number`, `date`, `text`, ...).
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Type-specific settings such as drop-down options.
    #[serde(default)]
    pub type_config: Value,
    /// The value on a task. `Null` on definitions and unset fields.
    #[serde(default)]
    pub value: Value,
    /// Creation time as a millisecond timestamp.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub date_created: Option<String>,
    /// Whether guests cannot see the field.
    #[serde(default, deserialize_with = "de::lenient_bool")]
    pub hide_from_guests: bool,
    /// Whether the field must be set.
    #[serde(default, deserialize_with = "de::lenient_bool")]
    pub required: bool,
}
