//! Space tags.

use serde::{Deserialize, Serialize};

use super::de;

/// A tag defined on a space and applied to tasks.
///
/// The same shape is used for reading tags and as the payload for creating or
/// editing them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// The tag name, unique within its space.
    pub name: String,
    /// Foreground color (hex).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_fg: Option<String>,
    /// Background color (hex).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_bg: Option<String>,
    /// Id of the user who created the tag.
    #[serde(default, skip_serializing, deserialize_with = "de::opt_string")]
    pub creator: Option<String>,
}

impl Tag {
    /// Creates a tag with only a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets both colors.
    #[must_use]
    pub fn colors(mut self, fg: impl Into<String>, bg: impl Into<String>) -> Self {
        self.tag_fg = Some(fg.into());
        self.tag_bg = Some(bg.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tag_round_trip_drops_creator() {
        let tag: Tag = serde_json::from_value(json!({
            "name": "needs review",
            "tag_fg": "#000000",
            "tag_bg": "#ffcc00",
            "creator": 183
        }))
        .unwrap();
        assert_eq!(tag.creator.as_deref(), Some("183"));

        assert_eq!(
            serde_json::to_value(&tag).unwrap(),
            json!({"name": "needs review", "tag_fg": "#000000", "tag_bg": "#ffcc00"})
        );
    }

    #[test]
    fn test_tag_builder() {
        let tag = Tag::new("bug").colors("#fff", "#f00");
        assert_eq!(tag.tag_bg.as_deref(), Some("#f00"));
    }
}
