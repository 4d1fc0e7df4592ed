//! Docs and their pages (served by the v3 API).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::de;

/// Markdown, the default content format for pages.
pub const MARKDOWN: &str = "text/md";

/// The container a doc is attached to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocParent {
    /// The container id.
    #[serde(deserialize_with = "de::string_id")]
    pub id: String,
    /// The container type as a numeric code (4 space, 5 folder, 6 list,
    /// 7 workspace, 12 workspace root).
    #[serde(
        default,
        rename = "type",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de::opt_i64"
    )]
    pub kind: Option<i64>,
}

/// A ClickUp doc.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doc {
    /// The doc id.
    #[serde(deserialize_with = "de::string_id")]
    pub id: String,
    /// The doc name.
    #[serde(default)]
    pub name: String,
    /// The workspace id.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub workspace_id: Option<String>,
    /// The container of the doc.
    #[serde(default)]
    pub parent: Option<DocParent>,
    /// Id of the creator.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub creator: Option<String>,
    /// Whether the doc is public.
    #[serde(default, deserialize_with = "de::lenient_bool")]
    pub public: bool,
    /// Whether the doc is deleted.
    #[serde(default, deserialize_with = "de::lenient_bool")]
    pub deleted: bool,
    /// Whether the doc is archived.
    #[serde(default, deserialize_with = "de::lenient_bool")]
    pub archived: bool,
    /// Creation time as a millisecond timestamp.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub date_created: Option<String>,
    /// Last update as a millisecond timestamp.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub date_updated: Option<String>,
}

impl Doc {
    /// Returns the creation time.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        de::millis_to_datetime(self.date_created.as_deref())
    }
}

/// One page of a doc. Page listings nest child pages under `pages`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocPage {
    /// The page id.
    #[serde(deserialize_with = "de::string_id")]
    pub id: String,
    /// The owning doc id.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub doc_id: Option<String>,
    /// Id of the parent page when nested.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub parent_page_id: Option<String>,
    /// The workspace id.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub workspace_id: Option<String>,
    /// The page title.
    #[serde(default)]
    pub name: String,
    /// The page subtitle.
    #[serde(default)]
    pub sub_title: Option<String>,
    /// The page body. Absent from listings.
    #[serde(default)]
    pub content: Option<String>,
    /// Whether the page is archived.
    #[serde(default, deserialize_with = "de::lenient_bool")]
    pub archived: bool,
    /// Creation time as a millisecond timestamp.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub date_created: Option<String>,
    /// Last update as a millisecond timestamp.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub date_updated: Option<String>,
    /// Child pages.
    #[serde(default)]
    pub pages: Vec<DocPage>,
}

/// One page of [`Doc`] search results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DocPageResult {
    /// The docs on this page.
    #[serde(default)]
    pub docs: Vec<Doc>,
    /// Cursor for the following page. `None` or empty on the last page.
    #[serde(default)]
    pub next_cursor: Option<String>,
}

impl DocPageResult {
    /// Returns `true` if a following page exists.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.next_cursor.as_deref().is_some_and(|c| !c.is_empty())
    }
}

/// Filters for searching docs in a workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocQuery {
    /// Only the doc with this id.
    pub id: Option<String>,
    /// Only docs created by this user id.
    pub creator: Option<String>,
    /// Return deleted docs.
    pub deleted: bool,
    /// Return archived docs.
    pub archived: bool,
    /// Only children of this parent.
    pub parent_id: Option<String>,
    /// Only children of this parent type (e.g. `SPACE`, `FOLDER`, `LIST`).
    pub parent_type: Option<String>,
    /// Page size (10 to 100).
    pub limit: u32,
    /// Cursor returned by the previous page.
    pub next_cursor: Option<String>,
}

impl Default for DocQuery {
    fn default() -> Self {
        Self {
            id: None,
            creator: None,
            deleted: false,
            archived: false,
            parent_id: None,
            parent_type: None,
            limit: 50,
            next_cursor: None,
        }
    }
}

impl DocQuery {
    /// Creates a query for the first page with default filters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the same query continuing after `result`.
    #[must_use]
    pub fn after(&self, result: &DocPageResult) -> Self {
        Self {
            next_cursor: result.next_cursor.clone(),
            ..self.clone()
        }
    }

    /// Renders the query as key/value pairs.
    #[must_use]
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("deleted".to_string(), self.deleted.to_string()),
            ("archived".to_string(), self.archived.to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ];
        for (key, value) in [
            ("id", &self.id),
            ("creator", &self.creator),
            ("parent_id", &self.parent_id),
            ("parent_type", &self.parent_type),
            ("next_cursor", &self.next_cursor),
        ] {
            if let Some(value) = value {
                pairs.push((key.to_string(), value.clone()));
            }
        }
        pairs
    }
}

/// Payload for creating a doc.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateDoc {
    /// The doc name.
    pub name: String,
    /// Also create an empty first page.
    pub create_page: bool,
    /// Where to attach the doc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<DocParent>,
    /// `PUBLIC`, `PRIVATE`, `PERSONAL` or `HIDDEN`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
}

impl CreateDoc {
    /// Creates a payload for a doc with one empty page.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            create_page: true,
            parent: None,
            visibility: None,
        }
    }
}

/// Payload for creating a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatePage {
    /// The page title.
    pub name: String,
    /// `text/md` or `text/plain`.
    pub content_format: String,
    /// Nest the page under this page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_page_id: Option<String>,
    /// The page subtitle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_title: Option<String>,
    /// The page body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl CreatePage {
    /// Creates a markdown page with a title and body.
    #[must_use]
    pub fn markdown(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content_format: MARKDOWN.to_string(),
            parent_page_id: None,
            sub_title: None,
            content: Some(content.into()),
        }
    }
}

/// How an update treats the existing page body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentEditMode {
    /// Replace the body.
    #[default]
    Replace,
    /// Add to the end.
    Append,
    /// Add to the start.
    Prepend,
}

/// Payload for editing a page. Unset fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdatePage {
    /// New title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New subtitle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_title: Option<String>,
    /// Body text, applied according to `content_edit_mode`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// How `content` is applied.
    pub content_edit_mode: ContentEditMode,
    /// `text/md` or `text/plain`.
    pub content_format: String,
}

impl Default for UpdatePage {
    fn default() -> Self {
        Self {
            name: None,
            sub_title: None,
            content: None,
            content_edit_mode: ContentEditMode::Replace,
            content_format: MARKDOWN.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_doc_search_result_deserializes() {
        let result: DocPageResult = serde_json::from_value(json!({
            "docs": [{
                "id": "8cdu22c-13153",
                "date_created": 1_694_018_462_000u64,
                "name": "Runbook",
                "parent": {"id": "90130315830", "type": 4},
                "public": false,
                "workspace_id": 9_013_029_151u64,
                "creator": 183,
                "deleted": false,
                "archived": false
            }],
            "next_cursor": "eyJuZXh0"
        }))
        .unwrap();

        assert!(result.has_more());
        let doc = &result.docs[0];
        assert_eq!(doc.workspace_id.as_deref(), Some("9013029151"));
        assert_eq!(doc.parent.as_ref().unwrap().kind, Some(4));
        assert!(doc.created_at().is_some());
    }

    #[test]
    fn test_doc_query_defaults_and_cursor() {
        let query = DocQuery::new();
        assert_eq!(
            query.to_query(),
            vec![
                ("deleted".to_string(), "false".to_string()),
                ("archived".to_string(), "false".to_string()),
                ("limit".to_string(), "50".to_string()),
            ]
        );

        let last = DocPageResult {
            docs: Vec::new(),
            next_cursor: Some(String::new()),
        };
        assert!(!last.has_more());

        let next = query.after(&DocPageResult {
            docs: Vec::new(),
            next_cursor: Some("abc".into()),
        });
        assert!(next
            .to_query()
            .contains(&("next_cursor".to_string(), "abc".to_string())));
    }

    #[test]
    fn test_update_page_defaults_to_markdown_replace() {
        let payload = UpdatePage {
            content: Some("# Hi".into()),
            ..UpdatePage::default()
        };
        assert_eq!(
            serde_json::to_value(payload).unwrap(),
            json!({"content": "# Hi", "content_edit_mode": "replace", "content_format": "text/md"})
        );
    }
}
