//! Typed records for ClickUp API payloads.
//!
//! The API is loose about scalar types: ids, order indexes and timestamps may
//! arrive as numbers or strings depending on the endpoint. Every model here
//! normalizes those fields on deserialization and ignores unknown fields.
//!
//! Timestamps are kept as the millisecond strings ClickUp sends; each model
//! offers `chrono` accessors (e.g. [`Task::created_at`]) for typed access.
//!
//! Request payloads (`Create*`, `Update*`) skip unset optional fields when
//! serialized, so an update only touches what the caller set.

mod checklist;
mod comment;
mod common;
mod custom_field;
pub(crate) mod de;
mod doc;
mod folder;
mod goal;
mod guest;
mod list;
mod space;
mod tag;
mod task;
mod template;
mod time_entry;
mod view;
mod webhook;
mod workspace;

pub use checklist::{Checklist, ChecklistItem, UpdateChecklistItem};
pub use comment::{Comment, CreateComment, UpdateComment};
pub use common::{Location, Member, Priority, PriorityInfo, Status, User};
pub use custom_field::{CustomField, FieldScope};
pub use doc::{
    ContentEditMode, CreateDoc, CreatePage, Doc, DocPage, DocPageResult, DocParent, DocQuery,
    UpdatePage, MARKDOWN,
};
pub use folder::Folder;
pub use goal::{
    CreateGoal, CreateKeyResult, Goal, KeyResult, KeyResultType, UpdateGoal, UpdateKeyResult,
};
pub use guest::{Guest, GuestInvite, UpdateGuest};
pub use list::{CreateList, TaskList, UpdateList};
pub use space::{CreateSpace, Space, UpdateSpace};
pub use tag::Tag;
pub use task::{
    AssigneeChanges, Attachment, CreateTask, Task, TaskPage, TaskQuery, UpdateTask,
};
pub use template::{CreatedFromTemplate, FromTemplate};
pub use time_entry::{
    CreateTimeEntry, TimeEntry, TimeEntryQuery, TimeEntryTask, UpdateTimeEntry,
};
pub use view::{CreateView, UpdateView, View, ViewParent, ViewParentRef};
pub use webhook::{CreateWebhook, UpdateWebhook, Webhook};
pub use workspace::Workspace;
