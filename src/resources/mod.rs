//! Per-resource handles for the ClickUp REST API.
//!
//! Each handle builds the endpoint path and payload for one family of
//! endpoints, dispatches through the shared [`RestClient`](crate::clients::RestClient),
//! and unwraps the response envelope into typed [`models`](crate::models).
//!
//! Handles are cheap to clone and are normally obtained from the
//! [`ClickUp`](crate::ClickUp) facade:
//!
//! ```rust,ignore
//! let client = ClickUp::with_token("pk_123")?;
//!
//! for team in client.workspaces().list().await? {
//!     let spaces = client.spaces().list(&team.id, false).await?;
//!     println!("{}: {} spaces", team.name, spaces.len());
//! }
//! ```

mod checklists;
mod comments;
mod custom_fields;
mod docs;
mod folders;
mod goals;
mod guests;
mod lists;
mod spaces;
mod tags;
mod tasks;
mod time_entries;
mod views;
mod webhooks;
mod workspaces;

pub use checklists::Checklists;
pub use comments::Comments;
pub use custom_fields::CustomFields;
pub use docs::Docs;
pub use folders::Folders;
pub use goals::Goals;
pub use guests::Guests;
pub use lists::Lists;
pub use spaces::Spaces;
pub use tags::Tags;
pub use tasks::Tasks;
pub use time_entries::TimeEntries;
pub use views::Views;
pub use webhooks::Webhooks;
pub use workspaces::Workspaces;

/// Renders a boolean query parameter.
fn flag(key: &str, value: bool) -> Vec<(String, String)> {
    vec![(key.to_string(), value.to_string())]
}
