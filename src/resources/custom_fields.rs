//! Custom field endpoints.

use serde_json::{json, Value};

use crate::clients::{ClickUpError, RestClient};
use crate::models::{CustomField, FieldScope};

/// Handle for custom field endpoints.
#[derive(Clone, Debug)]
pub struct CustomFields {
    rest: RestClient,
}

impl CustomFields {
    pub(crate) const fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// Lists the field definitions visible at `scope`.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails or the response has no
    /// `fields` key.
    pub async fn list(&self, scope: &FieldScope) -> Result<Vec<CustomField>, ClickUpError> {
        self.rest.get_field(&scope.fields_path(), None, "fields").await
    }

    /// Sets the value of a field on a task.
    ///
    /// The shape of `value` depends on the field type: a number, a string,
    /// an option id for drop-downs, or `{"add": [...], "rem": [...]}` for
    /// relationship fields.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails.
    pub async fn set_value(
        &self,
        task_id: &str,
        field_id: &str,
        value: Value,
    ) -> Result<(), ClickUpError> {
        self.rest
            .post(
                &format!("task/{task_id}/field/{field_id}"),
                json!({ "value": value }),
            )
            .await?;
        Ok(())
    }

    /// Clears a field on a task. The definition is kept.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the request fails.
    pub async fn remove_value(&self, task_id: &str, field_id: &str) -> Result<(), ClickUpError> {
        self.rest
            .delete(&format!("task/{task_id}/field/{field_id}"), None)
            .await?;
        Ok(())
    }
}
