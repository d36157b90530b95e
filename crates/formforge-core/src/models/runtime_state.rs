use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::field_value::{FieldErrors, FieldValues};
use super::form_schema::FormSchema;

/// The form being edited or previewed, with its live values and errors.
///
/// Every key in `errors` names a field of `current_form`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FormRuntimeState {
    pub current_form: Option<FormSchema>,
    pub values: FieldValues,
    pub errors: FieldErrors,
}

impl FormRuntimeState {
    /// Drop values and errors, keeping the schema.
    pub fn clear_live_state(&mut self) {
        self.values.clear();
        self.errors.clear();
    }
}
