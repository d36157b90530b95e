use crate::models::{FieldValue, FormField};

/// Checks one field's effective value against its rules.
pub trait IFieldValidator: Send + Sync {
    /// The first failing rule's message, or `""` when every rule passes.
    fn validate_field(&self, field: &FormField, value: Option<&FieldValue>) -> String;
}
