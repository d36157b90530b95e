use crate::models::{FieldValues, FormField};

/// Computes a derived field's value from the current values.
pub trait IDerivedCalculator: Send + Sync {
    /// Always yields a displayable string; failures collapse to `""`.
    fn calculate(&self, field: &FormField, values: &FieldValues) -> String;
}
