use super::storage_error::StorageError;

/// Convenience alias used across the workspace.
pub type FormResult<T> = Result<T, FormError>;

/// Top-level error for every Formforge operation.
///
/// Validation failures are never reported here: they are per-field message
/// strings. These variants describe rejected actions and infrastructure faults.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("no form is being edited")]
    NoCurrentForm,

    #[error("field not found: {id}")]
    FieldNotFound { id: String },

    #[error("duplicate field id: {id}")]
    DuplicateFieldId { id: String },

    #[error("reorder is not a permutation: expected {expected} field ids, received {received}")]
    NotAPermutation { expected: usize, received: usize },

    #[error("invalid derivation on field {field_id}: {reason}")]
    InvalidDerivation { field_id: String, reason: String },

    #[error("form name must not be empty")]
    EmptyFormName,

    #[error("form has no fields")]
    EmptyForm,

    #[error("saved form not found: {id}")]
    SavedFormNotFound { id: String },

    #[error("invalid validation rule: {reason}")]
    InvalidRule { reason: String },

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for FormError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
