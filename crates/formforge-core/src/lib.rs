//! # formforge-core
//!
//! Foundation crate for the Formforge form builder.
//! Defines the form data model, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod ids;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::FormForgeConfig;
pub use errors::{FormError, FormResult};
pub use models::{
    DerivedFormula, FieldErrors, FieldPatch, FieldType, FieldValue, FieldValues, FormField,
    FormRuntimeState, FormSchema, FormSummary, RuleKind, ValidationRule,
};
