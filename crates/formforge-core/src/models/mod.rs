//! The form data model shared by every crate and exported to TypeScript.

pub mod field_input;
pub mod field_patch;
pub mod field_type;
pub mod field_value;
pub mod form_field;
pub mod form_schema;
pub mod runtime_state;
pub mod validation_rule;

pub use field_input::{format_default_value, parse_default_value, parse_options};
pub use field_patch::FieldPatch;
pub use field_type::FieldType;
pub use field_value::{FieldErrors, FieldValue, FieldValues};
pub use form_field::{DerivedFormula, FormField};
pub use form_schema::{FormSchema, FormSummary};
pub use runtime_state::FormRuntimeState;
pub use validation_rule::{RuleKind, ValidationRule};
