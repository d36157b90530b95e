//! # formforge-validation
//!
//! Per-field validation for Formforge forms.
//!
//! ## Rules
//! 1. **required**: value present and non-empty
//! 2. **minLength** / **maxLength**: inclusive bounds on text length
//! 3. **email**: `local@domain.tld` shape
//! 4. **password**: at least 8 characters including a digit
//!
//! A field's rules run in declaration order and stop at the first failure.

pub mod draft;
pub mod engine;
pub mod evaluator;
pub mod messages;
pub mod rules;

pub use draft::RuleDraft;
pub use engine::{FormValidationReport, ValidationEngine};
pub use evaluator::{validate_field, validate_field_with};
pub use messages::default_message;
