use formforge_core::config::ValidationConfig;
use formforge_core::models::{FieldValue, FormField};

use crate::rules;

/// Validate `value` against `field`'s rules with the default bounds.
///
/// Returns the message of the first failing rule, or `""` if all pass.
pub fn validate_field(field: &FormField, value: Option<&FieldValue>) -> String {
    validate_field_with(field, value, &ValidationConfig::default())
}

/// [`validate_field`] with explicit bounds for parameterless rules.
pub fn validate_field_with(
    field: &FormField,
    value: Option<&FieldValue>,
    config: &ValidationConfig,
) -> String {
    field
        .validation_rules
        .iter()
        .find(|rule| !rules::passes(rule, value, config))
        .map(|rule| rule.message.clone())
        .unwrap_or_default()
}
