//! ValidationEngine: implements IFieldValidator and runs a whole form.

use formforge_core::config::ValidationConfig;
use formforge_core::models::{FieldErrors, FieldValue, FormField, FormSchema};
use formforge_core::traits::IFieldValidator;
use tracing::debug;

use crate::evaluator::validate_field_with;

/// Outcome of validating every field of a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValidationReport {
    /// Failing fields and their messages.
    pub errors: FieldErrors,
    /// Every field checked, in schema order.
    pub checked: Vec<String>,
}

impl FormValidationReport {
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }

    /// The message for `field_id`, or `""` when it passed.
    pub fn message_for(&self, field_id: &str) -> &str {
        self.errors.get(field_id).map(String::as_str).unwrap_or("")
    }
}

/// Field validator carrying the bounds for parameterless length rules.
#[derive(Debug, Clone, Default)]
pub struct ValidationEngine {
    config: ValidationConfig,
}

impl ValidationEngine {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate every field of `schema`.
    ///
    /// `effective_value` supplies the value each field is checked against.
    pub fn validate_form(
        &self,
        schema: &FormSchema,
        effective_value: &dyn Fn(&FormField) -> Option<FieldValue>,
    ) -> FormValidationReport {
        let mut report = FormValidationReport::default();
        for field in &schema.fields {
            let value = effective_value(field);
            let message = self.validate_field(field, value.as_ref());
            if !message.is_empty() {
                report.errors.insert(field.id.clone(), message);
            }
            report.checked.push(field.id.clone());
        }
        debug!(
            form_id = %schema.id,
            checked = report.checked.len(),
            failed = report.errors.len(),
            "validated form"
        );
        report
    }
}

impl IFieldValidator for ValidationEngine {
    fn validate_field(&self, field: &FormField, value: Option<&FieldValue>) -> String {
        validate_field_with(field, value, &self.config)
    }
}
