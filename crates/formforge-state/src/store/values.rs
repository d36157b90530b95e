//! Live values and errors: set, change, validate, recompute.

use formforge_core::errors::FormResult;
use formforge_core::models::FieldValue;
use formforge_core::traits::{IDerivedCalculator, IFieldValidator};
use tracing::debug;

use super::FormStore;

impl FormStore {
    /// Store `value` for `field_id`, then bring derived fields up to date.
    pub fn set_value(&mut self, field_id: &str, value: FieldValue) -> FormResult<()> {
        self.require_field(field_id)?;
        self.state.values.insert(field_id.to_string(), value);
        self.recompute_derived();
        Ok(())
    }

    /// Preview input path: set the value, then validate just that field.
    ///
    /// Returns the field's new error message (`""` when valid).
    pub fn change_value(&mut self, field_id: &str, value: FieldValue) -> FormResult<String> {
        self.set_value(field_id, value)?;
        let field = self.require_field(field_id)?;
        let effective = self.effective_value(field);
        let message = self.validator.validate_field(field, Some(&effective));
        self.set_error(field_id, &message)?;
        Ok(message)
    }

    /// Record `message` for `field_id`; an empty message clears the error.
    pub fn set_error(&mut self, field_id: &str, message: &str) -> FormResult<()> {
        self.require_field(field_id)?;
        if message.is_empty() {
            self.state.errors.remove(field_id);
        } else {
            self.state
                .errors
                .insert(field_id.to_string(), message.to_string());
        }
        Ok(())
    }

    pub fn clear_values(&mut self) {
        self.state.values.clear();
        self.recompute_derived();
    }

    pub fn clear_errors(&mut self) {
        self.state.errors.clear();
    }

    /// Validate every field's effective value, setting or clearing each
    /// field's error. Returns whether the whole form passed.
    pub fn validate_all(&mut self) -> FormResult<bool> {
        let form = self.form()?;
        let report = self
            .validator
            .validate_form(form, &|field| Some(self.effective_value(field)));

        for field_id in &report.checked {
            match report.errors.get(field_id) {
                Some(message) => {
                    self.state.errors.insert(field_id.clone(), message.clone());
                }
                None => {
                    self.state.errors.remove(field_id);
                }
            }
        }
        debug!(passed = report.passed(), failed = report.errors.len(), "validate all");
        Ok(report.passed())
    }

    /// Write each derived field's computed value into `values` where it
    /// differs from what is stored. Returns the ids that changed.
    pub fn recompute_derived(&mut self) -> Vec<String> {
        let Some(form) = self.state.current_form.as_ref() else {
            return Vec::new();
        };

        let updates: Vec<(String, FieldValue)> = form
            .fields
            .iter()
            .filter(|f| f.is_derived)
            .filter_map(|field| {
                let computed = FieldValue::Text(self.calculator.calculate(field, &self.state.values));
                (self.state.values.get(&field.id) != Some(&computed))
                    .then(|| (field.id.clone(), computed))
            })
            .collect();

        let changed: Vec<String> = updates.iter().map(|(id, _)| id.clone()).collect();
        for (id, value) in updates {
            self.state.values.insert(id, value);
        }
        if !changed.is_empty() {
            debug!(changed = ?changed, "recomputed derived fields");
        }
        changed
    }
}
