//! FormStore: the single explicit state container for the form builder.

mod fields;
mod saved;
mod values;

pub use saved::SaveOutcome;

use std::sync::Arc;

use formforge_core::config::{BuilderConfig, FormForgeConfig};
use formforge_core::errors::{FormError, FormResult};
use formforge_core::models::{
    FieldErrors, FieldValue, FieldValues, FormField, FormRuntimeState, FormSchema, FormSummary,
};
use formforge_core::traits::{IClock, IDerivedCalculator, IFormRepository, SystemClock};
use formforge_derived::DerivedCalculator;
use formforge_storage::FormRepository;
use formforge_validation::ValidationEngine;

/// Form being edited, its live values and errors, and the saved collection.
///
/// Every mutation runs to completion before the next; reads see only
/// completed transitions.
pub struct FormStore {
    state: FormRuntimeState,
    saved_forms: Vec<FormSchema>,
    repository: Box<dyn IFormRepository>,
    validator: ValidationEngine,
    calculator: DerivedCalculator,
    clock: Arc<dyn IClock>,
    builder: BuilderConfig,
}

impl FormStore {
    /// Store over `repository` with default config and the system clock.
    /// The saved collection is loaded immediately.
    pub fn new(repository: Box<dyn IFormRepository>) -> Self {
        Self::with_config(repository, &FormForgeConfig::default(), Arc::new(SystemClock))
    }

    /// Store with explicit config and clock. The saved collection is loaded
    /// immediately.
    pub fn with_config(
        repository: Box<dyn IFormRepository>,
        config: &FormForgeConfig,
        clock: Arc<dyn IClock>,
    ) -> Self {
        let mut store = Self {
            state: FormRuntimeState::default(),
            saved_forms: Vec::new(),
            repository,
            validator: ValidationEngine::new(config.validation.clone()),
            calculator: DerivedCalculator::new(Arc::clone(&clock)),
            clock,
            builder: config.builder.clone(),
        };
        store.load_saved_forms();
        store
    }

    /// Store persisting to the SQLite file named in `config`.
    pub fn open(config: &FormForgeConfig) -> FormResult<Self> {
        let repository = FormRepository::open(&config.storage)?;
        Ok(Self::with_config(
            Box::new(repository),
            config,
            Arc::new(SystemClock),
        ))
    }

    // --- Snapshots ---

    pub fn state(&self) -> &FormRuntimeState {
        &self.state
    }

    pub fn snapshot(&self) -> FormRuntimeState {
        self.state.clone()
    }

    pub fn current_form(&self) -> Option<&FormSchema> {
        self.state.current_form.as_ref()
    }

    pub fn values(&self) -> &FieldValues {
        &self.state.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.state.errors
    }

    /// The field's current error, or `""`.
    pub fn error(&self, field_id: &str) -> &str {
        self.state
            .errors
            .get(field_id)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn saved_forms(&self) -> &[FormSchema] {
        &self.saved_forms
    }

    pub fn saved_summaries(&self) -> Vec<FormSummary> {
        self.saved_forms.iter().map(FormSchema::summary).collect()
    }

    pub fn field(&self, field_id: &str) -> Option<&FormField> {
        self.current_form()?.field(field_id)
    }

    /// The value shown and validated for `field`.
    ///
    /// Derived fields are computed; others use the live value, then the
    /// field's default.
    pub fn effective_value(&self, field: &FormField) -> FieldValue {
        if field.is_derived {
            return FieldValue::Text(self.calculator.calculate(field, &self.state.values));
        }
        self.state
            .values
            .get(&field.id)
            .cloned()
            .unwrap_or_else(|| field.default_value.clone())
    }

    /// Effective value of every field in the current form.
    pub fn effective_values(&self) -> FieldValues {
        self.current_form()
            .map(|form| {
                form.fields
                    .iter()
                    .map(|f| (f.id.clone(), self.effective_value(f)))
                    .collect()
            })
            .unwrap_or_default()
    }

    // --- Internal helpers ---

    fn form(&self) -> FormResult<&FormSchema> {
        self.state.current_form.as_ref().ok_or(FormError::NoCurrentForm)
    }

    fn form_mut(&mut self) -> FormResult<&mut FormSchema> {
        self.state.current_form.as_mut().ok_or(FormError::NoCurrentForm)
    }

    fn require_field(&self, field_id: &str) -> FormResult<&FormField> {
        self.form()?
            .field(field_id)
            .ok_or_else(|| FormError::FieldNotFound {
                id: field_id.to_string(),
            })
    }
}
