//! The discrete actions a [`FormStore`] accepts, and what each returns.
//!
//! [`FormStore::dispatch`] is the single entry point a UI layer needs. The
//! named methods on [`FormStore`] remain available for direct callers.

use formforge_core::errors::FormResult;
use formforge_core::models::{FieldPatch, FieldType, FieldValue, FormField, FormSchema, ValidationRule};
use tracing::warn;

use crate::store::{FormStore, SaveOutcome};

/// One state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    NewForm,
    AddField(FormField),
    AddFieldOfType(FieldType),
    UpdateField { field_id: String, patch: FieldPatch },
    DeleteField(String),
    ReorderFields(Vec<String>),
    MoveField { dragged_id: String, target_id: String },
    AddValidationRule { field_id: String, rule: ValidationRule },
    RemoveValidationRule { field_id: String, index: usize },
    SetValue { field_id: String, value: FieldValue },
    ChangeValue { field_id: String, value: FieldValue },
    SetError { field_id: String, message: String },
    ClearValues,
    ClearErrors,
    ValidateAll,
    RecomputeDerived,
    SaveForm(String),
    LoadSavedForms,
    DeleteSavedForm(String),
    SelectSavedForm(FormSchema),
}

impl FormAction {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NewForm => "new_form",
            Self::AddField(_) => "add_field",
            Self::AddFieldOfType(_) => "add_field_of_type",
            Self::UpdateField { .. } => "update_field",
            Self::DeleteField(_) => "delete_field",
            Self::ReorderFields(_) => "reorder_fields",
            Self::MoveField { .. } => "move_field",
            Self::AddValidationRule { .. } => "add_validation_rule",
            Self::RemoveValidationRule { .. } => "remove_validation_rule",
            Self::SetValue { .. } => "set_value",
            Self::ChangeValue { .. } => "change_value",
            Self::SetError { .. } => "set_error",
            Self::ClearValues => "clear_values",
            Self::ClearErrors => "clear_errors",
            Self::ValidateAll => "validate_all",
            Self::RecomputeDerived => "recompute_derived",
            Self::SaveForm(_) => "save_form",
            Self::LoadSavedForms => "load_saved_forms",
            Self::DeleteSavedForm(_) => "delete_saved_form",
            Self::SelectSavedForm(_) => "select_saved_form",
        }
    }
}

/// What an accepted action produced.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    Done,
    FormCreated(String),
    FieldAdded(String),
    FieldDeleted(FormField),
    RuleRemoved(ValidationRule),
    /// The field's error after a `ChangeValue`; empty when valid.
    FieldChecked(String),
    /// Whether every field passed.
    Validated(bool),
    /// Derived field ids whose stored value changed.
    Recomputed(Vec<String>),
    Saved(SaveOutcome),
    /// Number of saved forms now held.
    Loaded(usize),
    /// Whether the collection was persisted after the delete.
    SavedFormDeleted(bool),
}

impl FormStore {
    /// Apply `action`. A rejected action leaves the state exactly as it was.
    pub fn dispatch(&mut self, action: FormAction) -> FormResult<ActionOutcome> {
        let name = action.name();
        let result = self.apply(action);
        if let Err(e) = &result {
            warn!(action = name, error = %e, "action rejected");
        }
        result
    }

    fn apply(&mut self, action: FormAction) -> FormResult<ActionOutcome> {
        use ActionOutcome::*;

        Ok(match action {
            FormAction::NewForm => FormCreated(self.new_form().id.clone()),
            FormAction::AddField(field) => {
                let id = field.id.clone();
                self.add_field(field)?;
                FieldAdded(id)
            }
            FormAction::AddFieldOfType(field_type) => FieldAdded(self.add_field_of_type(field_type)?),
            FormAction::UpdateField { field_id, patch } => {
                self.update_field(&field_id, &patch)?;
                Done
            }
            FormAction::DeleteField(field_id) => FieldDeleted(self.delete_field(&field_id)?),
            FormAction::ReorderFields(order) => {
                self.reorder_fields(&order)?;
                Done
            }
            FormAction::MoveField {
                dragged_id,
                target_id,
            } => {
                self.move_field(&dragged_id, &target_id)?;
                Done
            }
            FormAction::AddValidationRule { field_id, rule } => {
                self.add_validation_rule(&field_id, rule)?;
                Done
            }
            FormAction::RemoveValidationRule { field_id, index } => {
                RuleRemoved(self.remove_validation_rule(&field_id, index)?)
            }
            FormAction::SetValue { field_id, value } => {
                self.set_value(&field_id, value)?;
                Done
            }
            FormAction::ChangeValue { field_id, value } => {
                FieldChecked(self.change_value(&field_id, value)?)
            }
            FormAction::SetError { field_id, message } => {
                self.set_error(&field_id, &message)?;
                Done
            }
            FormAction::ClearValues => {
                self.clear_values();
                Done
            }
            FormAction::ClearErrors => {
                self.clear_errors();
                Done
            }
            FormAction::ValidateAll => Validated(self.validate_all()?),
            FormAction::RecomputeDerived => Recomputed(self.recompute_derived()),
            FormAction::SaveForm(name) => Saved(self.save_form(&name)?),
            FormAction::LoadSavedForms => Loaded(self.load_saved_forms()),
            FormAction::DeleteSavedForm(form_id) => {
                SavedFormDeleted(self.delete_saved_form(&form_id)?)
            }
            FormAction::SelectSavedForm(schema) => {
                self.select_saved_form(schema);
                Done
            }
        })
    }
}
