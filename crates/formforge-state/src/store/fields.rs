//! Schema editing: new form, field CRUD, reorder, rule lists.

use std::collections::HashSet;

use formforge_core::errors::{FormError, FormResult};
use formforge_core::ids::new_id;
use formforge_core::models::{FieldPatch, FieldType, FormField, FormSchema, ValidationRule};
use tracing::debug;

use super::FormStore;
use crate::derivation::check_derivation;

impl FormStore {
    /// Start a fresh, empty form with a new id. Values and errors are cleared.
    pub fn new_form(&mut self) -> &FormSchema {
        let schema = FormSchema::empty(new_id());
        debug!(form_id = %schema.id, "new form");
        self.state.clear_live_state();
        self.state.current_form.insert(schema)
    }

    /// Append `field` to the current form.
    pub fn add_field(&mut self, field: FormField) -> FormResult<()> {
        let form = self.form()?;
        if form.contains(&field.id) {
            return Err(FormError::DuplicateFieldId { id: field.id });
        }
        check_derivation(form, &field)?;

        debug!(field_id = %field.id, field_type = %field.field_type, "add field");
        self.form_mut()?.fields.push(field);
        self.recompute_derived();
        Ok(())
    }

    /// Append a builder-default field of `field_type`, returning its id.
    pub fn add_field_of_type(&mut self, field_type: FieldType) -> FormResult<String> {
        let field = FormField::for_type(new_id(), field_type, &self.builder.default_options);
        let id = field.id.clone();
        self.add_field(field)?;
        Ok(id)
    }

    /// Merge `patch` into the field `field_id`.
    pub fn update_field(&mut self, field_id: &str, patch: &FieldPatch) -> FormResult<()> {
        let updated = patch.applied_to(self.require_field(field_id)?);
        check_derivation(self.form()?, &updated)?;

        debug!(field_id, "update field");
        if let Some(slot) = self.form_mut()?.field_mut(field_id) {
            *slot = updated;
        }
        self.recompute_derived();
        Ok(())
    }

    /// Remove a field together with its value, its error, and every
    /// reference to it as a derivation source.
    pub fn delete_field(&mut self, field_id: &str) -> FormResult<FormField> {
        self.require_field(field_id)?;
        let form = self.form_mut()?;
        let position = form.position(field_id).ok_or_else(|| FormError::FieldNotFound {
            id: field_id.to_string(),
        })?;
        let removed = form.fields.remove(position);
        for field in form.fields.iter_mut() {
            if let Some(sources) = field.derived_from.as_mut() {
                sources.retain(|s| s != field_id);
            }
        }

        self.state.values.remove(field_id);
        self.state.errors.remove(field_id);
        debug!(field_id, "delete field");
        self.recompute_derived();
        Ok(removed)
    }

    /// Put the fields in `new_order`, which must name every current field
    /// exactly once.
    pub fn reorder_fields(&mut self, new_order: &[String]) -> FormResult<()> {
        let form = self.form()?;
        let expected = form.fields.len();
        let not_permutation = || FormError::NotAPermutation {
            expected,
            received: new_order.len(),
        };

        let unique: HashSet<&str> = new_order.iter().map(String::as_str).collect();
        if new_order.len() != expected || unique.len() != expected {
            return Err(not_permutation());
        }
        if !new_order.iter().all(|id| form.contains(id)) {
            return Err(not_permutation());
        }

        let form = self.form_mut()?;
        let mut remaining = std::mem::take(&mut form.fields);
        for id in new_order {
            if let Some(position) = remaining.iter().position(|f| &f.id == id) {
                form.fields.push(remaining.swap_remove(position));
            }
        }
        debug!(count = expected, "reorder fields");
        Ok(())
    }

    /// Drag-and-drop move: take `dragged_id` out and insert it at the index
    /// `target_id` occupied.
    pub fn move_field(&mut self, dragged_id: &str, target_id: &str) -> FormResult<()> {
        let form = self.form()?;
        let missing = |id: &str| FormError::FieldNotFound { id: id.to_string() };
        let from = form.position(dragged_id).ok_or_else(|| missing(dragged_id))?;
        let to = form.position(target_id).ok_or_else(|| missing(target_id))?;
        if from == to {
            return Ok(());
        }

        let fields = &mut self.form_mut()?.fields;
        let field = fields.remove(from);
        fields.insert(to, field);
        debug!(dragged_id, target_id, from, to, "move field");
        Ok(())
    }

    /// Append a rule to a field's rule list. Blank messages are refused.
    pub fn add_validation_rule(&mut self, field_id: &str, rule: ValidationRule) -> FormResult<()> {
        if rule.message.trim().is_empty() {
            return Err(FormError::InvalidRule {
                reason: "message must not be empty".to_string(),
            });
        }
        let mut rules = self.require_field(field_id)?.validation_rules.clone();
        rules.push(rule);
        self.update_field(field_id, &FieldPatch::default().with_validation_rules(rules))
    }

    /// Remove the rule at `index` from a field's rule list.
    pub fn remove_validation_rule(&mut self, field_id: &str, index: usize) -> FormResult<ValidationRule> {
        let mut rules = self.require_field(field_id)?.validation_rules.clone();
        if index >= rules.len() {
            return Err(FormError::InvalidRule {
                reason: format!("no rule at index {index} ({} rules)", rules.len()),
            });
        }
        let removed = rules.remove(index);
        self.update_field(field_id, &FieldPatch::default().with_validation_rules(rules))?;
        Ok(removed)
    }
}
