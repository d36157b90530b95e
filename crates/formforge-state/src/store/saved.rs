//! The saved form collection: save, load, delete, select.

use formforge_core::errors::{FormError, FormResult};
use formforge_core::models::FormSchema;
use tracing::{info, warn};

use super::FormStore;

/// Result of saving the current form.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveOutcome {
    /// The frozen copy appended to the collection.
    pub schema: FormSchema,
    /// Whether the collection reached durable storage.
    pub persisted: bool,
}

impl FormStore {
    /// Append a named, timestamped copy of the current form to the saved
    /// collection and persist the whole collection.
    ///
    /// The in-memory collection keeps the copy even if persisting fails.
    pub fn save_form(&mut self, name: &str) -> FormResult<SaveOutcome> {
        let form = self.form()?;
        let name = name.trim();
        if name.is_empty() {
            return Err(FormError::EmptyFormName);
        }
        if form.fields.is_empty() {
            return Err(FormError::EmptyForm);
        }

        let mut schema = form.clone();
        schema.name = name.to_string();
        schema.created_at = Some(self.clock.now());

        self.saved_forms.push(schema.clone());
        let persisted = self.repository.save(&self.saved_forms);
        if persisted {
            info!(form_id = %schema.id, name = %schema.name, "saved form");
        } else {
            warn!(form_id = %schema.id, "saved form kept in memory only");
        }
        Ok(SaveOutcome { schema, persisted })
    }

    /// Replace the saved collection with what storage holds. Returns its size.
    pub fn load_saved_forms(&mut self) -> usize {
        self.saved_forms = self.repository.load();
        info!(count = self.saved_forms.len(), "loaded saved forms");
        self.saved_forms.len()
    }

    /// Remove every saved form with `form_id` and persist the collection.
    /// Returns whether persisting succeeded.
    pub fn delete_saved_form(&mut self, form_id: &str) -> FormResult<bool> {
        if !self.saved_forms.iter().any(|f| f.id == form_id) {
            return Err(FormError::SavedFormNotFound {
                id: form_id.to_string(),
            });
        }
        self.saved_forms.retain(|f| f.id != form_id);
        let persisted = self.repository.save(&self.saved_forms);
        info!(form_id, persisted, "deleted saved form");
        Ok(persisted)
    }

    /// Make `schema` the current form with fresh values and errors.
    pub fn select_saved_form(&mut self, schema: FormSchema) {
        info!(form_id = %schema.id, "selected saved form");
        self.state.current_form = Some(schema);
        self.state.clear_live_state();
        self.recompute_derived();
    }

    /// [`select_saved_form`](Self::select_saved_form) by id from the collection.
    pub fn select_saved_form_by_id(&mut self, form_id: &str) -> FormResult<()> {
        let schema = self
            .saved_forms
            .iter()
            .find(|f| f.id == form_id)
            .cloned()
            .ok_or_else(|| FormError::SavedFormNotFound {
                id: form_id.to_string(),
            })?;
        self.select_saved_form(schema);
        Ok(())
    }
}
