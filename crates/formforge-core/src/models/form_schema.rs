use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::field_type::FieldType;
use super::form_field::FormField;

/// A named, ordered collection of field definitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FormSchema {
    pub id: String,
    pub name: String,
    /// Display and evaluation order.
    pub fields: Vec<FormField>,
    /// Set once, when the schema is saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl FormSchema {
    /// A fresh, unnamed, unsaved schema.
    pub fn empty(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            fields: Vec::new(),
            created_at: None,
        }
    }

    pub fn field(&self, field_id: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.id == field_id)
    }

    pub fn field_mut(&mut self, field_id: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.id == field_id)
    }

    pub fn position(&self, field_id: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.id == field_id)
    }

    pub fn contains(&self, field_id: &str) -> bool {
        self.position(field_id).is_some()
    }

    pub fn field_ids(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.id.clone()).collect()
    }

    pub fn has_derived_fields(&self) -> bool {
        self.fields.iter().any(|f| f.is_derived)
    }

    /// Fields a derived field may read: every non-derived field except itself.
    pub fn derivation_candidates(&self, field_id: &str) -> Vec<&FormField> {
        self.fields
            .iter()
            .filter(|f| f.id != field_id && !f.is_derived)
            .collect()
    }

    /// Overview shown in the saved-forms listing.
    pub fn summary(&self) -> FormSummary {
        let mut field_types: Vec<FieldType> = Vec::new();
        for field in &self.fields {
            if !field_types.contains(&field.field_type) {
                field_types.push(field.field_type);
            }
        }
        FormSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            field_count: self.fields.len(),
            has_derived_fields: self.has_derived_fields(),
            field_types,
            created_at: self.created_at,
        }
    }
}

/// Listing entry for a saved schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FormSummary {
    pub id: String,
    pub name: String,
    pub field_count: usize,
    pub has_derived_fields: bool,
    /// Distinct field types, in order of first appearance.
    pub field_types: Vec<FieldType>,
    pub created_at: Option<DateTime<Utc>>,
}
