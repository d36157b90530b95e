use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::field_type::FieldType;
use super::field_value::FieldValue;
use super::validation_rule::ValidationRule;

/// How a derived field computes its value from its source fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum DerivedFormula {
    /// Whole years elapsed since the first source's date.
    Age,
    /// Numeric sum of every source.
    Sum,
    /// Non-blank sources joined with a single space.
    Concat,
}

impl DerivedFormula {
    pub const ALL: [DerivedFormula; 3] = [Self::Age, Self::Sum, Self::Concat];

    pub fn label(self) -> &'static str {
        match self {
            Self::Age => "Age Calculation",
            Self::Sum => "Sum",
            Self::Concat => "Concatenation",
        }
    }
}

/// One field definition within a form schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    pub id: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
    pub required: bool,
    pub default_value: FieldValue,
    /// Evaluated in order; the first failing rule wins.
    #[serde(default)]
    pub validation_rules: Vec<ValidationRule>,
    /// Present for select, radio and checkbox fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub is_derived: bool,
    /// Source field ids, read in this order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub derived_from: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub derived_formula: Option<DerivedFormula>,
}

impl FormField {
    /// The field the builder appends when the user picks `field_type`.
    pub fn for_type(id: impl Into<String>, field_type: FieldType, default_options: &[String]) -> Self {
        Self {
            id: id.into(),
            field_type,
            label: format!("{} Field", field_type.label()),
            required: false,
            default_value: field_type.empty_value(),
            validation_rules: Vec::new(),
            options: field_type.has_options().then(|| default_options.to_vec()),
            is_derived: false,
            derived_from: None,
            derived_formula: None,
        }
    }

    /// Turn this field into a derived one.
    pub fn derived(mut self, formula: DerivedFormula, sources: &[&str]) -> Self {
        self.is_derived = true;
        self.derived_formula = Some(formula);
        self.derived_from = Some(sources.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Formula and sources, when the field is fully configured as derived.
    pub fn derivation(&self) -> Option<(DerivedFormula, &[String])> {
        if !self.is_derived {
            return None;
        }
        match (self.derived_formula, self.derived_from.as_deref()) {
            (Some(formula), Some(sources)) => Some((formula, sources)),
            _ => None,
        }
    }

    /// Source ids this field reads from (empty unless derived).
    pub fn sources(&self) -> &[String] {
        if self.is_derived {
            self.derived_from.as_deref().unwrap_or(&[])
        } else {
            &[]
        }
    }

    /// Whether this field reads `field_id` as a derivation source.
    pub fn depends_on(&self, field_id: &str) -> bool {
        self.sources().iter().any(|s| s == field_id)
    }
}
