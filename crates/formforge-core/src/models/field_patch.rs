use super::field_type::FieldType;
use super::field_value::FieldValue;
use super::form_field::{DerivedFormula, FormField};
use super::validation_rule::ValidationRule;

/// A partial field update. Unset members leave the field untouched.
///
/// The id cannot be patched. For the optional members, `Some(None)` clears.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldPatch {
    pub field_type: Option<FieldType>,
    pub label: Option<String>,
    pub required: Option<bool>,
    pub default_value: Option<FieldValue>,
    pub validation_rules: Option<Vec<ValidationRule>>,
    pub options: Option<Option<Vec<String>>>,
    pub is_derived: Option<bool>,
    pub derived_from: Option<Option<Vec<String>>>,
    pub derived_formula: Option<Option<DerivedFormula>>,
}

impl FieldPatch {
    pub fn with_field_type(mut self, field_type: FieldType) -> Self {
        self.field_type = Some(field_type);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn with_default_value(mut self, value: impl Into<FieldValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_validation_rules(mut self, rules: Vec<ValidationRule>) -> Self {
        self.validation_rules = Some(rules);
        self
    }

    pub fn with_options(mut self, options: Option<Vec<String>>) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_is_derived(mut self, is_derived: bool) -> Self {
        self.is_derived = Some(is_derived);
        self
    }

    pub fn with_derived_from(mut self, sources: Option<Vec<String>>) -> Self {
        self.derived_from = Some(sources);
        self
    }

    pub fn with_derived_formula(mut self, formula: Option<DerivedFormula>) -> Self {
        self.derived_formula = Some(formula);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge into `field`, returning the updated copy. `field` is not modified.
    ///
    /// A field that ends up non-derived carries no sources or formula.
    pub fn applied_to(&self, field: &FormField) -> FormField {
        let mut updated = field.clone();
        if let Some(field_type) = self.field_type {
            updated.field_type = field_type;
        }
        if let Some(label) = &self.label {
            updated.label = label.clone();
        }
        if let Some(required) = self.required {
            updated.required = required;
        }
        if let Some(value) = &self.default_value {
            updated.default_value = value.clone();
        }
        if let Some(rules) = &self.validation_rules {
            updated.validation_rules = rules.clone();
        }
        if let Some(options) = &self.options {
            updated.options = options.clone();
        }
        if let Some(is_derived) = self.is_derived {
            updated.is_derived = is_derived;
        }
        if let Some(sources) = &self.derived_from {
            updated.derived_from = sources.clone();
        }
        if let Some(formula) = self.derived_formula {
            updated.derived_formula = formula;
        }
        if !updated.is_derived {
            updated.derived_from = None;
            updated.derived_formula = None;
        }
        updated
    }
}
