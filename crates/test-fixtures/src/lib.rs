//! Field and schema builders plus golden stored-data fixtures for tests
//! across the workspace.

use std::path::PathBuf;

use chrono::NaiveDate;
use formforge_core::models::{
    DerivedFormula, FieldType, FormField, FormSchema, RuleKind, ValidationRule,
};
use serde::de::DeserializeOwned;

/// Root directory of the golden fixture files.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("golden").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures").join("golden")
}

/// Get the absolute path to a golden file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Read a golden file as raw text.
///
/// # Panics
/// Panics if the file doesn't exist.
pub fn load_fixture_text(relative_path: &str) -> String {
    let path = fixture_path(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Load and deserialize a JSON golden file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let content = load_fixture_text(relative_path);
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", relative_path, e))
}

fn default_options() -> Vec<String> {
    vec!["Option 1".into(), "Option 2".into(), "Option 3".into()]
}

/// A plain field of `field_type` with the given label.
pub fn field(id: &str, field_type: FieldType, label: &str) -> FormField {
    let mut field = FormField::for_type(id, field_type, &default_options());
    field.label = label.to_string();
    field
}

pub fn text_field(id: &str, label: &str) -> FormField {
    field(id, FieldType::Text, label)
}

pub fn date_field(id: &str, label: &str) -> FormField {
    field(id, FieldType::Date, label)
}

pub fn number_field(id: &str, label: &str) -> FormField {
    field(id, FieldType::Number, label)
}

pub fn checkbox_field(id: &str, label: &str) -> FormField {
    field(id, FieldType::Checkbox, label)
}

/// A derived text field reading `sources` through `formula`.
pub fn derived_field(id: &str, formula: DerivedFormula, sources: &[&str]) -> FormField {
    field(id, FieldType::Text, id).derived(formula, sources)
}

/// Attach `rules` to `field`, replacing any existing ones.
pub fn with_rules(mut field: FormField, rules: Vec<ValidationRule>) -> FormField {
    field.validation_rules = rules;
    field
}

pub fn rule(kind: RuleKind, message: &str) -> ValidationRule {
    ValidationRule::new(kind, message)
}

pub fn length_rule(kind: RuleKind, bound: u32, message: &str) -> ValidationRule {
    ValidationRule::new(kind, message).with_param(bound)
}

/// An unsaved schema holding `fields`.
pub fn schema(id: &str, fields: Vec<FormField>) -> FormSchema {
    let mut schema = FormSchema::empty(id);
    schema.fields = fields;
    schema
}

/// Birth date `A` and its derived age `B`.
pub fn birth_age_schema() -> FormSchema {
    schema(
        "birth-age",
        vec![
            date_field("A", "Birth"),
            derived_field("B", DerivedFormula::Age, &["A"]),
        ],
    )
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}
