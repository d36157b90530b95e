use chrono::{TimeZone, Utc};
use formforge_core::models::*;
use proptest::prelude::*;
use serde_json::json;

fn options() -> Vec<String> {
    vec!["Option 1".into(), "Option 2".into(), "Option 3".into()]
}

// ── Field factory ─────────────────────────────────────────────────────────

#[test]
fn new_text_field_has_builder_defaults() {
    let field = FormField::for_type("f1", FieldType::Text, &options());
    assert_eq!(field.label, "Text Field");
    assert!(!field.required);
    assert_eq!(field.default_value, FieldValue::from(""));
    assert!(field.validation_rules.is_empty());
    assert!(field.options.is_none());
    assert!(!field.is_derived);
    assert!(field.derivation().is_none());
}

#[test]
fn new_checkbox_field_starts_with_empty_list_and_options() {
    let field = FormField::for_type("f1", FieldType::Checkbox, &options());
    assert_eq!(field.label, "Checkbox Field");
    assert_eq!(field.default_value, FieldValue::List(vec![]));
    assert_eq!(field.options.as_deref(), Some(options().as_slice()));
}

#[test]
fn option_bearing_types_are_select_radio_checkbox() {
    let with_options: Vec<FieldType> = FieldType::ALL
        .into_iter()
        .filter(|t| t.has_options())
        .collect();
    assert_eq!(
        with_options,
        vec![FieldType::Select, FieldType::Radio, FieldType::Checkbox]
    );
}

// ── Wire format ───────────────────────────────────────────────────────────

#[test]
fn field_serializes_with_camel_case_wire_names() {
    let field = FormField::for_type("full", FieldType::Text, &options())
        .derived(DerivedFormula::Concat, &["first", "last"]);
    let value = serde_json::to_value(&field).unwrap();
    assert_eq!(value["type"], "text");
    assert_eq!(value["defaultValue"], "");
    assert_eq!(value["isDerived"], true);
    assert_eq!(value["derivedFrom"], json!(["first", "last"]));
    assert_eq!(value["derivedFormula"], "concat");
    assert!(value.get("options").is_none());
}

#[test]
fn rule_parameter_is_stored_as_value() {
    let rule = ValidationRule::new(RuleKind::MinLength, "too short").with_param(3);
    let value = serde_json::to_value(&rule).unwrap();
    assert_eq!(value, json!({"type": "minLength", "value": 3, "message": "too short"}));

    let required = ValidationRule::new(RuleKind::Required, "needed");
    let value = serde_json::to_value(&required).unwrap();
    assert!(value.get("value").is_none());
}

#[test]
fn field_value_accepts_string_or_array() {
    let text: FieldValue = serde_json::from_value(json!("hello")).unwrap();
    assert_eq!(text, FieldValue::from("hello"));
    let list: FieldValue = serde_json::from_value(json!(["a", "b"])).unwrap();
    assert_eq!(list, FieldValue::from(vec!["a", "b"]));
}

#[test]
fn stored_field_without_optional_members_deserializes() {
    let raw = json!({
        "id": "1",
        "type": "number",
        "label": "Count",
        "required": false,
        "defaultValue": "",
        "validationRules": [],
        "isDerived": false
    });
    let field: FormField = serde_json::from_value(raw).unwrap();
    assert_eq!(field.field_type, FieldType::Number);
    assert!(field.derived_from.is_none());
    assert!(field.derived_formula.is_none());
}

// ── Schema helpers ────────────────────────────────────────────────────────

#[test]
fn summary_lists_distinct_types_in_first_appearance_order() {
    let mut schema = FormSchema::empty("s1");
    schema.name = "Signup".into();
    schema.created_at = Some(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap());
    schema.fields = vec![
        FormField::for_type("a", FieldType::Text, &options()),
        FormField::for_type("b", FieldType::Date, &options()),
        FormField::for_type("c", FieldType::Text, &options()),
        FormField::for_type("d", FieldType::Number, &options())
            .derived(DerivedFormula::Age, &["b"]),
    ];

    let summary = schema.summary();
    assert_eq!(summary.name, "Signup");
    assert_eq!(summary.field_count, 4);
    assert!(summary.has_derived_fields);
    assert_eq!(
        summary.field_types,
        vec![FieldType::Text, FieldType::Date, FieldType::Number]
    );
    assert_eq!(summary.created_at, schema.created_at);
}

#[test]
fn derivation_candidates_exclude_self_and_derived_fields() {
    let mut schema = FormSchema::empty("s1");
    schema.fields = vec![
        FormField::for_type("a", FieldType::Text, &options()),
        FormField::for_type("b", FieldType::Text, &options())
            .derived(DerivedFormula::Concat, &["a"]),
        FormField::for_type("c", FieldType::Number, &options()),
    ];
    let ids: Vec<&str> = schema
        .derivation_candidates("c")
        .iter()
        .map(|f| f.id.as_str())
        .collect();
    assert_eq!(ids, vec!["a"]);
}

#[test]
fn non_derived_field_reports_no_sources_even_with_stale_list() {
    let mut field = FormField::for_type("x", FieldType::Text, &options())
        .derived(DerivedFormula::Sum, &["a"]);
    field.is_derived = false;
    assert!(field.sources().is_empty());
    assert!(!field.depends_on("a"));
}

// ── Patches ───────────────────────────────────────────────────────────────

#[test]
fn patch_merges_only_set_members() {
    let field = FormField::for_type("f", FieldType::Select, &options());
    let patch = FieldPatch::default()
        .with_label("Colour")
        .with_options(Some(vec!["Red".into()]));
    let updated = patch.applied_to(&field);

    assert_eq!(updated.id, "f");
    assert_eq!(updated.label, "Colour");
    assert_eq!(updated.options, Some(vec!["Red".to_string()]));
    assert_eq!(updated.field_type, FieldType::Select);
    assert!(!updated.required);
}

#[test]
fn patch_can_clear_optional_members() {
    let field = FormField::for_type("f", FieldType::Text, &options())
        .derived(DerivedFormula::Concat, &["a"]);
    let patch = FieldPatch::default()
        .with_is_derived(false)
        .with_derived_from(None)
        .with_derived_formula(None);
    let updated = patch.applied_to(&field);
    assert!(!updated.is_derived);
    assert!(updated.derived_from.is_none());
    assert!(updated.derived_formula.is_none());
}

#[test]
fn turning_derivation_off_drops_sources_and_formula() {
    let field = FormField::for_type("f", FieldType::Text, &options())
        .derived(DerivedFormula::Sum, &["a", "b"]);
    let updated = FieldPatch::default().with_is_derived(false).applied_to(&field);
    assert!(!updated.is_derived);
    assert!(updated.derived_from.is_none());
    assert!(updated.derived_formula.is_none());

    let json = serde_json::to_value(&updated).unwrap();
    assert!(json.get("derivedFrom").is_none());
    assert!(json.get("derivedFormula").is_none());
}

#[test]
fn empty_patch_is_identity() {
    let field = FormField::for_type("f", FieldType::Radio, &options());
    let patch = FieldPatch::default();
    assert!(patch.is_empty());
    assert_eq!(patch.applied_to(&field), field);
}

proptest! {
    #[test]
    fn parsed_options_are_never_blank_or_padded(text in "[ a-zA-Z0-9,]{0,40}") {
        for opt in parse_options(&text) {
            prop_assert!(!opt.is_empty());
            prop_assert_eq!(opt.trim(), opt.as_str());
        }
    }
}
