//! Saved form collection: save preconditions, round-trip through storage,
//! degraded persistence, delete, and select.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use formforge_core::config::FormForgeConfig;
use formforge_core::errors::FormError;
use formforge_core::models::{FieldValue, FormSchema};
use formforge_core::traits::FixedClock;
use formforge_state::FormStore;
use formforge_storage::{FormRepository, MemoryKeyValueStore};
use test_fixtures::{date, date_field, load_fixture_text, schema, text_field};

fn store_over(kv: &Arc<MemoryKeyValueStore>) -> FormStore {
    FormStore::with_config(
        Box::new(FormRepository::new(Arc::clone(kv))),
        &FormForgeConfig::default(),
        Arc::new(FixedClock::on(date(2024, 6, 15))),
    )
}

fn draft() -> FormSchema {
    schema(
        "draft-1",
        vec![text_field("name", "Name"), date_field("dob", "Birth")],
    )
}

// ═══════════════════════════════════════════════════════════════════════════
// SAVE
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn save_preconditions_are_enforced() {
    let kv = Arc::new(MemoryKeyValueStore::new());
    let mut store = store_over(&kv);

    assert!(matches!(store.save_form("Signup"), Err(FormError::NoCurrentForm)));

    store.new_form();
    assert!(matches!(store.save_form("Signup"), Err(FormError::EmptyForm)));

    store.select_saved_form(draft());
    assert!(matches!(store.save_form("   "), Err(FormError::EmptyFormName)));
    assert!(store.saved_forms().is_empty());
}

#[test]
fn save_then_reload_round_trips() {
    let kv = Arc::new(MemoryKeyValueStore::new());
    let mut store = store_over(&kv);
    store.select_saved_form(draft());

    let outcome = store.save_form("  Signup  ").unwrap();
    assert!(outcome.persisted);
    assert_eq!(outcome.schema.name, "Signup");
    assert_eq!(outcome.schema.id, "draft-1");
    assert_eq!(
        outcome.schema.created_at,
        Some(Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap())
    );

    let reopened = store_over(&kv);
    assert_eq!(reopened.saved_forms(), &[outcome.schema.clone()]);

    let mut expected = draft();
    expected.name = "Signup".into();
    expected.created_at = outcome.schema.created_at;
    assert_eq!(reopened.saved_forms()[0], expected);
}

#[test]
fn saving_twice_appends_both_copies() {
    let kv = Arc::new(MemoryKeyValueStore::new());
    let mut store = store_over(&kv);
    store.select_saved_form(draft());
    store.save_form("First").unwrap();
    store.save_form("Second").unwrap();

    let names: Vec<&str> = store.saved_forms().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second"]);
    assert_eq!(store.saved_summaries().len(), 2);
}

#[test]
fn failed_persistence_keeps_memory_copy() {
    let kv = Arc::new(MemoryKeyValueStore::new());
    let mut store = store_over(&kv);
    store.select_saved_form(draft());

    kv.set_unavailable(true);
    let outcome = store.save_form("Offline").unwrap();
    assert!(!outcome.persisted);
    assert_eq!(store.saved_forms().len(), 1);

    kv.set_unavailable(false);
    assert!(store_over(&kv).saved_forms().is_empty());
}

// ═══════════════════════════════════════════════════════════════════════════
// LOAD / DELETE / SELECT
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn existing_collection_is_loaded_on_construction() {
    let kv = Arc::new(MemoryKeyValueStore::with_entry(
        "formBuilderForms",
        load_fixture_text("saved_forms.json"),
    ));
    let store = store_over(&kv);
    let summaries = store.saved_summaries();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].name, "Contact");
    assert_eq!(summaries[1].name, "Profile");
}

#[test]
fn corrupt_collection_loads_empty() {
    let kv = Arc::new(MemoryKeyValueStore::with_entry(
        "formBuilderForms",
        load_fixture_text("corrupt_forms.json"),
    ));
    let mut store = store_over(&kv);
    assert!(store.saved_forms().is_empty());
    assert_eq!(store.load_saved_forms(), 0);
}

#[test]
fn select_saved_form_resets_live_state() {
    let kv = Arc::new(MemoryKeyValueStore::with_entry(
        "formBuilderForms",
        load_fixture_text("saved_forms.json"),
    ));
    let mut store = store_over(&kv);
    store.select_saved_form(draft());
    store.set_value("name", "x".into()).unwrap();
    store.set_error("name", "bad").unwrap();

    store.select_saved_form_by_id("1718000000100").unwrap();
    assert_eq!(store.current_form().unwrap().name, "Profile");
    assert!(store.errors().is_empty());
    assert!(!store.values().contains_key("name"));

    store.set_value("first", "Jane".into()).unwrap();
    store.set_value("last", "Doe".into()).unwrap();
    assert_eq!(store.values()["full"], FieldValue::from("Jane Doe"));
}

#[test]
fn select_unknown_saved_form_is_rejected() {
    let kv = Arc::new(MemoryKeyValueStore::new());
    let mut store = store_over(&kv);
    assert!(matches!(
        store.select_saved_form_by_id("missing"),
        Err(FormError::SavedFormNotFound { .. })
    ));
    assert!(store.current_form().is_none());
}

#[test]
fn delete_saved_form_persists_removal() {
    let kv = Arc::new(MemoryKeyValueStore::with_entry(
        "formBuilderForms",
        load_fixture_text("saved_forms.json"),
    ));
    let mut store = store_over(&kv);
    assert!(store.delete_saved_form("1718000000000").unwrap());
    assert_eq!(store.saved_forms().len(), 1);

    assert!(matches!(
        store.delete_saved_form("1718000000000"),
        Err(FormError::SavedFormNotFound { .. })
    ));

    let reopened = store_over(&kv);
    assert_eq!(reopened.saved_forms().len(), 1);
    assert_eq!(reopened.saved_forms()[0].name, "Profile");
}

// ═══════════════════════════════════════════════════════════════════════════
// SQLITE FILE
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn saved_forms_survive_reopening_the_database() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = FormForgeConfig::default();
    config.storage.db_path = dir.path().join("forms.db").to_string_lossy().into_owned();

    {
        let mut store = FormStore::open(&config).unwrap();
        store.select_saved_form(draft());
        assert!(store.save_form("On disk").unwrap().persisted);
    }

    let store = FormStore::open(&config).unwrap();
    assert_eq!(store.saved_forms().len(), 1);
    assert_eq!(store.saved_forms()[0].name, "On disk");
    assert_eq!(store.saved_forms()[0].fields.len(), 2);
}
