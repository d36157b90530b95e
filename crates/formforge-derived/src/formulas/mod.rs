pub mod age;
pub mod concat;
pub mod sum;

use formforge_core::models::FieldValues;

/// A source's value flattened to text; missing sources read as `""`.
pub(crate) fn source_text(values: &FieldValues, field_id: &str) -> String {
    values
        .get(field_id)
        .map(|v| v.to_joined_string())
        .unwrap_or_default()
}
