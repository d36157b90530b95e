use formforge_core::models::FieldValues;

use super::source_text;

/// Source values in order, blank ones dropped, joined by a single space.
pub fn calculate(sources: &[String], values: &FieldValues) -> String {
    sources
        .iter()
        .map(|id| source_text(values, id))
        .filter(|text| !text.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
