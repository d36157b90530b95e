//! Parsing of the free-text inputs in the field configuration panel.

use super::field_type::FieldType;
use super::field_value::FieldValue;

/// Split a comma-separated option list, trimming and dropping blanks.
pub fn parse_options(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|opt| !opt.is_empty())
        .map(str::to_string)
        .collect()
}

/// Interpret the default-value box for a field of `field_type`.
///
/// Checkbox defaults are a `", "`-separated list; other types keep the text as is.
pub fn parse_default_value(field_type: FieldType, text: &str) -> FieldValue {
    if field_type.is_multi_valued() {
        FieldValue::List(
            text.split(", ")
                .filter(|v| !v.trim().is_empty())
                .map(str::to_string)
                .collect(),
        )
    } else {
        FieldValue::Text(text.to_string())
    }
}

/// Inverse of [`parse_default_value`], for pre-filling the input box.
pub fn format_default_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Text(s) => s.clone(),
        FieldValue::List(items) => items.join(", "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_are_trimmed_and_blank_entries_dropped() {
        assert_eq!(parse_options(" Red, Green ,, ,Blue"), vec!["Red", "Green", "Blue"]);
        assert!(parse_options("").is_empty());
    }

    #[test]
    fn checkbox_default_splits_on_comma_space() {
        let value = parse_default_value(FieldType::Checkbox, "A, B,  , C");
        assert_eq!(value, FieldValue::from(vec!["A", "B", "C"]));
        assert_eq!(format_default_value(&value), "A, B, C");
    }

    #[test]
    fn text_default_is_kept_verbatim() {
        let value = parse_default_value(FieldType::Text, " a, b ");
        assert_eq!(value, FieldValue::from(" a, b "));
    }
}
