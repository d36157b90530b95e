use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::field_value::FieldValue;

/// The closed set of input kinds a form can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Textarea,
    Select,
    Radio,
    Checkbox,
    Date,
}

impl FieldType {
    /// All field types in builder menu order.
    pub const ALL: [FieldType; 7] = [
        Self::Text,
        Self::Number,
        Self::Textarea,
        Self::Select,
        Self::Radio,
        Self::Checkbox,
        Self::Date,
    ];

    /// Name used on the wire and in stored schemas.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Textarea => "textarea",
            Self::Select => "select",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
            Self::Date => "date",
        }
    }

    /// Human-readable label shown in the builder.
    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Number => "Number",
            Self::Textarea => "Textarea",
            Self::Select => "Select",
            Self::Radio => "Radio",
            Self::Checkbox => "Checkbox",
            Self::Date => "Date",
        }
    }

    /// Whether the field renders a fixed list of options.
    pub fn has_options(self) -> bool {
        match self {
            Self::Select | Self::Radio | Self::Checkbox => true,
            Self::Text | Self::Number | Self::Textarea | Self::Date => false,
        }
    }

    /// Whether the field holds a sequence of strings rather than one string.
    pub fn is_multi_valued(self) -> bool {
        matches!(self, Self::Checkbox)
    }

    /// The empty value a new field of this type starts with.
    pub fn empty_value(self) -> FieldValue {
        if self.is_multi_valued() {
            FieldValue::List(Vec::new())
        } else {
            FieldValue::Text(String::new())
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}
