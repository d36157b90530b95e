use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The kind of check a validation rule performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum RuleKind {
    Required,
    MinLength,
    MaxLength,
    Email,
    Password,
}

impl RuleKind {
    pub const ALL: [RuleKind; 5] = [
        Self::Required,
        Self::MinLength,
        Self::MaxLength,
        Self::Email,
        Self::Password,
    ];

    /// Whether the rule reads a numeric parameter.
    pub fn takes_param(self) -> bool {
        matches!(self, Self::MinLength | Self::MaxLength)
    }

    /// Label shown in the rule picker.
    pub fn label(self) -> &'static str {
        match self {
            Self::Required => "Required",
            Self::MinLength => "Minimum Length",
            Self::MaxLength => "Maximum Length",
            Self::Email => "Email Format",
            Self::Password => "Password (8+ chars, 1 number)",
        }
    }
}

/// A single check with its user-facing failure message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationRule {
    #[serde(rename = "type")]
    pub kind: RuleKind,
    /// Length bound for minLength/maxLength, stored as `value`.
    #[serde(rename = "value", default, skip_serializing_if = "Option::is_none")]
    pub numeric_param: Option<u32>,
    pub message: String,
}

impl ValidationRule {
    pub fn new(kind: RuleKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            numeric_param: None,
            message: message.into(),
        }
    }

    pub fn with_param(mut self, param: u32) -> Self {
        self.numeric_param = Some(param);
        self
    }
}
