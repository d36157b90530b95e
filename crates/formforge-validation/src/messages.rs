use formforge_core::constants::{DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};
use formforge_core::models::RuleKind;

/// Canonical message for a rule, used to pre-fill the rule authoring dialog.
pub fn default_message(kind: RuleKind, param: Option<u32>) -> String {
    match kind {
        RuleKind::Required => "This field is required".to_string(),
        RuleKind::MinLength => format!(
            "Minimum length is {} characters",
            param.unwrap_or(DEFAULT_MIN_LENGTH)
        ),
        RuleKind::MaxLength => format!(
            "Maximum length is {} characters",
            param.unwrap_or(DEFAULT_MAX_LENGTH)
        ),
        RuleKind::Email => "Please enter a valid email address".to_string(),
        RuleKind::Password => {
            "Password must be at least 8 characters with at least one number".to_string()
        }
    }
}
