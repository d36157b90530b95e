//! Single-rule checks.
//!
//! Only `required` looks at sequence values; the text rules let anything
//! that is not a string through.

use std::sync::LazyLock;

use formforge_core::config::ValidationConfig;
use formforge_core::models::{FieldValue, RuleKind, ValidationRule};
use regex::Regex;

/// `local@domain.tld`, with no whitespace or `@` inside any segment.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Whether `value` satisfies `rule`.
pub fn passes(rule: &ValidationRule, value: Option<&FieldValue>, config: &ValidationConfig) -> bool {
    match rule.kind {
        RuleKind::Required => value.is_some_and(|v| !v.is_empty()),
        RuleKind::MinLength => {
            let min = rule.numeric_param.unwrap_or(config.default_min_length) as usize;
            text_of(value).map_or(true, |s| char_len(s) >= min)
        }
        RuleKind::MaxLength => {
            let max = rule.numeric_param.unwrap_or(config.default_max_length) as usize;
            text_of(value).map_or(true, |s| char_len(s) <= max)
        }
        RuleKind::Email => text_of(value).map_or(true, is_valid_email),
        RuleKind::Password => {
            text_of(value).map_or(true, |s| is_valid_password(s, config.password_min_length))
        }
    }
}

pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL_RE.is_match(candidate)
}

/// At least `min_len` characters on a single line, one of them a digit.
pub fn is_valid_password(candidate: &str, min_len: usize) -> bool {
    let single_line = !candidate.contains(&['\n', '\r', '\u{2028}', '\u{2029}'][..]);
    let has_digit = candidate.chars().any(|c| c.is_ascii_digit());
    single_line && has_digit && char_len(candidate) >= min_len
}

fn text_of(value: Option<&FieldValue>) -> Option<&str> {
    value.and_then(FieldValue::as_text)
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
