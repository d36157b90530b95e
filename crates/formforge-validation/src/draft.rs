//! The in-progress rule in the "Add Validation Rule" dialog.

use formforge_core::errors::{FormError, FormResult};
use formforge_core::models::{RuleKind, ValidationRule};

use crate::messages::default_message;

/// A rule being authored. Picking a kind pre-fills its canonical message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleDraft {
    kind: RuleKind,
    numeric_param: Option<u32>,
    message: String,
}

impl Default for RuleDraft {
    fn default() -> Self {
        Self {
            kind: RuleKind::Required,
            numeric_param: None,
            message: String::new(),
        }
    }
}

impl RuleDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    pub fn numeric_param(&self) -> Option<u32> {
        self.numeric_param
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Switch kind, resetting the message to the kind's default.
    ///
    /// Length rules keep an existing bound or start at 1; other kinds drop it.
    pub fn select_kind(&mut self, kind: RuleKind) -> &mut Self {
        self.message = default_message(kind, self.numeric_param);
        self.numeric_param = if kind.takes_param() {
            Some(self.numeric_param.unwrap_or(1))
        } else {
            None
        };
        self.kind = kind;
        self
    }

    /// Set the length bound; values below 1 become 1.
    pub fn set_param(&mut self, param: u32) -> &mut Self {
        if self.kind.takes_param() {
            self.numeric_param = Some(param.max(1));
        }
        self
    }

    pub fn set_message(&mut self, message: impl Into<String>) -> &mut Self {
        self.message = message.into();
        self
    }

    /// Produce the rule, refusing a blank message.
    pub fn finish(&self) -> FormResult<ValidationRule> {
        if self.message.trim().is_empty() {
            return Err(FormError::InvalidRule {
                reason: "message must not be empty".to_string(),
            });
        }
        Ok(ValidationRule {
            kind: self.kind,
            numeric_param: self.numeric_param,
            message: self.message.clone(),
        })
    }
}
