//! Identifier generation for new forms and fields.

use uuid::Uuid;

/// A fresh UUID v4 string.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
