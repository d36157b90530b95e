//! Structural rules for derived fields.
//!
//! A derived field reads each of a set of existing, non-derived fields
//! other than itself. Chains are impossible, so cycles are too.

use std::collections::HashSet;

use formforge_core::errors::{FormError, FormResult};
use formforge_core::models::{FormField, FormSchema};

/// Check `field` as it would sit in `schema`.
///
/// `schema` may still hold the previous version of `field`; that entry is
/// ignored. Incomplete derivations (no sources or formula yet) are allowed.
pub fn check_derivation(schema: &FormSchema, field: &FormField) -> FormResult<()> {
    if !field.is_derived {
        return Ok(());
    }

    if let Some(dependent) = schema
        .fields
        .iter()
        .find(|f| f.id != field.id && f.depends_on(&field.id))
    {
        return Err(invalid(
            field,
            format!("field is a source of derived field {}", dependent.id),
        ));
    }

    let mut seen = HashSet::new();
    for source in field.sources() {
        if !seen.insert(source.as_str()) {
            return Err(invalid(field, format!("source field {source} listed twice")));
        }
        if *source == field.id {
            return Err(invalid(field, "derived field cannot read itself".to_string()));
        }
        match schema.field(source) {
            None => return Err(invalid(field, format!("unknown source field {source}"))),
            Some(src) if src.is_derived => {
                return Err(invalid(field, format!("source field {source} is itself derived")))
            }
            Some(_) => {}
        }
    }
    Ok(())
}

fn invalid(field: &FormField, reason: String) -> FormError {
    FormError::InvalidDerivation {
        field_id: field.id.clone(),
        reason,
    }
}
