//! DerivedCalculator: implements IDerivedCalculator over the three formulas.

use std::sync::Arc;

use chrono::NaiveDate;
use formforge_core::models::{DerivedFormula, FieldValues, FormField};
use formforge_core::traits::{IClock, IDerivedCalculator, SystemClock};
use tracing::debug;

use crate::formulas::{age, concat, sum};

/// Compute `field`'s value as of the system's current date.
pub fn calculate_derived_value(field: &FormField, values: &FieldValues) -> String {
    calculate_derived_value_at(field, values, SystemClock.today())
}

/// Compute `field`'s value with `today` as the reference date for `age`.
///
/// Returns `""` for non-derived fields, fields without sources or formula,
/// and any value that cannot be computed.
pub fn calculate_derived_value_at(field: &FormField, values: &FieldValues, today: NaiveDate) -> String {
    let Some((formula, sources)) = field.derivation() else {
        return String::new();
    };
    if sources.is_empty() {
        return String::new();
    }

    let computed = match formula {
        DerivedFormula::Age => age::calculate(&sources[0], values, today),
        DerivedFormula::Sum => Some(sum::calculate(sources, values)),
        DerivedFormula::Concat => Some(concat::calculate(sources, values)),
    };

    computed.unwrap_or_else(|| {
        debug!(field_id = %field.id, ?formula, "derived value not computable");
        String::new()
    })
}

/// Calculator bound to a clock, for injection into the form store.
#[derive(Clone)]
pub struct DerivedCalculator {
    clock: Arc<dyn IClock>,
}

impl DerivedCalculator {
    pub fn new(clock: Arc<dyn IClock>) -> Self {
        Self { clock }
    }
}

impl Default for DerivedCalculator {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl std::fmt::Debug for DerivedCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedCalculator")
            .field("today", &self.clock.today())
            .finish()
    }
}

impl IDerivedCalculator for DerivedCalculator {
    fn calculate(&self, field: &FormField, values: &FieldValues) -> String {
        calculate_derived_value_at(field, values, self.clock.today())
    }
}
