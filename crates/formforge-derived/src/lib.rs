//! # formforge-derived
//!
//! Computes derived field values from their source fields.
//!
//! ## Formulas
//! - **age**: whole years since the first source's date
//! - **sum**: numeric total of the sources, unparsable values counting as 0
//! - **concat**: non-blank sources joined with a single space
//!
//! Computation is pure and never fails outward: anything that cannot be
//! computed yields an empty string.

pub mod calculator;
pub mod formulas;

pub use calculator::{calculate_derived_value, calculate_derived_value_at, DerivedCalculator};
