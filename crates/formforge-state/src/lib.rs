//! # formforge-state
//!
//! The form state store. Holds the schema being edited, its live values and
//! errors, and the saved form collection, and changes them only through the
//! discrete actions in [`FormAction`].
//!
//! Derived fields are recomputed explicitly after every action that can
//! change their inputs.

pub mod actions;
pub mod derivation;
pub mod store;

pub use actions::{ActionOutcome, FormAction};
pub use store::{FormStore, SaveOutcome};
