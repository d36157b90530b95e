/// Formforge version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key under which the saved-schema array is stored.
pub const STORAGE_KEY: &str = "formBuilderForms";

/// Length bound used by a `minLength` rule without a parameter.
pub const DEFAULT_MIN_LENGTH: u32 = 1;

/// Length bound used by a `maxLength` rule without a parameter.
pub const DEFAULT_MAX_LENGTH: u32 = 100;

/// Minimum password length accepted by the `password` rule.
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Options given to a freshly added select/radio/checkbox field.
pub const DEFAULT_OPTIONS: [&str; 3] = ["Option 1", "Option 2", "Option 3"];
