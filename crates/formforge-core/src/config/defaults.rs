//! Default values for every config section.

use crate::constants;

pub const DEFAULT_DB_PATH: &str = "formforge.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

pub const DEFAULT_MIN_LENGTH: u32 = constants::DEFAULT_MIN_LENGTH;
pub const DEFAULT_MAX_LENGTH: u32 = constants::DEFAULT_MAX_LENGTH;
pub const DEFAULT_PASSWORD_MIN_LENGTH: usize = constants::PASSWORD_MIN_LENGTH;

pub fn default_storage_key() -> String {
    constants::STORAGE_KEY.to_string()
}

pub fn default_options() -> Vec<String> {
    constants::DEFAULT_OPTIONS.iter().map(|s| s.to_string()).collect()
}
