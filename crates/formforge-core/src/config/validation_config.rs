use serde::{Deserialize, Serialize};

use super::defaults;

/// Bounds used when a rule carries no explicit parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub default_min_length: u32,
    pub default_max_length: u32,
    pub password_min_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            default_min_length: defaults::DEFAULT_MIN_LENGTH,
            default_max_length: defaults::DEFAULT_MAX_LENGTH,
            password_min_length: defaults::DEFAULT_PASSWORD_MIN_LENGTH,
        }
    }
}
