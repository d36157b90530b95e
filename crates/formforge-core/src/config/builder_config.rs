use serde::{Deserialize, Serialize};

use super::defaults;

/// Form builder defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Options pre-filled on new select/radio/checkbox fields.
    pub default_options: Vec<String>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            default_options: defaults::default_options(),
        }
    }
}
