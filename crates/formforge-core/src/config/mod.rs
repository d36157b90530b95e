pub mod builder_config;
pub mod defaults;
pub mod storage_config;
pub mod validation_config;

pub use builder_config::BuilderConfig;
pub use storage_config::StorageConfig;
pub use validation_config::ValidationConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{FormError, FormResult};

/// Top-level configuration. Every section falls back to its defaults, so an
/// empty document is a valid config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormForgeConfig {
    pub storage: StorageConfig,
    pub validation: ValidationConfig,
    pub builder: BuilderConfig,
}

impl FormForgeConfig {
    /// Parse a TOML document, filling unspecified keys with defaults.
    pub fn from_toml(source: &str) -> FormResult<Self> {
        toml::from_str(source).map_err(|e| FormError::Config(e.to_string()))
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> FormResult<String> {
        toml::to_string(self).map_err(|e| FormError::Config(e.to_string()))
    }
}
