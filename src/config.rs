//! Configuration management for the user registry
//!
//! Loads the users a registry is seeded with from a TOML source. There are no
//! environment overrides.

use config::{Config, File, FileFormat};
use serde::Deserialize;

use crate::error::RegistryError;
use crate::model::User;

/// Registry configuration
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct RegistryConfig {
    /// Users added at construction, in file order. Duplicates are kept.
    #[serde(default)]
    pub users: Vec<User>,
}

impl RegistryConfig {
    /// Load configuration from a file. The extension may be omitted, e.g.
    /// `"config"` resolves `config.toml`.
    pub fn load(path: &str) -> Result<Self, RegistryError> {
        let settings = Config::builder()
            .add_source(File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Load configuration from TOML text.
    pub fn from_toml_str(toml: &str) -> Result<Self, RegistryError> {
        let settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
