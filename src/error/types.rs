//! Error types
//!
//! Defines the errors surfaced by the registry and its configuration layer.

use std::fmt;

/// Message carried by [`RegistryError::InvalidArgument`] when a login is attempted
/// without credentials.
pub const CREDENTIALS_REQUIRED: &str = "Username and password are required";

/// Registry errors
#[derive(Debug)]
pub enum RegistryError {
    /// A required argument was absent.
    InvalidArgument(String),
    /// Configuration could not be loaded or deserialized.
    Config(config::ConfigError),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            RegistryError::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for RegistryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RegistryError::InvalidArgument(_) => None,
            RegistryError::Config(e) => Some(e),
        }
    }
}

impl From<config::ConfigError> for RegistryError {
    fn from(error: config::ConfigError) -> Self {
        RegistryError::Config(error)
    }
}
