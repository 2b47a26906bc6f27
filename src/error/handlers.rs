//! Error handlers
//!
//! Provides reporting and classification helpers for registry errors.

use crate::error::types::RegistryError;
use log::error;

/// Handle a registry error
pub fn handle_error(err: &RegistryError) {
    error!("User registry error: {}", err);
}

/// Returns true when the error was caused by the caller's arguments rather
/// than by the environment.
pub fn is_caller_error(err: &RegistryError) -> bool {
    match err {
        RegistryError::InvalidArgument(_) => true,
        RegistryError::Config(_) => false,
    }
}
