//! User Registry
//!
//! An in-memory registry of users with plain-text login by exact
//! username/password match and indexing by id.

pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod service;

pub use crate::config::RegistryConfig;
pub use error::RegistryError;
pub use model::User;
pub use service::{SharedUserService, UserService};
