//! Domain model
//!
//! Defines the value types stored by the registry.

pub mod user;

pub use user::User;
