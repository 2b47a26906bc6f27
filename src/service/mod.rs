//! Registry services
//!
//! The single-threaded [`UserService`] and its synchronized wrapper.

pub mod shared;
pub mod user_service;

pub use shared::SharedUserService;
pub use user_service::UserService;
