//! Module `user`
//!
//! Defines the `User` record held by the registry: an identifier, a username
//! and a plain-text password.

use serde::{Deserialize, Serialize};

/// A registered account.
///
/// Values are immutable once built. Equality and hashing are structural over
/// all three fields, so two users with identical fields are interchangeable
/// as map keys and in assertions. Nothing is validated at construction: an
/// empty username or a negative id is accepted as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    id: i32,
    username: String,
    password: String,
}

impl User {
    /// Builds a user from its fields in positional order.
    pub fn of(id: i32, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            password: password.into(),
        }
    }

    /// Alias for [`User::of`].
    pub fn new(id: i32, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::of(id, username, password)
    }

    // --------------------
    // Getter methods
    // --------------------

    /// Returns the caller-assigned identifier.
    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the stored password as plain text.
    pub fn password(&self) -> &str {
        &self.password
    }
}
