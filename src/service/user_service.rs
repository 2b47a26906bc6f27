//! User registry service
//!
//! Holds registered users in insertion order and answers list, login and
//! index-by-id queries over them. Single-threaded; see
//! [`SharedUserService`](crate::service::SharedUserService) for a
//! synchronized wrapper.

use log::{debug, warn};
use std::collections::HashMap;

use crate::config::RegistryConfig;
use crate::error::{CREDENTIALS_REQUIRED, RegistryError};
use crate::model::User;

/// In-memory registry of users.
///
/// Duplicates are kept: neither ids nor usernames are required to be unique,
/// and users are never removed.
#[derive(Debug, Clone, Default)]
pub struct UserService {
    users: Vec<User>,
}

impl UserService {
    pub fn new() -> Self {
        Self { users: Vec::new() }
    }

    /// Builds a registry seeded with the configured users, in file order.
    pub fn from_config(config: &RegistryConfig) -> Self {
        let mut service = Self::new();
        service.add_all(config.users.iter().cloned());
        service
    }

    /// Appends every given user, in iteration order, to the end of the registry.
    pub fn add_all<I>(&mut self, users: I)
    where
        I: IntoIterator<Item = User>,
    {
        let before = self.users.len();
        self.users.extend(users);
        debug!(
            "Added {} user(s), registry size now {}",
            self.users.len() - before,
            self.users.len()
        );
    }

    /// Appends a single user.
    pub fn add(&mut self, user: User) {
        self.add_all([user]);
    }

    /// Returns the registered users in insertion order.
    ///
    /// The slice borrows the registry's own storage; no copy is made.
    pub fn list(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Finds the first user, in insertion order, whose username and password
    /// both equal the given values exactly.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidArgument`] if either argument is `None`,
    /// before the registry is consulted.
    pub fn login(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Option<&User>, RegistryError> {
        let (Some(username), Some(password)) = (username, password) else {
            warn!("Login rejected: username or password missing");
            return Err(RegistryError::InvalidArgument(CREDENTIALS_REQUIRED.into()));
        };

        let found = self
            .users
            .iter()
            .filter(|user| user.username() == username)
            .find(|user| user.password() == password);

        debug!(
            "Login attempt for '{}': {}",
            username,
            if found.is_some() { "matched" } else { "no match" }
        );

        Ok(found)
    }

    /// Maps each id to its user. When several users share an id the one
    /// inserted last wins.
    pub fn index_by_id(&self) -> HashMap<i32, &User> {
        self.users.iter().fold(HashMap::new(), |mut index, user| {
            if index.insert(user.id(), user).is_some() {
                debug!("Duplicate id {} replaced by a later user", user.id());
            }
            index
        })
    }
}
