//! Shared user registry
//!
//! Wraps a [`UserService`] behind an async read/write lock so several tasks
//! can use one registry. Sequential use behaves exactly like the plain service.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{RwLock, RwLockReadGuard};

use crate::error::RegistryError;
use crate::model::User;
use crate::service::UserService;

/// Thread-safe handle to a user registry. Clones share the same registry.
#[derive(Debug, Clone, Default)]
pub struct SharedUserService {
    inner: Arc<RwLock<UserService>>,
}

impl SharedUserService {
    pub fn new(service: UserService) -> Self {
        Self {
            inner: Arc::new(RwLock::new(service)),
        }
    }

    pub async fn add_all<I>(&self, users: I)
    where
        I: IntoIterator<Item = User>,
    {
        self.inner.write().await.add_all(users);
    }

    pub async fn add(&self, user: User) {
        self.inner.write().await.add(user);
    }

    /// Returns a read guard over the live user list. Writers wait until the
    /// guard is dropped.
    pub async fn list(&self) -> RwLockReadGuard<'_, [User]> {
        RwLockReadGuard::map(self.inner.read().await, UserService::list)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// Same as [`UserService::login`], returning an owned copy of the match.
    pub async fn login(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Option<User>, RegistryError> {
        let service = self.inner.read().await;
        Ok(service.login(username, password)?.cloned())
    }

    /// Same as [`UserService::index_by_id`], returning owned users.
    pub async fn index_by_id(&self) -> HashMap<i32, User> {
        self.inner
            .read()
            .await
            .index_by_id()
            .into_iter()
            .map(|(id, user)| (id, user.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_clones_share_registry() {
        let shared = SharedUserService::default();
        let other = shared.clone();

        other.add(User::of(1, "e-one", "pass")).await;

        assert_eq!(shared.len().await, 1);
        assert_eq!(&*shared.list().await, &[User::of(1, "e-one", "pass")]);
    }

    #[tokio::test]
    async fn test_concurrent_adds_are_all_kept() {
        let shared = SharedUserService::default();

        let mut handles = Vec::new();
        for id in 0..16 {
            let shared = shared.clone();
            handles.push(tokio::spawn(async move {
                shared.add(User::of(id, format!("user-{id}"), "pw")).await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(shared.len().await, 16);
        assert_eq!(shared.index_by_id().await.len(), 16);
    }

    #[tokio::test]
    async fn test_login_matches_plain_service() {
        let shared = SharedUserService::new(UserService::new());
        shared
            .add_all([User::of(1, "e-one", "pass"), User::of(2, "peter", "pass")])
            .await;

        let found = shared.login(Some("peter"), Some("pass")).await.unwrap();
        assert_eq!(found, Some(User::of(2, "peter", "pass")));

        assert!(shared.login(Some("peter"), None).await.is_err());
    }
}
