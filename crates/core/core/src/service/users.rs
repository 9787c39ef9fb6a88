//! User creation and lookup rules.

use std::sync::Arc;

use crate::error::{RegistryError, RegistryResult};
use crate::traits::StorageAdapter;
use crate::types::User;

/// Service for user business rules.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn StorageAdapter>,
}

impl UserService {
    /// Creates a new user service over the given store.
    pub fn new(store: Arc<dyn StorageAdapter>) -> Self {
        Self { store }
    }

    /// Creates a new user.
    ///
    /// Both fields must be non-empty and non-whitespace, and the id must
    /// be unused. The stored record is returned unchanged.
    pub async fn create_user(&self, user: User) -> RegistryResult<User> {
        require_non_blank("userId", &user.user_id)?;
        require_non_blank("name", &user.name)?;

        if self.store.user_exists(&user.user_id).await? {
            return Err(RegistryError::already_exists("User", "userId", &user.user_id));
        }

        let created = self.store.create_user(&user).await?;
        tracing::info!(user_id = %created.user_id, "created user");
        Ok(created)
    }

    /// Gets a user by id, failing when absent.
    pub async fn get_user(&self, user_id: &str) -> RegistryResult<User> {
        self.store
            .get_user(user_id)
            .await?
            .ok_or_else(|| RegistryError::not_found("User", "userId", user_id))
    }

    /// Checks whether a user exists.
    pub async fn user_exists(&self, user_id: &str) -> RegistryResult<bool> {
        self.store.user_exists(user_id).await
    }
}

fn require_non_blank(field: &str, value: &str) -> RegistryResult<()> {
    if value.trim().is_empty() {
        return Err(RegistryError::validation(
            field,
            "must not be empty or whitespace-only",
        ));
    }
    Ok(())
}
