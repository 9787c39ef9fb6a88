//! Core traits for Eventdesk.
//!
//! This module defines the storage interface that backends must implement
//! to hold users and events for the rule services.

use async_trait::async_trait;

use crate::error::RegistryResult;
use crate::types::{Event, User};

/// Trait for storage adapters (database backends).
///
/// Adapters hold the two entity kinds with no business rules of their
/// own; the rule services compose these calls per request. Only
/// single-operation atomicity is required. Adapters are constructed once
/// per process and injected as `Arc<dyn StorageAdapter>`.
#[async_trait]
pub trait StorageAdapter: Send + Sync {
    // ==================== User Operations ====================

    /// Stores a new user.
    async fn create_user(&self, user: &User) -> RegistryResult<User>;

    /// Gets a user by id.
    async fn get_user(&self, user_id: &str) -> RegistryResult<Option<User>>;

    /// Checks whether a user exists.
    async fn user_exists(&self, user_id: &str) -> RegistryResult<bool>;

    /// Lists all users.
    async fn list_users(&self) -> RegistryResult<Vec<User>>;

    // ==================== Event Operations ====================

    /// Stores a new event.
    async fn create_event(&self, event: &Event) -> RegistryResult<Event>;

    /// Gets an event by id.
    async fn get_event(&self, event_id: &str) -> RegistryResult<Option<Event>>;

    /// Checks whether an event exists.
    async fn event_exists(&self, event_id: &str) -> RegistryResult<bool>;

    /// Replaces an existing event.
    async fn update_event(&self, event: &Event) -> RegistryResult<Event>;

    /// Lists all events, in store iteration order.
    async fn list_events(&self) -> RegistryResult<Vec<Event>>;
}
