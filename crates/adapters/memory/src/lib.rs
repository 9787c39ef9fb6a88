//! # Eventdesk Memory Adapter
//!
//! An in-memory storage adapter for Eventdesk, primarily intended for
//! testing and development purposes.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use eventdesk_adapter_memory::MemoryAdapter;
//!
//! let adapter = Arc::new(MemoryAdapter::new());
//! let registrations = RegistrationService::new(adapter);
//! ```

use async_trait::async_trait;
use eventdesk_core::error::{RegistryError, RegistryResult};
use eventdesk_core::traits::StorageAdapter;
use eventdesk_core::types::{Event, User};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory storage for a single entity type.
type Store<T> = Arc<RwLock<HashMap<String, T>>>;

/// In-memory storage adapter for Eventdesk.
///
/// This adapter stores all data in memory and is suitable for testing
/// and development. Data is lost when the process exits. Iteration order
/// of the list operations is not stable.
#[derive(Debug, Clone)]
pub struct MemoryAdapter {
    users: Store<User>,
    events: Store<Event>,
}

impl MemoryAdapter {
    /// Creates a new in-memory adapter.
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            events: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clears all stored data.
    pub async fn clear(&self) {
        self.users.write().await.clear();
        self.events.write().await.clear();
    }

    /// Returns the number of users stored.
    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }

    /// Returns the number of events stored.
    pub async fn event_count(&self) -> usize {
        self.events.read().await.len()
    }
}

impl Default for MemoryAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StorageAdapter for MemoryAdapter {
    // ==================== User Operations ====================

    async fn create_user(&self, user: &User) -> RegistryResult<User> {
        let mut users = self.users.write().await;

        if users.contains_key(&user.user_id) {
            return Err(RegistryError::already_exists("User", "userId", &user.user_id));
        }

        users.insert(user.user_id.clone(), user.clone());
        Ok(user.clone())
    }

    async fn get_user(&self, user_id: &str) -> RegistryResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(user_id).cloned())
    }

    async fn user_exists(&self, user_id: &str) -> RegistryResult<bool> {
        let users = self.users.read().await;
        Ok(users.contains_key(user_id))
    }

    async fn list_users(&self) -> RegistryResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }

    // ==================== Event Operations ====================

    async fn create_event(&self, event: &Event) -> RegistryResult<Event> {
        let mut events = self.events.write().await;

        if events.contains_key(&event.event_id) {
            return Err(RegistryError::already_exists(
                "Event",
                "eventId",
                &event.event_id,
            ));
        }

        events.insert(event.event_id.clone(), event.clone());
        Ok(event.clone())
    }

    async fn get_event(&self, event_id: &str) -> RegistryResult<Option<Event>> {
        let events = self.events.read().await;
        Ok(events.get(event_id).cloned())
    }

    async fn event_exists(&self, event_id: &str) -> RegistryResult<bool> {
        let events = self.events.read().await;
        Ok(events.contains_key(event_id))
    }

    async fn update_event(&self, event: &Event) -> RegistryResult<Event> {
        let mut events = self.events.write().await;

        if !events.contains_key(&event.event_id) {
            return Err(RegistryError::not_found("Event", "eventId", &event.event_id));
        }

        events.insert(event.event_id.clone(), event.clone());
        Ok(event.clone())
    }

    async fn list_events(&self) -> RegistryResult<Vec<Event>> {
        let events = self.events.read().await;
        Ok(events.values().cloned().collect())
    }
}
