//! The registration engine.
//!
//! Tracks each (event, user) pair through three states: unassociated,
//! registered, waitlisted. Registration prefers a confirmed slot and
//! falls back to the waitlist only when the event is full; unregistering
//! a confirmed user promotes the waitlist head into the freed slot, so
//! the registered list never exceeds capacity.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::{RegistryError, RegistryResult};
use crate::traits::StorageAdapter;
use crate::types::Event;

/// Outcome of a successful registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// The user holds a confirmed slot.
    Registered,
    /// The event was full; the user is queued on the waitlist.
    Waitlisted,
}

/// Outcome of a successful unregistration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnregisterOutcome {
    /// A confirmed slot was released. When a waitlist head existed it now
    /// holds that slot.
    Unregistered { promoted: Option<String> },
    /// The user was only queued and has left the waitlist.
    RemovedFromWaitlist,
}

/// Service implementing the registration state machine.
#[derive(Clone)]
pub struct RegistrationService {
    store: Arc<dyn StorageAdapter>,
    // Serializes mutating operations so each read-mutate-update sequence
    // is atomic with respect to the event it touches.
    write_lock: Arc<Mutex<()>>,
}

impl RegistrationService {
    /// Creates a new registration service over the given store.
    pub fn new(store: Arc<dyn StorageAdapter>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Registers a user for an event.
    pub async fn register(
        &self,
        event_id: &str,
        user_id: &str,
    ) -> RegistryResult<RegisterOutcome> {
        let _guard = self.write_lock.lock().await;

        if !self.store.user_exists(user_id).await? {
            return Err(RegistryError::not_found("User", "userId", user_id));
        }

        let mut event = self.load_event(event_id).await?;

        if event.is_associated(user_id) {
            return Err(RegistryError::AlreadyRegistered {
                user_id: user_id.to_string(),
                event_id: event_id.to_string(),
            });
        }

        if !event.is_full() {
            event.registered.push(user_id.to_string());
            self.store.update_event(&event).await?;
            tracing::info!(event_id, user_id, "registered user");
            return Ok(RegisterOutcome::Registered);
        }

        if event.has_waitlist {
            event.waitlist.push(user_id.to_string());
            self.store.update_event(&event).await?;
            tracing::info!(event_id, user_id, "added user to waitlist");
            return Ok(RegisterOutcome::Waitlisted);
        }

        Err(RegistryError::CapacityExceeded {
            event_id: event_id.to_string(),
        })
    }

    /// Unregisters a user from an event.
    ///
    /// User existence is deliberately not checked; membership in the
    /// event's lists alone decides the outcome.
    pub async fn unregister(
        &self,
        event_id: &str,
        user_id: &str,
    ) -> RegistryResult<UnregisterOutcome> {
        let _guard = self.write_lock.lock().await;

        let mut event = self.load_event(event_id).await?;

        if event.is_registered(user_id) {
            event.registered.retain(|id| id != user_id);

            // FIFO promotion into the freed slot.
            let promoted = if event.waitlist.is_empty() {
                None
            } else {
                Some(event.waitlist.remove(0))
            };
            if let Some(promoted_id) = &promoted {
                event.registered.push(promoted_id.clone());
            }

            self.store.update_event(&event).await?;
            tracing::info!(event_id, user_id, promoted = ?promoted, "unregistered user");
            return Ok(UnregisterOutcome::Unregistered { promoted });
        }

        if event.is_waitlisted(user_id) {
            event.waitlist.retain(|id| id != user_id);
            self.store.update_event(&event).await?;
            tracing::info!(event_id, user_id, "removed user from waitlist");
            return Ok(UnregisterOutcome::RemovedFromWaitlist);
        }

        Err(RegistryError::NotAssociated {
            user_id: user_id.to_string(),
            event_id: event_id.to_string(),
        })
    }

    /// Lists the events where the user holds a confirmed slot.
    ///
    /// Waitlist-only membership is excluded. Cross-event order follows
    /// store iteration order and is not guaranteed stable.
    pub async fn events_for_user(&self, user_id: &str) -> RegistryResult<Vec<Event>> {
        if !self.store.user_exists(user_id).await? {
            return Err(RegistryError::not_found("User", "userId", user_id));
        }

        let events = self.store.list_events().await?;
        Ok(events
            .into_iter()
            .filter(|event| event.is_registered(user_id))
            .collect())
    }

    async fn load_event(&self, event_id: &str) -> RegistryResult<Event> {
        self.store
            .get_event(event_id)
            .await?
            .ok_or_else(|| RegistryError::not_found("Event", "eventId", event_id))
    }
}
