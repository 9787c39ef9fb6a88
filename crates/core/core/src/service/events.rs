//! Event creation rules and the registration snapshot query.

use std::sync::Arc;

use crate::error::{RegistryError, RegistryResult};
use crate::traits::StorageAdapter;
use crate::types::{CreateEventRequest, Event, RegistrationSnapshot};

/// Service for event business rules.
#[derive(Clone)]
pub struct EventService {
    store: Arc<dyn StorageAdapter>,
}

impl EventService {
    /// Creates a new event service over the given store.
    pub fn new(store: Arc<dyn StorageAdapter>) -> Self {
        Self { store }
    }

    /// Creates a new event from an incoming payload.
    ///
    /// Capacity must be greater than zero and the id must be unused.
    /// Aliased fields are resolved and both member lists start empty
    /// regardless of any supplied values.
    pub async fn create_event(&self, request: CreateEventRequest) -> RegistryResult<Event> {
        if request.capacity <= 0 {
            return Err(RegistryError::validation(
                "capacity",
                "must be greater than zero",
            ));
        }

        if self.store.event_exists(&request.event_id).await? {
            return Err(RegistryError::already_exists(
                "Event",
                "eventId",
                &request.event_id,
            ));
        }

        let event = request.into_event();
        let created = self.store.create_event(&event).await?;
        tracing::info!(
            event_id = %created.event_id,
            capacity = created.capacity,
            has_waitlist = created.has_waitlist,
            "created event"
        );
        Ok(created)
    }

    /// Gets an event by id, failing when absent.
    pub async fn get_event(&self, event_id: &str) -> RegistryResult<Event> {
        self.store
            .get_event(event_id)
            .await?
            .ok_or_else(|| RegistryError::not_found("Event", "eventId", event_id))
    }

    /// Returns the registration snapshot for an event.
    pub async fn registrations(&self, event_id: &str) -> RegistryResult<RegistrationSnapshot> {
        let event = self.get_event(event_id).await?;
        Ok(RegistrationSnapshot {
            available_spots: event.available_spots(),
            registered: event.registered,
            waitlist: event.waitlist,
            capacity: event.capacity,
        })
    }
}
