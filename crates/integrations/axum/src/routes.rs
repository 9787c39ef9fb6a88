//! Route mounting for the registration API.

use axum::routing::{delete, get, post};
use axum::Router;
use eventdesk_core::{EventService, RegistrationService, StorageAdapter, UserService};
use std::sync::Arc;

use crate::handlers;

/// Shared state for the registration routes.
///
/// The three rule services share one storage adapter; the state clones
/// cheaply into every handler.
#[derive(Clone)]
pub struct ApiState {
    pub users: UserService,
    pub events: EventService,
    pub registrations: RegistrationService,
}

impl ApiState {
    /// Builds the services over the given adapter.
    pub fn new(adapter: Arc<dyn StorageAdapter>) -> Self {
        Self {
            users: UserService::new(adapter.clone()),
            events: EventService::new(adapter.clone()),
            registrations: RegistrationService::new(adapter),
        }
    }
}

/// Creates an axum router with all registration API routes.
///
/// Registration and unregistration are each reachable under two paths;
/// the pairs run the identical operation (the `/register` spelling
/// answers 200 where `/registrations` answers 201 on success).
pub fn registration_routes(state: ApiState) -> Router {
    Router::new()
        // Liveness
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        // Users
        .route("/users", post(handlers::create_user))
        .route("/users/{userId}/events", get(handlers::user_events))
        .route("/users/{userId}/registrations", get(handlers::user_events))
        // Events
        .route("/events", post(handlers::create_event))
        .route(
            "/events/{eventId}/register",
            post(handlers::register),
        )
        .route(
            "/events/{eventId}/registrations",
            post(handlers::register_created).get(handlers::event_registrations),
        )
        .route(
            "/events/{eventId}/register/{userId}",
            delete(handlers::unregister),
        )
        .route(
            "/events/{eventId}/registrations/{userId}",
            delete(handlers::unregister),
        )
        .with_state(state)
}
