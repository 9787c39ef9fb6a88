//! # Eventdesk Core
//!
//! This crate provides the foundational pieces of the Eventdesk
//! registration system: the canonical data types (`User`, `Event`), the
//! error taxonomy, the `StorageAdapter` trait that backends implement,
//! and the rule services that enforce capacity and waitlist semantics.

pub mod error;
pub mod service;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate root
pub use error::{RegistryError, RegistryResult};
pub use service::{
    EventService, RegisterOutcome, RegistrationService, UnregisterOutcome, UserService,
};
pub use traits::StorageAdapter;
pub use types::{CreateEventRequest, Event, RegistrationSnapshot, User};
