//! Rule services composed over a [`StorageAdapter`](crate::traits::StorageAdapter).

mod events;
mod registrations;
mod users;

pub use events::EventService;
pub use registrations::{RegisterOutcome, RegistrationService, UnregisterOutcome};
pub use users::UserService;
