//! Error types for Eventdesk.
//!
//! This module defines the `RegistryError` enum which represents all
//! expected failure modes of the registration system.

use thiserror::Error;

/// The main error type for Eventdesk operations.
///
/// Every variant here is recoverable at the transport boundary and maps
/// to a 4xx status via [`RegistryError::status_code`]. Storage and
/// internal failures are the exception and map to 500.
#[derive(Debug, Error)]
pub enum RegistryError {
    // ==================== Lookup Errors ====================
    /// The referenced entity was not found.
    #[error("{entity} with {key} '{value}' does not exist")]
    NotFound {
        entity: String,
        key: String,
        value: String,
    },

    /// A unique identifier was already taken at creation.
    #[error("{entity} with {key} '{value}' already exists")]
    AlreadyExists {
        entity: String,
        key: String,
        value: String,
    },

    // ==================== Validation Errors ====================
    /// A field value in a creation payload is invalid.
    #[error("Invalid value for '{field}': {reason}")]
    Validation { field: String, reason: String },

    // ==================== Registration Rule Errors ====================
    /// The user already holds a registered or waitlisted slot.
    #[error("User '{user_id}' is already registered for event '{event_id}'")]
    AlreadyRegistered { user_id: String, event_id: String },

    /// The event is full and does not accept a waitlist.
    #[error("Event '{event_id}' is at full capacity and does not have a waitlist")]
    CapacityExceeded { event_id: String },

    /// The user is neither registered nor waitlisted for the event.
    #[error("User '{user_id}' is not registered or waitlisted for event '{event_id}'")]
    NotAssociated { user_id: String, event_id: String },

    // ==================== Internal Errors ====================
    /// A storage operation failed.
    #[error("Storage error: {message}")]
    Storage { message: String },

    /// A programming-contract violation (e.g. store corruption).
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl RegistryError {
    /// Creates a new not found error.
    pub fn not_found(
        entity: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::NotFound {
            entity: entity.into(),
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a new duplicate entity error.
    pub fn already_exists(
        entity: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::AlreadyExists {
            entity: entity.into(),
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a new validation error.
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a new storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Creates a new internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this is a user-facing error (vs internal).
    pub fn is_user_error(&self) -> bool {
        !matches!(self, Self::Storage { .. } | Self::Internal { .. })
    }

    /// Returns an HTTP status code appropriate for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Validation { .. } | Self::AlreadyExists { .. } | Self::AlreadyRegistered { .. } => {
                400
            }
            Self::CapacityExceeded { .. } | Self::NotAssociated { .. } => 409,
            Self::Storage { .. } | Self::Internal { .. } => 500,
        }
    }
}

/// A Result type alias using RegistryError.
pub type RegistryResult<T> = Result<T, RegistryError>;

impl From<serde_json::Error> for RegistryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RegistryError::not_found("User", "userId", "u1");
        assert_eq!(err.to_string(), "User with userId 'u1' does not exist");

        let err = RegistryError::CapacityExceeded {
            event_id: "e1".into(),
        };
        assert_eq!(
            err.to_string(),
            "Event 'e1' is at full capacity and does not have a waitlist"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(RegistryError::not_found("Event", "eventId", "e1").status_code(), 404);
        assert_eq!(
            RegistryError::already_exists("User", "userId", "u1").status_code(),
            400
        );
        assert_eq!(
            RegistryError::AlreadyRegistered {
                user_id: "u1".into(),
                event_id: "e1".into(),
            }
            .status_code(),
            400
        );
        assert_eq!(
            RegistryError::CapacityExceeded {
                event_id: "e1".into()
            }
            .status_code(),
            409
        );
        assert_eq!(
            RegistryError::NotAssociated {
                user_id: "u1".into(),
                event_id: "e1".into(),
            }
            .status_code(),
            409
        );
        assert_eq!(RegistryError::validation("capacity", "x").status_code(), 400);
        assert_eq!(RegistryError::storage("down").status_code(), 500);
    }

    #[test]
    fn test_is_user_error() {
        assert!(RegistryError::validation("name", "empty").is_user_error());
        assert!(!RegistryError::internal("corrupt").is_user_error());
    }
}
