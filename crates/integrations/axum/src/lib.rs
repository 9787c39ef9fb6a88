//! # Eventdesk Axum Integration
//!
//! This crate mounts the Eventdesk registration API onto an axum router:
//! route definitions, request/response DTOs, and the mapping from
//! [`RegistryError`] to HTTP status codes.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use eventdesk_axum::{registration_routes, ApiState};
//!
//! let state = ApiState::new(adapter);
//! let app = registration_routes(state);
//! axum::serve(listener, app).await?;
//! ```

mod handlers;
mod routes;

pub use routes::{registration_routes, ApiState};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use eventdesk_core::RegistryError;

/// Wrapper for [`RegistryError`] that implements `IntoResponse`.
///
/// Error bodies carry a human-readable detail string plus the mapped
/// HTTP status.
pub struct ApiError(pub RegistryError);

/// A Result type alias for handler return values.
pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if !self.0.is_user_error() {
            tracing::error!(error = %self.0, "request failed with internal error");
        }

        let body = serde_json::json!({
            "detail": self.0.to_string(),
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        ApiError(err)
    }
}
