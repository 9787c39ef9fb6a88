//! Request handlers for the registration API.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use eventdesk_core::{
    CreateEventRequest, Event, RegisterOutcome, RegistrationSnapshot, UnregisterOutcome, User,
};
use serde::{Deserialize, Serialize};

use crate::routes::ApiState;
use crate::{ApiError, ApiResult};

/// Body for the registration endpoints.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub user_id: String,
}

/// Response for registration operations.
#[derive(Debug, Serialize)]
pub struct RegistrationResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promoted: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UserEventsResponse {
    pub events: Vec<Event>,
}

pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Event Registration API" }))
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// `POST /users`
pub async fn create_user(
    State(state): State<ApiState>,
    Json(user): Json<User>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let created = state.users.create_user(user).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `POST /events`
pub async fn create_event(
    State(state): State<ApiState>,
    Json(request): Json<CreateEventRequest>,
) -> ApiResult<(StatusCode, Json<Event>)> {
    let created = state.events.create_event(request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `POST /events/{eventId}/register`
pub async fn register(
    State(state): State<ApiState>,
    Path(event_id): Path<String>,
    Json(request): Json<RegistrationRequest>,
) -> ApiResult<Json<RegistrationResponse>> {
    let response = do_register(&state, &event_id, &request.user_id).await?;
    Ok(Json(response))
}

/// `POST /events/{eventId}/registrations` — same operation, 201 on success.
pub async fn register_created(
    State(state): State<ApiState>,
    Path(event_id): Path<String>,
    Json(request): Json<RegistrationRequest>,
) -> ApiResult<(StatusCode, Json<RegistrationResponse>)> {
    let response = do_register(&state, &event_id, &request.user_id).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn do_register(
    state: &ApiState,
    event_id: &str,
    user_id: &str,
) -> Result<RegistrationResponse, ApiError> {
    let outcome = state.registrations.register(event_id, user_id).await?;
    Ok(match outcome {
        RegisterOutcome::Registered => RegistrationResponse {
            message: format!("User '{user_id}' successfully registered for event '{event_id}'"),
            status: Some("registered"),
            promoted: None,
        },
        RegisterOutcome::Waitlisted => RegistrationResponse {
            message: format!("Event '{event_id}' is full. User '{user_id}' added to waitlist"),
            status: Some("waitlisted"),
            promoted: None,
        },
    })
}

/// `DELETE /events/{eventId}/register/{userId}` and
/// `DELETE /events/{eventId}/registrations/{userId}`
pub async fn unregister(
    State(state): State<ApiState>,
    Path((event_id, user_id)): Path<(String, String)>,
) -> ApiResult<Json<RegistrationResponse>> {
    let outcome = state.registrations.unregister(&event_id, &user_id).await?;
    let response = match outcome {
        UnregisterOutcome::Unregistered {
            promoted: Some(promoted_id),
        } => RegistrationResponse {
            message: format!(
                "User '{user_id}' unregistered from event '{event_id}'. \
                 User '{promoted_id}' promoted from waitlist"
            ),
            status: None,
            promoted: Some(promoted_id),
        },
        UnregisterOutcome::Unregistered { promoted: None } => RegistrationResponse {
            message: format!("User '{user_id}' successfully unregistered from event '{event_id}'"),
            status: None,
            promoted: None,
        },
        UnregisterOutcome::RemovedFromWaitlist => RegistrationResponse {
            message: format!("User '{user_id}' removed from waitlist for event '{event_id}'"),
            status: None,
            promoted: None,
        },
    };
    Ok(Json(response))
}

/// `GET /events/{eventId}/registrations`
pub async fn event_registrations(
    State(state): State<ApiState>,
    Path(event_id): Path<String>,
) -> ApiResult<Json<RegistrationSnapshot>> {
    let snapshot = state.events.registrations(&event_id).await?;
    Ok(Json(snapshot))
}

/// `GET /users/{userId}/events` and `GET /users/{userId}/registrations`
pub async fn user_events(
    State(state): State<ApiState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<UserEventsResponse>> {
    let events = state.registrations.events_for_user(&user_id).await?;
    Ok(Json(UserEventsResponse { events }))
}
