use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::upload::read_event_form;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use eventdeck_core::models::{EventEnvelope, EventRecord, MessageResponse};
use eventdeck_core::AppError;
use std::sync::Arc;
use uuid::Uuid;

/// Ids that are not UUIDs cannot match any record.
fn parse_event_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound("Event not found".to_string()))
}

#[utoipa::path(
    get,
    path = "/api/admin/events",
    tag = "events",
    responses(
        (status = 200, description = "All events", body = Vec<EventRecord>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_events(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<EventRecord>>, HttpAppError> {
    let events = state.events.list().await?;
    Ok(Json(events))
}

#[utoipa::path(
    post,
    path = "/api/admin/create",
    tag = "events",
    request_body(content_type = "multipart/form-data", description = "`image` (or `image[]`) file plus date, heading, description, location and optional link"),
    responses(
        (status = 201, description = "Event created", body = EventEnvelope),
        (status = 400, description = "Missing field, missing image or upload failure", body = ErrorResponse),
        (status = 413, description = "Image too large", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "create_event"))]
pub async fn create_event(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, HttpAppError> {
    let form = read_event_form(multipart?, &state.uploads).await?;
    let record = state.events.create(form.fields, form.image).await?;

    Ok((
        StatusCode::CREATED,
        Json(EventEnvelope {
            message: "Event created successfully".to_string(),
            data: record,
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/api/admin/edit/{id}",
    tag = "events",
    params(
        ("id" = String, Path, description = "Event ID")
    ),
    request_body(content_type = "multipart/form-data", description = "Optional `image` (or `image[]`) file plus any subset of the event fields"),
    responses(
        (status = 200, description = "Event updated", body = EventEnvelope),
        (status = 400, description = "Upload failure or invalid image", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "edit_event"))]
pub async fn edit_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<EventEnvelope>, HttpAppError> {
    let id = parse_event_id(&id)?;
    // Unknown ids are 404 whatever the body is, so the multipart rejection waits.
    state.events.get(id).await?;

    let form = read_event_form(multipart?, &state.uploads).await?;
    let record = state.events.edit(id, form.fields, form.image).await?;

    Ok(Json(EventEnvelope {
        message: "Event updated successfully".to_string(),
        data: record,
    }))
}

#[utoipa::path(
    delete,
    path = "/api/admin/event/{id}",
    tag = "events",
    params(
        ("id" = String, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event deleted", body = MessageResponse),
        (status = 404, description = "Event not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "delete_event"))]
pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, HttpAppError> {
    let id = parse_event_id(&id)?;
    state.events.delete(id).await?;

    Ok(Json(MessageResponse {
        message: "Event deleted successfully".to_string(),
    }))
}
