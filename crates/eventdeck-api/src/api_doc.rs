//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use eventdeck_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "EventDeck API",
        version = "0.1.0",
        description = "Admin API for the community event feed. Events carry one image held in an external asset store; create, edit and delete keep the record and the stored image in step on a best-effort basis."
    ),
    paths(
        handlers::auth::login,
        handlers::events::list_events,
        handlers::events::create_event,
        handlers::events::edit_event,
        handlers::events::delete_event,
    ),
    components(schemas(
        models::EventRecord,
        models::EventEnvelope,
        models::MessageResponse,
        models::LoginRequest,
        models::LoginResponse,
        error::ErrorResponse,
    )),
    tags(
        (name = "auth", description = "Admin password gate"),
        (name = "events", description = "Event lifecycle"),
    )
)]
pub struct ApiDoc;

pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
