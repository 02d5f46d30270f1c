//! Admin route groups.

use crate::auth::middleware::admin_gate_middleware;
use crate::constants::API_PREFIX;
use crate::handlers;
use crate::state::AppState;
use axum::routing::{delete, get, post, put};
use axum::Router;
use std::sync::Arc;

/// Password check and event listing. Never gated.
pub fn open_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route(&format!("{}/login", API_PREFIX), post(handlers::auth::login))
        .route(&format!("{}/events", API_PREFIX), get(handlers::events::list_events))
        .with_state(state)
}

/// Create, edit and delete. Guarded by the admin gate when it is enabled.
pub fn event_write_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    let routes = Router::new()
        .route(&format!("{}/create", API_PREFIX), post(handlers::events::create_event))
        .route(&format!("{}/edit/{{id}}", API_PREFIX), put(handlers::events::edit_event))
        .route(
            &format!("{}/event/{{id}}", API_PREFIX),
            delete(handlers::events::delete_event),
        );

    let routes = if state.admin.gate_enabled {
        routes.route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            admin_gate_middleware,
        ))
    } else {
        routes
    };

    routes.with_state(state)
}
