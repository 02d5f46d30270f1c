//! Health check handlers.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_secs(5);

/// Run an async check with timeout; returns "ready", "timeout", or "not_ready: {error}".
async fn run_check<F, E>(f: F) -> (bool, String)
where
    F: Future<Output = Result<(), E>>,
    E: Display,
{
    match tokio::time::timeout(TIMEOUT, f).await {
        Ok(Ok(())) => (true, "ready".to_string()),
        Ok(Err(e)) => (false, format!("not_ready: {}", e)),
        Err(_) => (false, "timeout".to_string()),
    }
}

#[derive(serde::Serialize)]
pub(super) struct ReadinessResponse {
    pub status: String,
    pub database: String,
    pub storage: String,
}

/// Liveness check: the process is running.
pub async fn liveness_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "status": "alive" })),
    )
}

/// Readiness check: event store and asset store both answer.
pub async fn readiness_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = state.store.clone();
    let (database_ok, database) = run_check(async move { store.ping().await }).await;
    if !database_ok {
        tracing::error!(database = %database, "Database readiness check failed");
    }

    let storage = state.storage.clone();
    let (storage_ok, storage) = run_check(async move {
        storage
            .exists("health-check-non-existent-key")
            .await
            .map(drop)
    })
    .await;
    if !storage_ok {
        tracing::warn!(storage = %storage, "Storage readiness check failed");
    }

    let ready = database_ok && storage_ok;
    let response = ReadinessResponse {
        status: if ready { "ready" } else { "not_ready" }.to_string(),
        database,
        storage,
    };

    let status_code = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}
