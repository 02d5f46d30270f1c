//! Application setup and initialization

pub mod database;
pub mod routes;
pub mod server;
pub mod storage;
pub mod validation;

use crate::state::AppState;
use anyhow::{Context, Result};
use eventdeck_core::Config;
use eventdeck_db::{EventRepository, EventStore};
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    crate::telemetry::init_telemetry(config.log_format(), config.environment())?;

    // Validate configuration - fail fast on misconfiguration
    validation::validate_config(&config).context("Configuration validation failed")?;
    tracing::info!("Configuration loaded and validated successfully");

    let pool = database::setup_database(&config).await?;
    let store: Arc<dyn EventStore> = Arc::new(EventRepository::new(pool));

    let storage = storage::setup_storage(&config).await?;

    let state = Arc::new(AppState::new(config.clone(), store, storage));

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
