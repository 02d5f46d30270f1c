//! Storage setup and initialization

use anyhow::{Context, Result};
use eventdeck_core::Config;
use eventdeck_storage::{create_storage, Storage};
use std::sync::Arc;

/// Build the configured asset store backend.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    tracing::info!("Initializing asset storage...");
    let storage = create_storage(config)
        .await
        .context("Failed to initialize asset storage")?;
    tracing::info!(
        backend = %storage.backend_type(),
        "Asset storage initialized successfully"
    );
    Ok(storage)
}
