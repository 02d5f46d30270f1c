//! Application state shared by every handler.

use std::path::PathBuf;
use std::sync::Arc;

use eventdeck_core::Config;
use eventdeck_db::EventStore;
use eventdeck_storage::{AssetClient, Storage};

use crate::services::event_lifecycle::EventLifecycleService;

/// Size limit, allowlists and staging directory applied to uploaded images.
#[derive(Clone, Debug)]
pub struct UploadLimits {
    pub max_file_size: usize,
    pub allowed_extensions: Vec<String>,
    pub allowed_content_types: Vec<String>,
    pub staging_dir: PathBuf,
}

impl UploadLimits {
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_file_size: config.max_file_size_bytes(),
            allowed_extensions: config.allowed_extensions().to_vec(),
            allowed_content_types: config.allowed_content_types().to_vec(),
            staging_dir: config.upload_staging_dir(),
        }
    }
}

/// Admin secret and whether the gate middleware guards mutating routes.
#[derive(Clone)]
pub struct AdminConfig {
    pub password: String,
    pub gate_enabled: bool,
}

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub events: EventLifecycleService,
    pub store: Arc<dyn EventStore>,
    pub storage: Arc<dyn Storage>,
    pub uploads: UploadLimits,
    pub admin: AdminConfig,
}

impl AppState {
    /// Wire the lifecycle service over the given store and storage backend.
    pub fn new(config: Config, store: Arc<dyn EventStore>, storage: Arc<dyn Storage>) -> Self {
        let assets = AssetClient::new(storage.clone());
        let events = EventLifecycleService::new(store.clone(), assets);
        let uploads = UploadLimits::from_config(&config);
        let admin = AdminConfig {
            password: config.admin_password().to_string(),
            gate_enabled: config.admin_gate_enabled(),
        };

        Self {
            config,
            events,
            store,
            storage,
            uploads,
            admin,
        }
    }
}
