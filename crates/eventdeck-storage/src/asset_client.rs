//! Asset store client
//!
//! Best-effort wrapper over a [`Storage`] backend. Failures are logged and folded into
//! `None` / `false`; callers decide what a failed upload means for them.

use std::sync::Arc;
use std::time::Instant;

use eventdeck_core::models::StoredAsset;

use crate::staging::StagedFile;
use crate::traits::{Storage, StorageResult};

#[derive(Clone)]
pub struct AssetClient {
    storage: Arc<dyn Storage>,
}

impl AssetClient {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    /// Upload a staged file to the asset store.
    ///
    /// The staged file is removed whatever the outcome. Returns `None` when the
    /// store rejects the upload or the staged file cannot be read.
    #[tracing::instrument(skip(self, file), fields(filename = %file.original_filename(), size_bytes = file.size()))]
    pub async fn upload(&self, file: StagedFile) -> Option<StoredAsset> {
        let start = Instant::now();
        let result = self.put(&file).await;

        let staged_path = file.path().to_path_buf();
        if let Err(e) = file.discard() {
            tracing::warn!(
                error = %e,
                path = %staged_path.display(),
                "Failed to remove staged upload"
            );
        }

        match result {
            Ok((id, url)) => {
                tracing::info!(
                    image_id = %id,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "Asset uploaded"
                );
                Some(StoredAsset { url, id })
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    backend = %self.storage.backend_type(),
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "Asset upload failed"
                );
                None
            }
        }
    }

    async fn put(&self, file: &StagedFile) -> StorageResult<(String, String)> {
        let data = tokio::fs::read(file.path()).await?;
        self.storage
            .upload(file.original_filename(), file.content_type(), data)
            .await
    }

    /// Delete an asset by id. Returns `false` instead of failing.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> bool {
        match self.storage.delete(id).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    image_id = %id,
                    backend = %self.storage.backend_type(),
                    "Asset delete failed"
                );
                false
            }
        }
    }
}
