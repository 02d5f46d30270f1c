//! Event lifecycle: create, edit and delete event records together with their image.
//!
//! Keeps handler logic thin and allows unit testing without HTTP.
//!
//! Consistency with the asset store is best effort. Asset deletions that fail are logged
//! and ignored, which can leave orphaned assets. Nothing is compensated or retried.
//! Edit removes the old image before uploading its replacement, so a failed
//! replacement upload leaves the record pointing at an asset that no longer exists.

use std::sync::Arc;

use eventdeck_core::models::{EventFields, EventRecord};
use eventdeck_core::AppError;
use eventdeck_db::EventStore;
use eventdeck_storage::{AssetClient, StagedFile};
use uuid::Uuid;

fn event_not_found() -> AppError {
    AppError::NotFound("Event not found".to_string())
}

fn upload_failed() -> AppError {
    AppError::Upload("Failed to upload image".to_string())
}

/// Service coordinating the event record store and the asset store.
#[derive(Clone)]
pub struct EventLifecycleService {
    store: Arc<dyn EventStore>,
    assets: AssetClient,
}

impl EventLifecycleService {
    pub fn new(store: Arc<dyn EventStore>, assets: AssetClient) -> Self {
        Self { store, assets }
    }

    pub async fn list(&self) -> Result<Vec<EventRecord>, AppError> {
        self.store.list().await
    }

    pub async fn get(&self, id: Uuid) -> Result<EventRecord, AppError> {
        self.store.get(id).await?.ok_or_else(event_not_found)
    }

    /// Create an event. Fields are validated before the image is required, and the
    /// image is uploaded before anything is persisted.
    #[tracing::instrument(skip_all, fields(operation = "create_event"))]
    pub async fn create(
        &self,
        fields: EventFields,
        image: Option<StagedFile>,
    ) -> Result<EventRecord, AppError> {
        let new_event = fields.into_new_event()?;
        let file = image.ok_or_else(|| AppError::Validation("avatar is required".to_string()))?;

        let asset = self.assets.upload(file).await.ok_or_else(upload_failed)?;

        match self.store.insert(&new_event, &asset).await {
            Ok(record) => {
                tracing::info!(event_id = %record.id, image_id = %asset.id, "Event created");
                Ok(record)
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    image_id = %asset.id,
                    "Event insert failed after upload, asset is orphaned"
                );
                Err(e)
            }
        }
    }

    /// Edit an event. Absent or empty fields keep their stored value.
    #[tracing::instrument(skip(self, fields, image), fields(operation = "edit_event", has_image = image.is_some()))]
    pub async fn edit(
        &self,
        id: Uuid,
        fields: EventFields,
        image: Option<StagedFile>,
    ) -> Result<EventRecord, AppError> {
        let existing = self.get(id).await?;

        let new_image = match image {
            Some(file) => {
                if let Some(old_id) = existing.image_id.as_deref() {
                    if !self.assets.delete(old_id).await {
                        tracing::warn!(
                            event_id = %id,
                            image_id = %old_id,
                            "Previous image could not be deleted, leaving it orphaned"
                        );
                    }
                }

                match self.assets.upload(file).await {
                    Some(asset) => Some(asset),
                    None => {
                        tracing::warn!(
                            event_id = %id,
                            stale_image_id = ?existing.image_id,
                            "Replacement upload failed, record still references the deleted image"
                        );
                        return Err(upload_failed());
                    }
                }
            }
            None => None,
        };

        let replaced_image_id = new_image.as_ref().map(|asset| asset.id.clone());
        let updated = existing.merge(fields, new_image);

        match self.store.update(id, &updated).await {
            Ok(Some(record)) => {
                tracing::info!(event_id = %id, "Event updated");
                Ok(record)
            }
            Ok(None) => {
                if let Some(image_id) = replaced_image_id {
                    tracing::error!(event_id = %id, image_id = %image_id, "Event vanished during edit, asset is orphaned");
                }
                Err(event_not_found())
            }
            Err(e) => {
                if let Some(image_id) = replaced_image_id {
                    tracing::error!(error = %e, event_id = %id, image_id = %image_id, "Event update failed after upload, asset is orphaned");
                }
                Err(e)
            }
        }
    }

    /// Delete an event and, best effort, its image.
    #[tracing::instrument(skip(self), fields(operation = "delete_event"))]
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let existing = self.get(id).await?;

        if let Some(image_id) = existing.image_id.as_deref() {
            if !self.assets.delete(image_id).await {
                tracing::warn!(
                    event_id = %id,
                    image_id = %image_id,
                    "Image could not be deleted, leaving it orphaned"
                );
            }
        }

        if !self.store.delete(id).await? {
            return Err(event_not_found());
        }

        tracing::info!(event_id = %id, "Event deleted");
        Ok(())
    }
}
