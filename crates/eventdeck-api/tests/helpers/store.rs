//! In-memory event store.

use async_trait::async_trait;
use chrono::Utc;
use eventdeck_core::models::{EventRecord, NewEvent, StoredAsset, UpdatedEvent};
use eventdeck_core::AppError;
use eventdeck_db::EventStore;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Mock event store for testing without database
#[derive(Clone, Default)]
pub struct MockEventStore {
    events: Arc<Mutex<Vec<EventRecord>>>,
    fail_writes: Arc<Mutex<bool>>,
}

impl MockEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes(&self, fail: bool) {
        *self.fail_writes.lock().unwrap() = fail;
    }

    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn find(&self, id: Uuid) -> Option<EventRecord> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == id)
            .cloned()
    }

    fn check_writable(&self) -> Result<(), AppError> {
        if *self.fail_writes.lock().unwrap() {
            return Err(AppError::Internal("mock store write failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl EventStore for MockEventStore {
    async fn list(&self) -> Result<Vec<EventRecord>, AppError> {
        Ok(self.events.lock().unwrap().clone())
    }

    async fn get(&self, id: Uuid) -> Result<Option<EventRecord>, AppError> {
        Ok(self.find(id))
    }

    async fn insert(&self, event: &NewEvent, image: &StoredAsset) -> Result<EventRecord, AppError> {
        self.check_writable()?;
        let now = Utc::now();
        let record = EventRecord {
            id: Uuid::new_v4(),
            date: event.date.clone(),
            heading: event.heading.clone(),
            description: event.description.clone(),
            location: event.location.clone(),
            link: event.link.clone(),
            image_url: Some(image.url.clone()),
            image_id: Some(image.id.clone()),
            created_at: now,
            updated_at: now,
        };
        self.events.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        id: Uuid,
        event: &UpdatedEvent,
    ) -> Result<Option<EventRecord>, AppError> {
        self.check_writable()?;
        let mut events = self.events.lock().unwrap();
        let Some(record) = events.iter_mut().find(|e| e.id == id) else {
            return Ok(None);
        };
        record.date = event.date.clone();
        record.heading = event.heading.clone();
        record.description = event.description.clone();
        record.location = event.location.clone();
        record.link = event.link.clone();
        record.image_url = event.image_url.clone();
        record.image_id = event.image_id.clone();
        record.updated_at = Utc::now();
        Ok(Some(record.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        self.check_writable()?;
        let mut events = self.events.lock().unwrap();
        let before = events.len();
        events.retain(|e| e.id != id);
        Ok(events.len() < before)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
