//! In-memory asset store that records every call.

use async_trait::async_trait;
use eventdeck_storage::{Storage, StorageBackend, StorageError, StorageResult};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// A storage call as seen by [`MockStorage`], in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageCall {
    Upload(String),
    Delete(String),
}

#[derive(Default)]
struct State {
    objects: HashMap<String, Vec<u8>>,
    calls: Vec<StorageCall>,
    fail_upload: bool,
    fail_delete: bool,
}

/// Mock storage keeping objects in memory and recording every call
#[derive(Clone, Default)]
pub struct MockStorage {
    state: Arc<Mutex<State>>,
}

impl MockStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_uploads(&self, fail: bool) {
        self.state.lock().unwrap().fail_upload = fail;
    }

    pub fn fail_deletes(&self, fail: bool) {
        self.state.lock().unwrap().fail_delete = fail;
    }

    pub fn calls(&self) -> Vec<StorageCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.state.lock().unwrap().objects.contains_key(key)
    }

    pub fn object_count(&self) -> usize {
        self.state.lock().unwrap().objects.len()
    }
}

#[async_trait]
impl Storage for MockStorage {
    async fn upload(
        &self,
        filename: &str,
        _content_type: &str,
        data: Vec<u8>,
    ) -> StorageResult<(String, String)> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(StorageCall::Upload(filename.to_string()));
        if state.fail_upload {
            return Err(StorageError::UploadFailed("mock upload failure".to_string()));
        }
        let key = format!("events/{}", Uuid::new_v4());
        state.objects.insert(key.clone(), data);
        Ok((key.clone(), format!("https://assets.test/{}", key)))
    }

    async fn delete(&self, storage_key: &str) -> StorageResult<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(StorageCall::Delete(storage_key.to_string()));
        if state.fail_delete {
            return Err(StorageError::DeleteFailed("mock delete failure".to_string()));
        }
        state.objects.remove(storage_key);
        Ok(())
    }

    async fn exists(&self, storage_key: &str) -> StorageResult<bool> {
        Ok(self.contains(storage_key))
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::S3
    }
}
