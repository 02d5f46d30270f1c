//! EventDeck Storage Library
//!
//! Asset store abstraction for event images. Provides the [`Storage`] trait with S3 and
//! local filesystem backends, upload staging, and the [`AssetClient`] used by the
//! event lifecycle.
//!
//! # Storage key format
//!
//! Every backend stores images under `events/{uuid}.{ext}`. The key doubles as the
//! asset id kept on the event record. Keys must not contain `..` or a leading `/`.

pub mod asset_client;
pub mod factory;
pub(crate) mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod staging;
pub mod traits;

// Re-export commonly used types
pub use asset_client::AssetClient;
pub use eventdeck_core::StorageBackend;
pub use factory::create_storage;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use staging::StagedFile;
pub use traits::{Storage, StorageError, StorageResult};
