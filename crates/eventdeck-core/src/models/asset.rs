use serde::{Deserialize, Serialize};

/// An object held by the asset store.
///
/// `id` is the opaque handle used for later deletion; `url` is where clients fetch it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredAsset {
    pub url: String,
    pub id: String,
}
