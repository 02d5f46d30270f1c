//! Shared key generation for storage backends.

use uuid::Uuid;

const KEY_PREFIX: &str = "events";
const MAX_EXTENSION_LEN: usize = 10;

/// Generate a fresh storage key for an uploaded file: `events/{uuid}.{ext}`.
///
/// Only the extension of the original filename survives, lowercased and stripped of
/// anything that is not ASCII alphanumeric. Files without a usable extension get a
/// bare `events/{uuid}` key.
pub fn generate_storage_key(original_filename: &str) -> String {
    let id = Uuid::new_v4();
    match extension_of(original_filename) {
        Some(ext) => format!("{}/{}.{}", KEY_PREFIX, id, ext),
        None => format!("{}/{}", KEY_PREFIX, id),
    }
}

fn extension_of(filename: &str) -> Option<String> {
    let (_, ext) = filename.rsplit_once('.')?;
    let ext: String = ext
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if ext.is_empty() || ext.len() > MAX_EXTENSION_LEN {
        None
    } else {
        Some(ext)
    }
}
