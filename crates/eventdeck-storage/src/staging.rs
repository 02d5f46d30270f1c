//! Upload staging
//!
//! Multipart file parts are written to a temporary file before they are handed to the
//! asset store. A [`StagedFile`] is owned by exactly one request and its file is
//! removed when it is discarded or dropped.

use std::io;
use std::path::Path;

use tempfile::{Builder, TempPath};

const STAGING_PREFIX: &str = "eventdeck-upload-";

/// A client file written to the staging directory, waiting to be uploaded.
#[derive(Debug)]
pub struct StagedFile {
    path: TempPath,
    original_filename: String,
    content_type: String,
    size: usize,
}

impl StagedFile {
    /// Write `data` to a fresh temporary file inside `dir`.
    pub async fn stage(
        dir: &Path,
        original_filename: &str,
        content_type: &str,
        data: &[u8],
    ) -> io::Result<Self> {
        tokio::fs::create_dir_all(dir).await?;

        let path = Builder::new()
            .prefix(STAGING_PREFIX)
            .tempfile_in(dir)?
            .into_temp_path();
        tokio::fs::write(&path, data).await?;

        Ok(Self {
            path,
            original_filename: original_filename.to_string(),
            content_type: content_type.to_string(),
            size: data.len(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn original_filename(&self) -> &str {
        &self.original_filename
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Remove the staged file now, reporting any filesystem error.
    pub fn discard(self) -> io::Result<()> {
        self.path.close()
    }
}
