//! Photo upload helper.
//!
//! Uploads run before an entry is submitted: the write form collects the
//! public URLs and puts them on the draft. Files go up one at a time; a
//! file the store rejects is logged and skipped, so a partial photo set
//! is an accepted outcome and never aborts the submission.

use uuid::Uuid;

use crate::error::{HaruError, Result};
use crate::store::RemoteStore;

/// One selected file: its original name (for the extension and for error
/// messages) and its bytes.
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    /// Original file name, e.g. "beach.jpg"
    pub file_name: String,
    /// File content
    pub bytes: Vec<u8>,
}

/// Generated bucket path: a random name preserving the original
/// extension, so two uploads of "beach.jpg" never collide.
fn blob_path(file_name: &str) -> String {
    let name = Uuid::new_v4();
    match file_name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => format!("{}.{}", name, ext),
        _ => name.to_string(),
    }
}

/// Upload one photo and return its public URL.
pub async fn upload_photo<S: RemoteStore>(store: &S, upload: &PhotoUpload) -> Result<String> {
    let path = blob_path(&upload.file_name);
    store
        .upload_blob(&path, &upload.bytes)
        .await
        .map_err(|source| HaruError::Upload {
            file: upload.file_name.clone(),
            source,
        })?;
    Ok(store.public_url(&path))
}

/// Upload photos sequentially and return the public URLs of the ones
/// that succeeded, in selection order. Failed files are logged and
/// skipped.
pub async fn upload_photos<S: RemoteStore>(store: &S, uploads: &[PhotoUpload]) -> Vec<String> {
    let mut urls = Vec::new();
    for upload in uploads {
        match upload_photo(store, upload).await {
            Ok(url) => urls.push(url),
            Err(e) => log::warn!("Skipping photo: {}", e),
        }
    }
    urls
}
