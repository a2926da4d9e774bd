//! Reading dropped or picked files into memory

use dioxus::html::FileData;

use crate::models::PendingUpload;

/// Read every file the browser handed over. Unreadable files are skipped.
pub async fn read_pending_uploads(files: Vec<FileData>) -> Vec<PendingUpload> {
    let mut uploads = Vec::with_capacity(files.len());
    for file in files {
        let name = file.name();
        match file.read_bytes().await {
            Ok(bytes) => uploads.push(PendingUpload::new(name, file.content_type(), bytes.to_vec())),
            Err(e) => tracing::warn!("Could not read {}: {}", name, e),
        }
    }
    uploads
}
