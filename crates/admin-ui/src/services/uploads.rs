//! Batch upload from the media drop zone

use futures_util::future::join_all;

use crate::models::{AcceptFilter, CollectionState, CollectionStore, MediaFile, PendingUpload};
use crate::services::MediaApi;
use crate::services::records::{MEDIA_MESSAGES, refresh};

/// What happened to one dropped or picked batch
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadReport {
    pub accepted: usize,
    /// Filenames the accept filter turned away
    pub rejected: Vec<String>,
    pub failed: usize,
}

impl UploadReport {
    pub fn sent_anything(&self) -> bool {
        self.accepted > 0
    }
}

/// Filter the batch, send every accepted file concurrently, wait for all of
/// them, then refetch the gallery.
///
/// Rejected files are only logged. If nothing is accepted the page state is
/// left alone.
pub async fn upload_batch(
    api: &dyn MediaApi,
    store: &mut impl CollectionStore<MediaFile>,
    filter: &AcceptFilter,
    files: Vec<PendingUpload>,
) -> UploadReport {
    let (accepted, rejected) = filter.partition(files);
    let rejected: Vec<String> = rejected.into_iter().map(|file| file.filename).collect();
    for filename in &rejected {
        tracing::warn!("File type not allowed: {}", filename);
    }

    let mut report = UploadReport {
        accepted: accepted.len(),
        rejected,
        failed: 0,
    };
    if accepted.is_empty() {
        return report;
    }

    store.update(|state: &mut CollectionState<MediaFile>| {
        state.busy = true;
        state.dismiss_banner();
    });

    let results = join_all(accepted.into_iter().map(|file| async move {
        let filename = file.filename.clone();
        (filename, api.upload_file(file).await)
    }))
    .await;

    for (filename, result) in results {
        match result {
            Ok(stored) => tracing::info!("Uploaded {} as {}", filename, stored.id),
            Err(e) => {
                tracing::error!(
                    code = e.error_code(),
                    status = ?e.status_code(),
                    "Error uploading {}: {}",
                    filename,
                    e.user_message()
                );
                report.failed += 1;
            }
        }
    }

    refresh(store, &MEDIA_MESSAGES, api.list_all()).await;
    store.update(|state| {
        if report.failed > 0 {
            state.show_banner(MEDIA_MESSAGES.save_failed);
        }
        state.busy = false;
    });
    report
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use tracing_test::traced_test;

    use super::*;
    use crate::models::FileCategory;
    use crate::services::testing::FakeMedia;

    fn file(name: &str, content_type: &str) -> PendingUpload {
        PendingUpload::new(name, Some(content_type.to_string()), b"bytes".to_vec())
    }

    fn store() -> Rc<RefCell<CollectionState<MediaFile>>> {
        Rc::new(RefCell::new(CollectionState::default()))
    }

    #[tokio::test]
    #[traced_test]
    async fn test_exe_is_rejected_before_any_request() {
        let api = FakeMedia::default();
        let mut state = store();
        state.borrow_mut().show_banner("Failed to delete file");

        let report = upload_batch(
            &api,
            &mut state,
            &AcceptFilter::default(),
            vec![file("setup.exe", "application/x-msdownload")],
        )
        .await;

        assert!(!report.sent_anything());
        assert_eq!(report.rejected, ["setup.exe"]);
        assert_eq!(api.calls(), 0);
        assert!(!state.borrow().busy);
        assert_eq!(state.borrow().banner.as_deref(), Some("Failed to delete file"));
        assert!(logs_contain("File type not allowed: setup.exe"));
    }

    #[tokio::test]
    async fn test_png_upload_shows_image_chip() {
        let api = FakeMedia::default();
        let mut state = store();

        let report = upload_batch(
            &api,
            &mut state,
            &AcceptFilter::default(),
            vec![file("campus.png", "image/png"), file("virus.exe", "")],
        )
        .await;

        assert_eq!(report.accepted, 1);
        assert_eq!(report.failed, 0);
        assert_eq!(api.uploaded(), ["campus.png"]);

        let state = state.borrow();
        assert!(!state.busy);
        assert_eq!(state.banner, None);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].category(), FileCategory::Image);
        assert_eq!(state.items[0].category().chip_label(), "Image");
    }

    #[tokio::test]
    #[traced_test]
    async fn test_partial_failure_sets_single_banner_after_refetch() {
        let api = FakeMedia::default();
        api.fail_upload_of("broken.pdf");
        let mut state = store();

        let report = upload_batch(
            &api,
            &mut state,
            &AcceptFilter::default(),
            vec![
                file("timetable.pdf", "application/pdf"),
                file("broken.pdf", "application/pdf"),
                file("readme.md", ""),
            ],
        )
        .await;

        assert_eq!(report.accepted, 3);
        assert_eq!(report.failed, 1);

        let state = state.borrow();
        let names: Vec<_> = state.items.iter().map(|f| f.filename.as_str()).collect();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"timetable.pdf"));
        assert!(names.contains(&"readme.md"));
        assert_eq!(state.banner.as_deref(), Some("Failed to upload one or more files"));
        assert!(logs_contain("Error uploading broken.pdf"));
        assert!(logs_contain("HTTP_ERROR"));
        assert!(logs_contain("Some(500)"));
    }

    #[tokio::test]
    async fn test_upload_clears_previous_banner() {
        let api = FakeMedia::default();
        let mut state = store();
        state.borrow_mut().show_banner("Failed to delete file");

        upload_batch(&api, &mut state, &AcceptFilter::default(), vec![file("notes.txt", "text/plain")]).await;

        assert_eq!(state.borrow().banner, None);
    }
}
