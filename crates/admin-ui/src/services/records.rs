//! Page workflows for the record collections
//!
//! Every page runs the same loop: fetch on mount, submit or delete, then
//! refetch the whole collection. Failures are logged with their cause and
//! collapsed into a single entity banner on the page state.

use std::future::Future;

use crate::models::{
    CollectionState, CollectionStore, ConsoleResult, Course, CourseForm, FormValidation, MediaFile, Student,
    StudentForm,
};
use crate::services::{CourseApi, MediaApi, StudentApi};
use crate::utils::{validate_course_form, validate_student_form};

/// User-facing texts for one kind of record
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntityMessages {
    pub entity: &'static str,
    pub load_failed: &'static str,
    pub save_failed: &'static str,
    pub delete_failed: &'static str,
    pub confirm_delete: &'static str,
    pub empty: &'static str,
}

pub const COURSE_MESSAGES: EntityMessages = EntityMessages {
    entity: "course",
    load_failed: "Failed to load courses",
    save_failed: "Failed to save course",
    delete_failed: "Failed to delete course",
    confirm_delete: "Are you sure you want to delete this course?",
    empty: "No courses available.",
};

pub const STUDENT_MESSAGES: EntityMessages = EntityMessages {
    entity: "student",
    load_failed: "Failed to load students",
    save_failed: "Failed to save student",
    delete_failed: "Failed to delete student",
    confirm_delete: "Are you sure you want to delete this student?",
    empty: "No students available.",
};

pub const MEDIA_MESSAGES: EntityMessages = EntityMessages {
    entity: "file",
    load_failed: "Failed to load media files",
    save_failed: "Failed to upload one or more files",
    delete_failed: "Failed to delete file",
    confirm_delete: "Are you sure you want to delete this file?",
    empty: "No files uploaded yet",
};

/// Result of submitting a create dialog
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Rejected locally; nothing was sent
    Invalid(FormValidation),
    Saved,
    /// Sent but the service failed; the banner is already set
    Failed,
}

impl SubmitOutcome {
    /// Whether the dialog should close. Any attempt that reached the
    /// network closes it.
    pub fn closes_dialog(&self) -> bool {
        !matches!(self, SubmitOutcome::Invalid(_))
    }
}

/// Result of a delete request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Declined,
    Deleted,
    Failed,
}

/// Replace the page snapshot with a fresh listing
pub async fn refresh<T, S>(
    store: &mut S,
    messages: &EntityMessages,
    listing: impl Future<Output = ConsoleResult<Vec<T>>>,
) where
    S: CollectionStore<T>,
{
    store.update(CollectionState::begin_load);
    match listing.await {
        Ok(items) => {
            tracing::debug!("Loaded {} {} records", items.len(), messages.entity);
            store.update(|state| state.finish_load(items));
        }
        Err(e) => {
            tracing::error!(
                code = e.error_code(),
                status = ?e.status_code(),
                "Error fetching {} records: {}",
                messages.entity,
                e.user_message()
            );
            store.update(|state| state.fail_load(messages.load_failed));
        }
    }
}

/// Send a validated record, then refetch whatever happened
async fn submit<T, R, S>(
    store: &mut S,
    messages: &EntityMessages,
    creation: impl Future<Output = ConsoleResult<R>>,
    listing: impl Future<Output = ConsoleResult<Vec<T>>>,
) -> SubmitOutcome
where
    S: CollectionStore<T>,
{
    let outcome = match creation.await {
        Ok(_) => {
            tracing::info!("Created {}", messages.entity);
            SubmitOutcome::Saved
        }
        Err(e) => {
            tracing::error!(
                code = e.error_code(),
                status = ?e.status_code(),
                "Error saving {}: {}",
                messages.entity,
                e.user_message()
            );
            store.update(|state| state.show_banner(messages.save_failed));
            SubmitOutcome::Failed
        }
    };
    refresh(store, messages, listing).await;
    outcome
}

/// Ask first, delete, then refetch. A declined confirmation sends nothing.
pub async fn delete_confirmed<T, S>(
    store: &mut S,
    messages: &EntityMessages,
    confirm: impl FnOnce(&str) -> bool,
    deletion: impl Future<Output = ConsoleResult<()>>,
    listing: impl Future<Output = ConsoleResult<Vec<T>>>,
) -> DeleteOutcome
where
    S: CollectionStore<T>,
{
    if !confirm(messages.confirm_delete) {
        return DeleteOutcome::Declined;
    }

    match deletion.await {
        Ok(()) => {
            tracing::info!("Deleted {}", messages.entity);
            refresh(store, messages, listing).await;
            DeleteOutcome::Deleted
        }
        Err(e) => {
            tracing::error!(
                code = e.error_code(),
                status = ?e.status_code(),
                "Error deleting {}: {}",
                messages.entity,
                e.user_message()
            );
            store.update(|state| state.show_banner(messages.delete_failed));
            DeleteOutcome::Failed
        }
    }
}

pub async fn refresh_courses(api: &dyn CourseApi, store: &mut impl CollectionStore<Course>) {
    refresh(store, &COURSE_MESSAGES, api.list_all()).await;
}

/// Validate the course dialog and, if it passes, create the course
pub async fn create_course(
    api: &dyn CourseApi,
    store: &mut impl CollectionStore<Course>,
    form: &CourseForm,
) -> SubmitOutcome {
    let validation = validate_course_form(form);
    if !validation.is_valid() {
        tracing::debug!("Course form rejected: {}", validation.summary());
        return SubmitOutcome::Invalid(validation);
    }
    let course = form.to_course();
    submit(store, &COURSE_MESSAGES, api.create(&course), api.list_all()).await
}

pub async fn delete_course(
    api: &dyn CourseApi,
    store: &mut impl CollectionStore<Course>,
    id: &str,
    confirm: impl FnOnce(&str) -> bool,
) -> DeleteOutcome {
    delete_confirmed(store, &COURSE_MESSAGES, confirm, api.delete(id), api.list_all()).await
}

pub async fn refresh_students(api: &dyn StudentApi, store: &mut impl CollectionStore<Student>) {
    refresh(store, &STUDENT_MESSAGES, api.list_all()).await;
}

/// Validate the student dialog and, if it passes, create the student
pub async fn create_student(
    api: &dyn StudentApi,
    store: &mut impl CollectionStore<Student>,
    form: &StudentForm,
) -> SubmitOutcome {
    let validation = validate_student_form(form);
    if !validation.is_valid() {
        tracing::debug!("Student form rejected: {}", validation.summary());
        return SubmitOutcome::Invalid(validation);
    }
    let student = form.to_student();
    submit(store, &STUDENT_MESSAGES, api.create(&student), api.list_all()).await
}

pub async fn delete_student(
    api: &dyn StudentApi,
    store: &mut impl CollectionStore<Student>,
    registration_number: &str,
    confirm: impl FnOnce(&str) -> bool,
) -> DeleteOutcome {
    delete_confirmed(
        store,
        &STUDENT_MESSAGES,
        confirm,
        api.delete(registration_number),
        api.list_all(),
    )
    .await
}

pub async fn refresh_media(api: &dyn MediaApi, store: &mut impl CollectionStore<MediaFile>) {
    refresh(store, &MEDIA_MESSAGES, api.list_all()).await;
}

pub async fn delete_media_file(
    api: &dyn MediaApi,
    store: &mut impl CollectionStore<MediaFile>,
    id: &str,
    confirm: impl FnOnce(&str) -> bool,
) -> DeleteOutcome {
    delete_confirmed(store, &MEDIA_MESSAGES, confirm, api.delete(id), api.list_all()).await
}
