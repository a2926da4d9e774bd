//! Collection page hooks
//!
//! Each hook owns the page's [`CollectionState`] signal, fetches once on
//! mount and exposes the page actions. Actions spawn onto the component
//! scope so they outlive the event handler that started them.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::hooks::use_api;
use crate::models::{AcceptFilter, CollectionState, CollectionStore, Course, CourseForm, MediaFile, PendingUpload,
    Student, StudentForm};
use crate::services::{
    CourseApi, MediaApi, StudentApi, SubmitOutcome, UploadReport, create_course, create_student, delete_course,
    delete_media_file, delete_student, refresh_courses, refresh_media, refresh_students, upload_batch,
};
use crate::utils::confirm;

impl<T: 'static> CollectionStore<T> for Signal<CollectionState<T>> {
    fn update(&mut self, f: impl FnOnce(&mut CollectionState<T>)) {
        f(&mut self.write());
    }
}

/// Course page context
#[derive(Clone)]
pub struct CoursesContext {
    pub state: Signal<CollectionState<Course>>,
    api: Rc<dyn CourseApi>,
}

impl CoursesContext {
    pub fn reload(&self) {
        let api = self.api.clone();
        let mut state = self.state;
        spawn(async move {
            refresh_courses(api.as_ref(), &mut state).await;
        });
    }

    /// Validate and send the dialog form; the caller decides what to do
    /// with the dialog from the outcome.
    pub async fn create(&self, form: CourseForm) -> SubmitOutcome {
        let mut state = self.state;
        create_course(self.api.as_ref(), &mut state, &form).await
    }

    pub fn delete(&self, id: String) {
        let api = self.api.clone();
        let mut state = self.state;
        spawn(async move {
            delete_course(api.as_ref(), &mut state, &id, confirm).await;
        });
    }

    pub fn dismiss_banner(&self) {
        let mut state = self.state;
        state.write().dismiss_banner();
    }
}

/// Hook for the course page; fetches on mount
pub fn use_courses() -> CoursesContext {
    let clients = use_api();
    let state = use_signal(CollectionState::<Course>::loading);
    let context = CoursesContext {
        state,
        api: clients.courses,
    };

    use_hook({
        let context = context.clone();
        move || context.reload()
    });

    context
}

/// Student page context
#[derive(Clone)]
pub struct StudentsContext {
    pub state: Signal<CollectionState<Student>>,
    api: Rc<dyn StudentApi>,
}

impl StudentsContext {
    pub fn reload(&self) {
        let api = self.api.clone();
        let mut state = self.state;
        spawn(async move {
            refresh_students(api.as_ref(), &mut state).await;
        });
    }

    pub async fn create(&self, form: StudentForm) -> SubmitOutcome {
        let mut state = self.state;
        create_student(self.api.as_ref(), &mut state, &form).await
    }

    pub fn delete(&self, registration_number: String) {
        let api = self.api.clone();
        let mut state = self.state;
        spawn(async move {
            delete_student(api.as_ref(), &mut state, &registration_number, confirm).await;
        });
    }

    pub fn dismiss_banner(&self) {
        let mut state = self.state;
        state.write().dismiss_banner();
    }
}

/// Hook for the student page; fetches on mount
pub fn use_students() -> StudentsContext {
    let clients = use_api();
    let state = use_signal(CollectionState::<Student>::loading);
    let context = StudentsContext {
        state,
        api: clients.students,
    };

    use_hook({
        let context = context.clone();
        move || context.reload()
    });

    context
}

/// Media page context
#[derive(Clone)]
pub struct MediaContext {
    pub state: Signal<CollectionState<MediaFile>>,
    pub filter: AcceptFilter,
    api: Rc<dyn MediaApi>,
}

impl MediaContext {
    pub fn reload(&self) {
        let api = self.api.clone();
        let mut state = self.state;
        spawn(async move {
            refresh_media(api.as_ref(), &mut state).await;
        });
    }

    pub async fn upload(&self, files: Vec<PendingUpload>) -> UploadReport {
        let mut state = self.state;
        upload_batch(self.api.as_ref(), &mut state, &self.filter, files).await
    }

    pub fn delete(&self, id: String) {
        let api = self.api.clone();
        let mut state = self.state;
        spawn(async move {
            delete_media_file(api.as_ref(), &mut state, &id, confirm).await;
        });
    }

    /// Direct URL of a stored file, for thumbnails and previews
    pub fn resource_url(&self, id: &str) -> String {
        self.api.resource_url(id)
    }

    pub fn dismiss_banner(&self) {
        let mut state = self.state;
        state.write().dismiss_banner();
    }
}

/// Hook for the media page; fetches on mount
pub fn use_media() -> MediaContext {
    let clients = use_api();
    let state = use_signal(CollectionState::<MediaFile>::loading);
    let context = MediaContext {
        state,
        filter: AcceptFilter::default(),
        api: clients.media,
    };

    use_hook({
        let context = context.clone();
        move || context.reload()
    });

    context
}
