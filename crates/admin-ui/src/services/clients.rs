//! The three service clients as one shareable bundle

use std::rc::Rc;

use crate::services::{CourseApi, CourseService, MediaApi, MediaService, ServiceEndpoints, StudentApi, StudentService};

/// Handles to every backend, provided once at the root of the app
#[derive(Clone)]
pub struct ApiClients {
    pub courses: Rc<dyn CourseApi>,
    pub students: Rc<dyn StudentApi>,
    pub media: Rc<dyn MediaApi>,
}

impl ApiClients {
    pub fn new(courses: Rc<dyn CourseApi>, students: Rc<dyn StudentApi>, media: Rc<dyn MediaApi>) -> Self {
        Self {
            courses,
            students,
            media,
        }
    }

    /// HTTP clients for the given endpoints
    pub fn from_endpoints(endpoints: &ServiceEndpoints) -> Self {
        Self::new(
            Rc::new(CourseService::new(&endpoints.course_url)),
            Rc::new(StudentService::new(&endpoints.student_url)),
            Rc::new(MediaService::new(&endpoints.media_url)),
        )
    }
}

impl PartialEq for ApiClients {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.courses, &other.courses)
            && Rc::ptr_eq(&self.students, &other.students)
            && Rc::ptr_eq(&self.media, &other.media)
    }
}
