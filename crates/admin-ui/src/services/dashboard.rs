//! Record counts for the dashboard cards

use futures_util::future::try_join3;

use crate::models::ConsoleResult;
use crate::services::ApiClients;

pub const DASHBOARD_LOAD_FAILED: &str = "Failed to load dashboard statistics";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub courses: usize,
    pub students: usize,
    pub media_files: usize,
}

/// Fetch all three collections at once and count them.
///
/// Any failure fails the whole load; the cause is logged here.
pub async fn load_dashboard_stats(clients: &ApiClients) -> ConsoleResult<DashboardStats> {
    let counts = try_join3(
        clients.courses.list_all(),
        clients.students.list_all(),
        clients.media.list_all(),
    )
    .await;

    match counts {
        Ok((courses, students, media)) => Ok(DashboardStats {
            courses: courses.len(),
            students: students.len(),
            media_files: media.len(),
        }),
        Err(e) => {
            tracing::error!(code = e.error_code(), "Error fetching dashboard stats: {}", e.user_message());
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use tracing_test::traced_test;

    use super::*;
    use crate::services::testing::{FakeCourses, FakeMedia, FakeStudents};

    #[tokio::test]
    async fn test_counts_every_collection() {
        let clients = ApiClients::new(
            Rc::new(FakeCourses::with(&[("HDSE", "Software Engineering"), ("GDSE", "Graduate Diploma")])),
            Rc::new(FakeStudents::with(&["S001", "S002", "S003"])),
            Rc::new(FakeMedia::with(&[("a1", "logo.png")])),
        );

        let stats = load_dashboard_stats(&clients).await.unwrap();
        assert_eq!(
            stats,
            DashboardStats {
                courses: 2,
                students: 3,
                media_files: 1,
            }
        );
    }

    #[tokio::test]
    #[traced_test]
    async fn test_one_failure_fails_the_load() {
        let students = FakeStudents::with(&["S001"]);
        students.fail_next_list();
        let clients = ApiClients::new(
            Rc::new(FakeCourses::default()),
            Rc::new(students),
            Rc::new(FakeMedia::default()),
        );

        let err = load_dashboard_stats(&clients).await.unwrap_err();
        assert_eq!(err.error_code(), "NETWORK_ERROR");
        assert!(logs_contain("Error fetching dashboard stats"));
        assert!(logs_contain("NETWORK_ERROR"));
    }
}
