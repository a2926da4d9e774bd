//! Course service client

use async_trait::async_trait;

use crate::models::{ConsoleResult, Course, decode_collection};
use crate::services::api_client::HttpClient;

/// Operations the console performs against the course service
#[async_trait(?Send)]
pub trait CourseApi {
    /// `GET /courses`, unwrapped from its HAL envelope
    async fn list_all(&self) -> ConsoleResult<Vec<Course>>;

    /// `POST /courses`
    async fn create(&self, course: &Course) -> ConsoleResult<Course>;

    /// `DELETE /courses/{id}`
    async fn delete(&self, id: &str) -> ConsoleResult<()>;
}

/// HTTP implementation of [`CourseApi`]
#[derive(Clone, Debug)]
pub struct CourseService {
    http: HttpClient,
}

impl CourseService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(base_url),
        }
    }
}

#[async_trait(?Send)]
impl CourseApi for CourseService {
    async fn list_all(&self) -> ConsoleResult<Vec<Course>> {
        let body = self.http.get_text("/courses").await?;
        decode_collection(&body)
    }

    async fn create(&self, course: &Course) -> ConsoleResult<Course> {
        let Some(mut created) = self.http.post_json::<_, Course>("/courses", course).await? else {
            return Ok(course.clone());
        };
        if created.id.is_empty() {
            created.id = course.id.clone();
        }
        Ok(created)
    }

    async fn delete(&self, id: &str) -> ConsoleResult<()> {
        self.http.delete(&format!("/courses/{}", urlencoding::encode(id))).await
    }
}
