//! Student service client

use async_trait::async_trait;

use crate::models::{ConsoleResult, Student, decode_collection};
use crate::services::api_client::HttpClient;

/// Operations the console performs against the student service
#[async_trait(?Send)]
pub trait StudentApi {
    /// `GET /students`, unwrapped from its HAL envelope
    async fn list_all(&self) -> ConsoleResult<Vec<Student>>;

    /// `POST /students`
    async fn create(&self, student: &Student) -> ConsoleResult<Student>;

    /// `DELETE /students/{registrationNumber}`
    async fn delete(&self, registration_number: &str) -> ConsoleResult<()>;
}

/// HTTP implementation of [`StudentApi`]
#[derive(Clone, Debug)]
pub struct StudentService {
    http: HttpClient,
}

impl StudentService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(base_url),
        }
    }
}

#[async_trait(?Send)]
impl StudentApi for StudentService {
    async fn list_all(&self) -> ConsoleResult<Vec<Student>> {
        let body = self.http.get_text("/students").await?;
        decode_collection(&body)
    }

    async fn create(&self, student: &Student) -> ConsoleResult<Student> {
        // The id is not exposed in the response, so keep the one we sent
        let Some(mut created) = self.http.post_json::<_, Student>("/students", student).await? else {
            return Ok(student.clone());
        };
        if created.registration_number.is_empty() {
            created.registration_number = student.registration_number.clone();
        }
        Ok(created)
    }

    async fn delete(&self, registration_number: &str) -> ConsoleResult<()> {
        self.http
            .delete(&format!("/students/{}", urlencoding::encode(registration_number)))
            .await
    }
}
