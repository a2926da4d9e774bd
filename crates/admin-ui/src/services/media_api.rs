//! Media service client

use async_trait::async_trait;

use crate::models::{ConsoleResult, MediaFile, PendingUpload};
use crate::services::api_client::HttpClient;

/// Operations the console performs against the media service
#[async_trait(?Send)]
pub trait MediaApi {
    /// `GET /files` (a plain JSON array)
    async fn list_all(&self) -> ConsoleResult<Vec<MediaFile>>;

    /// `POST /files` as multipart with the bytes under the `file` field
    async fn upload_file(&self, upload: PendingUpload) -> ConsoleResult<MediaFile>;

    /// `DELETE /files/{id}`
    async fn delete(&self, id: &str) -> ConsoleResult<()>;

    /// Direct `GET /files/{id}` URL used as an image source or preview link
    fn resource_url(&self, id: &str) -> String;
}

/// HTTP implementation of [`MediaApi`]
#[derive(Clone, Debug)]
pub struct MediaService {
    http: HttpClient,
}

impl MediaService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(base_url),
        }
    }
}

#[async_trait(?Send)]
impl MediaApi for MediaService {
    async fn list_all(&self) -> ConsoleResult<Vec<MediaFile>> {
        self.http.get_json("/files").await
    }

    async fn upload_file(&self, upload: PendingUpload) -> ConsoleResult<MediaFile> {
        self.http.post_multipart("/files", upload).await
    }

    async fn delete(&self, id: &str) -> ConsoleResult<()> {
        self.http.delete(&format!("/files/{}", urlencoding::encode(id))).await
    }

    fn resource_url(&self, id: &str) -> String {
        self.http.url(&format!("/files/{}", urlencoding::encode(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_url() {
        let service = MediaService::new("http://localhost:8083/");
        assert_eq!(
            service.resource_url("0b7e1c2a-58f4-4d35-9c1e-2a6d3f8e9b10"),
            "http://localhost:8083/files/0b7e1c2a-58f4-4d35-9c1e-2a6d3f8e9b10"
        );
    }

    #[test]
    fn test_resource_url_encodes_id() {
        let service = MediaService::new("http://localhost:8083");
        assert_eq!(service.resource_url("S001"), "http://localhost:8083/files/S001");
        assert_eq!(service.resource_url("a b/c"), "http://localhost:8083/files/a%20b%2Fc");
    }
}
