//! HTTP client shared by the three service clients
//!
//! A thin layer over `reqwest` that runs in the browser (fetch) and natively.
//! No auth headers, no retries: every failure is returned as a
//! [`ConsoleError`] and the page decides what banner to show.

use reqwest::multipart::{Form, Part};
use reqwest::header::ACCEPT;
use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::models::{ConsoleError, ConsoleResult, PendingUpload};

/// Field name the media service reads uploads from
pub const MULTIPART_FIELD: &str = "file";

/// HTTP client bound to one service base URL
#[derive(Clone, Debug)]
pub struct HttpClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a path below the base URL
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, self.url(path))
            .header(ACCEPT, "application/json")
    }

    async fn send(&self, request: RequestBuilder) -> ConsoleResult<Response> {
        let response = request.send().await.map_err(ConsoleError::from)?;
        check_status(response).await
    }

    /// GET and return the raw body, for envelopes decoded by the caller
    pub async fn get_text(&self, path: &str) -> ConsoleResult<String> {
        let response = self.send(self.request(Method::GET, path)).await?;
        response.text().await.map_err(ConsoleError::from)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ConsoleResult<T> {
        let body = self.get_text(path).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// POST a JSON body. Services may answer `201 Created` with no body,
    /// which comes back as `None`.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ConsoleResult<Option<T>> {
        let response = self.send(self.request(Method::POST, path).json(body)).await?;
        let text = response.text().await.map_err(ConsoleError::from)?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&text)?))
    }

    /// POST a single file as `multipart/form-data` under [`MULTIPART_FIELD`]
    pub async fn post_multipart<T: DeserializeOwned>(&self, path: &str, upload: PendingUpload) -> ConsoleResult<T> {
        let form = multipart_form(upload)?;
        let response = self.send(self.request(Method::POST, path).multipart(form)).await?;
        let text = response.text().await.map_err(ConsoleError::from)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub async fn delete(&self, path: &str) -> ConsoleResult<()> {
        self.send(self.request(Method::DELETE, path)).await?;
        Ok(())
    }
}

fn multipart_form(upload: PendingUpload) -> ConsoleResult<Form> {
    let PendingUpload {
        filename,
        content_type,
        bytes,
    } = upload;
    let mut part = Part::bytes(bytes).file_name(filename);
    if let Some(content_type) = content_type {
        part = part
            .mime_str(&content_type)
            .map_err(|e| ConsoleError::client(format!("Invalid content type {content_type}: {e}")))?;
    }
    Ok(Form::new().part(MULTIPART_FIELD, part))
}

/// Map a non-2xx response to [`ConsoleError::Http`], keeping the service's
/// `message` field when it sends one.
async fn check_status(response: Response) -> ConsoleResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ConsoleError::http(
        status.as_u16(),
        error_message(&body, status.canonical_reason().unwrap_or("HTTP error")),
    ))
}

/// Pull a readable message out of an error body.
///
/// Spring error bodies carry `message` or `error`; anything else falls back
/// to the status reason.
pub fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            ["message", "error"]
                .iter()
                .find_map(|key| json.get(key).and_then(|v| v.as_str()).filter(|s| !s.is_empty()).map(str::to_string))
        })
        .unwrap_or_else(|| fallback.to_string())
}
