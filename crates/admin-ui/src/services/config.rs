//! Backend service locations
//!
//! A static WebAssembly bundle cannot read a config file at runtime, so the
//! base URLs are baked in at compile time from `COURSE_SERVICE_URL`,
//! `STUDENT_SERVICE_URL` and `MEDIA_SERVICE_URL`, falling back to the local
//! development ports. Native builds and tests may also load them from TOML.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::models::{ConsoleError, ConsoleResult};

pub const DEFAULT_COURSE_URL: &str = "http://localhost:8081";
pub const DEFAULT_STUDENT_URL: &str = "http://localhost:8082";
pub const DEFAULT_MEDIA_URL: &str = "http://localhost:8083";

/// Base URLs of the three backend services
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ServiceEndpoints {
    pub course_url: String,
    pub student_url: String,
    pub media_url: String,
}

impl Default for ServiceEndpoints {
    fn default() -> Self {
        Self {
            course_url: DEFAULT_COURSE_URL.to_string(),
            student_url: DEFAULT_STUDENT_URL.to_string(),
            media_url: DEFAULT_MEDIA_URL.to_string(),
        }
    }
}

impl ServiceEndpoints {
    /// Endpoints baked in at compile time
    pub fn from_build_env() -> ConsoleResult<Self> {
        Self {
            course_url: option_env!("COURSE_SERVICE_URL")
                .unwrap_or(DEFAULT_COURSE_URL)
                .to_string(),
            student_url: option_env!("STUDENT_SERVICE_URL")
                .unwrap_or(DEFAULT_STUDENT_URL)
                .to_string(),
            media_url: option_env!("MEDIA_SERVICE_URL")
                .unwrap_or(DEFAULT_MEDIA_URL)
                .to_string(),
        }
        .normalized()
    }

    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(source: &str) -> ConsoleResult<Self> {
        let endpoints: Self = toml::from_str(source).map_err(|e| ConsoleError::decode(e.to_string(), "TOML"))?;
        endpoints.normalized()
    }

    /// Trim trailing slashes and reject anything that is not an HTTP URL
    pub fn normalized(self) -> ConsoleResult<Self> {
        Ok(Self {
            course_url: normalize_url("course_url", &self.course_url)?,
            student_url: normalize_url("student_url", &self.student_url)?,
            media_url: normalize_url("media_url", &self.media_url)?,
        })
    }
}

fn normalize_url(field: &str, raw: &str) -> ConsoleResult<String> {
    let invalid = |reason: &str| {
        ConsoleError::validation_field(
            field,
            format!("{field} must be an http:// or https:// URL, got '{raw}': {reason}"),
        )
    };
    let url = Url::parse(raw.trim()).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("unsupported scheme"));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(invalid("missing host"));
    }
    Ok(url.as_str().trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let endpoints = ServiceEndpoints::default();
        assert_eq!(endpoints.course_url, "http://localhost:8081");
        assert_eq!(endpoints.student_url, "http://localhost:8082");
        assert_eq!(endpoints.media_url, "http://localhost:8083");
        assert_eq!(endpoints.clone().normalized().unwrap(), endpoints);
    }

    #[test]
    fn test_from_toml_overrides_and_defaults() {
        let endpoints = ServiceEndpoints::from_toml_str(
            r#"
            course_url = "https://records.example.lk/course-api/"
            media_url = "http://10.0.0.5:9000"
            "#,
        )
        .unwrap();

        assert_eq!(endpoints.course_url, "https://records.example.lk/course-api");
        assert_eq!(endpoints.student_url, DEFAULT_STUDENT_URL);
        assert_eq!(endpoints.media_url, "http://10.0.0.5:9000");
    }

    #[test]
    fn test_rejects_non_http_urls() {
        let err = ServiceEndpoints::from_toml_str(r#"student_url = "ftp://files.local""#).unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert!(err.to_string().contains("student_url"));

        assert!(ServiceEndpoints::from_toml_str(r#"media_url = "http://""#).is_err());
    }

    #[test]
    fn test_rejects_urls_without_a_valid_host() {
        for url in ["http://not a host", "http://:::", "https://?x", "localhost:8081"] {
            let source = format!("course_url = \"{url}\"");
            let err = ServiceEndpoints::from_toml_str(&source).unwrap_err();
            assert_eq!(err.error_code(), "VALIDATION_ERROR", "{url} should be rejected");
        }
    }

    #[test]
    fn test_keeps_path_and_port() {
        let endpoints = ServiceEndpoints::from_toml_str(
            r#"student_url = "https://gateway.example.lk:8443/student-api//""#,
        )
        .unwrap();
        assert_eq!(endpoints.student_url, "https://gateway.example.lk:8443/student-api");
    }

    #[test]
    fn test_malformed_toml() {
        let err = ServiceEndpoints::from_toml_str("course_url = ").unwrap_err();
        assert_eq!(err.error_code(), "DECODE_ERROR");
    }
}
