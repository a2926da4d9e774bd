//! Error handling models and utilities

use thiserror::Error;

/// Main error type for calls made by the console against the record services
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConsoleError {
    /// The request never produced a response (connection refused, CORS, DNS...)
    #[error("Network error: {message}")]
    Network { message: String },

    /// The service answered with a non-2xx status
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The response body could not be decoded into the expected shape
    #[error("Failed to decode {format} payload: {message}")]
    Decode { message: String, format: String },

    /// Client-side errors (bad configuration, request building)
    #[error("Client error: {message}")]
    Client { message: String },

    /// A form was rejected before reaching the network
    #[error("Validation failed: {message}")]
    Validation { message: String, field: Option<String> },
}

/// Result type alias for console operations
pub type ConsoleResult<T> = Result<T, ConsoleError>;

impl ConsoleError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>, format: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
            format: format.into(),
        }
    }

    pub fn client(message: impl Into<String>) -> Self {
        Self::Client {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: None,
        }
    }

    pub fn validation_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// HTTP status reported by the service, if the failure came from one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ConsoleError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Short machine-readable code, logged next to every collapsed failure
    pub fn error_code(&self) -> &'static str {
        match self {
            ConsoleError::Network { .. } => "NETWORK_ERROR",
            ConsoleError::Http { .. } => "HTTP_ERROR",
            ConsoleError::Decode { .. } => "DECODE_ERROR",
            ConsoleError::Client { .. } => "CLIENT_ERROR",
            ConsoleError::Validation { .. } => "VALIDATION_ERROR",
        }
    }

    /// Human readable description. Pages never show this directly; they
    /// collapse failures into an entity banner and log this text instead.
    pub fn user_message(&self) -> String {
        match self {
            ConsoleError::Network { message } => format!("Network error: {}", message),
            ConsoleError::Http { status, message } => match status {
                404 => format!("Not found: {}", message),
                409 => format!("Conflict: {}", message),
                400..=499 => format!("Request rejected ({}): {}", status, message),
                _ => format!("Service error ({}): {}", status, message),
            },
            ConsoleError::Decode { message, format } => {
                format!("Unexpected {} response: {}", format, message)
            }
            ConsoleError::Client { message } => format!("Client error: {}", message),
            ConsoleError::Validation { message, field } => match field {
                Some(field) => format!("Validation error in field '{}': {}", field, message),
                None => format!("Validation error: {}", message),
            },
        }
    }
}

impl From<serde_json::Error> for ConsoleError {
    fn from(err: serde_json::Error) -> Self {
        ConsoleError::decode(err.to_string(), "JSON")
    }
}

impl From<reqwest::Error> for ConsoleError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            ConsoleError::http(status.as_u16(), err.to_string())
        } else if err.is_decode() {
            ConsoleError::decode(err.to_string(), "JSON")
        } else if err.is_builder() {
            ConsoleError::client(err.to_string())
        } else {
            ConsoleError::network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ConsoleError::network("x").error_code(), "NETWORK_ERROR");
        assert_eq!(ConsoleError::http(500, "x").error_code(), "HTTP_ERROR");
        assert_eq!(ConsoleError::decode("x", "JSON").error_code(), "DECODE_ERROR");
        assert_eq!(ConsoleError::client("x").error_code(), "CLIENT_ERROR");
        assert_eq!(ConsoleError::validation("x").error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_status_code() {
        let conflict = ConsoleError::http(409, "Course with ID: HDSE already exists");
        assert_eq!(conflict.status_code(), Some(409));
        assert_eq!(ConsoleError::network("refused").status_code(), None);
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            ConsoleError::http(404, "no such file").user_message(),
            "Not found: no such file"
        );
        assert_eq!(
            ConsoleError::validation_field("id", "Course ID must contain only letters")
                .user_message(),
            "Validation error in field 'id': Course ID must contain only letters"
        );
        assert_eq!(
            ConsoleError::decode("missing field `id`", "JSON").user_message(),
            "Unexpected JSON response: missing field `id`"
        );
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let converted: ConsoleError = err.into();
        assert!(matches!(converted, ConsoleError::Decode { ref format, .. } if format == "JSON"));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ConsoleError::http(500, "boom").to_string(),
            "HTTP 500: boom"
        );
        assert_eq!(
            ConsoleError::network("connection refused").to_string(),
            "Network error: connection refused"
        );
    }
}
