//! Service client context

use dioxus::prelude::*;

use crate::services::{ApiClients, ServiceEndpoints};

/// Endpoints baked into this build, or the local defaults if they are unusable
pub fn load_endpoints() -> ServiceEndpoints {
    match ServiceEndpoints::from_build_env() {
        Ok(endpoints) => {
            tracing::info!(
                "Using services course={} student={} media={}",
                endpoints.course_url,
                endpoints.student_url,
                endpoints.media_url
            );
            endpoints
        }
        Err(e) => {
            tracing::error!(
                code = e.error_code(),
                "Invalid service endpoints, falling back to defaults: {}",
                e.user_message()
            );
            ServiceEndpoints::default()
        }
    }
}

/// Provide the service clients to everything below the calling component
pub fn use_api_provider() -> ApiClients {
    use_context_provider(|| ApiClients::from_endpoints(&load_endpoints()))
}

/// Hook for the service clients provided at the root
pub fn use_api() -> ApiClients {
    use_context::<ApiClients>()
}
