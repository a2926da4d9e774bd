//! API services module

pub mod api_client;
pub mod clients;
pub mod config;
pub mod course_api;
pub mod dashboard;
pub mod media_api;
pub mod records;
pub mod student_api;
pub mod uploads;

#[cfg(test)]
pub(crate) mod testing;

pub use api_client::*;
pub use clients::*;
pub use config::*;
pub use course_api::*;
pub use dashboard::*;
pub use media_api::*;
pub use records::*;
pub use student_api::*;
pub use uploads::*;
