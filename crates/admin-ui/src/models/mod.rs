//! Data models for the records console

pub mod collection;
pub mod course;
pub mod envelope;
pub mod error;
pub mod media;
pub mod student;
pub mod validation;

pub use collection::*;
pub use course::*;
pub use envelope::*;
pub use error::*;
pub use media::*;
pub use student::*;
pub use validation::*;
