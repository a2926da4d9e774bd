//! Custom hooks module

pub mod use_collection;
pub mod use_config;
pub mod use_error;

pub use use_collection::*;
pub use use_config::*;
pub use use_error::*;
