//! Browser helpers and form validation

pub mod dom;
pub mod files;
pub mod validation;

pub use dom::*;
pub use files::*;
pub use validation::*;
