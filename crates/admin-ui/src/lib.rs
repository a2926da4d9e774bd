//! ECA Admin Console
//!
//! Web administration interface for the course, student and media services.
//! Built with Dioxus and compiled to WebAssembly; everything below `pages`
//! and `components` also builds and is tested natively.

pub mod app;
pub mod components;
pub mod hooks;
pub mod models;
pub mod pages;
pub mod services;
pub mod utils;

pub use app::App;
