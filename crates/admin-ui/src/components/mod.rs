//! UI Components module

pub mod feedback;
pub mod forms;
pub mod layout;
pub mod loading;
pub mod modal;

// Re-export commonly used components
pub use feedback::{Alert, EmptyState, ErrorMessage};
pub use forms::{Button, Input};
pub use layout::{APP_NAME, APP_VERSION, ConsoleLayout, Header, Sidebar};
pub use loading::{InlineLoader, Spinner};
pub use modal::Modal;
