//! Pages module

pub mod courses;
pub mod dashboard;
pub mod media;
pub mod students;

pub use courses::CoursesPage;
pub use dashboard::Dashboard;
pub use media::MediaPage;
pub use students::StudentsPage;
