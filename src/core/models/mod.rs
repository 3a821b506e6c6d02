//! Data models for `gradepoint`

pub mod course;
pub mod semester;
pub mod settings;

pub use course::{ClassTerm, Course, CURRENT_SEMESTER};
pub use semester::Semester;
pub use settings::{AppSettings, Theme, DEFAULT_CREDITS};
