//! Core module: grading engine, records and their persistence

pub mod config;
pub mod error;
pub mod gpa;
pub mod grading;
pub mod models;
pub mod report;
pub mod storage;

pub use error::{CourseError, GradeError};
pub use gpa::{calculate_gpa, calculate_term_gpa};
pub use grading::{convert_grade, detect_grading_system, is_valid_grade, GradingSystem};

/// Returns the current version of the `gradepoint` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
