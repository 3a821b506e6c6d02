//! Error types for grade resolution and course validation

use crate::core::grading::GradingSystem;
use thiserror::Error;

/// A grade label that cannot be interpreted under the relevant scale(s).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GradeError {
    /// No registered grading system contains the label
    #[error("unable to detect grading system for grade: {grade}")]
    Undetectable {
        /// The offending label
        grade: String,
    },

    /// The label is absent from the source scale named in a conversion
    #[error("grade {grade} is not part of {system}")]
    Unknown {
        /// The offending label
        grade: String,
        /// Source system the label was looked up in
        system: GradingSystem,
    },

    /// A course grade could not be resolved during GPA aggregation
    #[error("unable to convert grade {grade} to {}", .system.label())]
    Unresolvable {
        /// The offending label
        grade: String,
        /// Target system of the aggregation
        system: GradingSystem,
    },
}

/// A course record that violates the course invariants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CourseError {
    /// Course name is blank
    #[error("course name is required")]
    EmptyName,

    /// Grade is blank
    #[error("grade is required")]
    EmptyGrade,

    /// Credits are zero, negative, or not a number
    #[error("invalid credits: {0}")]
    InvalidCredits(f64),

    /// Grade does not belong to the system it is being recorded under
    #[error("grade {grade} is not a valid {} grade", .system.label())]
    GradeNotInSystem {
        /// The offending label
        grade: String,
        /// System the course is recorded under
        system: GradingSystem,
    },
}
