//! Grading systems: the fixed scale registry and the conversion engine

pub mod convert;
pub mod scale;

pub use convert::{convert_grade, detect_grading_system, is_valid_grade, resolve_grade};
pub use scale::{label_of, scale_of, GradeScale, GradingSystem};
