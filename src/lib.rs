//! Library for `gradepoint`
//!
//! Grading scale registry, cross-scale grade conversion and credit-weighted
//! GPA aggregation, plus the record store, reports and configuration used by
//! the `gradepoint` CLI.

pub mod core;
pub mod logger;

pub use crate::core::*;
