//! Semester model

use super::course::Course;
use crate::core::gpa::calculate_term_gpa;
use crate::core::grading::GradingSystem;
use serde::{Deserialize, Serialize};

/// An archived group of courses with its GPA snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Semester {
    /// Opaque unique identifier
    pub id: String,
    /// Semester name (e.g., "Fall 2025")
    pub name: String,
    /// Courses taken in the semester
    #[serde(default)]
    pub courses: Vec<Course>,
    /// GPA at the time of the last refresh
    #[serde(default)]
    pub gpa: f64,
    /// Start date as entered by the user
    #[serde(default)]
    pub start_date: String,
    /// End date as entered by the user
    #[serde(default)]
    pub end_date: String,
}

impl Semester {
    /// Create an empty semester
    #[must_use]
    pub fn new(name: &str, start_date: &str, end_date: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            courses: Vec::new(),
            gpa: 0.0,
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
        }
    }

    /// Replace the course list and recompute the GPA under `system`
    pub fn set_courses(&mut self, courses: Vec<Course>, system: GradingSystem) {
        self.courses = courses;
        self.refresh_gpa(system);
    }

    /// Recompute the stored GPA under `system`.
    ///
    /// Uses the term calculation, so a single bad grade zeroes this semester
    /// without failing the caller.
    pub fn refresh_gpa(&mut self, system: GradingSystem) {
        self.gpa = calculate_term_gpa(&self.courses, system).gpa;
    }

    /// Sum of course credits
    #[must_use]
    pub fn total_credits(&self) -> f64 {
        self.courses.iter().map(|c| c.credits).sum()
    }
}
