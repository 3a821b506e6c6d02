//! GPA report generation
//!
//! Renders a transcript-style summary of the stored courses (overall and
//! current GPA, a per-term breakdown and the course list with converted
//! grades) as Markdown or HTML.

pub mod formats;

use crate::core::gpa::{
    calculate_gpa, calculate_term_gpa, current_courses, mismatched_grades, term_breakdown,
    GpaStanding, TermGpa, TermSummary,
};
use crate::core::grading::{label_of, resolve_grade, GradingSystem};
use crate::core::models::Course;
use chrono::{Local, NaiveDate};
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Placeholder shown where a value cannot be computed
pub const NOT_AVAILABLE: &str = "N/A";

/// Data context for report generation
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Courses covered by the report
    pub courses: &'a [Course],
    /// Grading system every figure is expressed in
    pub system: GradingSystem,
    /// Date printed in the report header
    pub generated_on: NaiveDate,
}

impl<'a> ReportContext<'a> {
    /// Create a context dated today
    #[must_use]
    pub fn new(courses: &'a [Course], system: GradingSystem) -> Self {
        Self {
            courses,
            system,
            generated_on: Local::now().date_naive(),
        }
    }

    /// Override the header date
    #[must_use]
    pub const fn dated(mut self, date: NaiveDate) -> Self {
        self.generated_on = date;
        self
    }

    /// Display name of the report's grading system
    #[must_use]
    pub const fn system_label(&self) -> &'static str {
        label_of(self.system)
    }

    /// Cumulative GPA, `None` if any grade cannot be resolved
    #[must_use]
    pub fn overall_gpa(&self) -> Option<f64> {
        calculate_gpa(self.courses, self.system).ok()
    }

    /// GPA of the courses in the current semester
    #[must_use]
    pub fn current_gpa(&self) -> TermGpa {
        calculate_term_gpa(&current_courses(self.courses), self.system)
    }

    /// Standing derived from the cumulative GPA
    #[must_use]
    pub fn standing(&self) -> Option<GpaStanding> {
        self.overall_gpa().map(GpaStanding::from_gpa)
    }

    /// Per-term breakdown in program order
    #[must_use]
    pub fn terms(&self) -> Vec<TermSummary> {
        term_breakdown(self.courses, self.system)
    }

    /// Sum of credits over all courses
    #[must_use]
    pub fn total_credits(&self) -> f64 {
        self.courses.iter().map(|c| c.credits).sum()
    }

    /// Number of courses
    #[must_use]
    pub const fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Number of courses whose stored grade is not on the report's scale
    #[must_use]
    pub fn mismatched_count(&self) -> usize {
        mismatched_grades(self.courses, self.system).len()
    }

    /// Grade of `course` expressed in the report's system, or [`NOT_AVAILABLE`]
    #[must_use]
    pub fn converted_grade(&self, course: &Course) -> &'static str {
        resolve_grade(&course.grade, course.grading_system, self.system).unwrap_or(NOT_AVAILABLE)
    }

    /// Cumulative GPA formatted with two decimals
    #[must_use]
    pub fn overall_gpa_text(&self) -> String {
        self.overall_gpa()
            .map_or_else(|| NOT_AVAILABLE.to_string(), |gpa| format!("{gpa:.2}"))
    }

    /// Standing label, or [`NOT_AVAILABLE`]
    #[must_use]
    pub fn standing_text(&self) -> &'static str {
        self.standing().map_or(NOT_AVAILABLE, GpaStanding::label)
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

/// Generator for `format`
#[must_use]
pub fn generator_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
    }
}
