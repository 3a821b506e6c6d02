//! Credit-weighted GPA aggregation
//!
//! Every grade is first resolved to a label of the target grading system
//! (see [`resolve_grade`]) and then weighted by its course credits. Results
//! are rounded to two decimals, half away from zero.

use crate::core::error::GradeError;
use crate::core::grading::{is_valid_grade, resolve_grade, scale_of, GradingSystem};
use crate::core::models::{ClassTerm, Course};
use crate::{debug, warn};

/// A record that carries a grade and a credit weight
pub trait Graded {
    /// Grade label as stored
    fn grade(&self) -> &str;

    /// Credit weight (positive)
    fn credits(&self) -> f64;

    /// System the grade was recorded under, when known
    fn recorded_system(&self) -> Option<GradingSystem> {
        None
    }
}

impl Graded for Course {
    fn grade(&self) -> &str {
        &self.grade
    }

    fn credits(&self) -> f64 {
        self.credits
    }

    fn recorded_system(&self) -> Option<GradingSystem> {
        self.grading_system
    }
}

impl Graded for (&str, f64) {
    fn grade(&self) -> &str {
        self.0
    }

    fn credits(&self) -> f64 {
        self.1
    }
}

impl<T: Graded + ?Sized> Graded for &T {
    fn grade(&self) -> &str {
        (**self).grade()
    }

    fn credits(&self) -> f64 {
        (**self).credits()
    }

    fn recorded_system(&self) -> Option<GradingSystem> {
        (**self).recorded_system()
    }
}

/// GPA of one group of courses
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TermGpa {
    /// Weighted average, rounded to two decimals
    pub gpa: f64,
    /// Sum of credits that entered the average
    pub total_credits: f64,
    /// Number of courses in the group
    pub course_count: usize,
}

/// Per-term slice of a course list
#[derive(Debug, Clone, PartialEq)]
pub struct TermSummary {
    /// The term
    pub term: ClassTerm,
    /// Courses recorded in the term
    pub courses: Vec<Course>,
    /// GPA figures for the term
    pub stats: TermGpa,
}

/// Coarse classification of a GPA value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpaStanding {
    /// 3.5 and above
    High,
    /// 2.0 up to 3.5
    Satisfactory,
    /// Below 2.0
    Low,
}

impl GpaStanding {
    /// Classify a GPA value
    #[must_use]
    pub fn from_gpa(gpa: f64) -> Self {
        if gpa >= 3.5 {
            Self::High
        } else if gpa >= 2.0 {
            Self::Satisfactory
        } else {
            Self::Low
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Satisfactory => "Satisfactory",
            Self::Low => "Low",
        }
    }
}

/// Round to two decimals, half away from zero
#[must_use]
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Credit-weighted GPA of `courses` expressed in `system`.
///
/// An empty list yields `0.0`.
///
/// # Errors
///
/// Returns [`GradeError::Unresolvable`] as soon as one course grade cannot be
/// interpreted; no partial result is produced.
pub fn calculate_gpa<C: Graded>(courses: &[C], system: GradingSystem) -> Result<f64, GradeError> {
    if courses.is_empty() {
        return Ok(0.0);
    }

    let (total_points, total_credits) = weighted_totals(courses, system).inspect_err(|e| {
        debug!("GPA calculation error: {e}");
    })?;

    Ok(weighted_average(total_points, total_credits))
}

/// GPA figures for one term of courses expressed in `system`.
///
/// Never fails: if any grade cannot be resolved the result is zeroed (but
/// still reports the course count) so other terms can be shown.
#[must_use]
pub fn calculate_term_gpa<C: Graded>(courses: &[C], system: GradingSystem) -> TermGpa {
    if courses.is_empty() {
        return TermGpa::default();
    }

    match weighted_totals(courses, system) {
        Ok((total_points, total_credits)) => TermGpa {
            gpa: weighted_average(total_points, total_credits),
            total_credits,
            course_count: courses.len(),
        },
        Err(e) => {
            warn!("Term GPA calculation error: {e}");
            TermGpa {
                gpa: 0.0,
                total_credits: 0.0,
                course_count: courses.len(),
            }
        }
    }
}

/// Group courses by term, in program order, skipping empty terms
#[must_use]
pub fn term_breakdown(courses: &[Course], system: GradingSystem) -> Vec<TermSummary> {
    ClassTerm::ALL
        .into_iter()
        .filter_map(|term| {
            let term_courses: Vec<Course> = courses
                .iter()
                .filter(|c| c.class_term == term)
                .cloned()
                .collect();
            if term_courses.is_empty() {
                return None;
            }
            let stats = calculate_term_gpa(&term_courses, system);
            Some(TermSummary {
                term,
                courses: term_courses,
                stats,
            })
        })
        .collect()
}

/// Courses belonging to the current semester
#[must_use]
pub fn current_courses(courses: &[Course]) -> Vec<&Course> {
    courses.iter().filter(|c| c.is_current()).collect()
}

/// Courses recorded under a scale other than `system`
///
/// Legacy courses without a recorded scale count when their grade is not a
/// label of `system`.
#[must_use]
pub fn mismatched_grades(courses: &[Course], system: GradingSystem) -> Vec<&Course> {
    courses
        .iter()
        .filter(|c| match c.grading_system {
            Some(recorded) => recorded != system,
            None => !is_valid_grade(&c.grade, system),
        })
        .collect()
}

fn weighted_totals<C: Graded>(
    courses: &[C],
    system: GradingSystem,
) -> Result<(f64, f64), GradeError> {
    let scale = scale_of(system);

    courses
        .iter()
        .try_fold((0.0, 0.0), |(points, credits), course| {
            let label = resolve_grade(course.grade(), course.recorded_system(), system)?;
            let point = scale.point(label).ok_or_else(|| GradeError::Unresolvable {
                grade: course.grade().to_string(),
                system,
            })?;
            Ok((points + point * course.credits(), credits + course.credits()))
        })
}

fn weighted_average(total_points: f64, total_credits: f64) -> f64 {
    if total_credits > 0.0 {
        round_to_hundredths(total_points / total_credits)
    } else {
        0.0
    }
}
