//! Course model

use crate::core::error::{CourseError, GradeError};
use crate::core::grading::{is_valid_grade, resolve_grade, GradingSystem};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Semester marker carried by courses that belong to the active term.
pub const CURRENT_SEMESTER: &str = "current";

/// Year and half of the program a course was taken in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ClassTerm {
    /// First year, fall
    #[default]
    #[serde(rename = "1-1")]
    Year1Fall,
    /// First year, spring
    #[serde(rename = "1-2")]
    Year1Spring,
    /// Second year, fall
    #[serde(rename = "2-1")]
    Year2Fall,
    /// Second year, spring
    #[serde(rename = "2-2")]
    Year2Spring,
    /// Third year, fall
    #[serde(rename = "3-1")]
    Year3Fall,
    /// Third year, spring
    #[serde(rename = "3-2")]
    Year3Spring,
    /// Fourth year, fall
    #[serde(rename = "4-1")]
    Year4Fall,
    /// Fourth year, spring
    #[serde(rename = "4-2")]
    Year4Spring,
}

impl ClassTerm {
    /// All terms in program order
    pub const ALL: [Self; 8] = [
        Self::Year1Fall,
        Self::Year1Spring,
        Self::Year2Fall,
        Self::Year2Spring,
        Self::Year3Fall,
        Self::Year3Spring,
        Self::Year4Fall,
        Self::Year4Spring,
    ];

    /// Short code used in storage (e.g. "2-1")
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Year1Fall => "1-1",
            Self::Year1Spring => "1-2",
            Self::Year2Fall => "2-1",
            Self::Year2Spring => "2-2",
            Self::Year3Fall => "3-1",
            Self::Year3Spring => "3-2",
            Self::Year4Fall => "4-1",
            Self::Year4Spring => "4-2",
        }
    }

    /// Display label (e.g. "Year 2 - Fall")
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Year1Fall => "Year 1 - Fall",
            Self::Year1Spring => "Year 1 - Spring",
            Self::Year2Fall => "Year 2 - Fall",
            Self::Year2Spring => "Year 2 - Spring",
            Self::Year3Fall => "Year 3 - Fall",
            Self::Year3Spring => "Year 3 - Spring",
            Self::Year4Fall => "Year 4 - Fall",
            Self::Year4Spring => "Year 4 - Spring",
        }
    }
}

impl fmt::Display for ClassTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ClassTerm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|term| term.code() == s.trim())
            .ok_or_else(|| format!("Unknown class term: '{s}' (expected 1-1 through 4-2)"))
    }
}

/// A completed course with its grade and credit weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Opaque unique identifier
    pub id: String,

    /// Course name (e.g., "Linear Algebra")
    pub name: String,

    /// Grade label, meaningful relative to a grading system
    pub grade: String,

    /// Credit weight (positive, can be fractional)
    pub credits: f64,

    /// Semester marker; [`CURRENT_SEMESTER`] for active work
    pub semester: String,

    /// Program term the course belongs to
    pub class_term: ClassTerm,

    /// Creation time in Unix milliseconds
    pub created_at: i64,

    /// System the grade was recorded under, when known.
    /// Records written before this field existed leave it empty and rely on detection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grading_system: Option<GradingSystem>,
}

impl Course {
    /// Create a course in the current semester without recording its grading system
    ///
    /// # Errors
    /// Returns an error if the name or grade is blank, or credits are not positive
    pub fn new(
        name: &str,
        grade: &str,
        credits: f64,
        class_term: ClassTerm,
    ) -> Result<Self, CourseError> {
        let course = Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            grade: grade.trim().to_string(),
            credits,
            semester: CURRENT_SEMESTER.to_string(),
            class_term,
            created_at: chrono::Utc::now().timestamp_millis(),
            grading_system: None,
        };
        course.validate()?;
        Ok(course)
    }

    /// Create a course whose grade is recorded under `system`
    ///
    /// # Errors
    /// Returns an error if [`Course::new`] would, or if `grade` is not a label of `system`
    pub fn record(
        name: &str,
        grade: &str,
        credits: f64,
        class_term: ClassTerm,
        system: GradingSystem,
    ) -> Result<Self, CourseError> {
        let mut course = Self::new(name, grade, credits, class_term)?;
        if !is_valid_grade(&course.grade, system) {
            return Err(CourseError::GradeNotInSystem {
                grade: course.grade,
                system,
            });
        }
        course.grading_system = Some(system);
        Ok(course)
    }

    /// Check the course invariants
    ///
    /// # Errors
    /// Returns the first violated invariant
    pub fn validate(&self) -> Result<(), CourseError> {
        if self.name.trim().is_empty() {
            return Err(CourseError::EmptyName);
        }
        if self.grade.trim().is_empty() {
            return Err(CourseError::EmptyGrade);
        }
        if !self.credits.is_finite() || self.credits <= 0.0 {
            return Err(CourseError::InvalidCredits(self.credits));
        }
        if let Some(system) = self.grading_system {
            if !is_valid_grade(&self.grade, system) {
                return Err(CourseError::GradeNotInSystem {
                    grade: self.grade.clone(),
                    system,
                });
            }
        }
        Ok(())
    }

    /// Move the course to a named semester
    #[must_use]
    pub fn with_semester(mut self, semester: &str) -> Self {
        self.semester = semester.trim().to_string();
        self
    }

    /// Whether the course belongs to the current semester
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.semester == CURRENT_SEMESTER
    }

    /// A copy of this course with its grade expressed in `target`.
    ///
    /// The stored record is left untouched.
    ///
    /// # Errors
    /// Returns an error if the grade cannot be resolved under any system
    pub fn converted_to(&self, target: GradingSystem) -> Result<Self, GradeError> {
        let grade = resolve_grade(&self.grade, self.grading_system, target)?;
        Ok(Self {
            grade: grade.to_string(),
            grading_system: Some(target),
            ..self.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_creation() {
        let course = Course::new(" Linear Algebra ", "BA", 4.0, ClassTerm::Year2Fall).unwrap();

        assert_eq!(course.name, "Linear Algebra");
        assert_eq!(course.grade, "BA");
        assert!((course.credits - 4.0).abs() < f64::EPSILON);
        assert!(course.is_current());
        assert_eq!(course.class_term, ClassTerm::Year2Fall);
        assert!(course.grading_system.is_none());
        assert!(!course.id.is_empty());
        assert!(course.created_at > 0);
    }

    #[test]
    fn test_course_ids_are_unique() {
        let a = Course::new("Physics", "AA", 3.0, ClassTerm::Year1Fall).unwrap();
        let b = Course::new("Physics", "AA", 3.0, ClassTerm::Year1Fall).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_course_rejects_invalid_input() {
        assert_eq!(
            Course::new("  ", "AA", 3.0, ClassTerm::Year1Fall),
            Err(CourseError::EmptyName)
        );
        assert_eq!(
            Course::new("Chemistry", "", 3.0, ClassTerm::Year1Fall),
            Err(CourseError::EmptyGrade)
        );
        assert_eq!(
            Course::new("Chemistry", "AA", 0.0, ClassTerm::Year1Fall),
            Err(CourseError::InvalidCredits(0.0))
        );
        assert!(Course::new("Chemistry", "AA", f64::NAN, ClassTerm::Year1Fall).is_err());
    }

    #[test]
    fn test_record_checks_grade_against_system() {
        let course =
            Course::record("Statistics", "B+", 3.0, ClassTerm::Year1Spring, GradingSystem::System3)
                .unwrap();
        assert_eq!(course.grading_system, Some(GradingSystem::System3));

        let err =
            Course::record("Statistics", "B+", 3.0, ClassTerm::Year1Spring, GradingSystem::System1)
                .unwrap_err();
        assert_eq!(
            err,
            CourseError::GradeNotInSystem {
                grade: "B+".to_string(),
                system: GradingSystem::System1,
            }
        );
    }

    #[test]
    fn test_converted_to_leaves_original_untouched() {
        let course = Course::new("Algorithms", "A", 4.0, ClassTerm::Year3Fall).unwrap();
        let converted = course.converted_to(GradingSystem::System1).unwrap();

        assert_eq!(converted.grade, "AA");
        assert_eq!(converted.grading_system, Some(GradingSystem::System1));
        assert_eq!(converted.id, course.id);
        assert_eq!(course.grade, "A");
    }

    #[test]
    fn test_semester_tag_matches_trimmed_semester_name() {
        let course = Course::new("Algorithms", "AA", 4.0, ClassTerm::Year3Fall)
            .unwrap()
            .with_semester(" Fall 2024 ");
        let semester = crate::core::models::Semester::new(" Fall 2024 ", "", "");

        assert_eq!(course.semester, semester.name);
        assert!(!course.is_current());
    }

    #[test]
    fn test_class_term_codes() {
        assert_eq!("3-2".parse::<ClassTerm>(), Ok(ClassTerm::Year3Spring));
        assert!("5-1".parse::<ClassTerm>().is_err());
        assert_eq!(ClassTerm::Year4Fall.to_string(), "4-1");
        assert_eq!(ClassTerm::Year1Spring.label(), "Year 1 - Spring");
    }

    #[test]
    fn test_course_json_shape() {
        let json = r#"{
            "id": "1700000000000",
            "name": "Calculus",
            "grade": "CC",
            "credits": 5,
            "semester": "current",
            "classTerm": "1-2",
            "createdAt": 1700000000000
        }"#;
        let course: Course = serde_json::from_str(json).unwrap();
        assert_eq!(course.class_term, ClassTerm::Year1Spring);
        assert!((course.credits - 5.0).abs() < f64::EPSILON);
        assert!(course.grading_system.is_none());

        let out = serde_json::to_string(&course).unwrap();
        assert!(out.contains("\"classTerm\":\"1-2\""));
        assert!(!out.contains("gradingSystem"));
    }
}
