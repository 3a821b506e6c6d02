//! GPA command handler

use super::{effective_system, open_storage, storage_error};
use gradepoint::config::Config;
use gradepoint::gpa::{
    calculate_gpa, current_courses, mismatched_grades, term_breakdown, GpaStanding,
};
use gradepoint::grading::label_of;
use gradepoint::models::Course;
use gradepoint::GradingSystem;

fn current_semester_line(courses: &[Course], system: GradingSystem) -> Result<String, String> {
    let current = current_courses(courses);
    let credits: f64 = current.iter().map(|c| c.credits).sum();
    calculate_gpa(&current, system)
        .map(|gpa| {
            format!(
                "Current semester GPA: {gpa:.2}  ({} courses, {credits} credits)",
                current.len()
            )
        })
        .map_err(|e| format!("✗ Current semester GPA unavailable: {e}"))
}

/// Print current-semester, cumulative and per-term GPA
///
/// # Errors
/// Returns a message if the store cannot be read
pub fn run(config: &Config, system: Option<GradingSystem>) -> Result<(), String> {
    let storage = open_storage(config)?;
    let system = effective_system(&storage, system)?;
    let courses = storage.courses().map_err(storage_error)?;

    println!("Grading system: {}\n", label_of(system));
    if courses.is_empty() {
        println!("No courses recorded.");
        return Ok(());
    }

    match current_semester_line(&courses, system) {
        Ok(line) => println!("{line}"),
        Err(message) => eprintln!("{message}"),
    }

    match calculate_gpa(&courses, system) {
        Ok(gpa) => println!(
            "Cumulative GPA:       {gpa:.2}  ({})",
            GpaStanding::from_gpa(gpa).label()
        ),
        Err(e) => eprintln!("✗ Cumulative GPA unavailable: {e}"),
    }

    println!("\nBy term:");
    for summary in term_breakdown(&courses, system) {
        println!(
            "  {:<18} {:.2}  ({} courses, {} credits)",
            summary.term.label(),
            summary.stats.gpa,
            summary.stats.course_count,
            summary.stats.total_credits
        );
    }

    let mismatched = mismatched_grades(&courses, system);
    if !mismatched.is_empty() {
        eprintln!(
            "\n⚠ Some courses have grades from different grading systems. Consider updating them to match the current system ({}).",
            label_of(system)
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradepoint::models::ClassTerm;

    #[test]
    fn test_current_semester_line() {
        let courses = vec![
            Course::new("Calculus", "AA", 3.0, ClassTerm::Year1Fall).unwrap(),
            Course::new("Physics", "CC", 2.0, ClassTerm::Year1Fall).unwrap(),
        ];
        assert_eq!(
            current_semester_line(&courses, GradingSystem::System1),
            Ok("Current semester GPA: 3.20  (2 courses, 5 credits)".to_string())
        );
    }

    #[test]
    fn test_unreadable_current_grade_is_reported() {
        let mut bad = Course::new("Art", "AA", 2.0, ClassTerm::Year1Fall).unwrap();
        bad.grade = "ZZ".to_string();

        let message = current_semester_line(&[bad], GradingSystem::System1).unwrap_err();
        assert!(message.starts_with("✗ Current semester GPA unavailable"));
        assert!(message.contains("ZZ"));
    }
}
