//! Course command handler

use super::{effective_system, open_storage, storage_error, FileStorage};
use crate::args::CourseSubcommand;
use gradepoint::config::Config;
use gradepoint::error::CourseError;
use gradepoint::gpa::{mismatched_grades, term_breakdown};
use gradepoint::grading::{label_of, resolve_grade, scale_of};
use gradepoint::models::Course;
use gradepoint::storage::CourseUpdate;
use gradepoint::{info, verbose};

/// Dispatch course subcommands
///
/// # Errors
/// Returns a message if input is invalid or the store cannot be used
pub fn run(subcommand: CourseSubcommand, config: &Config) -> Result<(), String> {
    let mut storage = open_storage(config)?;

    match subcommand {
        CourseSubcommand::Add {
            name,
            grade,
            credits,
            term,
            semester,
            system,
        } => {
            let settings = storage.settings().map_err(storage_error)?;
            let system = system.unwrap_or(settings.grading_system);
            let credits = credits.unwrap_or_else(|| f64::from(settings.default_credits));

            let mut course = Course::record(&name, &grade, credits, term, system)
                .map_err(|e| course_error(&e))?;
            if let Some(semester) = semester {
                course = course.with_semester(&semester);
            }

            let summary = format!(
                "{} ({}, {} credits, {})",
                course.name, course.grade, course.credits, course.class_term
            );
            let id = course.id.clone();
            storage.save_course(course).map_err(storage_error)?;

            info!("Course {id} added");
            println!("✓ Added {summary}");
            println!("  id: {id}");
            Ok(())
        }
        CourseSubcommand::List { term, system } => list(&storage, term, system),
        CourseSubcommand::Update {
            id,
            name,
            grade,
            credits,
            term,
            semester,
            system,
        } => {
            let recorded = if grade.is_some() || system.is_some() {
                Some(effective_system(&storage, system)?)
            } else {
                None
            };
            let update = CourseUpdate {
                name,
                grade,
                credits,
                semester,
                class_term: term,
                grading_system: recorded,
            };

            if storage.update_course(&id, &update).map_err(storage_error)? {
                println!("✓ Updated course {id}");
                Ok(())
            } else {
                Err(format!("✗ No course with id {id}"))
            }
        }
        CourseSubcommand::Remove { id } => {
            if storage.delete_course(&id).map_err(storage_error)? {
                println!("✓ Removed course {id}");
                Ok(())
            } else {
                Err(format!("✗ No course with id {id}"))
            }
        }
    }
}

/// Explain an invalid course, listing the valid labels when the grade is off-scale
fn course_error(err: &CourseError) -> String {
    match err {
        CourseError::GradeNotInSystem { system, .. } => format!(
            "✗ {err}\n  valid grades: {}",
            scale_of(*system).labels().join(", ")
        ),
        _ => format!("✗ {err}"),
    }
}

fn list(
    storage: &FileStorage,
    term: Option<gradepoint::models::ClassTerm>,
    system: Option<gradepoint::GradingSystem>,
) -> Result<(), String> {
    let system = effective_system(storage, system)?;
    let mut courses = storage.courses().map_err(storage_error)?;
    if let Some(term) = term {
        courses.retain(|c| c.class_term == term);
    }

    if courses.is_empty() {
        println!("No courses recorded.");
        return Ok(());
    }

    println!("Grades shown in {}\n", label_of(system));
    for summary in term_breakdown(&courses, system) {
        println!(
            "{}  (GPA {:.2}, {} credits)",
            summary.term.label(),
            summary.stats.gpa,
            summary.stats.total_credits
        );
        for course in &summary.courses {
            let converted = resolve_grade(&course.grade, course.grading_system, system)
                .unwrap_or("?");
            let marker = if course.grade == converted {
                String::new()
            } else {
                format!(" -> {converted}")
            };
            println!(
                "  {:<30} {:>4}{marker:<8} {:>4} cr  [{}]",
                course.name, course.grade, course.credits, course.semester
            );
            verbose!("    id: {}", course.id);
        }
        println!();
    }

    let mismatched = mismatched_grades(&courses, system);
    if !mismatched.is_empty() {
        eprintln!(
            "⚠ {} course(s) have grades from a different grading system than {}; they are shown converted.",
            mismatched.len(),
            label_of(system)
        );
    }
    Ok(())
}
