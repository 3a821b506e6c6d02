//! Semester command handler

use super::{effective_system, open_storage, storage_error};
use crate::args::SemesterSubcommand;
use gradepoint::config::Config;
use gradepoint::grading::label_of;
use gradepoint::info;
use gradepoint::models::Semester;

/// Dispatch semester subcommands
///
/// # Errors
/// Returns a message if the store cannot be used or an id is unknown
pub fn run(subcommand: SemesterSubcommand, config: &Config) -> Result<(), String> {
    let mut storage = open_storage(config)?;

    match subcommand {
        SemesterSubcommand::Add { name, start, end } => {
            let system = effective_system(&storage, None)?;
            let mut semester = Semester::new(&name, &start, &end);
            if semester.name.is_empty() {
                return Err("✗ Semester name is required".to_string());
            }

            let courses: Vec<_> = storage
                .courses()
                .map_err(storage_error)?
                .into_iter()
                .filter(|c| c.semester == semester.name)
                .collect();
            if courses.is_empty() {
                eprintln!(
                    "⚠ No courses are tagged with semester '{}'; archiving an empty semester",
                    semester.name
                );
            }
            semester.set_courses(courses, system);

            let summary = format!(
                "{} ({} courses, GPA {:.2})",
                semester.name,
                semester.courses.len(),
                semester.gpa
            );
            let id = semester.id.clone();
            storage.save_semester(semester).map_err(storage_error)?;
            info!("Semester {id} archived");
            println!("✓ Archived {summary}");
            println!("  id: {id}");
            Ok(())
        }
        SemesterSubcommand::List { system } => {
            let system = effective_system(&storage, system)?;
            let semesters = storage.semesters().map_err(storage_error)?;
            if semesters.is_empty() {
                println!("No semesters archived.");
                return Ok(());
            }

            println!("GPAs in {}\n", label_of(system));
            for mut semester in semesters {
                semester.refresh_gpa(system);
                let dates = match (semester.start_date.as_str(), semester.end_date.as_str()) {
                    ("", "") => String::new(),
                    (start, end) => format!("  {start} - {end}"),
                };
                println!(
                    "{:<20} GPA {:.2}  {} courses, {} credits{dates}",
                    semester.name,
                    semester.gpa,
                    semester.courses.len(),
                    semester.total_credits()
                );
                println!("  id: {}", semester.id);
            }
            Ok(())
        }
        SemesterSubcommand::Remove { id } => {
            if storage.delete_semester(&id).map_err(storage_error)? {
                println!("✓ Removed semester {id}");
                Ok(())
            } else {
                Err(format!("✗ No semester with id {id}"))
            }
        }
    }
}
