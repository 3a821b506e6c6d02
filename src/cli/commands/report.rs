//! Report command handler
//!
//! Renders the stored courses as a Markdown or HTML GPA report.

use super::{effective_system, open_storage, storage_error};
use gradepoint::config::Config;
use gradepoint::report::{generator_for, ReportContext, ReportFormat};
use gradepoint::{error, info, GradingSystem};
use std::path::{Path, PathBuf};

/// Run the report command
///
/// # Errors
/// Returns a message if the store cannot be read or the report cannot be written
pub fn run(
    format: ReportFormat,
    output_file: Option<&Path>,
    system: Option<GradingSystem>,
    config: &Config,
) -> Result<(), String> {
    let storage = open_storage(config)?;
    let system = effective_system(&storage, system)?;
    let courses = storage.courses().map_err(storage_error)?;

    let output_path = resolve_output_path(output_file, format, config)?;
    let ctx = ReportContext::new(&courses, system);

    generator_for(format)
        .generate(&ctx, &output_path)
        .map_err(|e| {
            error!("Report generation failed for {}: {e}", output_path.display());
            format!("✗ Failed to generate {format} report: {e}")
        })?;

    info!("Report exported to: {}", output_path.display());
    println!("✓ Report generated: {}", output_path.display());

    println!("\n=== Summary ===");
    println!("Grading system: {}", ctx.system_label());
    println!("Courses: {}", ctx.course_count());
    println!("Cumulative GPA: {}", ctx.overall_gpa_text());
    Ok(())
}

/// Explicit path, or `gpa_report_<date>.<ext>` in the configured reports directory
fn resolve_output_path(
    output_file: Option<&Path>,
    format: ReportFormat,
    config: &Config,
) -> Result<PathBuf, String> {
    if let Some(output) = output_file {
        return Ok(output.to_path_buf());
    }

    let reports_dir = config.reports_path();
    std::fs::create_dir_all(&reports_dir).map_err(|e| {
        format!(
            "✗ Failed to create reports directory {}: {e}",
            reports_dir.display()
        )
    })?;

    let date = chrono::Local::now().format("%Y-%m-%d");
    Ok(reports_dir.join(format!("gpa_report_{date}.{}", format.extension())))
}
