//! Markdown report generator
//!
//! Plain Markdown tables; renders well in GitHub, GitLab and VS Code and
//! stays readable in a terminal.

use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let current = ctx.current_gpa();
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{generated_on}}", &ctx.generated_on.to_string());
        output = output.replace("{{system_label}}", ctx.system_label());
        output = output.replace("{{overall_gpa}}", &ctx.overall_gpa_text());
        output = output.replace("{{standing}}", ctx.standing_text());
        output = output.replace("{{current_gpa}}", &format!("{:.2}", current.gpa));
        output = output.replace("{{current_credits}}", &format!("{:.1}", current.total_credits));
        output = output.replace("{{course_count}}", &ctx.course_count().to_string());
        output = output.replace("{{total_credits}}", &format!("{:.1}", ctx.total_credits()));

        let mismatched = ctx.mismatched_count();
        let note = if mismatched == 0 {
            String::new()
        } else {
            format!(
                "> ⚠️ {mismatched} course(s) were recorded under another scale; their grades are shown converted.\n"
            )
        };
        output = output.replace("{{mismatch_note}}", &note);

        output = output.replace("{{term_table}}", &Self::generate_term_table(ctx));
        output = output.replace("{{course_table}}", &Self::generate_course_table(ctx));

        output
    }

    /// Generate the per-term GPA table
    fn generate_term_table(ctx: &ReportContext) -> String {
        let terms = ctx.terms();
        if terms.is_empty() {
            return "_No courses recorded._\n".to_string();
        }

        let mut table = String::new();
        table.push_str("| Term | Courses | Credits | GPA |\n");
        table.push_str("|---|---|---|---|\n");
        for summary in &terms {
            let _ = writeln!(
                table,
                "| {} | {} | {:.1} | {:.2} |",
                summary.term.label(),
                summary.stats.course_count,
                summary.stats.total_credits,
                summary.stats.gpa
            );
        }
        table
    }

    /// Generate the course table, grouped by term
    fn generate_course_table(ctx: &ReportContext) -> String {
        if ctx.courses.is_empty() {
            return "_No courses recorded._\n".to_string();
        }

        let mut table = String::new();
        table.push_str("| Course | Term | Semester | Credits | Grade | Converted |\n");
        table.push_str("|---|---|---|---|---|---|\n");
        for summary in ctx.terms() {
            for course in &summary.courses {
                let _ = writeln!(
                    table,
                    "| {} | {} | {} | {:.1} | {} | {} |",
                    escape_cell(&course.name),
                    course.class_term,
                    escape_cell(&course.semester),
                    course.credits,
                    escape_cell(&course.grade),
                    ctx.converted_grade(course)
                );
            }
        }
        table
    }
}

/// Keep user text from breaking the table layout
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
