//! HTML report generator
//!
//! Produces a single self-contained page with embedded CSS.

use crate::core::gpa::GpaStanding;
use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded HTML report template
const HTML_TEMPLATE: &str = include_str!("../templates/report.html");

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let current = ctx.current_gpa();
        let mut output = HTML_TEMPLATE.to_string();

        output = output.replace("{{generated_on}}", &ctx.generated_on.to_string());
        output = output.replace("{{system_label}}", &escape_html(ctx.system_label()));
        output = output.replace("{{overall_gpa}}", &ctx.overall_gpa_text());
        output = output.replace("{{standing}}", ctx.standing_text());
        output = output.replace("{{standing_class}}", Self::standing_class(ctx.standing()));
        output = output.replace("{{current_gpa}}", &format!("{:.2}", current.gpa));
        output = output.replace("{{current_credits}}", &format!("{:.1}", current.total_credits));
        output = output.replace("{{course_count}}", &ctx.course_count().to_string());
        output = output.replace("{{total_credits}}", &format!("{:.1}", ctx.total_credits()));

        let mismatched = ctx.mismatched_count();
        let note = if mismatched == 0 {
            String::new()
        } else {
            format!(
                "<p class=\"warning\">{mismatched} course(s) were recorded under another scale; their grades are shown converted.</p>\n"
            )
        };
        output = output.replace("{{mismatch_note}}", &note);

        output = output.replace("{{term_table}}", &Self::generate_term_html(ctx));
        output = output.replace("{{course_table}}", &Self::generate_course_html(ctx));

        output
    }

    /// CSS class colouring the cumulative GPA card
    const fn standing_class(standing: Option<GpaStanding>) -> &'static str {
        match standing {
            Some(GpaStanding::High) => "standing-high",
            Some(GpaStanding::Satisfactory) => "standing-satisfactory",
            Some(GpaStanding::Low) => "standing-low",
            None => "",
        }
    }

    /// Generate the per-term GPA table
    fn generate_term_html(ctx: &ReportContext) -> String {
        let terms = ctx.terms();
        if terms.is_empty() {
            return "<p>No courses recorded.</p>\n".to_string();
        }

        let mut html = String::new();
        html.push_str("<table>\n");
        html.push_str("  <tr><th>Term</th><th>Courses</th><th>Credits</th><th>GPA</th></tr>\n");
        for summary in &terms {
            let _ = writeln!(
                html,
                "  <tr><td>{}</td><td>{}</td><td>{:.1}</td><td>{:.2}</td></tr>",
                summary.term.label(),
                summary.stats.course_count,
                summary.stats.total_credits,
                summary.stats.gpa
            );
        }
        html.push_str("</table>\n");
        html
    }

    /// Generate the course table, grouped by term
    fn generate_course_html(ctx: &ReportContext) -> String {
        if ctx.courses.is_empty() {
            return "<p>No courses recorded.</p>\n".to_string();
        }

        let mut html = String::new();
        html.push_str("<table>\n");
        html.push_str(
            "  <tr><th>Course</th><th>Term</th><th>Semester</th><th>Credits</th><th>Grade</th><th>Converted</th></tr>\n",
        );
        for summary in ctx.terms() {
            for course in &summary.courses {
                let _ = writeln!(
                    html,
                    "  <tr><td>{}</td><td>{}</td><td>{}</td><td>{:.1}</td><td>{}</td><td>{}</td></tr>",
                    escape_html(&course.name),
                    course.class_term,
                    escape_html(&course.semester),
                    course.credits,
                    escape_html(&course.grade),
                    escape_html(ctx.converted_grade(course))
                );
            }
        }
        html.push_str("</table>\n");
        html
    }
}

/// Escape text for use inside HTML element content
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
