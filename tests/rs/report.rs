//! Integration tests for report rendering

use chrono::NaiveDate;
use gradepoint::models::{ClassTerm, Course};
use gradepoint::report::{
    generator_for, HtmlReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator,
};
use gradepoint::GradingSystem;
use tempfile::TempDir;

fn sample_courses() -> Vec<Course> {
    vec![
        Course::record("Calculus", "AA", 3.0, ClassTerm::Year1Fall, GradingSystem::System1).unwrap(),
        Course::record("Physics", "CC", 2.0, ClassTerm::Year1Fall, GradingSystem::System1).unwrap(),
        Course::record("R&D <Lab>", "B+", 1.0, ClassTerm::Year2Spring, GradingSystem::System3)
            .unwrap()
            .with_semester("Spring 2025"),
    ]
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

#[test]
fn markdown_report_contains_summary_and_tables() {
    let courses = sample_courses();
    let ctx = ReportContext::new(&courses, GradingSystem::System1).dated(date());
    let md = MarkdownReporter::new().render(&ctx).unwrap();

    assert!(md.starts_with("# GPA Report"));
    assert!(md.contains("Generated on 2025-06-01 using the **AA-FF Scale**"));
    // (4.0*3 + 2.0*2 + 3.5*1) / 6 = 3.25
    assert!(md.contains("| Cumulative GPA | 3.25 |"));
    assert!(md.contains("| Standing | Satisfactory |"));
    assert!(md.contains("| Year 1 - Fall | 2 | 5.0 | 3.20 |"));
    assert!(md.contains("| Year 2 - Spring | 1 | 1.0 | 3.50 |"));
    // B+ (3.3) is closest to BA (3.5)
    assert!(md.contains("| R&D <Lab> | 2-2 | Spring 2025 | 1.0 | B+ | BA |"));
    assert!(md.contains("1 course(s) were recorded under another scale"));
    assert!(!md.contains("{{"));
}

#[test]
fn html_report_escapes_user_text() {
    let courses = sample_courses();
    let ctx = ReportContext::new(&courses, GradingSystem::System1).dated(date());
    let html = HtmlReporter::new().render(&ctx).unwrap();

    assert!(html.contains("<title>GPA Report</title>"));
    assert!(html.contains("R&amp;D &lt;Lab&gt;"));
    assert!(!html.contains("R&D <Lab>"));
    assert!(html.contains("standing-satisfactory"));
    assert!(!html.contains("{{"));
}

#[test]
fn empty_report_renders() {
    let courses: Vec<Course> = Vec::new();
    let ctx = ReportContext::new(&courses, GradingSystem::System4);
    let md = MarkdownReporter::new().render(&ctx).unwrap();

    assert!(md.contains("Numeric Scale (A1-F)"));
    assert!(md.contains("| Cumulative GPA | 0.00 |"));
    assert!(md.contains("_No courses recorded._"));
}

#[test]
fn generate_writes_file_with_format_extension() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let courses = sample_courses();
    let ctx = ReportContext::new(&courses, GradingSystem::System3);

    for format in [ReportFormat::Markdown, ReportFormat::Html] {
        let path = temp.path().join(format!("report.{}", format.extension()));
        generator_for(format).generate(&ctx, &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Letter Grade Scale (A-F)"));
    }
}
