//! Integration tests for the JSON file store

use gradepoint::gpa::calculate_gpa;
use gradepoint::models::{AppSettings, ClassTerm, Course, Semester, Theme};
use gradepoint::storage::{
    CourseUpdate, JsonFileStore, SettingsUpdate, Storage, StorageError, COURSES_KEY,
};
use gradepoint::GradingSystem;
use std::fs;
use tempfile::TempDir;

fn file_storage(temp: &TempDir) -> Storage<JsonFileStore> {
    Storage::new(JsonFileStore::new(temp.path().join("data")))
}

#[test]
fn records_survive_reopening_the_store() {
    let temp = TempDir::new().expect("Failed to create temp dir");

    let mut storage = file_storage(&temp);
    storage.initialize().unwrap();
    let course = Course::record("Algorithms", "BA", 4.0, ClassTerm::Year2Fall, GradingSystem::System1)
        .unwrap();
    let id = course.id.clone();
    storage.save_course(course).unwrap();

    let reopened = file_storage(&temp);
    let courses = reopened.courses().unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].id, id);
    assert_eq!(courses[0].grading_system, Some(GradingSystem::System1));
    assert_eq!(reopened.settings().unwrap(), AppSettings::default());
}

#[test]
fn collections_are_written_as_camel_case_json() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let mut storage = file_storage(&temp);
    storage
        .save_course(Course::new("Ethics", "CB", 2.0, ClassTerm::Year3Spring).unwrap())
        .unwrap();

    let path = storage.backend().path_for(COURSES_KEY);
    let raw = fs::read_to_string(path).unwrap();
    assert!(raw.contains("\"classTerm\":\"3-2\""));
    assert!(raw.contains("\"createdAt\""));
    // legacy-compatible: no provenance field when it was never recorded
    assert!(!raw.contains("gradingSystem"));
}

#[test]
fn legacy_records_without_provenance_still_compute() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let storage = file_storage(&temp);
    let path = storage.backend().path_for(COURSES_KEY);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(
        &path,
        r#"[
            {"id":"1","name":"Calculus","grade":"A-","credits":3,"semester":"current","classTerm":"1-1","createdAt":1700000000000},
            {"id":"2","name":"Physics","grade":"BB","credits":3,"semester":"current","classTerm":"1-1","createdAt":1700000000001}
        ]"#,
    )
    .unwrap();

    let courses = storage.courses().unwrap();
    // A- (3.7) is detected as a letter grade and converts to BA (3.5)
    assert_eq!(calculate_gpa(&courses, GradingSystem::System1), Ok(3.25));
}

#[test]
fn malformed_and_invalid_data_are_rejected() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let storage = file_storage(&temp);
    let path = storage.backend().path_for(COURSES_KEY);
    fs::create_dir_all(path.parent().unwrap()).unwrap();

    fs::write(&path, "{not json").unwrap();
    assert!(matches!(storage.courses(), Err(StorageError::Corrupt { .. })));

    fs::write(
        &path,
        r#"[{"id":"x","name":"Art","grade":"AA","credits":0,"semester":"current","classTerm":"1-1","createdAt":0}]"#,
    )
    .unwrap();
    match storage.courses() {
        Err(StorageError::InvalidRecord { id, .. }) => assert_eq!(id, "x"),
        other => panic!("expected invalid record, got {other:?}"),
    }
}

#[test]
fn updates_deletes_and_clear() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let mut storage = file_storage(&temp);

    let course = Course::new("Statistics", "BB", 3.0, ClassTerm::Year2Spring).unwrap();
    let id = course.id.clone();
    storage.save_course(course).unwrap();

    let update = CourseUpdate {
        grade: Some("AA".to_string()),
        semester: Some("Spring 2025".to_string()),
        ..Default::default()
    };
    assert!(storage.update_course(&id, &update).unwrap());
    assert!(!storage.update_course("missing", &update).unwrap());
    let stored = &storage.courses().unwrap()[0];
    assert_eq!(stored.grade, "AA");
    assert!(!stored.is_current());

    let mut semester = Semester::new("Spring 2025", "2025-01-10", "2025-05-20");
    semester.set_courses(storage.courses().unwrap(), GradingSystem::System1);
    storage.save_semester(semester).unwrap();
    assert!((storage.semesters().unwrap()[0].gpa - 4.0).abs() < f64::EPSILON);

    let settings = storage
        .update_settings(&SettingsUpdate {
            theme: Some(Theme::Dark),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(settings.theme, Theme::Dark);
    assert_eq!(settings.grading_system, GradingSystem::System1);

    assert!(storage.delete_course(&id).unwrap());
    assert!(!storage.delete_course(&id).unwrap());

    storage.clear().unwrap();
    assert!(storage.courses().unwrap().is_empty());
    assert!(storage.semesters().unwrap().is_empty());
    assert_eq!(storage.settings().unwrap(), AppSettings::default());
}
