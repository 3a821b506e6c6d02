//! Persistence of courses, semesters and settings
//!
//! Each collection is serialized as JSON under its own key of a
//! [`KeyValueStore`]. Everything read back is deserialized into typed records
//! and validated here, so the GPA engine only ever sees well-formed courses.

pub mod store;

pub use store::{JsonFileStore, KeyValueStore, MemoryStore};

use crate::core::error::CourseError;
use crate::core::grading::GradingSystem;
use crate::core::models::{AppSettings, ClassTerm, Course, Semester, Theme};
use crate::{debug, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Key of the course collection
pub const COURSES_KEY: &str = "@gpa_calculator_courses";
/// Key of the semester collection
pub const SEMESTERS_KEY: &str = "@gpa_calculator_semesters";
/// Key of the settings record
pub const SETTINGS_KEY: &str = "@gpa_calculator_settings";

/// Failure reading or writing a stored collection
#[derive(Error, Debug)]
pub enum StorageError {
    /// Backend I/O failed
    #[error("storage I/O error for {key}: {source}")]
    Io {
        /// Collection key
        key: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Stored JSON does not match the expected record shape
    #[error("stored data for {key} is malformed: {source}")]
    Corrupt {
        /// Collection key
        key: String,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// A collection could not be serialized for writing
    #[error("failed to serialize {key} for writing: {source}")]
    Encode {
        /// Collection key
        key: String,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// A stored record is well-formed but violates a record invariant
    #[error("invalid record {id} in {key}: {source}")]
    InvalidRecord {
        /// Collection key
        key: String,
        /// Record identifier
        id: String,
        /// Violated invariant
        #[source]
        source: CourseError,
    },
}

/// Partial update of a course; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct CourseUpdate {
    /// New name
    pub name: Option<String>,
    /// New grade label
    pub grade: Option<String>,
    /// New credit weight
    pub credits: Option<f64>,
    /// New semester marker
    pub semester: Option<String>,
    /// New term
    pub class_term: Option<ClassTerm>,
    /// New recorded grading system
    pub grading_system: Option<GradingSystem>,
}

/// Partial update of a semester; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct SemesterUpdate {
    /// New name
    pub name: Option<String>,
    /// New course list
    pub courses: Option<Vec<Course>>,
    /// New GPA snapshot
    pub gpa: Option<f64>,
    /// New start date
    pub start_date: Option<String>,
    /// New end date
    pub end_date: Option<String>,
}

/// Partial update of the settings; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct SettingsUpdate {
    /// New active grading system
    pub grading_system: Option<GradingSystem>,
    /// New theme
    pub theme: Option<Theme>,
    /// New default credit weight
    pub default_credits: Option<u32>,
}

impl CourseUpdate {
    fn apply(&self, course: &mut Course) {
        if let Some(name) = &self.name {
            course.name = name.trim().to_string();
        }
        if let Some(grade) = &self.grade {
            course.grade = grade.trim().to_string();
        }
        if let Some(credits) = self.credits {
            course.credits = credits;
        }
        if let Some(semester) = &self.semester {
            course.semester = semester.trim().to_string();
        }
        if let Some(term) = self.class_term {
            course.class_term = term;
        }
        if self.grading_system.is_some() {
            course.grading_system = self.grading_system;
        }
    }
}

impl SemesterUpdate {
    fn apply(self, semester: &mut Semester) {
        if let Some(name) = self.name {
            semester.name = name;
        }
        if let Some(courses) = self.courses {
            semester.courses = courses;
        }
        if let Some(gpa) = self.gpa {
            semester.gpa = gpa;
        }
        if let Some(start) = self.start_date {
            semester.start_date = start;
        }
        if let Some(end) = self.end_date {
            semester.end_date = end;
        }
    }
}

impl SettingsUpdate {
    fn apply(&self, settings: &mut AppSettings) {
        if let Some(system) = self.grading_system {
            settings.grading_system = system;
        }
        if let Some(theme) = self.theme {
            settings.theme = theme;
        }
        if let Some(credits) = self.default_credits {
            settings.default_credits = credits;
        }
    }
}

/// Typed access to the three record collections
#[derive(Debug)]
pub struct Storage<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Storage<S> {
    /// Wrap a key-value backend
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying backend
    pub const fn backend(&self) -> &S {
        &self.store
    }

    /// Write default settings if none are stored yet
    ///
    /// # Errors
    /// Returns an error if the settings key cannot be read or written
    pub fn initialize(&mut self) -> Result<(), StorageError> {
        if self.store.get(SETTINGS_KEY)?.is_none() {
            info!("Initializing settings with defaults");
            self.write(SETTINGS_KEY, &AppSettings::default())?;
        }
        Ok(())
    }

    // Course operations

    /// All stored courses, validated
    ///
    /// # Errors
    /// Returns an error if the collection cannot be read, is malformed, or
    /// holds a course that violates the course invariants
    pub fn courses(&self) -> Result<Vec<Course>, StorageError> {
        let courses = self.stored_courses()?;
        for course in &courses {
            course
                .validate()
                .map_err(|source| StorageError::InvalidRecord {
                    key: COURSES_KEY.to_string(),
                    id: course.id.clone(),
                    source,
                })?;
        }
        Ok(courses)
    }

    /// Append a course
    ///
    /// # Errors
    /// Returns an error if the course is invalid or the collection cannot be written
    pub fn save_course(&mut self, course: Course) -> Result<(), StorageError> {
        course
            .validate()
            .map_err(|source| StorageError::InvalidRecord {
                key: COURSES_KEY.to_string(),
                id: course.id.clone(),
                source,
            })?;
        let mut courses = self.stored_courses()?;
        debug!("Saving course {} ({})", course.name, course.id);
        courses.push(course);
        self.write(COURSES_KEY, &courses)
    }

    /// Apply `update` to the course with `id`. Returns `false` if no course matched.
    ///
    /// Only the updated course is validated, so an invalid stored record can
    /// be repaired in place.
    ///
    /// # Errors
    /// Returns an error if the updated course would be invalid or the
    /// collection cannot be read or written
    pub fn update_course(&mut self, id: &str, update: &CourseUpdate) -> Result<bool, StorageError> {
        let mut courses = self.stored_courses()?;
        let Some(course) = courses.iter_mut().find(|c| c.id == id) else {
            return Ok(false);
        };

        update.apply(course);
        course
            .validate()
            .map_err(|source| StorageError::InvalidRecord {
                key: COURSES_KEY.to_string(),
                id: id.to_string(),
                source,
            })?;

        self.write(COURSES_KEY, &courses)?;
        Ok(true)
    }

    /// Delete the course with `id`. Returns `false` if no course matched.
    ///
    /// # Errors
    /// Returns an error if the collection cannot be read or written
    pub fn delete_course(&mut self, id: &str) -> Result<bool, StorageError> {
        let mut courses = self.stored_courses()?;
        let before = courses.len();
        courses.retain(|c| c.id != id);
        if courses.len() == before {
            return Ok(false);
        }
        self.write(COURSES_KEY, &courses)?;
        Ok(true)
    }

    fn stored_courses(&self) -> Result<Vec<Course>, StorageError> {
        Ok(self.read(COURSES_KEY)?.unwrap_or_default())
    }

    // Semester operations

    /// All stored semesters
    ///
    /// # Errors
    /// Returns an error if the collection cannot be read or is malformed
    pub fn semesters(&self) -> Result<Vec<Semester>, StorageError> {
        Ok(self.read(SEMESTERS_KEY)?.unwrap_or_default())
    }

    /// Append a semester
    ///
    /// # Errors
    /// Returns an error if the collection cannot be read or written
    pub fn save_semester(&mut self, semester: Semester) -> Result<(), StorageError> {
        let mut semesters = self.semesters()?;
        semesters.push(semester);
        self.write(SEMESTERS_KEY, &semesters)
    }

    /// Apply `update` to the semester with `id`. Returns `false` if no semester matched.
    ///
    /// # Errors
    /// Returns an error if the collection cannot be read or written
    pub fn update_semester(&mut self, id: &str, update: SemesterUpdate) -> Result<bool, StorageError> {
        let mut semesters = self.semesters()?;
        let Some(semester) = semesters.iter_mut().find(|s| s.id == id) else {
            return Ok(false);
        };
        update.apply(semester);
        self.write(SEMESTERS_KEY, &semesters)?;
        Ok(true)
    }

    /// Delete the semester with `id`. Returns `false` if no semester matched.
    ///
    /// # Errors
    /// Returns an error if the collection cannot be read or written
    pub fn delete_semester(&mut self, id: &str) -> Result<bool, StorageError> {
        let mut semesters = self.semesters()?;
        let before = semesters.len();
        semesters.retain(|s| s.id != id);
        if semesters.len() == before {
            return Ok(false);
        }
        self.write(SEMESTERS_KEY, &semesters)?;
        Ok(true)
    }

    // Settings operations

    /// Stored settings, or defaults when none are stored
    ///
    /// # Errors
    /// Returns an error if the settings cannot be read or are malformed
    pub fn settings(&self) -> Result<AppSettings, StorageError> {
        Ok(self.read(SETTINGS_KEY)?.unwrap_or_default())
    }

    /// Merge `update` into the stored settings and return the result
    ///
    /// # Errors
    /// Returns an error if the settings cannot be read or written
    pub fn update_settings(&mut self, update: &SettingsUpdate) -> Result<AppSettings, StorageError> {
        let mut settings = self.settings()?;
        update.apply(&mut settings);
        self.write(SETTINGS_KEY, &settings)?;
        Ok(settings)
    }

    /// Remove all three collections
    ///
    /// # Errors
    /// Returns an error if any key cannot be deleted
    pub fn clear(&mut self) -> Result<(), StorageError> {
        for key in [COURSES_KEY, SEMESTERS_KEY, SETTINGS_KEY] {
            self.store.delete(key)?;
        }
        info!("Cleared stored courses, semesters and settings");
        Ok(())
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        self.store
            .get(key)?
            .map(|json| {
                serde_json::from_str(&json).map_err(|source| StorageError::Corrupt {
                    key: key.to_string(),
                    source,
                })
            })
            .transpose()
    }

    fn write<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value).map_err(|source| StorageError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.store.set(key, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage() -> Storage<MemoryStore> {
        Storage::new(MemoryStore::new())
    }

    fn course(name: &str, grade: &str) -> Course {
        Course::new(name, grade, 3.0, ClassTerm::Year1Fall).unwrap()
    }

    #[test]
    fn test_initialize_writes_default_settings_once() {
        let mut storage = storage();
        storage.initialize().unwrap();
        assert!(storage.backend().get(SETTINGS_KEY).unwrap().is_some());

        storage
            .update_settings(&SettingsUpdate {
                default_credits: Some(5),
                ..SettingsUpdate::default()
            })
            .unwrap();
        storage.initialize().unwrap();
        assert_eq!(storage.settings().unwrap().default_credits, 5);
    }

    #[test]
    fn test_course_crud() {
        let mut storage = storage();
        assert!(storage.courses().unwrap().is_empty());

        let physics = course("Physics", "AA");
        let id = physics.id.clone();
        storage.save_course(physics).unwrap();
        storage.save_course(course("History", "CC")).unwrap();
        assert_eq!(storage.courses().unwrap().len(), 2);

        let update = CourseUpdate {
            grade: Some("BA".to_string()),
            ..CourseUpdate::default()
        };
        assert!(storage.update_course(&id, &update).unwrap());
        let stored = storage.courses().unwrap();
        assert_eq!(stored.iter().find(|c| c.id == id).unwrap().grade, "BA");

        assert!(storage.delete_course(&id).unwrap());
        assert!(!storage.delete_course(&id).unwrap());
        assert!(!storage.update_course("missing", &update).unwrap());
        assert_eq!(storage.courses().unwrap().len(), 1);
    }

    #[test]
    fn test_update_rejects_invalid_credits() {
        let mut storage = storage();
        let c = course("Physics", "AA");
        let id = c.id.clone();
        storage.save_course(c).unwrap();

        let update = CourseUpdate {
            credits: Some(-2.0),
            ..CourseUpdate::default()
        };
        let err = storage.update_course(&id, &update).unwrap_err();
        assert!(matches!(err, StorageError::InvalidRecord { .. }));
        // stored record unchanged
        assert!((storage.courses().unwrap()[0].credits - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_malformed_json_is_reported() {
        let mut backend = MemoryStore::new();
        backend.set(COURSES_KEY, r#"[{"id": 1}]"#).unwrap();
        let storage = Storage::new(backend);
        assert!(matches!(
            storage.courses(),
            Err(StorageError::Corrupt { .. })
        ));
    }

    #[test]
    fn test_invalid_stored_course_is_reported() {
        let mut backend = MemoryStore::new();
        backend
            .set(
                COURSES_KEY,
                r#"[{"id":"1","name":"Lab","grade":"AA","credits":0,"semester":"current","classTerm":"1-1","createdAt":0}]"#,
            )
            .unwrap();
        let storage = Storage::new(backend);
        match storage.courses() {
            Err(StorageError::InvalidRecord { id, source, .. }) => {
                assert_eq!(id, "1");
                assert_eq!(source, CourseError::InvalidCredits(0.0));
            }
            other => panic!("expected invalid record, got {other:?}"),
        }
    }

    #[test]
    fn test_encode_error_names_the_write() {
        let source = serde_json::from_str::<u8>("x").unwrap_err();
        let err = StorageError::Encode {
            key: COURSES_KEY.to_string(),
            source,
        };
        let message = err.to_string();
        assert!(message.starts_with("failed to serialize @gpa_calculator_courses for writing"));
        assert!(!message.contains("malformed"));
    }

    fn storage_with_zero_credit_course() -> Storage<MemoryStore> {
        let mut backend = MemoryStore::new();
        backend
            .set(
                COURSES_KEY,
                r#"[
                    {"id":"ok","name":"Calculus","grade":"AA","credits":3,"semester":"current","classTerm":"1-1","createdAt":0},
                    {"id":"bad","name":"Lab","grade":"AA","credits":0,"semester":"current","classTerm":"1-1","createdAt":0}
                ]"#,
            )
            .unwrap();
        Storage::new(backend)
    }

    #[test]
    fn test_invalid_stored_course_can_be_deleted() {
        let mut storage = storage_with_zero_credit_course();
        assert!(storage.courses().is_err());

        assert!(storage.delete_course("bad").unwrap());
        let remaining = storage.courses().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, "ok");
    }

    #[test]
    fn test_invalid_stored_course_can_be_repaired() {
        let mut storage = storage_with_zero_credit_course();
        let fix = CourseUpdate {
            credits: Some(1.0),
            ..CourseUpdate::default()
        };
        assert!(storage.update_course("bad", &fix).unwrap());
        assert_eq!(storage.courses().unwrap().len(), 2);
    }

    #[test]
    fn test_update_trims_semester() {
        let mut storage = storage();
        let c = course("Physics", "AA");
        let id = c.id.clone();
        storage.save_course(c).unwrap();

        let update = CourseUpdate {
            semester: Some("  Fall 2024 ".to_string()),
            ..CourseUpdate::default()
        };
        storage.update_course(&id, &update).unwrap();
        assert_eq!(storage.courses().unwrap()[0].semester, "Fall 2024");
    }

    #[test]
    fn test_semester_crud() {
        let mut storage = storage();
        let semester = Semester::new("Fall 2025", "2025-09-01", "2025-12-20");
        let id = semester.id.clone();
        storage.save_semester(semester).unwrap();

        let update = SemesterUpdate {
            gpa: Some(3.25),
            ..SemesterUpdate::default()
        };
        assert!(storage.update_semester(&id, update).unwrap());
        assert!((storage.semesters().unwrap()[0].gpa - 3.25).abs() < f64::EPSILON);

        assert!(storage.delete_semester(&id).unwrap());
        assert!(storage.semesters().unwrap().is_empty());
    }

    #[test]
    fn test_settings_default_and_update() {
        let mut storage = storage();
        assert_eq!(storage.settings().unwrap(), AppSettings::default());

        let updated = storage
            .update_settings(&SettingsUpdate {
                grading_system: Some(GradingSystem::System3),
                ..SettingsUpdate::default()
            })
            .unwrap();
        assert_eq!(updated.grading_system, GradingSystem::System3);
        assert_eq!(updated.default_credits, 3);
        assert_eq!(storage.settings().unwrap(), updated);
    }

    #[test]
    fn test_clear_removes_everything() {
        let mut storage = storage();
        storage.initialize().unwrap();
        storage.save_course(course("Physics", "AA")).unwrap();
        storage
            .save_semester(Semester::new("Fall", "", ""))
            .unwrap();

        storage.clear().unwrap();
        assert!(storage.courses().unwrap().is_empty());
        assert!(storage.semesters().unwrap().is_empty());
        assert!(storage.backend().get(SETTINGS_KEY).unwrap().is_none());
    }
}
