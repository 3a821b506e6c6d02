//! CLI command handlers for `gradepoint`.
//!
//! Each command is implemented in its own submodule. Handlers that touch the
//! record store return `Result<(), String>` with a printable message.

pub mod clear;
pub mod config;
pub mod course;
pub mod gpa;
pub mod grade;
pub mod report;
pub mod semester;
pub mod settings;

use gradepoint::config::Config;
use gradepoint::error;
use gradepoint::storage::{JsonFileStore, Storage, StorageError};
use gradepoint::GradingSystem;

/// Store used by the CLI
pub type FileStorage = Storage<JsonFileStore>;

/// Open the record store under the configured data directory, writing
/// default settings on first use
///
/// # Errors
/// Returns a message if the data directory cannot be initialized
pub fn open_storage(config: &Config) -> Result<FileStorage, String> {
    let mut storage = Storage::new(JsonFileStore::new(config.data_path()));
    storage.initialize().map_err(storage_error)?;
    Ok(storage)
}

/// The explicit system if given, otherwise the active one from the settings
///
/// # Errors
/// Returns a message if the settings cannot be read
pub fn effective_system(
    storage: &FileStorage,
    requested: Option<GradingSystem>,
) -> Result<GradingSystem, String> {
    match requested {
        Some(system) => Ok(system),
        None => Ok(storage.settings().map_err(storage_error)?.grading_system),
    }
}

/// Log a storage failure and turn it into a CLI message
#[allow(clippy::needless_pass_by_value)]
pub fn storage_error(err: StorageError) -> String {
    error!("Storage failure: {err}");
    format!("✗ {err}")
}
