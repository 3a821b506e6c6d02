//! Settings command handler

use super::{open_storage, storage_error};
use crate::args::SettingsSubcommand;
use gradepoint::config::Config;
use gradepoint::gpa::mismatched_grades;
use gradepoint::grading::label_of;
use gradepoint::info;
use gradepoint::models::AppSettings;
use gradepoint::storage::SettingsUpdate;

/// Dispatch settings subcommands
///
/// # Errors
/// Returns a message if the store cannot be used
pub fn run(subcommand: Option<SettingsSubcommand>, config: &Config) -> Result<(), String> {
    let mut storage = open_storage(config)?;

    let update = match subcommand {
        None | Some(SettingsSubcommand::Show) => {
            let settings = storage.settings().map_err(storage_error)?;
            print_settings(&settings);
            return Ok(());
        }
        Some(SettingsSubcommand::SetSystem { system }) => SettingsUpdate {
            grading_system: Some(system),
            ..Default::default()
        },
        Some(SettingsSubcommand::SetCredits { credits }) => SettingsUpdate {
            default_credits: Some(credits),
            ..Default::default()
        },
        Some(SettingsSubcommand::SetTheme { theme }) => SettingsUpdate {
            theme: Some(theme),
            ..Default::default()
        },
    };

    let settings = storage.update_settings(&update).map_err(storage_error)?;
    info!("Settings updated: {settings:?}");
    println!("✓ Settings updated");
    print_settings(&settings);

    if update.grading_system.is_some() {
        let courses = storage.courses().map_err(storage_error)?;
        let mismatched = mismatched_grades(&courses, settings.grading_system).len();
        if mismatched > 0 {
            eprintln!(
                "⚠ {mismatched} stored course(s) were recorded under a scale other than the {}; they will be converted when GPAs are shown.",
                label_of(settings.grading_system)
            );
        }
    }
    Ok(())
}

fn print_settings(settings: &AppSettings) {
    println!("\n=== Settings ===\n");
    println!(
        "  grading_system = {} ({})",
        settings.grading_system,
        label_of(settings.grading_system)
    );
    println!("  theme = {}", settings.theme);
    println!("  default_credits = {}", settings.default_credits);
}
