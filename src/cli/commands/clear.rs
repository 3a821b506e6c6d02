//! Clear command handler

use super::{open_storage, storage_error};
use gradepoint::config::Config;
use gradepoint::info;
use std::io::{self, Write};

/// Ask a yes/no question on stdin; anything but `y`/`yes` is a no
pub fn confirm(question: &str) -> bool {
    print!("{question} (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    let answer = response.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

/// Remove every stored collection
///
/// # Errors
/// Returns a message if the store cannot be opened or cleared
pub fn run(config: &Config, skip_confirmation: bool) -> Result<(), String> {
    if !skip_confirmation
        && !confirm("Delete all courses, semesters and settings? This cannot be undone.")
    {
        println!("✗ Clear cancelled");
        return Ok(());
    }

    let mut storage = open_storage(config)?;
    storage.clear().map_err(storage_error)?;
    info!("All stored records cleared in {}", config.data_path().display());
    println!("✓ All data cleared");
    Ok(())
}
