//! Config command handler

use crate::args::ConfigSubcommand;
use crate::commands::clear::confirm;
use gradepoint::config::Config;
use gradepoint::info;

/// Dispatch config subcommands
///
/// # Errors
/// Returns a message if a key is unknown, a value is invalid, or the config
/// file cannot be written
pub fn run(
    subcommand: Option<ConfigSubcommand>,
    config: &mut Config,
    defaults: &Config,
) -> Result<(), String> {
    match subcommand {
        None => handle_get(config, None),
        Some(ConfigSubcommand::Get { key }) => handle_get(config, key.as_deref()),
        Some(ConfigSubcommand::Set { key, value }) => handle_set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => handle_unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => handle_reset(),
    }
}

fn handle_get(config: &Config, key: Option<&str>) -> Result<(), String> {
    match key {
        Some(k) => {
            let value = config
                .get(k)
                .ok_or_else(|| format!("✗ Unknown config key: '{k}'"))?;
            println!("{value}");
        }
        None => {
            println!("\n=== Configuration ===\n");
            print!("{config}");
        }
    }
    Ok(())
}

fn save(config: &Config) -> Result<(), String> {
    config
        .save()
        .map_err(|e| format!("✗ Failed to save config: {e}"))
}

fn handle_set(config: &mut Config, key: &str, value: &str) -> Result<(), String> {
    config.set(key, value).map_err(|e| format!("✗ {e}"))?;
    save(config)?;
    info!("Config key {key} set to {value}");
    println!("✓ Set {key} = {value}");
    Ok(())
}

fn handle_unset(config: &mut Config, defaults: &Config, key: &str) -> Result<(), String> {
    config.unset(key, defaults).map_err(|e| format!("✗ {e}"))?;
    save(config)?;
    println!("✓ Reset {key} to default");
    Ok(())
}

fn handle_reset() -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    if !confirm("Are you sure you want to reset config to defaults?") {
        println!("✗ Reset cancelled");
        return Ok(());
    }

    Config::reset().map_err(|e| format!("✗ Failed to remove config file: {e}"))?;
    println!("✓ Config reset to defaults");
    Ok(())
}
