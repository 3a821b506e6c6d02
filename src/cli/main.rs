//! Command-line interface entry point for `gradepoint`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use gradepoint::config::Config;
use gradepoint::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use gradepoint::{debug, info};
use std::path::PathBuf;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag wins over config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // CLI flag wins over config logging.file
    let config_log_path = (!config.logging.file.is_empty())
        .then(|| PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    debug!("Using data directory {}", config.data_path().display());

    let result = match args.command {
        Command::Config { subcommand } => commands::config::run(subcommand, &mut config, &defaults),
        Command::Course { subcommand } => commands::course::run(subcommand, &config),
        Command::Semester { subcommand } => commands::semester::run(subcommand, &config),
        Command::Gpa { system } => commands::gpa::run(&config, system),
        Command::Grade { subcommand } => commands::grade::run(subcommand),
        Command::Settings { subcommand } => commands::settings::run(subcommand, &config),
        Command::Report {
            format,
            output,
            system,
        } => commands::report::run(format, output.as_deref(), system, &config),
        Command::Clear { yes } => commands::clear::run(&config, yes),
    };

    if let Err(message) = result {
        eprintln!("{message}");
        std::process::exit(1);
    }
}
