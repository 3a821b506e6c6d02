//! CLI argument definitions for `gradepoint`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use gradepoint::config::ConfigOverrides;
use gradepoint::logger::Level;
use gradepoint::models::{ClassTerm, Theme};
use gradepoint::report::ReportFormat;
use gradepoint::GradingSystem;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `Level` for
/// runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `data_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum CourseSubcommand {
    /// Record a completed course.
    Add {
        /// Course name
        #[arg(short, long)]
        name: String,
        /// Grade label on the recording scale (e.g., `BA`, `B+`, `A2`)
        #[arg(short, long)]
        grade: String,
        /// Credit weight (defaults to the `default_credits` setting)
        #[arg(short, long)]
        credits: Option<f64>,
        /// Program term, `1-1` through `4-2`
        #[arg(short, long, value_name = "TERM", default_value = "1-1")]
        term: ClassTerm,
        /// Semester name; omit for the current semester
        #[arg(long)]
        semester: Option<String>,
        /// Scale the grade is recorded under (defaults to the active system)
        #[arg(long, value_name = "SYSTEM")]
        system: Option<GradingSystem>,
    },
    /// List courses with their grade in the active (or given) system.
    List {
        /// Only show one program term
        #[arg(short, long, value_name = "TERM")]
        term: Option<ClassTerm>,
        /// Show converted grades in this system instead of the active one
        #[arg(long, value_name = "SYSTEM")]
        system: Option<GradingSystem>,
    },
    /// Change fields of a stored course.
    Update {
        /// Course id (as shown by `course list`)
        #[arg(value_name = "ID")]
        id: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New grade label
        #[arg(short, long)]
        grade: Option<String>,
        /// New credit weight
        #[arg(short, long)]
        credits: Option<f64>,
        /// New program term
        #[arg(short, long, value_name = "TERM")]
        term: Option<ClassTerm>,
        /// New semester name (`current` for the current semester)
        #[arg(long)]
        semester: Option<String>,
        /// Scale a new grade is recorded under (defaults to the active system)
        #[arg(long, value_name = "SYSTEM")]
        system: Option<GradingSystem>,
    },
    /// Delete a course.
    Remove {
        /// Course id
        #[arg(value_name = "ID")]
        id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum SemesterSubcommand {
    /// Archive the courses tagged with a semester name.
    Add {
        /// Semester name; courses recorded with `--semester NAME` are included
        #[arg(short, long)]
        name: String,
        /// Start date (free text, e.g. 2024-09-01)
        #[arg(long, default_value = "")]
        start: String,
        /// End date
        #[arg(long, default_value = "")]
        end: String,
    },
    /// List archived semesters with their GPA.
    List {
        /// Express GPAs in this system instead of the active one
        #[arg(long, value_name = "SYSTEM")]
        system: Option<GradingSystem>,
    },
    /// Delete an archived semester (its courses are kept).
    Remove {
        /// Semester id
        #[arg(value_name = "ID")]
        id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum GradeSubcommand {
    /// Convert a grade between scales.
    Convert {
        /// Grade label on the source scale
        #[arg(value_name = "GRADE")]
        grade: String,
        /// Source scale
        #[arg(long, value_name = "SYSTEM")]
        from: GradingSystem,
        /// Target scale
        #[arg(long, value_name = "SYSTEM")]
        to: GradingSystem,
    },
    /// Report which scale a grade label belongs to.
    Detect {
        /// Grade label
        #[arg(value_name = "GRADE")]
        grade: String,
    },
    /// Print the grading scales.
    Scales {
        /// Only print one scale
        #[arg(long, value_name = "SYSTEM")]
        system: Option<GradingSystem>,
    },
}

#[derive(Debug, Subcommand)]
pub enum SettingsSubcommand {
    /// Display the current settings.
    Show,
    /// Change the active grading system.
    SetSystem {
        /// New system (`system1`..`system4` or `1`..`4`)
        #[arg(value_name = "SYSTEM")]
        system: GradingSystem,
    },
    /// Change the default credit weight for new courses.
    SetCredits {
        /// Credits (1 to 6)
        #[arg(value_name = "CREDITS", value_parser = clap::value_parser!(u32).range(1..=6))]
        credits: u32,
    },
    /// Change the display theme preference.
    SetTheme {
        /// `light` or `dark`
        #[arg(value_name = "THEME")]
        theme: Theme,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Add, list, update and remove courses.
    Course {
        #[command(subcommand)]
        subcommand: CourseSubcommand,
    },
    /// Archive and list semesters.
    Semester {
        #[command(subcommand)]
        subcommand: SemesterSubcommand,
    },
    /// Show current, cumulative and per-term GPA.
    Gpa {
        /// Compute in this system instead of the active one
        #[arg(long, value_name = "SYSTEM")]
        system: Option<GradingSystem>,
    },
    /// Inspect grading scales and convert grades.
    Grade {
        #[command(subcommand)]
        subcommand: GradeSubcommand,
    },
    /// View or change application settings.
    ///
    /// If no subcommand is provided, displays the current settings.
    Settings {
        #[command(subcommand)]
        subcommand: Option<SettingsSubcommand>,
    },
    /// Generate a GPA report.
    Report {
        /// Report format: markdown (md) or html
        #[arg(short, long, value_name = "FORMAT", default_value = "markdown")]
        format: ReportFormat,

        /// Output file path (optional; defaults to the configured reports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Express the report in this system instead of the active one
        #[arg(long, value_name = "SYSTEM")]
        system: Option<GradingSystem>,
    },
    /// Delete all stored courses, semesters and settings (requires confirmation).
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "gradepoint",
    about = "GPA calculator with cross-scale grade conversion",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config data directory
    #[arg(long = "config-data-dir", value_name = "DIR")]
    pub config_data_dir: Option<PathBuf>,

    /// Override config data directory (short form)
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

fn path_string(path: Option<&PathBuf>) -> Option<String> {
    path.map(|p| p.to_string_lossy().to_string())
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--data-dir`) take precedence over long-form
    /// flags (e.g., `--config-data-dir`) when both are provided.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: path_string(self.config_log_file.as_ref()),
            verbose: self.config_verbose,
            data_dir: path_string(self.data_dir.as_ref().or(self.config_data_dir.as_ref())),
            reports_dir: path_string(
                self.reports_dir
                    .as_ref()
                    .or(self.config_reports_dir.as_ref()),
            ),
        }
    }
}
