//! Application settings model

use crate::core::grading::GradingSystem;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Credit weight used to prefill new courses when nothing is stored
pub const DEFAULT_CREDITS: u32 = 3;

/// Display theme preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(format!("Unknown theme: '{s}'")),
        }
    }
}

/// User settings persisted alongside the course records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    /// Grading system all GPA figures are shown in
    #[serde(default)]
    pub grading_system: GradingSystem,

    /// Display theme
    #[serde(default)]
    pub theme: Theme,

    /// Credit weight used to prefill new courses
    #[serde(default = "default_credits")]
    pub default_credits: u32,
}

const fn default_credits() -> u32 {
    DEFAULT_CREDITS
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            grading_system: GradingSystem::default(),
            theme: Theme::default(),
            default_credits: DEFAULT_CREDITS,
        }
    }
}
