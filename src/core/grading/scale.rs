//! Grading scale registry
//!
//! Four fixed grading systems, each mapping grade labels to point values in
//! `[0.0, 4.0]`. Entry order inside a scale is significant: conversion breaks
//! distance ties by the first entry encountered, so each table is listed from
//! the highest grade to the lowest.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of one of the four supported grading systems.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum GradingSystem {
    /// Nine-step AA-FF scale in 0.5 increments
    #[default]
    System1,
    /// Eleven-step extended AA-FF scale in ~0.3 increments
    System2,
    /// Letter scale, A through F with +/- modifiers
    System3,
    /// Numeric-tier scale, A1 through F
    System4,
}

/// A grade scale: an ordered list of `(label, point)` pairs.
#[derive(Debug, PartialEq)]
pub struct GradeScale {
    entries: &'static [(&'static str, f64)],
}

const SYSTEM1: GradeScale = GradeScale {
    entries: &[
        ("AA", 4.0),
        ("BA", 3.5),
        ("BB", 3.0),
        ("CB", 2.5),
        ("CC", 2.0),
        ("DC", 1.5),
        ("DD", 1.0),
        ("FD", 0.5),
        ("FF", 0.0),
    ],
};

const SYSTEM2: GradeScale = GradeScale {
    entries: &[
        ("AA", 4.0),
        ("AB", 3.7),
        ("BA", 3.3),
        ("BB", 3.0),
        ("BC", 2.7),
        ("CB", 2.3),
        ("CC", 2.0),
        ("CD", 1.7),
        ("DC", 1.3),
        ("DD", 1.0),
        ("FF", 0.0),
    ],
};

const SYSTEM3: GradeScale = GradeScale {
    entries: &[
        ("A", 4.0),
        ("A-", 3.7),
        ("B+", 3.3),
        ("B", 3.0),
        ("B-", 2.7),
        ("C+", 2.3),
        ("C", 2.0),
        ("C-", 1.7),
        ("D+", 1.3),
        ("D", 1.0),
        ("D-", 0.7),
        ("F", 0.0),
    ],
};

const SYSTEM4: GradeScale = GradeScale {
    entries: &[
        ("A1", 4.0),
        ("A2", 3.7),
        ("A3", 3.3),
        ("B1", 3.0),
        ("B2", 2.7),
        ("B3", 2.3),
        ("C1", 2.0),
        ("C2", 1.7),
        ("C3", 1.3),
        ("D", 1.0),
        ("F", 0.0),
    ],
};

impl GradingSystem {
    /// Every grading system, in detection priority order.
    ///
    /// Labels are shared between scales ("DD", "FF", "BB", "D", "F", ...), so
    /// detection returns the first system in this order that knows the label.
    pub const ALL: [Self; 4] = [Self::System1, Self::System2, Self::System3, Self::System4];

    /// Stable identifier used in stored settings (`system1` .. `system4`)
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::System1 => "system1",
            Self::System2 => "system2",
            Self::System3 => "system3",
            Self::System4 => "system4",
        }
    }

    /// Human-readable name of the scale
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::System1 => "AA-FF Scale",
            Self::System2 => "Extended AA-FF Scale",
            Self::System3 => "Letter Grade Scale (A-F)",
            Self::System4 => "Numeric Scale (A1-F)",
        }
    }

    /// The grade scale registered for this system
    #[must_use]
    pub const fn scale(self) -> &'static GradeScale {
        match self {
            Self::System1 => &SYSTEM1,
            Self::System2 => &SYSTEM2,
            Self::System3 => &SYSTEM3,
            Self::System4 => &SYSTEM4,
        }
    }
}

impl fmt::Display for GradingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for GradingSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "system1" | "1" => Ok(Self::System1),
            "system2" | "2" => Ok(Self::System2),
            "system3" | "3" => Ok(Self::System3),
            "system4" | "4" => Ok(Self::System4),
            _ => Err(format!(
                "Unknown grading system: '{s}' (expected system1, system2, system3 or system4)"
            )),
        }
    }
}

impl GradeScale {
    /// Point value of `label`, if the label belongs to this scale
    #[must_use]
    pub fn point(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, p)| *p)
    }

    /// Whether `label` is a grade of this scale
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.entries.iter().any(|(l, _)| *l == label)
    }

    /// Iterate `(label, point)` pairs in scale order
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Grade labels in scale order
    #[must_use]
    pub fn labels(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(l, _)| *l).collect()
    }

    /// Number of grades in the scale
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the scale has no grades
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Largest point difference between two adjacent grades
    #[must_use]
    pub fn max_step_gap(&self) -> f64 {
        self.entries
            .windows(2)
            .map(|pair| (pair[0].1 - pair[1].1).abs())
            .fold(0.0, f64::max)
    }
}

/// Scale registered for `system`
#[must_use]
pub const fn scale_of(system: GradingSystem) -> &'static GradeScale {
    system.scale()
}

/// Display name of `system`
#[must_use]
pub const fn label_of(system: GradingSystem) -> &'static str {
    system.label()
}
