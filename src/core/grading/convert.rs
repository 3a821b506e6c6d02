//! Grade validation, system detection and cross-system conversion

use super::scale::{scale_of, GradingSystem};
use crate::core::error::GradeError;

/// Whether `grade` is a label of the `system` scale.
#[must_use]
pub fn is_valid_grade(grade: &str, system: GradingSystem) -> bool {
    scale_of(system).contains(grade)
}

/// Recover the grading system a stored grade label belongs to.
///
/// Systems are scanned in [`GradingSystem::ALL`] order and the first scale
/// holding the label wins, so a label shared by several scales (e.g. "DD")
/// always resolves to the same system.
///
/// # Errors
///
/// Returns [`GradeError::Undetectable`] if no scale contains the label.
pub fn detect_grading_system(grade: &str) -> Result<GradingSystem, GradeError> {
    GradingSystem::ALL
        .into_iter()
        .find(|system| is_valid_grade(grade, *system))
        .ok_or_else(|| GradeError::Undetectable {
            grade: grade.to_string(),
        })
}

/// Project `grade` from `from` onto the nearest-point label of `to`.
///
/// The target label with the smallest absolute point difference wins; ties
/// go to the label listed first in the target scale. This is lossy: several
/// source grades may land on the same target grade.
///
/// # Errors
///
/// Returns [`GradeError::Unknown`] if `grade` is not a label of `from`.
pub fn convert_grade(
    grade: &str,
    from: GradingSystem,
    to: GradingSystem,
) -> Result<&'static str, GradeError> {
    let point = scale_of(from)
        .point(grade)
        .ok_or_else(|| GradeError::Unknown {
            grade: grade.to_string(),
            system: from,
        })?;

    Ok(nearest_label(point, to))
}

/// Label of `target` that a stored grade stands for.
///
/// A grade with a recorded source system is converted from that system. A
/// grade without one is taken as-is when `target` knows the label, and is
/// otherwise detected with [`detect_grading_system`] and converted.
///
/// # Errors
///
/// Returns [`GradeError::Unresolvable`] if the grade cannot be interpreted
/// under its recorded system or under any registered system.
pub fn resolve_grade(
    grade: &str,
    recorded: Option<GradingSystem>,
    target: GradingSystem,
) -> Result<&'static str, GradeError> {
    let unresolvable = |_| GradeError::Unresolvable {
        grade: grade.to_string(),
        system: target,
    };

    let source = match recorded {
        Some(system) => system,
        None => {
            if let Some((label, _)) = scale_of(target).entries().find(|(l, _)| *l == grade) {
                return Ok(label);
            }
            detect_grading_system(grade).map_err(unresolvable)?
        }
    };

    convert_grade(grade, source, target).map_err(unresolvable)
}

/// Label of `system` whose point value is closest to `point`
fn nearest_label(point: f64, system: GradingSystem) -> &'static str {
    let mut entries = scale_of(system).entries();
    // Registry scales are never empty.
    let (mut closest, first_point) = entries.next().unwrap_or(("", f64::NAN));
    let mut min_diff = (first_point - point).abs();

    for (label, candidate) in entries {
        let diff = (candidate - point).abs();
        if diff < min_diff {
            min_diff = diff;
            closest = label;
        }
    }

    closest
}
