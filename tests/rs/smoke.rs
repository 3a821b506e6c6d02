//! Integration smoke tests for `gradepoint`

use gradepoint::{calculate_gpa, get_version, GradingSystem};

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn root_reexports_compute_a_gpa() {
    let courses = [("AA", 3.0), ("CC", 2.0)];
    assert_eq!(calculate_gpa(&courses, GradingSystem::System1), Ok(3.2));
}
