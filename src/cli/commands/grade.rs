//! Grade command handler: direct access to the conversion engine

use crate::args::GradeSubcommand;
use gradepoint::grading::{convert_grade, detect_grading_system, label_of, scale_of};
use gradepoint::GradingSystem;

/// Dispatch grade subcommands
///
/// # Errors
/// Returns a message if the grade is not part of the requested scale or
/// cannot be detected
pub fn run(subcommand: GradeSubcommand) -> Result<(), String> {
    match subcommand {
        GradeSubcommand::Convert { grade, from, to } => {
            let converted = convert_grade(&grade, from, to).map_err(|e| format!("✗ {e}"))?;
            println!("{converted}");
            Ok(())
        }
        GradeSubcommand::Detect { grade } => {
            let system = detect_grading_system(&grade).map_err(|e| format!("✗ {e}"))?;
            println!("{system} ({})", label_of(system));
            Ok(())
        }
        GradeSubcommand::Scales { system } => {
            let systems = system.map_or_else(|| GradingSystem::ALL.to_vec(), |s| vec![s]);
            for system in systems {
                print_scale(system);
            }
            Ok(())
        }
    }
}

fn print_scale(system: GradingSystem) {
    println!("{system}: {}", label_of(system));
    for (label, point) in scale_of(system).entries() {
        println!("  {label:<3} {point:.1}");
    }
    println!();
}
