//! Entity layer: students, skills, progress records, training programs
//!
//! Validation runs at construction and mutation; a failed mutation leaves the
//! entity in its prior state.

pub mod program;
pub mod progress;
pub mod skill;
pub mod student;

pub use program::TrainingProgram;
pub use progress::{ProgressStatus, SkillProgress};
pub use skill::Skill;
pub use student::Student;
