//! Training program data structure

use serde::Serialize;

use crate::error::{Result, TrackerError};

/// A certification track: an ordered set of required skills plus the fraction
/// of them a student must complete to be certification-ready.
#[derive(Debug, Clone, Serialize)]
pub struct TrainingProgram {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Weak references resolved through the skill repository; no duplicates.
    pub required_skill_ids: Vec<i64>,
    /// Percentage of required skills that must be completed (0-100).
    pub minimum_passing_percentage: i64,
}

impl TrainingProgram {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        description: impl Into<String>,
        minimum_passing_percentage: i64,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TrackerError::Validation(
                "program name cannot be empty".to_string(),
            ));
        }
        if !(0..=100).contains(&minimum_passing_percentage) {
            return Err(TrackerError::Validation(format!(
                "minimum passing percentage must be between 0 and 100, got {minimum_passing_percentage}"
            )));
        }
        Ok(Self {
            id,
            name,
            description: description.into(),
            required_skill_ids: Vec::new(),
            minimum_passing_percentage,
        })
    }

    /// Add a required skill; duplicates are ignored.
    pub fn add_required_skill(&mut self, skill_id: i64) {
        if !self.required_skill_ids.contains(&skill_id) {
            self.required_skill_ids.push(skill_id);
        }
    }

    /// Remove a required skill; returns whether it was present.
    pub fn remove_required_skill(&mut self, skill_id: i64) -> bool {
        let before = self.required_skill_ids.len();
        self.required_skill_ids.retain(|&id| id != skill_id);
        self.required_skill_ids.len() != before
    }

    pub fn total_required_skills(&self) -> usize {
        self.required_skill_ids.len()
    }
}

impl std::fmt::Display for TrainingProgram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {} - {} required skills, {}% minimum",
            self.id,
            self.name,
            self.required_skill_ids.len(),
            self.minimum_passing_percentage
        )
    }
}
