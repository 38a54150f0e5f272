//! Skill data structure

use serde::Serialize;

use crate::error::{Result, TrackerError};

/// Default passing threshold when a skill does not configure its own.
pub const DEFAULT_PASSING_SCORE: i64 = 70;

/// A skill students can train and be scored on.
#[derive(Debug, Clone, Serialize)]
pub struct Skill {
    /// Unique skill ID, assigned by the repository
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Free-text grouping label
    pub category: String,
    /// Score required to complete this skill (0-100)
    pub passing_score: i64,
}

impl Skill {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        passing_score: i64,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TrackerError::Validation(
                "skill name cannot be empty".to_string(),
            ));
        }
        if !(0..=100).contains(&passing_score) {
            return Err(TrackerError::Validation(format!(
                "passing score must be between 0 and 100, got {passing_score}"
            )));
        }
        Ok(Self {
            id,
            name,
            description: description.into(),
            category: category.into(),
            passing_score,
        })
    }

    /// Whether a given score meets this skill's passing threshold.
    pub fn is_passing(&self, score: i64) -> bool {
        score >= self.passing_score
    }
}

impl std::fmt::Display for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {} ({}) - pass: {}%",
            self.id, self.name, self.category, self.passing_score
        )
    }
}
