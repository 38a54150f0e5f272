//! Student data structure

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{Result, TrackerError};
use crate::model::SkillProgress;

/// A student enrolled in training. Owns its progress records; everything else
/// is referenced by id.
#[derive(Debug, Clone, Serialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Set once at creation (or restored from storage), immutable after.
    pub enrolled_at: DateTime<Utc>,
    /// One record per skill the student has touched, unique by skill id,
    /// in first-touched order.
    pub progress: Vec<SkillProgress>,
}

impl Student {
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Result<Self> {
        Self::with_enrollment(id, name, email, Utc::now())
    }

    /// Construct with an explicit enrollment timestamp (restore path).
    pub fn with_enrollment(
        id: i64,
        name: impl Into<String>,
        email: impl Into<String>,
        enrolled_at: DateTime<Utc>,
    ) -> Result<Self> {
        let name = name.into();
        let email = email.into();
        validate_nonempty("name", &name)?;
        validate_nonempty("email", &email)?;
        Ok(Self {
            id,
            name,
            email,
            enrolled_at,
            progress: Vec::new(),
        })
    }

    pub fn update_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        validate_nonempty("name", &name)?;
        self.name = name;
        Ok(())
    }

    pub fn update_email(&mut self, email: impl Into<String>) -> Result<()> {
        let email = email.into();
        validate_nonempty("email", &email)?;
        self.email = email;
        Ok(())
    }

    /// Add or update progress for a skill. The score re-derives the record's
    /// status and refreshes its timestamp.
    pub fn update_skill_progress(&mut self, skill_id: i64, score: i64) -> Result<()> {
        match self.progress.iter_mut().find(|p| p.skill_id == skill_id) {
            Some(existing) => existing.update_score(score),
            None => {
                let record = SkillProgress::new(skill_id, score)?;
                self.progress.push(record);
                Ok(())
            }
        }
    }

    /// Progress for one skill, if the student has touched it.
    pub fn skill_progress(&self, skill_id: i64) -> Option<&SkillProgress> {
        self.progress.iter().find(|p| p.skill_id == skill_id)
    }
}

impl std::fmt::Display for Student {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {} ({}) - enrolled {}",
            self.id,
            self.name,
            self.email,
            self.enrolled_at.format("%Y-%m-%d")
        )
    }
}

fn validate_nonempty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TrackerError::Validation(format!(
            "{field} cannot be empty"
        )));
    }
    Ok(())
}
