//! Per-skill progress records

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{Result, TrackerError};

/// Coarse status derived from the raw score.
///
/// The boundary is a fixed 70, independent of any skill's configured passing
/// score. Completion for analytics purposes compares against the skill's own
/// threshold instead; the two can disagree and both are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl ProgressStatus {
    fn from_score(score: i64) -> Self {
        if score == 0 {
            ProgressStatus::NotStarted
        } else if score < 70 {
            ProgressStatus::InProgress
        } else {
            ProgressStatus::Completed
        }
    }

    /// Integer code used in the `skill_progress.status` column.
    pub fn as_i64(self) -> i64 {
        match self {
            ProgressStatus::NotStarted => 0,
            ProgressStatus::InProgress => 1,
            ProgressStatus::Completed => 2,
        }
    }
}

impl std::fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ProgressStatus::NotStarted => "not started",
            ProgressStatus::InProgress => "in progress",
            ProgressStatus::Completed => "completed",
        };
        f.write_str(label)
    }
}

/// A student's progress in one skill. Owned by the student; references the
/// skill by id only.
#[derive(Debug, Clone, Serialize)]
pub struct SkillProgress {
    pub skill_id: i64,
    pub current_score: i64,
    pub status: ProgressStatus,
    pub last_updated: DateTime<Utc>,
}

impl SkillProgress {
    pub fn new(skill_id: i64, score: i64) -> Result<Self> {
        let mut progress = Self {
            skill_id,
            current_score: 0,
            status: ProgressStatus::NotStarted,
            last_updated: Utc::now(),
        };
        if score > 0 {
            progress.update_score(score)?;
        }
        Ok(progress)
    }

    /// Update the score, re-deriving the status and refreshing the timestamp.
    pub fn update_score(&mut self, score: i64) -> Result<()> {
        if !(0..=100).contains(&score) {
            return Err(TrackerError::Validation(format!(
                "score must be between 0 and 100, got {score}"
            )));
        }
        self.current_score = score;
        self.status = ProgressStatus::from_score(score);
        self.last_updated = Utc::now();
        Ok(())
    }

    /// Completion against a skill's configured passing score. This is the
    /// predicate analytics use, not the fixed status boundary.
    pub fn is_completed(&self, passing_score: i64) -> bool {
        self.current_score >= passing_score
    }
}
