use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Student not found: {0}")]
    StudentNotFound(i64),

    #[error("Skill not found: {0}")]
    SkillNotFound(i64),

    #[error("Program not found: {0}")]
    ProgramNotFound(i64),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Migration failed: {0}")]
    Migration(String),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
