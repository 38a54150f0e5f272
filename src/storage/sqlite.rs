//! SQLite database layer
//!
//! One connection, opened for the life of the process. One-to-many
//! associations (a student's progress rows, a program's required-skill rows)
//! are synchronized with a delete-all-then-reinsert pass wrapped in a single
//! transaction per save call, so the stored set always mirrors the in-memory
//! one. There is no cross-call transaction: a crash between two save calls can
//! leave entities saved at different times.
//!
//! Not safe for concurrent mutation from multiple threads or processes;
//! callers needing that must serialize access themselves.

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{Result, TrackerError};
use crate::model::{Skill, Student, TrainingProgram};
use crate::repo::{ProgramRepository, SkillRepository, StudentRepository};
use crate::storage::migrations;

/// SQLite database wrapper for the tracker
pub struct Database {
    conn: Connection,
    schema_version: u32,
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("schema_version", &self.schema_version)
            .finish_non_exhaustive()
    }
}

impl Database {
    /// Open database at the given path
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// Open an in-memory database (tests)
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        Self::configure_pragmas(&conn)?;
        let schema_version = migrations::run_migrations(&conn)?;

        Ok(Self {
            conn,
            schema_version,
        })
    }

    fn configure_pragmas(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA temp_store = MEMORY;
             PRAGMA foreign_keys = ON;",
        )?;
        Ok(())
    }

    /// Get a reference to the connection
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Current schema version after migrations.
    pub fn schema_version(&self) -> u32 {
        self.schema_version
    }

    // =========================================================================
    // Students
    // =========================================================================

    /// Upsert the student row, then fully replace the student's progress rows.
    /// Saving un-archives.
    pub fn save_student(&self, student: &Student) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;

        tx.execute(
            "INSERT INTO students (id, name, email, enrolled_at, is_archived)
             VALUES (?, ?, ?, ?, 0)
             ON CONFLICT(id) DO UPDATE SET
                name=excluded.name,
                email=excluded.email,
                enrolled_at=excluded.enrolled_at,
                is_archived=0",
            params![
                student.id,
                student.name,
                student.email,
                student.enrolled_at.to_rfc3339(),
            ],
        )?;

        tx.execute(
            "DELETE FROM skill_progress WHERE student_id = ?",
            [student.id],
        )?;
        {
            let mut insert = tx.prepare(
                "INSERT INTO skill_progress (student_id, skill_id, current_score, status, last_updated)
                 VALUES (?, ?, ?, ?, ?)",
            )?;
            for progress in &student.progress {
                insert.execute(params![
                    student.id,
                    progress.skill_id,
                    progress.current_score,
                    progress.status.as_i64(),
                    progress.last_updated.to_rfc3339(),
                ])?;
            }
        }

        tx.commit()?;
        Ok(())
    }

    /// Soft delete: archived students are skipped by `load_students` but their
    /// rows (including progress) stay in storage.
    pub fn archive_student(&self, student_id: i64) -> Result<()> {
        self.conn.execute(
            "UPDATE students SET is_archived = 1 WHERE id = ?",
            [student_id],
        )?;
        Ok(())
    }

    /// Load all non-archived students into the repository in ascending-id
    /// order. Progress rows replay through the entity's own mutation method so
    /// status re-derives from the stored score.
    pub fn load_students(&self, repo: &mut StudentRepository) -> Result<()> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, email, enrolled_at FROM students
             WHERE is_archived = 0 ORDER BY id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
            ))
        })?;

        let mut progress_stmt = self.conn.prepare(
            "SELECT skill_id, current_score FROM skill_progress
             WHERE student_id = ? ORDER BY id",
        )?;

        for row in rows {
            let (id, name, email, enrolled_at) = row?;
            let enrolled_at = parse_timestamp(&enrolled_at)?;
            let student = repo.add_with_id(id, name, email, enrolled_at)?;

            let progress_rows = progress_stmt
                .query_map([id], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?)))?;
            for progress_row in progress_rows {
                let (skill_id, score) = progress_row?;
                student.update_skill_progress(skill_id, score)?;
            }
        }
        Ok(())
    }

    // =========================================================================
    // Skills
    // =========================================================================

    pub fn save_skill(&self, skill: &Skill) -> Result<()> {
        self.conn.execute(
            "INSERT INTO skills (id, name, description, category, passing_score)
             VALUES (?, ?, ?, ?, ?)
             ON CONFLICT(id) DO UPDATE SET
                name=excluded.name,
                description=excluded.description,
                category=excluded.category,
                passing_score=excluded.passing_score",
            params![
                skill.id,
                skill.name,
                skill.description,
                skill.category,
                skill.passing_score,
            ],
        )?;
        Ok(())
    }

    pub fn load_skills(&self, repo: &mut SkillRepository) -> Result<()> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, description, category, passing_score FROM skills ORDER BY id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, i64>(4)?,
            ))
        })?;
        for row in rows {
            let (id, name, description, category, passing_score) = row?;
            repo.add_with_id(id, name, description, category, passing_score)?;
        }
        Ok(())
    }

    // =========================================================================
    // Training programs
    // =========================================================================

    /// Upsert the program row, then fully replace its required-skill rows.
    pub fn save_program(&self, program: &TrainingProgram) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;

        tx.execute(
            "INSERT INTO training_programs (id, name, description, minimum_passing_percentage)
             VALUES (?, ?, ?, ?)
             ON CONFLICT(id) DO UPDATE SET
                name=excluded.name,
                description=excluded.description,
                minimum_passing_percentage=excluded.minimum_passing_percentage",
            params![
                program.id,
                program.name,
                program.description,
                program.minimum_passing_percentage,
            ],
        )?;

        tx.execute(
            "DELETE FROM program_skills WHERE program_id = ?",
            [program.id],
        )?;
        {
            let mut insert =
                tx.prepare("INSERT INTO program_skills (program_id, skill_id) VALUES (?, ?)")?;
            for skill_id in &program.required_skill_ids {
                insert.execute(params![program.id, skill_id])?;
            }
        }

        tx.commit()?;
        Ok(())
    }

    pub fn load_programs(&self, repo: &mut ProgramRepository) -> Result<()> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, description, minimum_passing_percentage
             FROM training_programs ORDER BY id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, i64>(3)?,
            ))
        })?;

        let mut skills_stmt = self
            .conn
            .prepare("SELECT skill_id FROM program_skills WHERE program_id = ? ORDER BY skill_id")?;

        for row in rows {
            let (id, name, description, minimum) = row?;
            let program = repo.add_with_id(id, name, description, minimum)?;
            let skill_rows = skills_stmt.query_map([id], |row| row.get::<_, i64>(0))?;
            for skill_id in skill_rows {
                program.add_required_skill(skill_id?);
            }
        }
        Ok(())
    }

    // =========================================================================
    // Utility
    // =========================================================================

    /// Next free student id, for pre-seeding before the repository is
    /// populated. Counts archived rows too.
    pub fn next_student_id(&self) -> Result<i64> {
        self.next_id("students")
    }

    pub fn next_skill_id(&self) -> Result<i64> {
        self.next_id("skills")
    }

    pub fn next_program_id(&self) -> Result<i64> {
        self.next_id("training_programs")
    }

    fn next_id(&self, table: &str) -> Result<i64> {
        let id: i64 = self.conn.query_row(
            &format!("SELECT COALESCE(MAX(id), 0) + 1 FROM {table}"),
            [],
            |row| row.get(0),
        )?;
        Ok(id)
    }

    /// Whether any student rows exist (archived included). Decides the
    /// load-versus-seed branch at startup; the two paths never merge.
    pub fn has_data(&self) -> Result<bool> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM students", [], |row| row.get(0))?;
        Ok(count > 0)
    }

    /// Raw student row lookup, archived or not (tests, diagnostics).
    pub fn student_is_archived(&self, student_id: i64) -> Result<Option<bool>> {
        let archived = self
            .conn
            .query_row(
                "SELECT is_archived FROM students WHERE id = ?",
                [student_id],
                |row| row.get::<_, i64>(0),
            )
            .optional()?;
        Ok(archived.map(|v| v != 0))
    }
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|err| TrackerError::Validation(format!("invalid stored timestamp {raw:?}: {err}")))
}
