//! Application context: database, repositories, bootstrap

use tracing::info;

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::repo::{ProgramRepository, SkillRepository, StudentRepository};
use crate::seed;
use crate::storage::Database;

/// Everything a command handler needs. Repositories are the source of truth
/// for a running process; mutations go through them first and are then
/// mirrored to the database.
pub struct AppContext {
    pub db: Database,
    pub students: StudentRepository,
    pub skills: SkillRepository,
    pub programs: ProgramRepository,
    /// Machine-readable JSON output requested
    pub json: bool,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = Config::load(cli.config.as_deref())?;
        let db_path = match &cli.db {
            Some(path) => path.clone(),
            None => config.database_path()?,
        };
        let db = Database::open(&db_path)?;

        let mut ctx = Self {
            db,
            students: StudentRepository::new(),
            skills: SkillRepository::new(),
            programs: ProgramRepository::new(),
            json: cli.output_format() == OutputFormat::Json,
        };
        ctx.bootstrap()?;
        Ok(ctx)
    }

    /// Load repositories from storage, or seed sample data on a first run.
    /// The two branches are mutually exclusive; there is no merge path.
    fn bootstrap(&mut self) -> Result<()> {
        if self.db.has_data()? {
            self.db.load_skills(&mut self.skills)?;
            self.db.load_students(&mut self.students)?;
            self.db.load_programs(&mut self.programs)?;
            // Archived students are skipped by the load but still hold their
            // ids; fresh ids must start past them.
            self.students.set_next_id(self.db.next_student_id()?);
            info!(
                students = self.students.count(),
                skills = self.skills.count(),
                programs = self.programs.count(),
                "loaded saved data"
            );
        } else {
            seed::load_sample_data(
                &mut self.students,
                &mut self.skills,
                &mut self.programs,
                &self.db,
            )?;
            info!("first run: sample data created and saved");
        }
        Ok(())
    }
}
