//! Training program repository

use crate::error::Result;
use crate::model::TrainingProgram;

#[derive(Debug, Default)]
pub struct ProgramRepository {
    programs: Vec<TrainingProgram>,
    next_id: i64,
}

impl ProgramRepository {
    pub fn new() -> Self {
        Self {
            programs: Vec::new(),
            next_id: 1,
        }
    }

    pub fn add(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        minimum_passing_percentage: i64,
    ) -> Result<&TrainingProgram> {
        let program = TrainingProgram::new(
            self.next_id,
            name,
            description,
            minimum_passing_percentage,
        )?;
        self.next_id += 1;
        self.programs.push(program);
        Ok(self.programs.last().expect("just pushed"))
    }

    /// Restore a program under a known id, advancing the counter past it.
    pub fn add_with_id(
        &mut self,
        id: i64,
        name: impl Into<String>,
        description: impl Into<String>,
        minimum_passing_percentage: i64,
    ) -> Result<&mut TrainingProgram> {
        let program = TrainingProgram::new(id, name, description, minimum_passing_percentage)?;
        if id >= self.next_id {
            self.next_id = id + 1;
        }
        self.programs.push(program);
        Ok(self.programs.last_mut().expect("just pushed"))
    }

    pub fn get(&self, id: i64) -> Option<&TrainingProgram> {
        self.programs.iter().find(|p| p.id == id)
    }

    pub fn get_mut(&mut self, id: i64) -> Option<&mut TrainingProgram> {
        self.programs.iter_mut().find(|p| p.id == id)
    }

    /// All programs in insertion order.
    pub fn all(&self) -> &[TrainingProgram] {
        &self.programs
    }

    pub fn count(&self) -> usize {
        self.programs.len()
    }
}
