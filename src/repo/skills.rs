//! Skill repository

use crate::error::Result;
use crate::model::Skill;

#[derive(Debug, Default)]
pub struct SkillRepository {
    skills: Vec<Skill>,
    next_id: i64,
}

impl SkillRepository {
    pub fn new() -> Self {
        Self {
            skills: Vec::new(),
            next_id: 1,
        }
    }

    pub fn add(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        passing_score: i64,
    ) -> Result<&Skill> {
        let skill = Skill::new(self.next_id, name, description, category, passing_score)?;
        self.next_id += 1;
        self.skills.push(skill);
        Ok(self.skills.last().expect("just pushed"))
    }

    /// Restore a skill under a known id, advancing the counter past it.
    pub fn add_with_id(
        &mut self,
        id: i64,
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        passing_score: i64,
    ) -> Result<&Skill> {
        let skill = Skill::new(id, name, description, category, passing_score)?;
        if id >= self.next_id {
            self.next_id = id + 1;
        }
        self.skills.push(skill);
        Ok(self.skills.last().expect("just pushed"))
    }

    pub fn get(&self, id: i64) -> Option<&Skill> {
        self.skills.iter().find(|s| s.id == id)
    }

    /// All skills in insertion order.
    pub fn all(&self) -> &[Skill] {
        &self.skills
    }

    pub fn count(&self) -> usize {
        self.skills.len()
    }

    /// Case-insensitive category filter.
    pub fn by_category<'a>(&'a self, category: &str) -> impl Iterator<Item = &'a Skill> {
        let category = category.to_lowercase();
        self.skills
            .iter()
            .filter(move |s| s.category.to_lowercase() == category)
    }

    /// Distinct categories, sorted.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self.skills.iter().map(|s| s.category.clone()).collect();
        categories.sort();
        categories.dedup();
        categories
    }
}
