//! Student repository

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::model::Student;

#[derive(Debug, Default)]
pub struct StudentRepository {
    students: Vec<Student>,
    next_id: i64,
}

impl StudentRepository {
    pub fn new() -> Self {
        Self {
            students: Vec::new(),
            next_id: 1,
        }
    }

    /// Add a new student under the next free id.
    pub fn add(&mut self, name: impl Into<String>, email: impl Into<String>) -> Result<&Student> {
        let student = Student::new(self.next_id, name, email)?;
        self.next_id += 1;
        self.students.push(student);
        Ok(self.students.last().expect("just pushed"))
    }

    /// Restore a student under a known id, advancing the counter past it.
    pub fn add_with_id(
        &mut self,
        id: i64,
        name: impl Into<String>,
        email: impl Into<String>,
        enrolled_at: DateTime<Utc>,
    ) -> Result<&mut Student> {
        let student = Student::with_enrollment(id, name, email, enrolled_at)?;
        if id >= self.next_id {
            self.next_id = id + 1;
        }
        self.students.push(student);
        Ok(self.students.last_mut().expect("just pushed"))
    }

    /// Raise the next-id counter, e.g. past archived rows that were not
    /// loaded. Never lowers it.
    pub fn set_next_id(&mut self, next_id: i64) {
        self.next_id = self.next_id.max(next_id);
    }

    pub fn get(&self, id: i64) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    pub fn get_mut(&mut self, id: i64) -> Option<&mut Student> {
        self.students.iter_mut().find(|s| s.id == id)
    }

    /// All students in insertion order.
    pub fn all(&self) -> &[Student] {
        &self.students
    }

    pub fn count(&self) -> usize {
        self.students.len()
    }

    /// Remove from the active in-memory set. Storage archival is the
    /// persistence layer's concern.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.students.len();
        self.students.retain(|s| s.id != id);
        self.students.len() != before
    }

    /// Case-insensitive substring search on name.
    pub fn search_by_name<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a Student> {
        let query = query.to_lowercase();
        self.students
            .iter()
            .filter(move |s| s.name.to_lowercase().contains(&query))
    }
}
