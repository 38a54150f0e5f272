//! First-run sample data
//!
//! Runs only when the database is empty. Everything seeded here is saved
//! immediately so the next start takes the load branch instead.

use crate::error::Result;
use crate::repo::{ProgramRepository, SkillRepository, StudentRepository};
use crate::storage::Database;

pub fn load_sample_data(
    students: &mut StudentRepository,
    skills: &mut SkillRepository,
    programs: &mut ProgramRepository,
    db: &Database,
) -> Result<()> {
    // Skills by category
    let rust = skills.add("Rust Fundamentals", "Ownership, traits, and error handling", "Programming", 70)?.id;
    let sql = skills.add("SQL & Databases", "Schema design, queries, and data management", "Programming", 65)?.id;
    let git = skills.add("Git Version Control", "Branching, merging, and collaboration", "Programming", 60)?.id;
    let testing = skills.add("Testing & Debugging", "Unit tests, integration tests, and debuggers", "Programming", 70)?.id;

    let html = skills.add("HTML/CSS", "Markup and styling fundamentals", "Web Development", 70)?.id;
    let js = skills.add("JavaScript", "Client-side scripting and DOM manipulation", "Web Development", 70)?.id;
    let api = skills.add("Backend APIs", "Designing and building HTTP services", "Web Development", 75)?.id;

    let communication = skills.add("Communication", "Clear written and verbal communication", "Soft Skills", 70)?.id;
    let teamwork = skills.add("Teamwork", "Collaborative work and team dynamics", "Soft Skills", 65)?.id;
    let problem_solving = skills.add("Problem Solving", "Analytical thinking and solution development", "Soft Skills", 70)?.id;

    for skill in skills.all() {
        db.save_skill(skill)?;
    }

    // Students with varied progress
    let samples: &[(&str, &str, &[(i64, i64)])] = &[
        (
            "Sarah Johnson",
            "sarah.johnson@example.com",
            &[(rust, 85), (sql, 72), (git, 90), (testing, 78), (html, 88), (js, 65), (communication, 82)],
        ),
        (
            "Michael Chen",
            "michael.chen@example.com",
            &[(rust, 92), (sql, 95), (git, 85), (testing, 88), (api, 80), (problem_solving, 90)],
        ),
        (
            "Emily Davis",
            "emily.davis@example.com",
            &[(rust, 55), (testing, 45), (html, 70), (js, 60), (teamwork, 85)],
        ),
        (
            "James Wilson",
            "james.wilson@example.com",
            &[(rust, 78), (sql, 82), (git, 75), (communication, 88), (teamwork, 90), (problem_solving, 85)],
        ),
        (
            "Lisa Thompson",
            "lisa.thompson@example.com",
            &[(html, 95), (js, 88), (api, 72)],
        ),
    ];
    for (name, email, progress) in samples {
        let id = students.add(*name, *email)?.id;
        let student = students.get_mut(id).expect("just added");
        for &(skill_id, score) in progress.iter() {
            student.update_skill_progress(skill_id, score)?;
        }
    }
    for student in students.all() {
        db.save_student(student)?;
    }

    // Certification tracks
    let track_specs: &[(&str, &str, i64, &[i64])] = &[
        (
            "Full Stack Developer",
            "Complete web development track covering front-end, back-end, and databases",
            100,
            &[rust, sql, html, js, api, git],
        ),
        (
            "Backend Developer",
            "Server-side development with Rust and databases",
            100,
            &[rust, sql, api, testing],
        ),
        (
            "Programming Foundations",
            "Entry-level programming concepts and tools",
            80,
            &[rust, git, problem_solving],
        ),
    ];
    for (name, description, minimum, required) in track_specs {
        let id = programs.add(*name, *description, *minimum)?.id;
        let program = programs.get_mut(id).expect("just added");
        for &skill_id in required.iter() {
            program.add_required_skill(skill_id);
        }
    }
    for program in programs.all() {
        db.save_program(program)?;
    }

    Ok(())
}
