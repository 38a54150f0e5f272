//! stt student - enroll, list, update, archive, record progress

use clap::{Args, Subcommand};
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::emit_json;
use crate::error::{Result, TrackerError};
use crate::model::Student;

#[derive(Subcommand, Debug)]
pub enum StudentCommand {
    /// Enroll a new student
    Add(AddArgs),
    /// List active students
    List,
    /// Show one student with their progress records
    Show {
        /// Student id
        id: i64,
    },
    /// Update a student's name or email
    Update(UpdateArgs),
    /// Archive a student (kept in storage, removed from listings)
    Archive {
        /// Student id
        id: i64,
    },
    /// Search students by name (case-insensitive)
    Search {
        /// Substring to look for
        query: String,
    },
    /// Record a score for a skill
    Progress(ProgressArgs),
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Full name
    #[arg(long)]
    pub name: String,

    /// Email address
    #[arg(long)]
    pub email: String,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Student id
    pub id: i64,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New email
    #[arg(long)]
    pub email: Option<String>,
}

#[derive(Args, Debug)]
pub struct ProgressArgs {
    /// Student id
    pub id: i64,

    /// Skill id
    pub skill_id: i64,

    /// Score (0-100)
    pub score: i64,
}

pub fn run(ctx: &mut AppContext, command: &StudentCommand) -> Result<()> {
    match command {
        StudentCommand::Add(args) => add(ctx, args),
        StudentCommand::List => list(ctx),
        StudentCommand::Show { id } => show(ctx, *id),
        StudentCommand::Update(args) => update(ctx, args),
        StudentCommand::Archive { id } => archive(ctx, *id),
        StudentCommand::Search { query } => search(ctx, query),
        StudentCommand::Progress(args) => progress(ctx, args),
    }
}

fn add(ctx: &mut AppContext, args: &AddArgs) -> Result<()> {
    let student = ctx.students.add(args.name.clone(), args.email.clone())?;
    ctx.db.save_student(student)?;

    if ctx.json {
        emit_json(student)
    } else {
        println!("Enrolled {student}");
        Ok(())
    }
}

fn list(ctx: &mut AppContext) -> Result<()> {
    let students = ctx.students.all();
    if ctx.json {
        return emit_json(&students);
    }

    if students.is_empty() {
        println!("{}", "No students enrolled".dimmed());
        return Ok(());
    }
    println!(
        "{:>4}  {:24} {:30} {}",
        "ID".bold(),
        "NAME".bold(),
        "EMAIL".bold(),
        "ENROLLED".bold()
    );
    for student in students {
        println!(
            "{:>4}  {:24} {:30} {}",
            student.id,
            student.name,
            student.email,
            student.enrolled_at.format("%Y-%m-%d")
        );
    }
    Ok(())
}

fn show(ctx: &mut AppContext, id: i64) -> Result<()> {
    let student = lookup(ctx, id)?;
    if ctx.json {
        return emit_json(student);
    }

    println!("{student}");
    if student.progress.is_empty() {
        println!("  {}", "no progress recorded".dimmed());
        return Ok(());
    }
    for record in &student.progress {
        let skill_name = ctx
            .skills
            .get(record.skill_id)
            .map_or("(unknown skill)", |s| s.name.as_str());
        println!(
            "  {:28} {:>3}%  {}  updated {}",
            skill_name,
            record.current_score,
            record.status,
            record.last_updated.format("%Y-%m-%d %H:%M")
        );
    }
    Ok(())
}

fn update(ctx: &mut AppContext, args: &UpdateArgs) -> Result<()> {
    let student = ctx
        .students
        .get_mut(args.id)
        .ok_or(TrackerError::StudentNotFound(args.id))?;
    if let Some(name) = &args.name {
        student.update_name(name.clone())?;
    }
    if let Some(email) = &args.email {
        student.update_email(email.clone())?;
    }
    let student: &Student = student;
    ctx.db.save_student(student)?;

    if ctx.json {
        emit_json(student)
    } else {
        println!("Updated {student}");
        Ok(())
    }
}

fn archive(ctx: &mut AppContext, id: i64) -> Result<()> {
    if !ctx.students.remove(id) {
        return Err(TrackerError::StudentNotFound(id));
    }
    ctx.db.archive_student(id)?;

    if ctx.json {
        emit_json(&serde_json::json!({ "archived": id }))
    } else {
        println!("Archived student {id}");
        Ok(())
    }
}

fn search(ctx: &mut AppContext, query: &str) -> Result<()> {
    let hits: Vec<&Student> = ctx.students.search_by_name(query).collect();
    if ctx.json {
        return emit_json(&hits);
    }

    if hits.is_empty() {
        println!("{}", "No matching students".dimmed());
        return Ok(());
    }
    for student in hits {
        println!("{student}");
    }
    Ok(())
}

fn progress(ctx: &mut AppContext, args: &ProgressArgs) -> Result<()> {
    // Resolve the skill first so a typo'd id fails before any mutation
    let skill_name = ctx
        .skills
        .get(args.skill_id)
        .ok_or(TrackerError::SkillNotFound(args.skill_id))?
        .name
        .clone();
    let student = ctx
        .students
        .get_mut(args.id)
        .ok_or(TrackerError::StudentNotFound(args.id))?;
    student.update_skill_progress(args.skill_id, args.score)?;
    let student: &Student = student;
    ctx.db.save_student(student)?;

    let record = student
        .skill_progress(args.skill_id)
        .expect("record just written");
    if ctx.json {
        emit_json(record)
    } else {
        println!(
            "{}: {} now {}% ({})",
            student.name, skill_name, record.current_score, record.status
        );
        Ok(())
    }
}

fn lookup(ctx: &AppContext, id: i64) -> Result<&Student> {
    ctx.students
        .get(id)
        .ok_or(TrackerError::StudentNotFound(id))
}
