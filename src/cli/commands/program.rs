//! stt program - manage certification tracks

use clap::{Args, Subcommand};
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::emit_json;
use crate::error::{Result, TrackerError};
use crate::model::TrainingProgram;

#[derive(Subcommand, Debug)]
pub enum ProgramCommand {
    /// Create a new training program
    Add(AddArgs),
    /// List training programs
    List,
    /// Show one program with its required skills
    Show {
        /// Program id
        id: i64,
    },
    /// Add a required skill to a program
    AddSkill {
        /// Program id
        program_id: i64,
        /// Skill id
        skill_id: i64,
    },
    /// Remove a required skill from a program
    RemoveSkill {
        /// Program id
        program_id: i64,
        /// Skill id
        skill_id: i64,
    },
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Program name
    #[arg(long)]
    pub name: String,

    /// Short description
    #[arg(long, default_value = "")]
    pub description: String,

    /// Percentage of required skills that must be completed (0-100)
    #[arg(long, default_value_t = 100)]
    pub minimum: i64,
}

pub fn run(ctx: &mut AppContext, command: &ProgramCommand) -> Result<()> {
    match command {
        ProgramCommand::Add(args) => add(ctx, args),
        ProgramCommand::List => list(ctx),
        ProgramCommand::Show { id } => show(ctx, *id),
        ProgramCommand::AddSkill {
            program_id,
            skill_id,
        } => add_skill(ctx, *program_id, *skill_id),
        ProgramCommand::RemoveSkill {
            program_id,
            skill_id,
        } => remove_skill(ctx, *program_id, *skill_id),
    }
}

fn add(ctx: &mut AppContext, args: &AddArgs) -> Result<()> {
    let program = ctx.programs.add(
        args.name.clone(),
        args.description.clone(),
        args.minimum,
    )?;
    ctx.db.save_program(program)?;

    if ctx.json {
        emit_json(program)
    } else {
        println!("Created {program}");
        Ok(())
    }
}

fn list(ctx: &mut AppContext) -> Result<()> {
    let programs = ctx.programs.all();
    if ctx.json {
        return emit_json(&programs);
    }

    if programs.is_empty() {
        println!("{}", "No training programs".dimmed());
        return Ok(());
    }
    for program in programs {
        println!("{program}");
    }
    Ok(())
}

fn show(ctx: &mut AppContext, id: i64) -> Result<()> {
    let program = ctx
        .programs
        .get(id)
        .ok_or(TrackerError::ProgramNotFound(id))?;
    if ctx.json {
        return emit_json(program);
    }

    println!("{program}");
    if !program.description.is_empty() {
        println!("  {}", program.description);
    }
    for &skill_id in &program.required_skill_ids {
        match ctx.skills.get(skill_id) {
            Some(skill) => println!("  - {skill}"),
            // Dangling references are tolerated, not fatal
            None => println!("  - {}", format!("skill {skill_id} (missing)").dimmed()),
        }
    }
    Ok(())
}

fn add_skill(ctx: &mut AppContext, program_id: i64, skill_id: i64) -> Result<()> {
    if ctx.skills.get(skill_id).is_none() {
        return Err(TrackerError::SkillNotFound(skill_id));
    }
    let program = ctx
        .programs
        .get_mut(program_id)
        .ok_or(TrackerError::ProgramNotFound(program_id))?;
    program.add_required_skill(skill_id);
    let program: &TrainingProgram = program;
    ctx.db.save_program(program)?;

    if ctx.json {
        emit_json(program)
    } else {
        println!("{program}");
        Ok(())
    }
}

fn remove_skill(ctx: &mut AppContext, program_id: i64, skill_id: i64) -> Result<()> {
    let program = ctx
        .programs
        .get_mut(program_id)
        .ok_or(TrackerError::ProgramNotFound(program_id))?;
    program.remove_required_skill(skill_id);
    let program: &TrainingProgram = program;
    ctx.db.save_program(program)?;

    if ctx.json {
        emit_json(program)
    } else {
        println!("{program}");
        Ok(())
    }
}
