//! stt skill - define and browse skills

use clap::{Args, Subcommand};
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::emit_json;
use crate::error::Result;
use crate::model::skill::DEFAULT_PASSING_SCORE;
use crate::model::Skill;

#[derive(Subcommand, Debug)]
pub enum SkillCommand {
    /// Define a new skill
    Add(AddArgs),
    /// List skills, optionally filtered by category
    List(ListArgs),
    /// List distinct skill categories
    Categories,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Skill name
    #[arg(long)]
    pub name: String,

    /// Short description
    #[arg(long, default_value = "")]
    pub description: String,

    /// Free-text grouping label
    #[arg(long)]
    pub category: String,

    /// Score required to complete the skill (0-100)
    #[arg(long, default_value_t = DEFAULT_PASSING_SCORE)]
    pub passing_score: i64,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only skills in this category (case-insensitive)
    #[arg(long)]
    pub category: Option<String>,
}

pub fn run(ctx: &mut AppContext, command: &SkillCommand) -> Result<()> {
    match command {
        SkillCommand::Add(args) => add(ctx, args),
        SkillCommand::List(args) => list(ctx, args),
        SkillCommand::Categories => categories(ctx),
    }
}

fn add(ctx: &mut AppContext, args: &AddArgs) -> Result<()> {
    let skill = ctx.skills.add(
        args.name.clone(),
        args.description.clone(),
        args.category.clone(),
        args.passing_score,
    )?;
    ctx.db.save_skill(skill)?;

    if ctx.json {
        emit_json(skill)
    } else {
        println!("Added {skill}");
        Ok(())
    }
}

fn list(ctx: &mut AppContext, args: &ListArgs) -> Result<()> {
    let skills: Vec<&Skill> = match &args.category {
        Some(category) => ctx.skills.by_category(category).collect(),
        None => ctx.skills.all().iter().collect(),
    };

    if ctx.json {
        return emit_json(&skills);
    }

    if skills.is_empty() {
        println!("{}", "No skills found".dimmed());
        return Ok(());
    }
    println!(
        "{:>4}  {:28} {:18} {}",
        "ID".bold(),
        "NAME".bold(),
        "CATEGORY".bold(),
        "PASS".bold()
    );
    for skill in skills {
        println!(
            "{:>4}  {:28} {:18} {:>3}%",
            skill.id, skill.name, skill.category, skill.passing_score
        );
    }
    Ok(())
}

fn categories(ctx: &mut AppContext) -> Result<()> {
    let categories = ctx.skills.categories();
    if ctx.json {
        return emit_json(&categories);
    }
    for category in categories {
        println!("{category}");
    }
    Ok(())
}
