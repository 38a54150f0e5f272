//! stt report - progress analytics and certification readiness

use clap::{Args, Subcommand};
use colored::Colorize;

use crate::analytics::ProgressAnalyzer;
use crate::app::AppContext;
use crate::cli::output::{colored_percentage, emit_json};
use crate::error::{Result, TrackerError};

#[derive(Subcommand, Debug)]
pub enum ReportCommand {
    /// Full per-skill progress summary for one student
    Summary {
        /// Student id
        student_id: i64,
    },
    /// Certification readiness for one student in one program
    Readiness {
        /// Student id
        student_id: i64,
        /// Program id
        program_id: i64,
    },
    /// Skills with the largest gap to their passing score
    Attention(AttentionArgs),
    /// Class-wide statistics over all active students
    Class,
}

#[derive(Args, Debug)]
pub struct AttentionArgs {
    /// Student id
    pub student_id: i64,

    /// Maximum number of skills to show
    #[arg(long, short = 'n', default_value = "3")]
    pub count: usize,
}

pub fn run(ctx: &mut AppContext, command: &ReportCommand) -> Result<()> {
    match command {
        ReportCommand::Summary { student_id } => summary(ctx, *student_id),
        ReportCommand::Readiness {
            student_id,
            program_id,
        } => readiness(ctx, *student_id, *program_id),
        ReportCommand::Attention(args) => attention(ctx, args),
        ReportCommand::Class => class(ctx),
    }
}

fn summary(ctx: &AppContext, student_id: i64) -> Result<()> {
    let student = ctx
        .students
        .get(student_id)
        .ok_or(TrackerError::StudentNotFound(student_id))?;
    let analyzer = ProgressAnalyzer::new(&ctx.skills);
    let summary = analyzer.progress_summary(student);

    if ctx.json {
        return emit_json(&summary);
    }

    println!(
        "{} - overall {}",
        student.name.bold(),
        colored_percentage(summary.overall_percentage)
    );
    if !summary.completed.is_empty() {
        println!("{}", "Completed".green().bold());
        for item in &summary.completed {
            println!("  {:28} {:>3}%", item.skill.name, item.score);
        }
    }
    if !summary.in_progress.is_empty() {
        println!("{}", "In progress".yellow().bold());
        for item in &summary.in_progress {
            println!(
                "  {:28} {:>3}% (pass {}%)",
                item.skill.name, item.score, item.skill.passing_score
            );
        }
    }
    if !summary.not_started.is_empty() {
        println!("{}", "Not started".dimmed().bold());
        for skill in &summary.not_started {
            println!("  {:28}", skill.name);
        }
    }
    Ok(())
}

fn readiness(ctx: &AppContext, student_id: i64, program_id: i64) -> Result<()> {
    let student = ctx
        .students
        .get(student_id)
        .ok_or(TrackerError::StudentNotFound(student_id))?;
    let program = ctx
        .programs
        .get(program_id)
        .ok_or(TrackerError::ProgramNotFound(program_id))?;
    let analyzer = ProgressAnalyzer::new(&ctx.skills);
    let readiness = analyzer.certification_readiness(student, program);

    if ctx.json {
        return emit_json(&readiness);
    }

    println!("{} / {}", student.name.bold(), program.name.bold());
    println!(
        "Readiness: {} (minimum {}%)",
        colored_percentage(readiness.readiness_percentage),
        program.minimum_passing_percentage
    );
    let verdict = if readiness.is_ready {
        "READY FOR CERTIFICATION".green().bold()
    } else {
        "not ready".red()
    };
    println!("Verdict: {verdict}");
    for skill in &readiness.completed_skills {
        println!("  {} {}", "done".green(), skill.name);
    }
    for skill in &readiness.incomplete_skills {
        println!("  {} {}", "todo".red(), skill.name);
    }
    Ok(())
}

fn attention(ctx: &AppContext, args: &AttentionArgs) -> Result<()> {
    let student = ctx
        .students
        .get(args.student_id)
        .ok_or(TrackerError::StudentNotFound(args.student_id))?;
    let analyzer = ProgressAnalyzer::new(&ctx.skills);
    let items = analyzer.skills_needing_attention(student, args.count);

    if ctx.json {
        return emit_json(&items);
    }

    if items.is_empty() {
        println!("{}", "Nothing needs attention".green());
        return Ok(());
    }
    println!("{} - skills needing attention", student.name.bold());
    for item in &items {
        println!(
            "  {:28} {:>3}% of {:>3}%  gap {}",
            item.skill.name,
            item.score,
            item.skill.passing_score,
            item.gap.to_string().red()
        );
    }
    Ok(())
}

fn class(ctx: &AppContext) -> Result<()> {
    let analyzer = ProgressAnalyzer::new(&ctx.skills);
    let stats = analyzer.class_statistics(ctx.students.all());

    if ctx.json {
        return emit_json(&stats);
    }

    println!("{}", "Class statistics".bold());
    println!("  Students: {}", stats.total_students);
    println!("  Average:  {}", colored_percentage(stats.average_progress));
    println!("  Highest:  {}", colored_percentage(stats.highest_progress));
    println!("  Lowest:   {}", colored_percentage(stats.lowest_progress));
    if !stats.top_performers.is_empty() {
        println!("{}", "Top performers".green().bold());
        for entry in &stats.top_performers {
            println!(
                "  {:24} {}",
                entry.name,
                colored_percentage(entry.progress)
            );
        }
    }
    if !stats.needing_support.is_empty() {
        println!("{}", "Needing support (< 50%)".red().bold());
        for entry in &stats.needing_support {
            println!(
                "  {:24} {}",
                entry.name,
                colored_percentage(entry.progress)
            );
        }
    }
    Ok(())
}
