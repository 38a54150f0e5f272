//! CLI module - command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;

pub mod commands;
pub mod output;

/// Student skills tracker - track students, skills, and certification readiness
#[derive(Parser, Debug)]
#[command(name = "stt")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Database file path (default: platform data dir)
    #[arg(long, global = true, env = "STT_DB")]
    pub db: Option<PathBuf>,

    /// Config file path (default: ~/.config/stt/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage students
    #[command(subcommand)]
    Student(commands::student::StudentCommand),

    /// Manage skills
    #[command(subcommand)]
    Skill(commands::skill::SkillCommand),

    /// Manage training programs
    #[command(subcommand)]
    Program(commands::program::ProgramCommand),

    /// Progress and certification reports
    #[command(subcommand)]
    Report(commands::report::ReportCommand),
}

impl Cli {
    /// Effective output format for command handlers.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from_flag(self.json)
    }
}
