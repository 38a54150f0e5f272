//! CLI command implementations
//!
//! Each subcommand group has its own module with a `Subcommand` enum, `Args`
//! structs, and a `run()` function. Mutations go through the repositories
//! first, then mirror to the database.

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::Result;

pub mod program;
pub mod report;
pub mod skill;
pub mod student;

/// Dispatch a command to its handler
pub fn run(ctx: &mut AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Student(cmd) => student::run(ctx, cmd),
        Commands::Skill(cmd) => skill::run(ctx, cmd),
        Commands::Program(cmd) => program::run(ctx, cmd),
        Commands::Report(cmd) => report::run(ctx, cmd),
    }
}
