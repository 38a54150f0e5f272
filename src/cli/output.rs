//! Output helpers shared by command handlers

use colored::Colorize;
use serde::Serialize;

use crate::error::Result;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable formatted output with colors (default)
    #[default]
    Human,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    #[must_use]
    pub fn from_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }

    /// Check if this format should use colors
    #[must_use]
    pub const fn use_colors(&self) -> bool {
        matches!(self, OutputFormat::Human)
    }
}

/// Print a value as pretty JSON on stdout (machine mode).
pub fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Render a percentage with a color band: green when passing, yellow when
/// close, red otherwise.
pub fn colored_percentage(value: f64) -> colored::ColoredString {
    let text = format!("{value:.1}%");
    if value >= 70.0 {
        text.green()
    } else if value >= 50.0 {
        text.yellow()
    } else {
        text.red()
    }
}
