use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "techfocus")]
#[command(about = "A focus timer that tracks weekly minutes per technology")]
#[command(long_about = "techfocus - focus cycles tagged by technology

Start a countdown for a task, tag it with the technology you are working
on, and see how your last 7 days split across technologies.

QUICK START:
  techfocus                 Open the timer and dashboard
  techfocus report          Print the weekly report
  techfocus report -o json  Weekly report as JSON

Data is kept in ./techfocus.db; settings are read from ./techfocus.yaml.")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive timer (default)
    ///
    /// Keys: Tab/Shift-Tab move between fields, Enter starts a cycle,
    /// Esc leaves the field, r or F5 refreshes the dashboard, q quits.
    Tui,

    /// Print minutes per technology for the last 7 days
    #[command(alias = "r")]
    Report,
}
