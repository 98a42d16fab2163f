use clap::Parser;
use colored::Colorize;
use tracing::info;

use techfocus::cli::args::{Cli, Commands};
use techfocus::cli::commands;
use techfocus::config::{Config, Paths};
use techfocus::error::FocusError;
use techfocus::focus::SessionStore;
use techfocus::logging;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), FocusError> {
    let cli = Cli::parse();
    let paths = Paths::new()?;
    let config = Config::load_from_path(&paths.config_file)?;

    paths.ensure_dirs()?;
    logging::enable_logging(&paths, &config.logging)
        .map_err(|e| FocusError::Config(format!("Failed to start logging: {e}")))?;
    info!(database = %paths.database.display(), "starting");

    let store = SessionStore::open_at(&paths.database)?;

    let output = match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            commands::tui(store, &config)?;
            String::new()
        }
        Commands::Report => commands::report(&store, cli.output)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
