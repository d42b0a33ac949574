//! deskentry - create and install .desktop launchers from the command line.
//!
//! Collects launcher fields from flags or a JSON file, builds the desktop
//! entry and installs it for the user, system-wide, or into a custom
//! directory.

mod args;
mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use deskentry_core::{DeskEntryError, Settings};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use args::{Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging; stdout is reserved for command output
    let log_level = if cli.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let desk_err = err.downcast_ref::<DeskEntryError>();
            let title = desk_err.map(DeskEntryError::title).unwrap_or("Error");
            let code = desk_err.map(DeskEntryError::exit_code).unwrap_or(1);

            eprintln!("{}: {:#}", title, err);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Create(args) => {
            let settings = load_settings(cli)?;
            commands::create(args, &settings)
        }
        Command::Preview(fields) => commands::preview(fields),
        Command::Inspect { file, json } => commands::inspect(file, *json),
        Command::Categories => {
            commands::categories();
            Ok(())
        }
    }
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    let settings = match &cli.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::load_default()?,
    };
    let settings = cli.apply_overrides(settings);
    debug!("Effective settings: {:?}", settings);
    Ok(settings)
}
