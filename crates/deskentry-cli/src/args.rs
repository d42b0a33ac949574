//! Command-line arguments.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use deskentry_core::{Category, LauncherSpec, Settings};

#[derive(Parser, Debug)]
#[command(name = "deskentry", version)]
#[command(about = "Create and install .desktop launchers")]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Settings file (defaults to ~/.config/deskentry/settings.json)
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Privilege escalation program for system installs
    #[arg(long, global = true)]
    pub helper: Option<String>,

    /// Shell the helper runs the install script with
    #[arg(long, global = true)]
    pub shell: Option<String>,

    /// Seconds to wait for the helper (0 = no limit)
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Directory for staging files
    #[arg(long, global = true)]
    pub temp_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a launcher and install it
    Create(CreateArgs),
    /// Print the launcher that would be created
    Preview(FieldArgs),
    /// Show the keys of an existing .desktop file
    Inspect {
        /// Path to the .desktop file
        file: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the selectable categories
    Categories,
}

#[derive(Args, Debug, Default)]
pub struct FieldArgs {
    /// Load fields from a JSON file; flags given alongside override it
    #[arg(long)]
    pub from_file: Option<PathBuf>,

    /// Launcher name shown in menus
    #[arg(short, long)]
    pub name: Option<String>,

    /// Command or path to execute
    #[arg(short, long)]
    pub exec: Option<String>,

    /// Icon name or path
    #[arg(short, long)]
    pub icon: Option<String>,

    /// Tooltip comment
    #[arg(short, long)]
    pub comment: Option<String>,

    /// Run inside a terminal
    #[arg(short, long)]
    pub terminal: bool,

    /// Menu category (repeatable or comma-separated)
    #[arg(long = "category", value_delimiter = ',', value_parser = parse_category)]
    pub categories: Vec<Category>,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    #[command(flatten)]
    pub fields: FieldArgs,

    /// Where to install the launcher
    #[arg(long, value_enum)]
    pub target: Option<TargetKind>,

    /// Directory for --target custom
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Resolve the destination and print it without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetKind {
    User,
    System,
    Custom,
}

impl TargetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetKind::User => "user",
            TargetKind::System => "system",
            TargetKind::Custom => "custom",
        }
    }
}

fn parse_category(s: &str) -> std::result::Result<Category, String> {
    s.parse().map_err(|e: deskentry_core::DeskEntryError| e.to_string())
}

impl Cli {
    /// Apply command-line overrides on top of file settings.
    pub fn apply_overrides(&self, mut settings: Settings) -> Settings {
        if let Some(helper) = &self.helper {
            settings.helper = Some(helper.clone());
        }
        if let Some(shell) = &self.shell {
            settings.shell = Some(shell.clone());
        }
        if let Some(timeout) = self.timeout_secs {
            settings.timeout_secs = Some(timeout);
        }
        if let Some(temp_dir) = &self.temp_dir {
            settings.temp_dir = Some(temp_dir.clone());
        }
        settings
    }
}

impl FieldArgs {
    /// Collect the launcher fields: the JSON file first, then flags.
    pub fn to_spec(&self) -> Result<LauncherSpec> {
        let mut spec = match &self.from_file {
            Some(path) => LauncherSpec::from_json_file(path)?,
            None => LauncherSpec::default(),
        };

        if let Some(name) = &self.name {
            spec.name = name.clone();
        }
        if let Some(exec) = &self.exec {
            spec.exec = exec.clone();
        }
        if let Some(icon) = &self.icon {
            spec.icon = Some(icon.clone());
        }
        if let Some(comment) = &self.comment {
            spec.comment = Some(comment.clone());
        }
        if self.terminal {
            spec.terminal = true;
        }
        spec.categories.extend(self.categories.iter().copied());

        Ok(spec)
    }
}
