// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};

use crate::actions::Action;

/// Command-line arguments for `buildy`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "buildy",
    version,
    about = "Buildy - A wrapper to run various commands",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Buildy.toml` in the current working directory. A missing
    /// default file is fine; built-in defaults are used instead.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `BUILDY_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    /// Print the command that would run, but don't run it.
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Build the Docker image
    Build {
        /// Tag for the Docker image
        #[arg(long, default_value = "latest")]
        tag: String,
    },

    /// Run docker compose up
    Up {
        /// Run containers in detached mode
        #[arg(short, long)]
        detached: bool,
    },

    /// Clean orphan containers
    Clean,

    /// Run some other command
    Other,
}

impl From<Commands> for Action {
    fn from(cmd: Commands) -> Self {
        match cmd {
            Commands::Build { tag } => Action::Build { tag },
            Commands::Up { detached } => Action::Up { detached },
            Commands::Clean => Action::Clean,
            Commands::Other => Action::Other,
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

/// Print the top-level help text to stdout.
pub fn print_help() -> std::io::Result<()> {
    CliArgs::command().print_help()?;
    println!();
    Ok(())
}
