// src/lib.rs

pub mod actions;
pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;

use std::path::Path;

use tracing::debug;

use crate::actions::Action;
use crate::cli::CliArgs;
use crate::config::resolve_config;
use crate::errors::Result;
use crate::exec::{run_command, ConsoleSink, OutputSink};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config resolution
/// - subcommand → command line expansion
/// - the real-time runner, writing to the console
///
/// With no subcommand the help text is printed and nothing runs.
pub async fn run(args: CliArgs) -> Result<()> {
    let mut sink = ConsoleSink::stdio();
    run_with_sink(args, &mut sink).await
}

/// Same as [`run`], but with the output sink supplied by the caller.
pub async fn run_with_sink(args: CliArgs, sink: &mut dyn OutputSink) -> Result<()> {
    let Some(command) = args.command else {
        cli::print_help()?;
        return Ok(());
    };

    let cfg = resolve_config(args.config.as_deref().map(Path::new))?;
    let action = Action::from(command);
    let command_line = action.command_line(&cfg);

    if args.dry_run {
        sink.line(&command_line);
        debug!(?action, "dry-run complete (no execution)");
        return Ok(());
    }

    run_command(&command_line, &cfg.shell, sink).await;
    Ok(())
}
