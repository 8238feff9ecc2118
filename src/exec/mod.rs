// src/exec/mod.rs

//! Process execution layer.
//!
//! This module is responsible for actually running a command line through
//! the host shell, using `tokio::process::Command`, and streaming what the
//! child prints to an [`OutputSink`].
//!
//! - [`runner`] owns [`run_command`]: spawn, stream stdout live, report
//!   stderr once the child has exited.
//! - [`shell`] builds the `<shell> <flag> <command line>` invocation.
//! - [`sink`] provides the `OutputSink` trait and the production
//!   `ConsoleSink`; tests plug in a recording sink instead.

pub mod runner;
pub mod shell;
pub mod sink;

pub use runner::run_command;
pub use shell::shell_command;
pub use sink::{ConsoleSink, OutputSink, SinkEvent};
