// src/exec/sink.rs

//! Where the runner's output goes.
//!
//! The runner never writes to the console directly; it talks to an
//! [`OutputSink`]. Production code uses [`ConsoleSink`], tests can provide
//! their own implementation that records events.

use std::io::{self, Stdout, Write};

/// Receives everything the runner has to say about one invocation.
pub trait OutputSink: Send {
    /// The command line is about to be started.
    fn announce(&mut self, command_line: &str);

    /// One line of the child's stdout, trailing whitespace already trimmed.
    fn line(&mut self, line: &str);

    /// The child's collected stderr (trimmed, non-empty).
    fn stderr(&mut self, text: &str);

    /// The command could not be run at all.
    fn failure(&mut self, message: &str);
}

/// A single observable runner event, as recorded by test sinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Announce(String),
    Line(String),
    Stderr(String),
    Failure(String),
}

impl SinkEvent {
    /// The text [`ConsoleSink`] prints for this event.
    pub fn render(&self) -> String {
        match self {
            SinkEvent::Announce(cmd) => format!("Running command: {cmd}"),
            SinkEvent::Line(line) => line.clone(),
            SinkEvent::Stderr(text) => format!("Error: {text}"),
            SinkEvent::Failure(msg) => format!("Command failed with error: {msg}"),
        }
    }
}

/// Console sink used by the `buildy` binary.
///
/// Every event, error reports included, is written to `out` (stdout in
/// production), so `buildy build > build.log` captures the whole run. Each
/// write is flushed immediately so progress shows up even when stdout is a
/// pipe. Diagnostics from `tracing` stay on stderr.
pub struct ConsoleSink<O = Stdout> {
    out: O,
}

impl ConsoleSink {
    pub fn stdio() -> Self {
        Self::new(io::stdout())
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stdio()
    }
}

impl<O: Write> ConsoleSink<O> {
    pub fn new(out: O) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> O {
        self.out
    }

    // A closed console is not something the runner can report anywhere, so
    // write errors are dropped.
    fn emit(&mut self, text: &str) {
        let _ = writeln!(self.out, "{text}");
        let _ = self.out.flush();
    }
}

impl<O: Write + Send> OutputSink for ConsoleSink<O> {
    fn announce(&mut self, command_line: &str) {
        self.emit(&SinkEvent::Announce(command_line.to_string()).render());
    }

    fn line(&mut self, line: &str) {
        self.emit(line);
    }

    fn stderr(&mut self, text: &str) {
        self.emit(&SinkEvent::Stderr(text.to_string()).render());
    }

    fn failure(&mut self, message: &str) {
        self.emit(&SinkEvent::Failure(message.to_string()).render());
    }
}
