use std::time::Instant;

use buildy::exec::{OutputSink, SinkEvent};

/// An event plus the moment the runner handed it to the sink.
#[derive(Debug, Clone)]
pub struct RecordedEvent {
    pub at: Instant,
    pub event: SinkEvent,
}

/// A sink that:
/// - records every event the runner emits, in order
/// - timestamps each one, so tests can check lines arrive before exit.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Vec<RecordedEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recorded(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Events without timestamps.
    pub fn events(&self) -> Vec<SinkEvent> {
        self.events.iter().map(|r| r.event.clone()).collect()
    }

    /// Just the stdout lines, in the order they were streamed.
    pub fn lines(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|r| match &r.event {
                SinkEvent::Line(l) => Some(l.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn stderr_reports(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|r| match &r.event {
                SinkEvent::Stderr(s) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn failures(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|r| match &r.event {
                SinkEvent::Failure(s) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }

    fn push(&mut self, event: SinkEvent) {
        self.events.push(RecordedEvent {
            at: Instant::now(),
            event,
        });
    }
}

impl OutputSink for RecordingSink {
    fn announce(&mut self, command_line: &str) {
        self.push(SinkEvent::Announce(command_line.to_string()));
    }

    fn line(&mut self, line: &str) {
        self.push(SinkEvent::Line(line.to_string()));
    }

    fn stderr(&mut self, text: &str) {
        self.push(SinkEvent::Stderr(text.to_string()));
    }

    fn failure(&mut self, message: &str) {
        self.push(SinkEvent::Failure(message.to_string()));
    }
}
