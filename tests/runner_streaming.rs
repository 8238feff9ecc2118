// tests/runner_streaming.rs
#![cfg(unix)]

mod common;
use crate::common::{init_tracing, run_sh};

use std::error::Error;
use std::time::{Duration, Instant};

use buildy::exec::SinkEvent;

type TestResult = Result<(), Box<dyn Error>>;

#[tokio::test]
async fn every_line_is_streamed_in_order() -> TestResult {
    init_tracing();

    let sink = run_sh("for i in 1 2 3 4 5; do echo \"line $i\"; done").await;

    assert_eq!(
        sink.lines(),
        vec!["line 1", "line 2", "line 3", "line 4", "line 5"]
    );
    assert!(sink.stderr_reports().is_empty());
    assert!(sink.failures().is_empty());
    Ok(())
}

#[tokio::test]
async fn announcement_comes_first() -> TestResult {
    init_tracing();

    let sink = run_sh("echo hello").await;

    assert_eq!(
        sink.events(),
        vec![
            SinkEvent::Announce("echo hello".into()),
            SinkEvent::Line("hello".into()),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn lines_arrive_before_the_command_finishes() -> TestResult {
    init_tracing();

    let started = Instant::now();
    let sink = run_sh("echo first; sleep 1; echo second").await;
    let finished = Instant::now();

    let lines: Vec<_> = sink
        .recorded()
        .iter()
        .filter(|r| matches!(r.event, SinkEvent::Line(_)))
        .collect();
    assert_eq!(lines.len(), 2);

    // The first line must have been seen well before the sleep ended.
    let lead = finished.duration_since(lines[0].at);
    assert!(
        lead >= Duration::from_millis(700),
        "first line only {:?} before exit (total run {:?})",
        lead,
        finished.duration_since(started)
    );
    assert!(lines[1].at.duration_since(lines[0].at) >= Duration::from_millis(700));
    Ok(())
}

#[tokio::test]
async fn trailing_whitespace_is_trimmed_but_blank_lines_kept() -> TestResult {
    init_tracing();

    let sink = run_sh("printf '  indented  \\n\\nlast\\t\\r\\n'").await;

    assert_eq!(sink.lines(), vec!["  indented", "", "last"]);
    Ok(())
}

#[tokio::test]
async fn final_line_without_newline_is_still_emitted() -> TestResult {
    init_tracing();

    let sink = run_sh("printf 'one\\ntwo'").await;

    assert_eq!(sink.lines(), vec!["one", "two"]);
    Ok(())
}

#[tokio::test]
async fn empty_stdout_is_fine() -> TestResult {
    init_tracing();

    let sink = run_sh("true").await;

    assert_eq!(sink.events(), vec![SinkEvent::Announce("true".into())]);
    Ok(())
}

#[tokio::test]
async fn invalid_utf8_is_replaced_not_fatal() -> TestResult {
    init_tracing();

    let sink = run_sh("printf 'caf\\377\\n'; echo after").await;

    let lines = sink.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("caf"));
    assert!(lines[0].contains('\u{FFFD}'));
    assert_eq!(lines[1], "after");
    assert!(sink.failures().is_empty());
    Ok(())
}

#[tokio::test]
async fn shell_features_are_interpreted() -> TestResult {
    init_tracing();

    let sink = run_sh("GREETING=hi; echo \"$GREETING there\" | tr a-z A-Z").await;

    assert_eq!(sink.lines(), vec!["HI THERE"]);
    Ok(())
}

#[tokio::test]
async fn running_twice_gives_identical_output() -> TestResult {
    init_tracing();

    let script = "echo alpha; echo beta >&2; echo gamma";
    let first = run_sh(script).await;
    let second = run_sh(script).await;

    assert_eq!(first.events(), second.events());
    assert_eq!(first.lines(), vec!["alpha", "gamma"]);
    assert_eq!(first.stderr_reports(), vec!["beta"]);
    Ok(())
}

#[tokio::test]
async fn heavy_stderr_does_not_stall_stdout() -> TestResult {
    init_tracing();

    // Roughly 300 KiB of stderr, far beyond a pipe buffer, before any stdout.
    let script = "i=0; while [ $i -lt 5000 ]; do \
                  echo \"stderr noise line $i ..............................\" >&2; \
                  i=$((i+1)); done; echo done";
    let sink = run_sh(script).await;

    assert_eq!(sink.lines(), vec!["done"]);
    let reports = sink.stderr_reports();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].lines().count(), 5000);
    Ok(())
}

#[tokio::test]
async fn background_job_holding_stdout_is_waited_for() -> TestResult {
    init_tracing();

    let sink = run_sh("(sleep 0.3; echo late) & echo early").await;

    assert_eq!(sink.lines(), vec!["early", "late"]);
    Ok(())
}
