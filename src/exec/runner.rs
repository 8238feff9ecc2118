// src/exec/runner.rs

//! Real-time command runner.

use std::process::Stdio;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, BufReader};
use tokio::process::{Child, ChildStderr};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::config::ShellConfig;
use crate::exec::shell::shell_command;
use crate::exec::sink::OutputSink;

/// Run `command_line` through the host shell, streaming its stdout to `sink`
/// line by line while the child runs.
///
/// Once stdout is closed the child is reaped and its stderr, if any, is
/// reported through [`OutputSink::stderr`] whatever the exit status was.
///
/// This never returns an error: a command that cannot be started is reported
/// through [`OutputSink::failure`] and logged via `tracing::error!`. In every
/// case the child has been reaped by the time this returns.
pub async fn run_command(command_line: &str, shell: &ShellConfig, sink: &mut dyn OutputSink) {
    info!(cmd = %command_line, shell = %shell.program, "running command");
    sink.announce(command_line);

    if let Err(err) = run_command_inner(command_line, shell, sink).await {
        error!(cmd = %command_line, error = %err, "command execution error");
        sink.failure(&format!("{err:#}"));
    }
}

async fn run_command_inner(
    command_line: &str,
    shell: &ShellConfig,
    sink: &mut dyn OutputSink,
) -> Result<()> {
    let mut cmd = shell_command(shell, command_line);
    cmd.stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let mut child = cmd
        .spawn()
        .with_context(|| format!("spawning shell '{}'", shell.program))?;
    debug!(pid = ?child.id(), "child process started");

    // Drain stderr in the background so a chatty child can't stall on a full
    // pipe while we block on stdout. It's only reported after exit.
    let stderr_task = child.stderr.take().map(|stderr| tokio::spawn(collect_stderr(stderr)));

    let streamed = match child.stdout.take() {
        Some(stdout) => stream_lines(stdout, sink).await,
        None => Ok(0),
    };

    let lines = match streamed {
        Ok(lines) => lines,
        Err(err) => {
            abandon(&mut child, stderr_task).await;
            return Err(err);
        }
    };

    let status = match child.wait().await.context("waiting for child process") {
        Ok(status) => status,
        Err(err) => {
            abandon(&mut child, stderr_task).await;
            return Err(err);
        }
    };

    let stderr_text = match stderr_task {
        Some(task) => task
            .await
            .context("joining stderr reader")?
            .context("reading child stderr")?,
        None => String::new(),
    };

    let code = status.code().unwrap_or(-1);
    info!(
        cmd = %command_line,
        exit_code = code,
        success = status.success(),
        lines,
        "command exited"
    );

    let stderr_text = stderr_text.trim();
    if !stderr_text.is_empty() {
        sink.stderr(stderr_text);
    }

    Ok(())
}

/// Forward every line of `reader` to `sink` as soon as it is complete.
///
/// Reads block until a full line or EOF is available; only EOF ends the
/// loop. Invalid UTF-8 is replaced rather than treated as an error.
async fn stream_lines<R>(reader: R, sink: &mut dyn OutputSink) -> Result<usize>
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    let mut count = 0;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .await
            .context("reading child stdout")?;
        if read == 0 {
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        sink.line(line.trim_end());
        count += 1;
    }

    Ok(count)
}

async fn collect_stderr(mut stderr: ChildStderr) -> std::io::Result<String> {
    let mut buf = Vec::new();
    stderr.read_to_end(&mut buf).await?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Tear down an invocation that failed part-way: stop the stderr reader
/// and kill and reap the child.
async fn abandon(child: &mut Child, stderr_task: Option<JoinHandle<std::io::Result<String>>>) {
    if let Some(task) = stderr_task {
        task.abort();
        // Cancelled or finished, either way it's no longer running.
        let _ = task.await;
    }
    kill_and_reap(child).await;
}

async fn kill_and_reap(child: &mut Child) {
    // `kill` waits for the process after signalling it.
    if let Err(e) = child.kill().await {
        warn!(pid = ?child.id(), error = %e, "failed to kill child process");
    }
}
