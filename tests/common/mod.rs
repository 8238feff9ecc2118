#![allow(dead_code)]

pub use buildy_test_utils::{init_tracing, with_timeout, RecordingSink};

use buildy::config::ShellConfig;
use buildy::exec::run_command;

/// The POSIX shell used by the Unix-only runner tests.
pub fn posix_shell() -> ShellConfig {
    ShellConfig {
        program: "sh".into(),
        flag: "-c".into(),
    }
}

/// Run `script` through `sh -c` and return everything the runner emitted.
pub async fn run_sh(script: &str) -> RecordingSink {
    let mut sink = RecordingSink::new();
    with_timeout(run_command(script, &posix_shell(), &mut sink)).await;
    sink
}
