// src/exec/shell.rs

use tokio::process::Command;

use crate::config::ShellConfig;

/// Build a shell command appropriate for the configured shell.
///
/// Produces `<program> <flag> <command_line>`; an empty `flag` is skipped.
pub fn shell_command(shell: &ShellConfig, command_line: &str) -> Command {
    let mut cmd = Command::new(&shell.program);
    if !shell.flag.is_empty() {
        cmd.arg(&shell.flag);
    }
    cmd.arg(command_line);
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_flag_and_line_in_order() {
        let shell = ShellConfig {
            program: "bash".into(),
            flag: "-lc".into(),
        };
        let cmd = shell_command(&shell, "echo $HOME | wc -c");
        let std_cmd = cmd.as_std();

        assert_eq!(std_cmd.get_program(), "bash");
        let args: Vec<_> = std_cmd.get_args().collect();
        assert_eq!(args, vec!["-lc", "echo $HOME | wc -c"]);
    }

    #[test]
    fn empty_flag_is_omitted() {
        let shell = ShellConfig {
            program: "/usr/local/bin/runner".into(),
            flag: String::new(),
        };
        let cmd = shell_command(&shell, "job");
        let args: Vec<_> = cmd.as_std().get_args().collect();
        assert_eq!(args, vec!["job"]);
    }
}
