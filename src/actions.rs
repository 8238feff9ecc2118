// src/actions.rs

//! The actions `buildy` knows how to run, and the shell command line each
//! one expands to.

use crate::config::ConfigFile;

/// One thing the user asked `buildy` to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Build the image, tagged `<image>:<tag>`.
    Build { tag: String },
    /// Bring the compose deployment up, optionally detached.
    Up { detached: bool },
    /// Bring the deployment up and remove orphan containers.
    Clean,
    /// Placeholder that just echoes.
    Other,
}

impl Action {
    /// Expand this action into the shell command line the runner executes.
    pub fn command_line(&self, cfg: &ConfigFile) -> String {
        match self {
            Action::Build { tag } => format!(
                "{} build -t {}:{} {}",
                cfg.docker.binary, cfg.docker.image, tag, cfg.docker.context
            ),
            Action::Up { detached } => {
                let mut cmd = format!("{} up", cfg.compose.command);
                if *detached {
                    cmd.push_str(" -d");
                }
                cmd
            }
            Action::Clean => format!("{} up --remove-orphans", cfg.compose.command),
            Action::Other => "echo 'This is another command!'".to_string(),
        }
    }
}
