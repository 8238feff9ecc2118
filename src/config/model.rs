// src/config/model.rs

use serde::Deserialize;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [docker]
/// binary = "docker"
/// image = "my_docker_image"
/// context = "."
///
/// [compose]
/// command = "docker compose"
///
/// [shell]
/// program = "sh"
/// flag = "-c"
/// ```
///
/// All sections are optional and have reasonable defaults, so an empty file
/// (or no file at all) is a valid configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Image build settings from `[docker]`.
    #[serde(default)]
    pub docker: DockerSection,

    /// Compose settings from `[compose]`.
    #[serde(default)]
    pub compose: ComposeSection,

    /// Shell used to interpret command lines, from `[shell]`.
    #[serde(default)]
    pub shell: ShellConfig,
}

/// `[docker]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DockerSection {
    /// Binary invoked for `build`.
    #[serde(default = "default_docker_binary")]
    pub binary: String,

    /// Image name; the CLI `--tag` is appended as `<image>:<tag>`.
    #[serde(default = "default_image")]
    pub image: String,

    /// Build context passed as the last argument of `build`.
    #[serde(default = "default_context")]
    pub context: String,
}

impl Default for DockerSection {
    fn default() -> Self {
        Self {
            binary: default_docker_binary(),
            image: default_image(),
            context: default_context(),
        }
    }
}

/// `[compose]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComposeSection {
    /// Compose invocation prefix, e.g. `"docker compose"` or `"docker-compose"`.
    #[serde(default = "default_compose_command")]
    pub command: String,
}

impl Default for ComposeSection {
    fn default() -> Self {
        Self {
            command: default_compose_command(),
        }
    }
}

/// `[shell]` section: how a command line is handed to the host shell.
///
/// The runner spawns `<program> <flag> <command line>`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShellConfig {
    #[serde(default = "default_shell_program")]
    pub program: String,

    #[serde(default = "default_shell_flag")]
    pub flag: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            program: default_shell_program(),
            flag: default_shell_flag(),
        }
    }
}

fn default_docker_binary() -> String {
    "docker".to_string()
}

fn default_image() -> String {
    "my_docker_image".to_string()
}

fn default_context() -> String {
    ".".to_string()
}

fn default_compose_command() -> String {
    "docker compose".to_string()
}

fn default_shell_program() -> String {
    if cfg!(windows) { "cmd" } else { "sh" }.to_string()
}

fn default_shell_flag() -> String {
    if cfg!(windows) { "/C" } else { "-c" }.to_string()
}
