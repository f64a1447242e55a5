// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::default_config_path;

/// Environment variable that switches tag emission on for `emit`.
///
/// Any non-empty value enables emission.
pub const GRAPH_ENV_VAR: &str = "GRAPH_DOIT";

/// Command-line arguments for `taskdot`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskdot",
    version,
    about = "Extract a DOT dependency graph from task-runner tag lines.",
    long_about = None
)]
pub struct CliArgs {
    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKDOT_LOG` or a default level will be used.
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Without a command, behaves like `graph` reading stdin.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Read tag lines and print the DOT document.
    Graph {
        /// Read lines from this file instead of stdin.
        #[arg(long, value_name = "PATH")]
        input: Option<PathBuf>,
    },

    /// Print tag lines for every active task in a task file.
    Emit {
        #[command(flatten)]
        task_file: TaskFileArg,

        /// Emit even when `[config].graph` is false and `GRAPH_DOIT` is unset.
        #[arg(long)]
        graph: bool,
    },

    /// Print the runner definitions of active tasks.
    List {
        #[command(flatten)]
        task_file: TaskFileArg,
    },

    /// Emit and build in one step: task file in, DOT document out.
    Dot {
        #[command(flatten)]
        task_file: TaskFileArg,
    },
}

#[derive(Debug, Clone, Args)]
pub struct TaskFileArg {
    /// Path to the task file (TOML).
    #[arg(long, value_name = "PATH", default_value_os_t = default_config_path())]
    pub config: PathBuf,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

/// Interpret a `GRAPH_DOIT` value: set and non-empty means on.
pub fn graph_env_enabled(value: Option<&std::ffi::OsStr>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}
