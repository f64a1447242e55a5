// src/config/model.rs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Task file as read from TOML, before validation.
///
/// ```toml
/// [config]
/// graph = false
///
/// [[task]]
/// name = "task_fetch"
/// doc = "Fetch sources"
/// actions = ["git pull"]
/// targets = ["src.tar"]
///
/// [[task]]
/// name = "build"
/// doc = "Build binary"
/// file_dep = ["src.tar"]
/// task_dep = ["task_fetch"]
/// ```
///
/// Tasks are an array of tables so their declaration order survives
/// deserialization; that order becomes the chain backbone of the graph.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawTaskFile {
    #[serde(default)]
    pub config: ConfigSection,

    #[serde(default)]
    pub task: Vec<TaskConfig>,
}

/// Validated task file. Only constructed through `TryFrom<RawTaskFile>`.
#[derive(Debug, Clone)]
pub struct TaskFile {
    pub config: ConfigSection,
    pub task: Vec<TaskConfig>,
}

impl TaskFile {
    pub(crate) fn new_unchecked(config: ConfigSection, task: Vec<TaskConfig>) -> Self {
        Self { config, task }
    }

    pub fn get(&self, name: &str) -> Option<&TaskConfig> {
        self.task.iter().find(|t| t.name == name)
    }

    /// Tasks that are switched on, in declaration order.
    pub fn active_tasks(&self) -> impl Iterator<Item = &TaskConfig> {
        self.task.iter().filter(|t| t.active)
    }
}

/// `[config]` section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ConfigSection {
    /// Emit tag lines by default. The CLI can also switch this on with
    /// `--graph` or the `GRAPH_DOIT` environment variable.
    #[serde(default)]
    pub graph: bool,
}

/// One `[[task]]` entry.
///
/// `file_dep`, `task_dep` and `targets` drive graph edges. Any field not
/// named here is a runner parameter and is passed through as-is.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct TaskConfig {
    pub name: String,

    /// Free-form documentation. Only the first line is used as a tooltip.
    #[serde(default)]
    pub doc: String,

    #[serde(default)]
    pub actions: Vec<String>,

    /// Files this task reads.
    #[serde(default)]
    pub file_dep: Vec<String>,

    /// Tasks that must run before this one.
    #[serde(default)]
    pub task_dep: Vec<String>,

    /// Files this task produces.
    #[serde(default)]
    pub targets: Vec<String>,

    /// `false` turns the task off entirely: it is neither registered with the
    /// runner nor emitted to the graph.
    #[serde(default = "default_active")]
    pub active: bool,

    #[serde(flatten)]
    pub params: BTreeMap<String, toml::Value>,
}

fn default_active() -> bool {
    true
}

impl TaskConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: String::new(),
            actions: Vec::new(),
            file_dep: Vec::new(),
            task_dep: Vec::new(),
            targets: Vec::new(),
            active: default_active(),
            params: BTreeMap::new(),
        }
    }

    /// First line of `doc`, trimmed.
    pub fn summary(&self) -> &str {
        self.doc.lines().next().unwrap_or("").trim()
    }
}
