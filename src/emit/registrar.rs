// src/emit/registrar.rs

//! Turns task definitions into runner tasks, reporting them for the graph on
//! the way through.

use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::Serialize;
use tracing::debug;

use crate::config::{TaskConfig, TaskFile};
use crate::emit::emitter::TagEmitter;
use crate::tags::TASK_PREFIX;

/// How the task runner will find a registered task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Discovery {
    /// Name starts with `task_`; the runner picks it up by convention and the
    /// definition is left alone.
    ByName,
    /// Any other name; the runner needs an explicit task-creator hook.
    Hook,
}

impl Discovery {
    pub fn for_name(name: &str) -> Self {
        if name.starts_with(TASK_PREFIX) {
            Discovery::ByName
        } else {
            Discovery::Hook
        }
    }
}

/// The definition handed to the task runner for an active task.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunnerTask {
    pub name: String,
    pub discovery: Discovery,
    pub actions: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub file_dep: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub task_dep: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub targets: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(flatten)]
    pub params: BTreeMap<String, toml::Value>,
}

impl From<&TaskConfig> for RunnerTask {
    fn from(task: &TaskConfig) -> Self {
        Self {
            name: task.name.clone(),
            discovery: Discovery::for_name(&task.name),
            actions: task.actions.clone(),
            file_dep: task.file_dep.clone(),
            task_dep: task.task_dep.clone(),
            targets: task.targets.clone(),
            doc: (!task.doc.is_empty()).then(|| task.doc.clone()),
            params: task.params.clone(),
        }
    }
}

/// Registers tasks with the runner and reports each one through a
/// [`TagEmitter`].
#[derive(Debug)]
pub struct Registrar<W: Write> {
    emitter: TagEmitter<W>,
}

impl<W: Write> Registrar<W> {
    pub fn new(emitter: TagEmitter<W>) -> Self {
        Self { emitter }
    }

    /// Register one task.
    ///
    /// Inactive tasks are dropped before anything is emitted and yield `None`.
    pub fn define(&mut self, task: &TaskConfig) -> io::Result<Option<RunnerTask>> {
        if !task.active {
            debug!(task = %task.name, "task inactive; not registered");
            return Ok(None);
        }

        self.emitter.emit_task(task)?;
        Ok(Some(RunnerTask::from(task)))
    }

    /// Register every task of a file, in declaration order.
    pub fn define_all(&mut self, file: &TaskFile) -> io::Result<Vec<RunnerTask>> {
        let mut registered = Vec::with_capacity(file.task.len());
        for task in file.task.iter() {
            if let Some(runner_task) = self.define(task)? {
                registered.push(runner_task);
            }
        }
        self.emitter.flush()?;
        debug!(
            registered = registered.len(),
            emitted = self.emitter.is_enabled(),
            "task file registered"
        );
        Ok(registered)
    }

    pub fn into_inner(self) -> W {
        self.emitter.into_inner()
    }
}
