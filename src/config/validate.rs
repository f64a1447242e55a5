// src/config/validate.rs

use std::collections::HashSet;
use std::sync::LazyLock;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use regex::Regex;
use tracing::warn;

use crate::config::model::{RawTaskFile, TaskFile};
use crate::errors::{Result, TaskdotError};

/// Task names end up as DOT identifiers and runner function names.
static TASK_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("task name pattern is valid")
});

impl TryFrom<RawTaskFile> for TaskFile {
    type Error = TaskdotError;

    fn try_from(raw: RawTaskFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_task_file(&raw)?;
        Ok(TaskFile::new_unchecked(raw.config, raw.task))
    }
}

fn validate_raw_task_file(file: &RawTaskFile) -> Result<()> {
    ensure_has_tasks(file)?;
    validate_task_names(file)?;
    validate_task_dependencies(file)?;
    validate_dag(file)?;
    Ok(())
}

fn ensure_has_tasks(file: &RawTaskFile) -> Result<()> {
    if file.task.is_empty() {
        return Err(TaskdotError::ConfigError(
            "task file must contain at least one [[task]] entry".to_string(),
        ));
    }
    Ok(())
}

fn validate_task_names(file: &RawTaskFile) -> Result<()> {
    let mut seen = HashSet::new();
    for task in file.task.iter() {
        if !TASK_NAME.is_match(&task.name) {
            return Err(TaskdotError::ConfigError(format!(
                "invalid task name '{}' (expected letters, digits and '_', not starting with a digit)",
                task.name
            )));
        }
        if !seen.insert(task.name.as_str()) {
            return Err(TaskdotError::ConfigError(format!(
                "duplicate task name '{}'",
                task.name
            )));
        }
    }
    Ok(())
}

fn validate_task_dependencies(file: &RawTaskFile) -> Result<()> {
    for task in file.task.iter() {
        for dep in task.task_dep.iter() {
            if dep == &task.name {
                return Err(TaskdotError::ConfigError(format!(
                    "task '{}' cannot depend on itself in `task_dep`",
                    task.name
                )));
            }
            match file.task.iter().find(|t| &t.name == dep) {
                None => {
                    return Err(TaskdotError::ConfigError(format!(
                        "task '{}' has unknown dependency '{}' in `task_dep`",
                        task.name, dep
                    )));
                }
                Some(target) if !target.active && task.active => {
                    warn!(task = %task.name, dep = %dep, "task depends on an inactive task");
                }
                Some(_) => {}
            }
        }
    }
    Ok(())
}

fn validate_dag(file: &RawTaskFile) -> Result<()> {
    // Edge direction: dep -> task, matching the emitted graph.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for task in file.task.iter() {
        graph.add_node(task.name.as_str());
    }

    for task in file.task.iter() {
        for dep in task.task_dep.iter() {
            graph.add_edge(dep.as_str(), task.name.as_str(), ());
        }
    }

    // A topological sort will fail if there is a cycle.
    match toposort(&graph, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => {
            let node = cycle.node_id();
            Err(TaskdotError::DagCycle(format!(
                "cycle detected in task_dep graph involving task '{}'",
                node
            )))
        }
    }
}
