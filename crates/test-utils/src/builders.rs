#![allow(dead_code)]

use taskdot::config::{ConfigSection, RawTaskFile, TaskConfig, TaskFile};

/// Builder for `TaskFile` to simplify test setup.
pub struct TaskFileBuilder {
    file: RawTaskFile,
}

impl TaskFileBuilder {
    pub fn new() -> Self {
        Self {
            file: RawTaskFile {
                config: ConfigSection::default(),
                task: Vec::new(),
            },
        }
    }

    pub fn with_task(mut self, task: TaskConfig) -> Self {
        self.file.task.push(task);
        self
    }

    pub fn with_graph(mut self, graph: bool) -> Self {
        self.file.config.graph = graph;
        self
    }

    pub fn build_raw(self) -> RawTaskFile {
        self.file
    }

    pub fn build(self) -> TaskFile {
        TaskFile::try_from(self.file).expect("Failed to build valid task file from builder")
    }
}

impl Default for TaskFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `TaskConfig`.
pub struct TaskConfigBuilder {
    task: TaskConfig,
}

impl TaskConfigBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            task: TaskConfig::new(name),
        }
    }

    pub fn doc(mut self, doc: &str) -> Self {
        self.task.doc = doc.to_string();
        self
    }

    pub fn action(mut self, action: &str) -> Self {
        self.task.actions.push(action.to_string());
        self
    }

    pub fn file_dep(mut self, file: &str) -> Self {
        self.task.file_dep.push(file.to_string());
        self
    }

    pub fn task_dep(mut self, dep: &str) -> Self {
        self.task.task_dep.push(dep.to_string());
        self
    }

    pub fn target(mut self, target: &str) -> Self {
        self.task.targets.push(target.to_string());
        self
    }

    pub fn inactive(mut self) -> Self {
        self.task.active = false;
        self
    }

    pub fn build(self) -> TaskConfig {
        self.task
    }
}

/// Render the two tag shapes, for feeding the builder by hand.
pub fn chain(name: &str, description: &str) -> String {
    taskdot::tags::chain_line(name, description)
}

pub fn edge(from: &str, to: &str) -> String {
    taskdot::tags::edge_line(from, to)
}
