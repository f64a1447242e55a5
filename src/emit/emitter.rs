// src/emit/emitter.rs

use std::io::{self, Write};

use tracing::trace;

use crate::config::TaskConfig;
use crate::tags::{chain_line, edge_line, graph_safe};

/// Writes tag lines describing tasks to any `Write` sink.
///
/// Whether anything is written is decided once, at construction. A disabled
/// emitter accepts every call and writes nothing.
#[derive(Debug)]
pub struct TagEmitter<W: Write> {
    writer: W,
    enabled: bool,
}

impl<W: Write> TagEmitter<W> {
    pub fn new(writer: W, enabled: bool) -> Self {
        Self { writer, enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Emit the chain declaration and all edges for one task.
    ///
    /// Edge order: file dependencies, task dependencies, then targets.
    pub fn emit_task(&mut self, task: &TaskConfig) -> io::Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let name = task.name.as_str();
        self.write_line(&chain_line(name, task.summary()))?;

        for file in &task.file_dep {
            self.write_line(&edge_line(&graph_safe(file), name))?;
        }
        for dep in &task.task_dep {
            self.write_line(&edge_line(dep, name))?;
        }
        for target in &task.targets {
            self.write_line(&edge_line(name, &graph_safe(target)))?;
        }

        trace!(task = name, "task emitted");
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")
    }
}
