// src/lib.rs

pub mod cli;
pub mod config;
pub mod emit;
pub mod errors;
pub mod graph;
pub mod logging;
pub mod tags;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use crate::cli::{CliArgs, Command, GRAPH_ENV_VAR, graph_env_enabled};
use crate::config::{TaskFile, load_and_validate};
use crate::emit::{Registrar, RunnerTask, TagEmitter};
use crate::graph::{GraphBuilder, GraphDocument};

pub use crate::graph::build_graph;

/// High-level entry point used by `main.rs`.
///
/// Dispatches to the selected command; without one, reads tag lines from
/// stdin and prints the DOT document.
pub fn run(args: CliArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        None => graph_command(None, &mut out),
        Some(Command::Graph { input }) => graph_command(input.as_deref(), &mut out),
        Some(Command::Emit { task_file, graph }) => {
            let file = load_and_validate(&task_file.config)?;
            let enabled = graph
                || file.config.graph
                || graph_env_enabled(std::env::var_os(GRAPH_ENV_VAR).as_deref());
            emit_tags(&file, enabled, &mut out)?;
            Ok(())
        }
        Some(Command::List { task_file }) => {
            let file = load_and_validate(&task_file.config)?;
            list_tasks(&file, &mut out)
        }
        Some(Command::Dot { task_file }) => {
            let file = load_and_validate(&task_file.config)?;
            let doc = task_file_graph(&file)?;
            writeln!(out, "{doc}")?;
            Ok(())
        }
    }
}

fn graph_command(input: Option<&Path>, out: &mut impl Write) -> Result<()> {
    let doc = match input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open input {}", path.display()))?;
            read_graph(BufReader::new(file))?
        }
        None => read_graph(io::stdin().lock())?,
    };
    writeln!(out, "{doc}")?;
    Ok(())
}

fn read_graph(reader: impl BufRead) -> Result<GraphDocument> {
    let doc = GraphBuilder::from_reader(reader).context("failed to read tag lines")?;
    info!(chain = doc.chain.len(), "graph built");
    Ok(doc)
}

/// Register every task of `file`, writing tag lines to `out` when `enabled`.
pub fn emit_tags<W: Write>(file: &TaskFile, enabled: bool, out: W) -> io::Result<Vec<RunnerTask>> {
    debug!(enabled, "emitting tags");
    let mut registrar = Registrar::new(TagEmitter::new(out, enabled));
    registrar.define_all(file)
}

/// Emit a task file in-process and build its graph.
pub fn task_file_graph(file: &TaskFile) -> Result<GraphDocument> {
    let mut buf = Vec::new();
    emit_tags(file, true, &mut buf)?;
    Ok(GraphBuilder::from_reader(buf.as_slice())?)
}

#[derive(Serialize)]
struct Listing<'a> {
    task: &'a [RunnerTask],
}

/// Render the runner definitions of a task file's active tasks as TOML.
pub fn render_listing(file: &TaskFile) -> errors::Result<String> {
    let tasks = emit_tags(file, false, io::sink())?;
    Ok(toml::to_string(&Listing { task: &tasks })?)
}

fn list_tasks(file: &TaskFile, out: &mut impl Write) -> Result<()> {
    let rendered = render_listing(file)?;
    write!(out, "{rendered}")?;
    Ok(())
}
