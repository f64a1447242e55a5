// src/tags.rs

//! The line-oriented tag format shared by the emitter and the graph builder.
//!
//! Two shapes are recognised, both behind the `DOT:` line tag:
//!
//! ```text
//! DOT:CHAIN:<name> <description>
//! DOT:<left> -> <right>
//! ```
//!
//! Everything else is ignored. Classification never fails; a line that does
//! not fit either shape simply yields `None`.

/// Tag every recognised line starts with.
pub const LINE_TAG: &str = "DOT:";

/// Tag that marks a chain-node declaration (follows [`LINE_TAG`]).
pub const CHAIN_TAG: &str = "CHAIN:";

/// Edge operator, both in tag lines and in the rendered document.
pub const EDGE_OP: &str = "->";

/// Task-runner naming convention for task functions.
pub const TASK_PREFIX: &str = "task_";

/// A recognised tag line, with identifiers already normalised for the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagLine {
    /// A task recorded for the chain backbone, with its tooltip text.
    Chain { name: String, description: String },
    /// An explicit directed edge.
    Edge { from: String, to: String },
}

impl TagLine {
    /// Classify a single input line.
    ///
    /// Surrounding whitespace is trimmed first. Returns `None` for lines that
    /// are untagged or malformed (empty identifiers).
    pub fn parse(line: &str) -> Option<Self> {
        let body = line.trim().strip_prefix(LINE_TAG)?;

        if let Some(chain) = body.strip_prefix(CHAIN_TAG) {
            return parse_chain(chain);
        }

        parse_edge(body)
    }
}

fn parse_chain(rest: &str) -> Option<TagLine> {
    let (raw_name, description) = match rest.split_once(char::is_whitespace) {
        Some((name, desc)) => (name, desc.trim_start()),
        None => (rest, ""),
    };

    let name = strip_task_prefix(raw_name);
    if name.is_empty() {
        return None;
    }

    Some(TagLine::Chain {
        name: name.to_string(),
        description: description.to_string(),
    })
}

fn parse_edge(rest: &str) -> Option<TagLine> {
    // Only the first operator splits; anything after it belongs to `right`.
    let (left, right) = rest.split_once(EDGE_OP)?;

    let from = edge_endpoint(left);
    let to = edge_endpoint(right);
    if from.is_empty() || to.is_empty() {
        return None;
    }

    Some(TagLine::Edge { from, to })
}

fn edge_endpoint(raw: &str) -> String {
    graph_safe(strip_task_prefix(raw.trim()))
}

/// Drop a leading `task_` so `task_build` becomes `build`.
pub fn strip_task_prefix(name: &str) -> &str {
    name.strip_prefix(TASK_PREFIX).unwrap_or(name)
}

/// Replace `.` with `_` so dotted file names become valid DOT identifiers.
pub fn graph_safe(name: &str) -> String {
    name.replace('.', "_")
}

/// Render a chain-node declaration line.
pub fn chain_line(name: &str, description: &str) -> String {
    format!("{LINE_TAG}{CHAIN_TAG}{name} {description}")
}

/// Render an edge declaration line.
pub fn edge_line(from: &str, to: &str) -> String {
    format!("{LINE_TAG}{from} {EDGE_OP} {to}")
}
