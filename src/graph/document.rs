// src/graph/document.rs

use std::fmt;

use petgraph::graphmap::DiGraphMap;

use crate::tags::EDGE_OP;

/// Name of the directed graph in rendered documents.
pub const GRAPH_NAME: &str = "G";

/// One declaration in the graph body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `<id> [tooltip="<tooltip>"]`
    Node { id: String, tooltip: String },
    /// `<from> -> <to>`
    Edge { from: String, to: String },
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Node { id, tooltip } => {
                write!(f, "{id} [tooltip=\"{}\"]", escape_dot_string(tooltip))
            }
            Statement::Edge { from, to } => write!(f, "{from} {EDGE_OP} {to}"),
        }
    }
}

/// A complete graph-description document.
///
/// Body statements keep their encounter order; the chain backbone is
/// rendered last as a single path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphDocument {
    pub name: String,
    pub statements: Vec<Statement>,
    pub chain: Vec<String>,
}

impl GraphDocument {
    pub fn new(statements: Vec<Statement>, chain: Vec<String>) -> Self {
        Self {
            name: GRAPH_NAME.to_string(),
            statements,
            chain,
        }
    }

    /// The chain backbone, e.g. `fetch -> build -> test`.
    ///
    /// Empty when no chain nodes were declared.
    pub fn chain_path(&self) -> String {
        self.chain.join(&format!(" {EDGE_OP} "))
    }

    /// Directed-graph view of every edge in the document.
    ///
    /// Includes explicit edges and the consecutive pairs of the chain. Nodes
    /// declared with a tooltip appear even when nothing connects to them.
    pub fn to_digraph(&self) -> DiGraphMap<&str, ()> {
        let mut graph = DiGraphMap::new();

        for statement in &self.statements {
            match statement {
                Statement::Node { id, .. } => {
                    graph.add_node(id.as_str());
                }
                Statement::Edge { from, to } => {
                    graph.add_edge(from.as_str(), to.as_str(), ());
                }
            }
        }

        for pair in self.chain.windows(2) {
            graph.add_edge(pair[0].as_str(), pair[1].as_str(), ());
        }

        graph
    }
}

impl fmt::Display for GraphDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph \"{}\" {{", self.name)?;
        for statement in &self.statements {
            writeln!(f, "{statement}")?;
        }
        writeln!(f, "{}", self.chain_path())?;
        write!(f, "}}")
    }
}

/// Escape tooltip text for use inside a quoted DOT string.
fn escape_dot_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, tooltip: &str) -> Statement {
        Statement::Node {
            id: id.into(),
            tooltip: tooltip.into(),
        }
    }

    fn edge(from: &str, to: &str) -> Statement {
        Statement::Edge {
            from: from.into(),
            to: to.into(),
        }
    }

    #[test]
    fn empty_document_keeps_envelope_and_blank_chain() {
        let doc = GraphDocument::new(vec![], vec![]);
        assert_eq!(doc.to_string(), "digraph \"G\" {\n\n}");
    }

    #[test]
    fn single_chain_node_renders_as_bare_identifier() {
        let doc = GraphDocument::new(vec![node("lint", "Lint")], vec!["lint".into()]);
        assert_eq!(
            doc.to_string(),
            "digraph \"G\" {\nlint [tooltip=\"Lint\"]\nlint\n}"
        );
    }

    #[test]
    fn tooltip_quotes_are_escaped() {
        let rendered = node("a", r#"say "hi" \o/"#).to_string();
        assert_eq!(rendered, r#"a [tooltip="say \"hi\" \\o/"]"#);
    }

    #[test]
    fn digraph_view_contains_explicit_and_chain_edges() {
        let doc = GraphDocument::new(
            vec![node("a", ""), node("b", ""), node("c", ""), edge("src_txt", "b")],
            vec!["a".into(), "b".into(), "c".into()],
        );
        let graph = doc.to_digraph();

        assert_eq!(graph.node_count(), 4);
        assert!(graph.contains_edge("src_txt", "b"));
        assert!(graph.contains_edge("a", "b"));
        assert!(graph.contains_edge("b", "c"));
        assert!(!graph.contains_edge("a", "c"));
    }
}
