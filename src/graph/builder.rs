// src/graph/builder.rs

//! Single-pass builder turning tag lines into a [`GraphDocument`].

use std::io::BufRead;

use tracing::{debug, trace};

use crate::graph::document::{GraphDocument, Statement};
use crate::tags::TagLine;

/// Accumulates body statements and chain order while lines are fed in.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    statements: Vec<Statement>,
    chain: Vec<String>,
    skipped: usize,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one input line. Returns `true` if the line was recognised.
    ///
    /// Unrecognised or malformed lines are dropped without error.
    pub fn push_line(&mut self, line: &str) -> bool {
        match TagLine::parse(line) {
            Some(TagLine::Chain { name, description }) => {
                self.chain.push(name.clone());
                self.statements.push(Statement::Node {
                    id: name,
                    tooltip: description,
                });
                true
            }
            Some(TagLine::Edge { from, to }) => {
                self.statements.push(Statement::Edge { from, to });
                true
            }
            None => {
                trace!(line, "skipping unrecognised line");
                self.skipped += 1;
                false
            }
        }
    }

    /// Feed every line from an iterator.
    pub fn extend<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.push_line(line.as_ref());
        }
    }

    /// Stream lines from a reader into a finished document.
    ///
    /// Bytes that are not valid UTF-8 are replaced, so a garbled line is
    /// skipped like any other noise. Only reader I/O errors fail.
    pub fn from_reader(reader: impl BufRead) -> std::io::Result<GraphDocument> {
        let mut builder = Self::new();
        for line in reader.split(b'\n') {
            let line = line?;
            builder.push_line(&String::from_utf8_lossy(&line));
        }
        Ok(builder.finish())
    }

    pub fn finish(self) -> GraphDocument {
        debug!(
            statements = self.statements.len(),
            chain = self.chain.len(),
            skipped = self.skipped,
            "graph document built"
        );
        GraphDocument::new(self.statements, self.chain)
    }
}

/// Build a complete DOT document from tagged lines.
///
/// Total over its input: an empty or fully unrecognised input still yields
/// the envelope with an empty chain line.
pub fn build_graph<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = GraphBuilder::new();
    builder.extend(lines);
    builder.finish().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_line_reports_recognition() {
        let mut builder = GraphBuilder::new();
        assert!(builder.push_line("DOT:CHAIN:task_a A"));
        assert!(builder.push_line("DOT:x.y -> task_a"));
        assert!(!builder.push_line("running task_a"));
        assert!(!builder.push_line("   "));

        let doc = builder.finish();
        assert_eq!(doc.chain, vec!["a".to_string()]);
        assert_eq!(doc.statements.len(), 2);
    }

    #[test]
    fn body_keeps_encounter_order() {
        let doc = build_graph([
            "DOT:CHAIN:task_a A",
            "DOT:task_a -> out.bin",
            "DOT:CHAIN:task_b B",
            "DOT:in.txt -> task_b",
        ]);
        assert_eq!(
            doc,
            "digraph \"G\" {\n\
             a [tooltip=\"A\"]\n\
             a -> out_bin\n\
             b [tooltip=\"B\"]\n\
             in_txt -> b\n\
             a -> b\n\
             }"
        );
    }

    #[test]
    fn from_reader_matches_build_graph() {
        let input = "DOT:CHAIN:task_fetch Fetch\nnoise\nDOT:CHAIN:task_build Build\n";
        let from_reader = GraphBuilder::from_reader(input.as_bytes()).unwrap();
        assert_eq!(from_reader.to_string(), build_graph(input.lines()));
    }

    #[test]
    fn from_reader_skips_invalid_utf8_lines() {
        let bytes: &[u8] = b"DOT:CHAIN:a ok\nnoise \xff\xfe\nDOT:CHAIN:b fine\n";
        let doc = GraphBuilder::from_reader(bytes).unwrap();

        assert_eq!(doc.chain, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(doc.statements.len(), 2);
    }

    #[test]
    fn from_reader_handles_crlf_and_missing_final_newline() {
        let bytes: &[u8] = b"DOT:CHAIN:task_a A\r\nDOT:x.y -> task_a";
        let doc = GraphBuilder::from_reader(bytes).unwrap();

        assert_eq!(doc.to_string(), "digraph \"G\" {\na [tooltip=\"A\"]\nx_y -> a\na\n}");
    }
}
