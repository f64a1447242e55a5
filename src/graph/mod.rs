// src/graph/mod.rs

//! Graph extraction from tag lines.
//!
//! - [`builder`] consumes lines and collects declarations in one pass.
//! - [`document`] holds the finished document and renders it as DOT.

pub mod builder;
pub mod document;

pub use builder::{GraphBuilder, build_graph};
pub use document::{GRAPH_NAME, GraphDocument, Statement};
