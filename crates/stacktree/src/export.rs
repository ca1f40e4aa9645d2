//! Renderers turning a dependency graph into text.
//!
//! - [`tree`] - indented `DependsOn`/`UsedBy` listing
//! - [`dot`] - GraphViz DOT document

pub mod dot;
pub mod tree;

use stacktree_core::DependencyGraph;

/// A renderer producing a complete text document from a graph.
///
/// Rendering is total: every graph, including an empty one, has an output.
pub trait Exporter {
    fn export(&self, graph: &DependencyGraph) -> String;
}
