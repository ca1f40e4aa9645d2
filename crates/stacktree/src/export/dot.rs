//! GraphViz DOT rendering.
//!
//! Every element is emitted inside a cluster for its category, and every
//! recorded edge is drawn from the prerequisite to the dependent element, so
//! with `rankdir=LR` the graph reads left to right in deployment order.
//! Node identifiers are the element's `"<Section>: <name>"` form.

use std::fmt::Write as _;

use stacktree_core::{Category, DependencyGraph, Element};

use super::Exporter;

/// [`Exporter`] for the DOT format.
#[derive(Debug, Clone, Copy, Default)]
pub struct DotExporter;

impl Exporter for DotExporter {
    fn export(&self, graph: &DependencyGraph) -> String {
        render(graph)
    }
}

/// Node shape used for each category.
fn shape(category: Category) -> &'static str {
    match category {
        Category::Parameter => "diamond",
        Category::Resource => "Mrecord",
        Category::Output => "rectangle",
    }
}

/// Escapes a value for use inside a double-quoted DOT string.
fn escape(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

fn node_id(element: Element) -> String {
    escape(&element.to_string())
}

/// Renders `graph` as a DOT digraph.
pub fn render(graph: &DependencyGraph) -> String {
    let mut out = String::new();

    out.push_str("digraph {\n");
    out.push_str("    rankdir=LR;\n");
    out.push_str("    concentrate=true;\n");

    for category in Category::ALL {
        let _ = writeln!(out, "    subgraph cluster_{category} {{");
        let _ = writeln!(out, "        label=\"{category}\";");
        for node in graph.nodes().filter(|node| node.category() == category) {
            let _ = writeln!(
                out,
                "        \"{}\" [label=\"{}\" shape={}];",
                node_id(node),
                escape(&node.name().as_string()),
                shape(category)
            );
        }
        out.push_str("    }\n\n");
    }

    for (from, to) in graph.edges() {
        let _ = writeln!(out, "    \"{}\" -> \"{}\";", node_id(to), node_id(from));
    }

    out.push_str("}\n");
    out
}
