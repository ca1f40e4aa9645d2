//! Directed dependency multigraph.
//!
//! [`Graph`] is a lightweight graph keyed by its node values. It keeps nodes
//! and edges in the order they were added, which is what makes every
//! renderer's output reproducible.
//!
//! # Architecture
//!
//! - Nodes are stored in a `Vec` with a `HashMap` index for membership checks
//! - Edges are stored in a `Vec` as `(source, target)` pairs
//! - Incoming and outgoing edge indices are tracked per node
//!
//! An edge `(from, to)` means "`from` references `to`", i.e. `from` depends on
//! `to`. Self-loops, cycles and repeated edges between the same pair are all
//! kept as recorded. Every query is a single-hop lookup, so cycles never
//! affect termination.

use std::{collections::HashMap, fmt::Debug, hash::Hash};

use crate::element::Element;

/// The graph of template elements produced by the parser.
pub type DependencyGraph = Graph<Element>;

/// Index of an edge in the graph's edge list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct EdgeIndex(usize);

/// A directed edge in the graph.
#[derive(Debug, Clone, Copy)]
struct Edge<N> {
    source: N,
    target: N,
}

/// Insertion-ordered directed multigraph over node values of type `N`.
///
/// The graph is populated once through [`Graph::add_node`] and
/// [`Graph::add_edge`] and then only queried. All queries are total: asking
/// about a node that is not in the graph yields an empty sequence.
///
/// # Examples
///
/// ```
/// use stacktree_core::{DependencyGraph, Element};
///
/// let app = Element::resource("App");
/// let role = Element::resource("Role");
///
/// let mut graph = DependencyGraph::new();
/// graph.add_node(app);
/// graph.add_node(role);
/// graph.add_edge(app, role);
///
/// assert_eq!(graph.get(app).collect::<Vec<_>>(), vec![role]);
/// assert_eq!(graph.get_reverse(role).collect::<Vec<_>>(), vec![app]);
/// assert_eq!(graph.get(role).count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Graph<N>
where
    N: Copy + Eq + Hash + Debug,
{
    nodes: Vec<N>,
    node_positions: HashMap<N, usize>,
    edges: Vec<Edge<N>>,
    incoming_edges: HashMap<N, Vec<EdgeIndex>>,
    outgoing_edges: HashMap<N, Vec<EdgeIndex>>,
}

impl<N> Default for Graph<N>
where
    N: Copy + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Graph<N>
where
    N: Copy + Eq + Hash + Debug,
{
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Graph {
            nodes: Vec::new(),
            node_positions: HashMap::new(),
            edges: Vec::new(),
            incoming_edges: HashMap::new(),
            outgoing_edges: HashMap::new(),
        }
    }

    /// Returns an iterator over all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = N> + '_ {
        self.nodes.iter().copied()
    }

    /// Returns the total number of nodes in the graph.
    pub fn nodes_count(&self) -> usize {
        self.nodes.len()
    }

    /// Checks if the node exists in the graph.
    pub fn contains_node(&self, node: N) -> bool {
        self.node_positions.contains_key(&node)
    }

    /// Returns an iterator over all edges as `(source, target)` pairs in
    /// insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (N, N)> + '_ {
        self.edges.iter().map(|edge| (edge.source, edge.target))
    }

    /// Returns the total number of edges, duplicates included.
    pub fn edges_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the nodes `node` points to (its dependencies), in edge
    /// insertion order.
    ///
    /// Returns an empty iterator if the node has no outgoing edges or is not
    /// part of the graph.
    pub fn get(&self, node: N) -> impl Iterator<Item = N> + '_ {
        self.outgoing_edges
            .get(&node)
            .into_iter()
            .flatten()
            .map(|idx| self.edges[idx.0].target)
    }

    /// Returns the nodes pointing to `node` (its dependents), in edge
    /// insertion order.
    ///
    /// Returns an empty iterator if nothing points to the node.
    pub fn get_reverse(&self, node: N) -> impl Iterator<Item = N> + '_ {
        self.incoming_edges
            .get(&node)
            .into_iter()
            .flatten()
            .map(|idx| self.edges[idx.0].source)
    }

    /// Adds a node to the graph.
    ///
    /// Adding a node that already exists is a no-op; the node keeps its
    /// original position.
    pub fn add_node(&mut self, node: N) {
        if self.node_positions.contains_key(&node) {
            return;
        }
        self.node_positions.insert(node, self.nodes.len());
        self.nodes.push(node);
    }

    /// Adds a directed edge from `source` to `target`.
    ///
    /// Repeated edges between the same pair are recorded again.
    ///
    /// # Panics
    /// Panics in debug mode if either node does not exist in the graph.
    /// This panic is for internal developer testing and bug detection. In a
    /// release build, this check is optimized away.
    pub fn add_edge(&mut self, source: N, target: N) {
        #[cfg(debug_assertions)]
        {
            assert!(
                self.contains_node(source),
                "Adding edge: Source node {source:?} does not exist",
            );
            assert!(
                self.contains_node(target),
                "Adding edge: Target node {target:?} does not exist",
            );
        }

        self.edges.push(Edge { source, target });

        let idx = EdgeIndex(self.edges.len() - 1);
        self.outgoing_edges.entry(source).or_default().push(idx);
        self.incoming_edges.entry(target).or_default().push(idx);
    }
}
