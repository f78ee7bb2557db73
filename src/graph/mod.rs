//! The data model shared by every component in this crate: a labeled
//! directed multigraph addressed purely by position-index, plus the
//! named [Subgraph] views ([compile_rule][crate::rule::compile_rule]
//! reads the reserved `"L"`/`"R"` views off of a [Graph]).
//!
//! Nodes and edges are appended in order and never removed once a
//! `Graph` is built; every other component in this crate relies on that
//! to treat a node or edge's position in its list as a stable identity.
//! There is no cross-owning pointer anywhere in this module: everything
//! is an index into a `Vec` owned by the `Graph` itself.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::collections::HashSet;

/// Reserved subgraph name for a rule's left-hand side.
pub const L_NAME: &str = "L";
/// Reserved subgraph name for a rule's right-hand side.
pub const R_NAME: &str = "R";

/// A single node's attribute bundle.
///
/// `label` is the only attribute this crate interprets; everything else
/// in `attrs` is opaque payload carried verbatim from whoever built the
/// graph (a DOT-like parser, the robot-morphology layer, …).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Node {
    /// Opaque label, compared only by exact string equality. Empty means
    /// "no label" and, in a pattern graph, "matches anything".
    #[serde(default)]
    pub label: String,
    /// Attributes this crate does not interpret.
    #[serde(default)]
    pub attrs: Map<String, Value>,
}

impl Node {
    /// Creates a node with the given label and no other attributes.
    pub fn new(label: impl Into<String>) -> Self {
        Node {
            label: label.into(),
            attrs: Map::new(),
        }
    }
}

/// A single edge's attribute bundle, plus its endpoints.
///
/// `head` and `tail` are node-indices into the same [Graph] this edge
/// belongs to. Self-loops (`head == tail`) and parallel edges (several
/// edges sharing the same `head`/`tail`) are both legal.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Edge {
    /// Opaque label, compared only by exact string equality.
    #[serde(default)]
    pub label: String,
    /// Source node-index.
    pub head: usize,
    /// Destination node-index.
    pub tail: usize,
    /// Attributes this crate does not interpret.
    #[serde(default)]
    pub attrs: Map<String, Value>,
}

impl Edge {
    /// Creates an edge with the given endpoints and label, and no other
    /// attributes.
    pub fn new(head: usize, tail: usize, label: impl Into<String>) -> Self {
        Edge {
            label: label.into(),
            head,
            tail,
            attrs: Map::new(),
        }
    }
}

/// A named selection of nodes and edges within a parent [Graph].
///
/// Subgraphs are views, not copies: the indices here refer back into the
/// parent graph's own node/edge lists.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Subgraph {
    pub nodes: HashSet<usize>,
    pub edges: HashSet<usize>,
}

impl Subgraph {
    /// An empty subgraph.
    pub fn new() -> Self {
        Self::default()
    }
}

/// A labeled directed multigraph, addressed by position-index.
///
/// `Graph` is immutable from the point of view of every other component
/// in this crate: [compile_rule][crate::rule::compile_rule],
/// [find_matches][crate::matching::find_matches], and
/// [apply_rule][crate::applier::apply_rule] only ever read a `Graph` and
/// build fresh ones; none of them mutates an existing value in place.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    #[serde(default)]
    subgraphs: HashMap<String, Subgraph>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node, returning its newly assigned index.
    pub fn add_node(&mut self, node: Node) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Appends an edge, returning its newly assigned index.
    ///
    /// `edge.head`/`edge.tail` are not validated against the current
    /// node count; callers that build a `Graph` incrementally are
    /// expected to add endpoints before (or, for `K`-edges, are allowed
    /// to never add) the nodes they refer to.
    pub fn add_edge(&mut self, edge: Edge) -> usize {
        self.edges.push(edge);
        self.edges.len() - 1
    }

    /// All nodes, in position-index order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges, in position-index order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The node at `index`.
    ///
    /// # Panics
    /// If `index` is out of bounds.
    pub fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    /// The edge at `index`.
    ///
    /// # Panics
    /// If `index` is out of bounds.
    pub fn edge(&self, index: usize) -> &Edge {
        &self.edges[index]
    }

    /// Registers (or replaces) a named subgraph view.
    pub fn set_subgraph(&mut self, name: impl Into<String>, subgraph: Subgraph) {
        self.subgraphs.insert(name.into(), subgraph);
    }

    /// Looks up a named subgraph view.
    pub fn subgraph(&self, name: &str) -> Option<&Subgraph> {
        self.subgraphs.get(name)
    }

    /// Indices of every edge running directly from `head` to `tail`.
    ///
    /// Graphs in this crate's domain are small, so a linear scan here is
    /// simpler to audit than an adjacency index, and keeps `Graph` free
    /// of bookkeeping that would need to stay in sync under mutation.
    pub fn edges_between(&self, head: usize, tail: usize) -> impl Iterator<Item = usize> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter(move |(_, e)| e.head == head && e.tail == tail)
            .map(|(i, _)| i)
    }
}
