//! Compiles a user-authored annotated graph into a double-pushout (DPO)
//! rewrite [Rule].
//!
//! A rule is a span `L ← K → R`: `K` names the nodes and edges preserved
//! across the rewrite, `L \ K` the elements deleted, `R \ K` the
//! elements created. [compile_rule] reads the annotation off of the
//! reserved `"L"`/`"R"` [Subgraph] views on the input graph and builds
//! all five pieces of the span.

use std::collections::HashMap;

use crate::error::CompileError;
use crate::graph::{Edge, Graph, L_NAME, R_NAME};
use crate::mapping::GraphMapping;

/// A DPO rewrite rule, as produced by [compile_rule].
///
/// `k` is a pure bookkeeping graph: its nodes carry the shared
/// attributes from the original annotated graph, but its edges carry
/// only a label and dummy endpoints (`head == tail == 0`, even when `k`
/// has no nodes at all) — they exist solely to pair an `l` edge with the
/// `r` edge sharing its label. Nothing in this crate ever dereferences a
/// `K`-edge's endpoints.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Rule {
    /// Left-hand side: what must be present to apply this rule.
    pub l: Graph,
    /// Common interface: what is preserved by the rewrite.
    pub k: Graph,
    /// Right-hand side: what is present after applying this rule.
    pub r: Graph,
    /// Injects `k`'s nodes/edges into `l`.
    pub k_to_l: GraphMapping,
    /// Injects `k`'s nodes/edges into `r`.
    pub k_to_r: GraphMapping,
}

/// Compiles an annotated graph into a [Rule].
///
/// `g` must carry `"L"` and `"R"` [Subgraph][crate::graph::Subgraph]
/// views (see [L_NAME]/[R_NAME]) that together cover every node and
/// edge exactly as described in the module docs on [crate::graph]: a
/// node may lie in either or both views, an edge must lie in exactly
/// one. An edge label that appears on both sides induces a `K`-edge
/// pairing the two; a label repeated within one side is a compile
/// error. An edge assigned to a side whose endpoint node was not
/// itself assigned to that same side is also a compile error, rather
/// than a panic — the endpoint tables are built from the node pass
/// before any edge is read, but nothing about the subgraph views
/// prevents an author from annotating an edge onto a side its
/// endpoints were excluded from.
///
/// Node/edge order in the emitted `l`/`k`/`r` graphs follows `g`'s own
/// order — this is an observable part of the contract, not an
/// implementation detail.
pub fn compile_rule(g: &Graph) -> Result<Rule, CompileError> {
    let l_view = g.subgraph(L_NAME).ok_or(CompileError::MissingSubgraph(L_NAME))?;
    let r_view = g.subgraph(R_NAME).ok_or(CompileError::MissingSubgraph(R_NAME))?;

    let mut l = Graph::new();
    let mut r = Graph::new();
    let mut k = Graph::new();
    let mut k_to_l = GraphMapping::new();
    let mut k_to_r = GraphMapping::new();

    // Translation tables from `g` node-index to the side graph it was
    // appended into. Fixed-length, sentinel-valued, indexed by `g`
    // node-index, as prescribed for every index-rewrite table in this
    // crate.
    let mut g_to_l: Vec<Option<usize>> = vec![None; g.nodes().len()];
    let mut g_to_r: Vec<Option<usize>> = vec![None; g.nodes().len()];

    for (i, node) in g.nodes().iter().enumerate() {
        let in_l = l_view.nodes.contains(&i);
        let in_r = r_view.nodes.contains(&i);
        if !in_l && !in_r {
            return Err(CompileError::NodeNotInEitherSide(i));
        }
        if in_l {
            g_to_l[i] = Some(l.add_node(node.clone()));
        }
        if in_r {
            g_to_r[i] = Some(r.add_node(node.clone()));
        }
        if in_l && in_r {
            let k_idx = k.add_node(node.clone());
            k_to_l.node_mapping.push(g_to_l[i].unwrap());
            k_to_r.node_mapping.push(g_to_r[i].unwrap());
            debug_assert_eq!(k_idx, k_to_l.node_mapping.len() - 1);
        }
    }

    // Per-side label -> side-edge-index maps, used both to reject
    // duplicate labels and, afterwards, to find labels shared between
    // the two sides.
    let mut l_labels: HashMap<String, usize> = HashMap::new();
    let mut r_labels: HashMap<String, usize> = HashMap::new();

    for (i, edge) in g.edges().iter().enumerate() {
        let in_l = l_view.edges.contains(&i);
        let in_r = r_view.edges.contains(&i);
        match (in_l, in_r) {
            (false, false) => return Err(CompileError::EdgeNotInEitherSide(i)),
            (true, true) => return Err(CompileError::EdgeInBothSides(i)),
            (true, false) => {
                let head = g_to_l[edge.head].ok_or(CompileError::EdgeEndpointNotInSide(i))?;
                let tail = g_to_l[edge.tail].ok_or(CompileError::EdgeEndpointNotInSide(i))?;
                let new_idx = l.add_edge(Edge {
                    head,
                    tail,
                    ..edge.clone()
                });
                if !edge.label.is_empty() {
                    if l_labels.insert(edge.label.clone(), new_idx).is_some() {
                        return Err(CompileError::DuplicateEdgeLabel(edge.label.clone()));
                    }
                }
            }
            (false, true) => {
                let head = g_to_r[edge.head].ok_or(CompileError::EdgeEndpointNotInSide(i))?;
                let tail = g_to_r[edge.tail].ok_or(CompileError::EdgeEndpointNotInSide(i))?;
                let new_idx = r.add_edge(Edge {
                    head,
                    tail,
                    ..edge.clone()
                });
                if !edge.label.is_empty() {
                    if r_labels.insert(edge.label.clone(), new_idx).is_some() {
                        return Err(CompileError::DuplicateEdgeLabel(edge.label.clone()));
                    }
                }
            }
        }
    }

    // Synthesize one K-edge per label shared by both sides. Iterating
    // `l`'s own edges (rather than the label maps, whose hash order is
    // not meaningful) keeps this deterministic.
    for (l_idx, l_edge) in l.edges().iter().enumerate() {
        if l_edge.label.is_empty() {
            continue;
        }
        if let Some(&r_idx) = r_labels.get(&l_edge.label) {
            k.add_edge(Edge::new(0, 0, l_edge.label.clone()));
            k_to_l.edge_mapping.push(vec![l_idx]);
            k_to_r.edge_mapping.push(vec![r_idx]);
        }
    }

    Ok(Rule {
        l,
        k,
        r,
        k_to_l,
        k_to_r,
    })
}
