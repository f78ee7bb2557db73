//! Applies a compiled [Rule] at a chosen embedding, producing the DPO
//! pushout graph.
//!
//! [apply_rule] assumes its inputs are well-formed — a `rule` produced
//! by [compile_rule][crate::rule::compile_rule] and a `matching`
//! produced by [find_matches][crate::matching::find_matches] against
//! `rule.l` — and does not re-validate them; callers that hand-build
//! either value are responsible for upholding the invariants documented
//! on [Rule][crate::rule::Rule] and [GraphMapping].

use std::collections::HashSet;

use crate::graph::Graph;
use crate::mapping::GraphMapping;
use crate::rule::Rule;

/// Builds the rewritten graph `T'` from `rule`, `target`, and one
/// embedding `matching` of `rule.l` into `target`.
///
/// Nodes of `T'` are appended in three groups, in this order: target
/// nodes untouched by the match, then one re-emitted node per `K`-node
/// (carrying *target*-side attributes — the rule does not let `R`
/// overwrite a preserved node), then freshly instantiated `R \ K` nodes.
/// Edges follow the analogous three groups. This order is part of the
/// observable contract, not an implementation detail: deletions are
/// implicit in it — anything in `L`'s image that isn't also in `K` is
/// simply never re-emitted.
///
/// # Panics
/// If `matching.node_mapping` does not have exactly `rule.l.nodes().len()`
/// entries. This, and any other mismatch between `rule` and `matching`,
/// is a programmer error: `matching` is expected to have come from
/// [find_matches][crate::matching::find_matches] run against `rule.l`.
pub fn apply_rule(rule: &Rule, target: &Graph, matching: &GraphMapping) -> Graph {
    assert_eq!(
        matching.node_mapping.len(),
        rule.l.nodes().len(),
        "apply_rule: matching does not cover rule.l's nodes"
    );

    let mut result = Graph::new();

    let covered_nodes: HashSet<usize> = matching.node_mapping.iter().copied().collect();
    let covered_edges: HashSet<usize> = matching.edge_mapping.iter().flatten().copied().collect();

    // target-node-index -> T' node-index, and R-node-index -> T'
    // node-index. A K-node fills both tables at the same T' index,
    // gluing the preserved context to the freshly instantiated RHS.
    let mut target_to_result: Vec<Option<usize>> = vec![None; target.nodes().len()];
    let mut r_to_result: Vec<Option<usize>> = vec![None; rule.r.nodes().len()];

    // 1. target nodes not covered by L's image: preserved context.
    for (i, node) in target.nodes().iter().enumerate() {
        if !covered_nodes.contains(&i) {
            target_to_result[i] = Some(result.add_node(node.clone()));
        }
    }

    // 2. K-nodes: re-emit the preserved-in-place target node under K's
    // ordering, keeping target-side attributes.
    for k_idx in 0..rule.k.nodes().len() {
        let l_idx = rule.k_to_l.node_mapping[k_idx];
        let t_idx = matching.node_mapping[l_idx];
        let new_idx = result.add_node(target.node(t_idx).clone());
        target_to_result[t_idx] = Some(new_idx);
        let r_idx = rule.k_to_r.node_mapping[k_idx];
        r_to_result[r_idx] = Some(new_idx);
    }

    // 3. fresh R-nodes not covered by K's image.
    let k_r_node_image: HashSet<usize> = rule.k_to_r.node_mapping.iter().copied().collect();
    for (r_idx, r_node) in rule.r.nodes().iter().enumerate() {
        if !k_r_node_image.contains(&r_idx) {
            r_to_result[r_idx] = Some(result.add_node(r_node.clone()));
        }
    }

    // 1. target edges not covered by L's image: preserved context.
    for (i, edge) in target.edges().iter().enumerate() {
        if !covered_edges.contains(&i) {
            let head = target_to_result[edge.head]
                .expect("target edge references a node dropped without being covered by the match");
            let tail = target_to_result[edge.tail]
                .expect("target edge references a node dropped without being covered by the match");
            result.add_edge(crate::graph::Edge {
                head,
                tail,
                ..edge.clone()
            });
        }
    }

    // 2. K-edges: every target edge the matcher paired with this edge's
    // L counterpart, carrying through parallel-edge multiplicity.
    for k_idx in 0..rule.k.edges().len() {
        let l_idx = rule.k_to_l.edge_mapping[k_idx][0];
        for &t_idx in &matching.edge_mapping[l_idx] {
            let edge = target.edge(t_idx);
            let head = target_to_result[edge.head].expect("K-edge target endpoint not preserved");
            let tail = target_to_result[edge.tail].expect("K-edge target endpoint not preserved");
            result.add_edge(crate::graph::Edge {
                head,
                tail,
                ..edge.clone()
            });
        }
    }

    // 3. fresh R-edges not covered by K's image.
    let k_r_edge_image: HashSet<usize> =
        rule.k_to_r.edge_mapping.iter().flatten().copied().collect();
    for (r_idx, r_edge) in rule.r.edges().iter().enumerate() {
        if !k_r_edge_image.contains(&r_idx) {
            let head = r_to_result[r_edge.head].expect("fresh R-edge references an R-node that was dropped");
            let tail = r_to_result[r_edge.tail].expect("fresh R-edge references an R-node that was dropped");
            result.add_edge(crate::graph::Edge {
                head,
                tail,
                ..r_edge.clone()
            });
        }
    }

    result
}
