//! Finds all embeddings of a pattern graph inside a target graph.
//!
//! The problem solved here is subgraph matching: given a pattern graph
//! `P` and a target graph `T`, find every assignment of `P`'s nodes to
//! `T`'s nodes such that labels agree and every pattern edge is
//! witnessed by at least one target edge between the assigned
//! endpoints. [find_matches] is the entry point; [search] holds the
//! depth-first backtracking engine.
//!
//! This is deliberately a single, specialized depth-first search, not a
//! general VF2-style algorithm with `in`/`out`/`terminal` set
//! bookkeeping — that belongs to a more general matcher than this
//! engine needs. Node injectivity is *not* enforced: two distinct
//! pattern nodes are allowed to map to the same target node unless the
//! caller's labels or structure rule that out. This is a preserved
//! quirk of the reference behavior, not a bug to quietly fix here.

mod search;

use crate::graph::Graph;
use crate::mapping::GraphMapping;

/// Finds every embedding of `pattern` into `target`.
///
/// A pattern node with a non-empty label matches only target nodes with
/// the identical label; an empty label matches any target node. Matches
/// are returned in the order the depth-first search discovers them:
/// lexicographic by `node_mapping`, target-index `0` tried first for
/// every pattern node.
///
/// # Panics
/// If `pattern` has no nodes. An empty pattern is a programmer error,
/// not a recoverable one — the result of matching "nothing" against a
/// graph is not meaningfully defined by this engine.
pub fn find_matches(pattern: &Graph, target: &Graph) -> Vec<GraphMapping> {
    assert!(
        !pattern.nodes().is_empty(),
        "find_matches: pattern graph must have at least one node"
    );
    search::run(pattern, target)
}
