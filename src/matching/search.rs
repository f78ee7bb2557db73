//! The depth-first backtracking search itself.
//!
//! This module implements the algorithm as a single explicit stack of
//! *speculative* assignments, rather than recursion, so that the "the
//! last entry is a guess we're currently testing" invariant is visible
//! in the data rather than folded into the call stack. A recursive
//! formulation would behave identically, including match order; the
//! stack form is just easier to audit against the invariant.

use crate::graph::Graph;
use crate::mapping::GraphMapping;

/// Runs the search and returns every complete embedding found.
///
/// `assigned[i]` is the target node-index tentatively (or, for `i <
/// assigned.len() - 1`, permanently within the current branch) bound to
/// pattern node `i`. The final entry is always speculative: we are
/// asking "does pattern node `assigned.len() - 1` map to target node
/// `assigned[assigned.len() - 1]`?"
pub fn run(pattern: &Graph, target: &Graph) -> Vec<GraphMapping> {
    let mut results = Vec::new();
    let mut assigned: Vec<usize> = vec![0];

    loop {
        let depth = assigned.len();
        let candidate = *assigned.last().unwrap();

        if candidate >= target.nodes().len() {
            // Exhausted every candidate at this depth; backtrack.
            assigned.pop();
            match assigned.last_mut() {
                Some(prev) => {
                    *prev += 1;
                    continue;
                }
                None => break,
            }
        }

        let pattern_idx = depth - 1;
        if is_valid_candidate(pattern, target, &assigned, pattern_idx, candidate) {
            if depth == pattern.nodes().len() {
                results.push(materialize(pattern, target, &assigned));
                *assigned.last_mut().unwrap() += 1;
            } else {
                assigned.push(0);
            }
        } else {
            *assigned.last_mut().unwrap() += 1;
        }
    }

    results
}

/// Tests whether pattern node `pattern_idx` may be bound to target node
/// `candidate`, given the (permanent) bindings in `assigned[..pattern_idx]`.
fn is_valid_candidate(
    pattern: &Graph,
    target: &Graph,
    assigned: &[usize],
    pattern_idx: usize,
    candidate: usize,
) -> bool {
    let pattern_label = &pattern.node(pattern_idx).label;
    if !pattern_label.is_empty() && pattern_label != &target.node(candidate).label {
        return false;
    }
    closed_edges_satisfied(pattern, target, assigned, pattern_idx)
}

/// Checks every pattern edge that becomes fully assigned by binding
/// `pattern_idx` — i.e. both its endpoints are now assigned, and
/// `pattern_idx` is the larger of the two (the one just added) — has a
/// witnessing edge in `target` between the corresponding bound nodes.
///
/// This is the sole pruning step the algorithm performs, and the one
/// piece of it that is load-bearing for correctness: without it,
/// `find_matches` would enumerate every node assignment and only reject
/// bad ones once the pattern is fully bound.
fn closed_edges_satisfied(
    pattern: &Graph,
    target: &Graph,
    assigned: &[usize],
    pattern_idx: usize,
) -> bool {
    pattern.edges().iter().all(|e| {
        let max_end = e.head.max(e.tail);
        let min_end = e.head.min(e.tail);
        if max_end != pattern_idx || min_end >= assigned.len() {
            return true;
        }
        let head = assigned[e.head];
        let tail = assigned[e.tail];
        target.edges_between(head, tail).next().is_some()
    })
}

/// Builds the full [GraphMapping] for a completed node assignment,
/// enumerating every target edge each pattern edge corresponds to.
fn materialize(pattern: &Graph, target: &Graph, assigned: &[usize]) -> GraphMapping {
    let node_mapping = assigned.to_vec();
    let edge_mapping = pattern
        .edges()
        .iter()
        .map(|e| {
            let head = node_mapping[e.head];
            let tail = node_mapping[e.tail];
            target.edges_between(head, tail).collect()
        })
        .collect();
    GraphMapping {
        node_mapping,
        edge_mapping,
    }
}
