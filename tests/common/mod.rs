use std::collections::HashSet;

use graphrewrite_rs::graph::Subgraph;

/// Builds a [Subgraph] from plain index lists, for annotating the `"L"`
/// and `"R"` views on a test graph.
pub fn subgraph(nodes: impl IntoIterator<Item = usize>, edges: impl IntoIterator<Item = usize>) -> Subgraph {
    Subgraph {
        nodes: nodes.into_iter().collect::<HashSet<_>>(),
        edges: edges.into_iter().collect::<HashSet<_>>(),
    }
}
