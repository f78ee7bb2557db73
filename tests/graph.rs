pub mod common;

use common::subgraph;
use graphrewrite_rs::graph::{Edge, Graph, Node, L_NAME, R_NAME};

#[test]
fn appends_preserve_index_order() {
    let mut g = Graph::new();
    let a = g.add_node(Node::new("a"));
    let b = g.add_node(Node::new("b"));
    assert_eq!(a, 0);
    assert_eq!(b, 1);
    let e = g.add_edge(Edge::new(a, b, "e"));
    assert_eq!(e, 0);
    assert_eq!(g.nodes().len(), 2);
    assert_eq!(g.edges().len(), 1);
}

#[test]
fn edges_between_finds_parallel_edges() {
    let mut g = Graph::new();
    let a = g.add_node(Node::new("a"));
    let b = g.add_node(Node::new("b"));
    g.add_edge(Edge::new(a, b, "e1"));
    g.add_edge(Edge::new(a, b, "e2"));
    g.add_edge(Edge::new(b, a, "e3"));
    let forward: Vec<_> = g.edges_between(a, b).collect();
    assert_eq!(forward, vec![0, 1]);
    let backward: Vec<_> = g.edges_between(b, a).collect();
    assert_eq!(backward, vec![2]);
}

#[test]
fn subgraph_round_trip() {
    let mut g = Graph::new();
    let a = g.add_node(Node::new("a"));
    g.set_subgraph(L_NAME, subgraph([a], []));
    assert!(g.subgraph(L_NAME).unwrap().nodes.contains(&a));
    assert!(g.subgraph(R_NAME).is_none());
}
