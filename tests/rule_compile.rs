pub mod common;

use common::subgraph;
use graphrewrite_rs::graph::{Edge, Graph, Node, L_NAME, R_NAME};
use graphrewrite_rs::{compile_rule, CompileError};

fn annotate(l_nodes: &[usize], r_nodes: &[usize], l_edges: &[usize], r_edges: &[usize], g: &mut Graph) {
    g.set_subgraph(L_NAME, subgraph(l_nodes.iter().copied(), l_edges.iter().copied()));
    g.set_subgraph(R_NAME, subgraph(r_nodes.iter().copied(), r_edges.iter().copied()));
}

#[test]
fn missing_subgraph_is_an_error() {
    let g = Graph::new();
    assert_eq!(compile_rule(&g), Err(CompileError::MissingSubgraph(L_NAME)));
}

#[test]
fn node_outside_both_sides_is_an_error() {
    let mut g = Graph::new();
    g.add_node(Node::new("a"));
    annotate(&[], &[], &[], &[], &mut g);
    assert_eq!(compile_rule(&g), Err(CompileError::NodeNotInEitherSide(0)));
}

#[test]
fn shared_node_becomes_a_k_node() {
    let mut g = Graph::new();
    let a = g.add_node(Node::new("a"));
    annotate(&[a], &[a], &[], &[], &mut g);
    let rule = compile_rule(&g).unwrap();
    assert_eq!(rule.k.nodes().len(), 1);
    assert_eq!(rule.l.nodes().len(), 1);
    assert_eq!(rule.r.nodes().len(), 1);
    assert_eq!(rule.k_to_l.node_mapping, vec![0]);
    assert_eq!(rule.k_to_r.node_mapping, vec![0]);
}

#[test]
fn duplicate_label_on_one_side_is_an_error() {
    let mut g = Graph::new();
    let a = g.add_node(Node::new("a"));
    let b = g.add_node(Node::new("b"));
    let c = g.add_node(Node::new("c"));
    let e1 = g.add_edge(Edge::new(a, b, "e"));
    let e2 = g.add_edge(Edge::new(a, c, "e"));
    annotate(&[a, b, c], &[a, b, c], &[e1, e2], &[], &mut g);
    assert_eq!(
        compile_rule(&g),
        Err(CompileError::DuplicateEdgeLabel("e".to_string()))
    );
}

#[test]
fn shared_edge_label_produces_a_k_edge() {
    let mut g = Graph::new();
    let a = g.add_node(Node::new("a"));
    let b = g.add_node(Node::new("b"));
    let e = g.add_edge(Edge::new(a, b, "keep"));
    annotate(&[a, b], &[a, b], &[e], &[e], &mut g);
    let rule = compile_rule(&g).unwrap();
    assert_eq!(rule.k.edges().len(), 1);
    assert_eq!(rule.k.edge(0).label, "keep");
    assert_eq!(rule.k_to_l.edge_mapping, vec![vec![0]]);
    assert_eq!(rule.k_to_r.edge_mapping, vec![vec![0]]);
}

#[test]
fn edge_in_both_sides_is_an_error() {
    let mut g = Graph::new();
    let a = g.add_node(Node::new("a"));
    let b = g.add_node(Node::new("b"));
    let e = g.add_edge(Edge::new(a, b, "e"));
    // both sides claim edge 0
    g.set_subgraph(L_NAME, subgraph([a, b], [e]));
    g.set_subgraph(R_NAME, subgraph([a, b], [e]));
    assert_eq!(compile_rule(&g), Err(CompileError::EdgeInBothSides(e)));
}

/// Node `c` is only in `"R"`, but the edge `a -> c` is annotated `"L"`-only:
/// the edge's tail endpoint was never assigned to the side the edge itself
/// was assigned to.
#[test]
fn edge_endpoint_missing_from_its_own_side_is_an_error() {
    let mut g = Graph::new();
    let a = g.add_node(Node::new("a"));
    let c = g.add_node(Node::new("c"));
    let e = g.add_edge(Edge::new(a, c, ""));
    g.set_subgraph(L_NAME, subgraph([a], [e]));
    g.set_subgraph(R_NAME, subgraph([a, c], []));
    assert_eq!(compile_rule(&g), Err(CompileError::EdgeEndpointNotInSide(e)));
}
