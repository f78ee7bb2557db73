use graphrewrite_rs::find_matches;
use graphrewrite_rs::graph::{Graph, Node};

#[test]
fn empty_target_yields_no_matches() {
    let mut pattern = Graph::new();
    pattern.add_node(Node::new(""));
    let target = Graph::new();
    assert_eq!(find_matches(&pattern, &target), Vec::new());
}

#[test]
fn label_mismatch_is_rejected() {
    let mut pattern = Graph::new();
    pattern.add_node(Node::new("x"));
    let mut target = Graph::new();
    target.add_node(Node::new("y"));
    assert_eq!(find_matches(&pattern, &target), Vec::new());
}
