//! Integration tests for rooted trees.

use setgraph::{DirectedEdge, DirectedGraph, GraphError, Tree};
use std::collections::HashSet;

fn arc(a: u32, b: u32) -> DirectedEdge<u32> {
    DirectedEdge::new(a, b).unwrap()
}

#[test]
fn test_cascading_vertex_removal() {
    let mut tree = Tree::new(1);
    tree.add_edge(1, 2).unwrap();
    tree.add_edge(2, 3).unwrap();

    assert_eq!(tree.remove_vertex(&2), Ok(true));
    assert!(!tree.contains_vertex(&2));
    assert!(!tree.contains_vertex(&3));
    assert!(tree.edges().is_empty());
    assert!(tree.validate_invariants());
}

#[test]
fn test_root_removal_is_an_error() {
    let mut tree = Tree::from_edges(1, [arc(1, 2), arc(2, 3)]);
    let before = tree.clone();
    assert_eq!(tree.remove_vertex(&1), Err(GraphError::RootRemoval));
    assert_eq!(tree, before);
    assert_eq!(tree.vertex_count(), 3);
}

#[test]
fn test_rejected_edges_leave_tree_unchanged() {
    let mut tree = Tree::from_edges(1, [arc(1, 2), arc(2, 3)]);
    let before = tree.clone();

    // Cycle back to the root, second parent, unknown source.
    assert!(!tree.insert_edge(arc(3, 1)));
    assert!(!tree.insert_edge(arc(1, 3)));
    assert!(!tree.insert_edge(arc(7, 8)));
    assert_eq!(tree, before);
}

#[test]
fn test_edge_count_tracks_vertex_count() {
    let mut tree = Tree::new(0u32);
    for v in 1..10 {
        tree.add_vertex(v);
    }
    for v in 10..20 {
        tree.add_edge(v - 9, v).unwrap();
    }
    assert_eq!(tree.edge_count() + 1, tree.vertex_count());
    assert!(tree.validate_invariants());
}

#[test]
fn test_remove_edge_drops_lower_branch() {
    let mut tree = Tree::from_edges(1, [arc(1, 2), arc(2, 3), arc(2, 4), arc(1, 5)]);
    assert!(tree.remove_edge(&arc(1, 2)));
    assert_eq!(tree.vertices(), &HashSet::from([1, 5]));
    assert_eq!(tree.remove_edges([&arc(1, 5), &arc(9, 10)]), 1);
    assert_eq!(tree, Tree::new(1));
}

#[test]
fn test_parent_child_navigation() {
    let tree = Tree::from_edges("root", [
        DirectedEdge::new("root", "a").unwrap(),
        DirectedEdge::new("a", "b").unwrap(),
        DirectedEdge::new("a", "c").unwrap(),
    ]);
    assert_eq!(tree.parent(&"b"), Some(&"a"));
    assert_eq!(tree.parent(&"root"), None);
    assert_eq!(tree.children(&"a"), HashSet::from(["b", "c"]));
    assert_eq!(tree.as_graph().out_degree(&"a"), 2);
}

#[test]
fn test_graft_directed_graph() {
    let mut graph = DirectedGraph::new();
    graph.add_edge(2, 3).unwrap();
    graph.add_edge(3, 2).unwrap();
    graph.add_edge(1, 2).unwrap();

    let mut tree = Tree::new(1);
    tree.add_graph(&graph);
    // 3 -> 2 would give 2 a second parent and is dropped.
    assert_eq!(tree.edges(), &HashSet::from([arc(1, 2), arc(2, 3)]));
    assert!(tree.validate_invariants());
}

#[test]
fn test_tree_hash_depends_on_root() {
    let a = Tree::from_edges(1, [arc(1, 2)]);
    let b = Tree::from_edges(1, [arc(1, 2)]);
    assert_eq!(a.structural_hash(), b.structural_hash());

    let set: HashSet<Tree<u32>> = [a, b].into_iter().collect();
    assert_eq!(set.len(), 1);
}
