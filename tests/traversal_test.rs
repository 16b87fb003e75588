//! Tests for depth-first snapshots and structural equality

use std::sync::Arc;

use rstest::{fixture, rstest};

use rstree::util::testing::{init_test_setup, sample_tree};
use rstree::{NodeId, Sequence, Tree};

#[fixture]
fn tree() -> Tree<String> {
    init_test_setup();
    sample_tree()
}

// ============================================================
// Snapshot
// ============================================================

#[rstest]
fn given_tree_when_searching_depth_first_then_children_precede_parents(tree: Tree<String>) {
    let order: Vec<_> = tree
        .depth_first_search(tree.root_id())
        .unwrap()
        .values()
        .cloned()
        .collect();

    assert_eq!(order, vec!["a1", "a2", "a", "b1", "b", "root"]);
}

#[rstest]
fn given_snapshot_when_tree_is_dropped_then_ids_survive(tree: Tree<String>) {
    let ids: Arc<[NodeId]> = {
        let snapshot = tree.depth_first_search(tree.root_id()).unwrap();
        assert!(matches!(snapshot.sequence(), Sequence::Snapshot(_)));
        snapshot.snapshot_ids().unwrap()
    };
    let root = tree.root_id();
    drop(tree);

    assert_eq!(ids.len(), 6);
    assert_eq!(ids.last(), Some(&root));
}

#[rstest]
fn given_snapshot_and_live_cursor_on_root_then_they_compare_equal(tree: Tree<String>) {
    let mut snapshot = tree.depth_first_search(tree.root_id()).unwrap();
    snapshot.advance(5);

    assert_eq!(snapshot, tree.root());
    assert!(tree.root().snapshot_ids().is_none());
}

#[rstest]
#[should_panic(expected = "reached 3 of 6 nodes")]
fn given_non_root_start_when_searching_then_consistency_check_panics(tree: Tree<String>) {
    let a = tree
        .iter()
        .find(|(_, value)| value.as_str() == "a")
        .map(|(node, _)| node)
        .unwrap();

    let _ = tree.depth_first_search(a);
}

#[test]
fn given_single_node_when_searching_then_snapshot_holds_root() {
    let tree = Tree::new('x');

    let snapshot: Vec<_> = tree.depth_first_search(tree.root_id()).unwrap().collect();

    assert_eq!(snapshot, vec![(tree.root_id(), &'x')]);
}

// ============================================================
// Equality
// ============================================================

fn build(values: &[(&str, Option<usize>)]) -> Tree<String> {
    // Each entry names its parent by position in `values`, None is the root
    let mut tree = Tree::new(values[0].0.to_string());
    let mut ids = vec![tree.root_id()];
    for (value, parent) in &values[1..] {
        let parent = ids[parent.expect("only the first entry is the root")];
        ids.push(tree.insert(parent, value.to_string()).unwrap());
    }
    tree
}

#[test]
fn given_same_inserts_when_comparing_then_trees_are_equal() {
    let spec = [("r", None), ("a", Some(0)), ("b", Some(1)), ("c", Some(0))];

    assert_eq!(build(&spec), build(&spec));
}

#[test]
fn given_different_identity_numbering_when_comparing_then_trees_are_equal() {
    // Arrange: same shape, but the second tree burns identities on a removed node
    let first = build(&[("r", None), ("a", Some(0))]);
    let mut second = Tree::new("r".to_string());
    let scratch = second.insert(second.root_id(), "scratch".into()).unwrap();
    second.remove(scratch).unwrap();
    second.insert(second.root_id(), "a".into()).unwrap();

    // Assert
    assert_eq!(first, second);
}

#[rstest]
#[case(&[("r", None), ("a", Some(0))], &[("r", None), ("b", Some(0))])]
#[case(&[("r", None), ("a", Some(0))], &[("r", None), ("a", Some(0)), ("b", Some(0))])]
#[case(&[("r", None), ("a", Some(0)), ("b", Some(0))], &[("r", None), ("b", Some(0)), ("a", Some(0))])]
#[case(&[("r", None)], &[("s", None)])]
fn given_different_trees_when_comparing_then_not_equal(
    #[case] left: &[(&str, Option<usize>)],
    #[case] right: &[(&str, Option<usize>)],
) {
    assert_ne!(build(left), build(right));
}

#[test]
fn given_same_post_order_with_different_shape_when_comparing_then_equal() {
    // r -> a -> b and r -> [b, a] both yield "b a r" in post-order
    let chain = build(&[("r", None), ("a", Some(0)), ("b", Some(1))]);
    let flat = build(&[("r", None), ("b", Some(0)), ("a", Some(0))]);

    assert_eq!(chain, flat);
}

#[rstest]
fn given_tree_when_cloned_then_clone_is_equal(tree: Tree<String>) {
    let copy = tree.clone();

    assert_eq!(copy, tree);
}
