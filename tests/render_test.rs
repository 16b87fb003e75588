//! Tests for graphviz and terminal tree rendering

use rstest::rstest;

use rstree::config::RenderSettings;
use rstree::util::testing::{init_test_setup, sample_tree};
use rstree::{graphviz_with, Tree, TreeConvert};

fn edge_lines(dot: &str) -> Vec<&str> {
    dot.lines().filter(|line| line.contains(" -> ")).collect()
}

#[test]
fn given_tree_when_rendering_graphviz_then_one_edge_per_node() {
    init_test_setup();
    let tree = sample_tree();

    let dot = Tree::graphviz(&tree);

    assert!(dot.starts_with("digraph G {\n"));
    assert!(dot.ends_with("}\n"));
    assert_eq!(edge_lines(&dot).len(), tree.size());
    assert!(dot.contains("n_0 -> n_1\n"));
}

#[test]
fn given_removed_subtree_when_rendering_graphviz_then_edges_are_gone() {
    let mut tree = sample_tree();
    let a = tree.children(tree.root_id()).unwrap().next().map(|(node, _)| node).unwrap();
    tree.remove(a).unwrap();

    let dot = Tree::graphviz(&tree);

    assert_eq!(edge_lines(&dot).len(), 3);
    assert!(!dot.contains(&format!("-> n_{a}\n")));
}

#[test]
fn given_tree_when_rendering_graphviz_then_edges_ordered_by_child() {
    let tree = sample_tree();

    let dot = Tree::graphviz(&tree);

    let expected = "digraph G {\n\
                    n_0 -> n_1\n\
                    n_1 -> n_2\n\
                    n_2 -> n_3\n\
                    n_2 -> n_4\n\
                    n_1 -> n_5\n\
                    n_5 -> n_6\n\
                    }\n";
    assert_eq!(dot, expected);
}

#[rstest]
#[case(true, 6)]
#[case(false, 5)]
fn given_settings_when_rendering_graphviz_then_super_root_edge_is_optional(
    #[case] include_super_root: bool,
    #[case] edges: usize,
) {
    let tree = sample_tree();
    let settings = RenderSettings {
        include_super_root,
        ..Default::default()
    };

    let dot = graphviz_with(&tree, &settings);

    assert_eq!(edge_lines(&dot).len(), edges);
}

#[test]
fn given_tree_when_rendering_text_then_every_value_appears_once() {
    let tree = sample_tree();

    let text = tree.to_tree_string().to_string();

    assert_eq!(text.lines().count(), tree.size());
    assert_eq!(text.lines().next(), Some("root"));
    for (_, value) in tree.iter() {
        assert_eq!(
            text.lines().filter(|line| line.ends_with(value.as_str())).count(),
            1,
            "value {value} rendered once"
        );
    }
}
