//! Textual renderings of a tree: graphviz digraphs and terminal trees.

use std::collections::HashMap;
use std::fmt::Display;

use itertools::Itertools;
use termtree::Tree as TextTree;
use tracing::instrument;

use crate::config::RenderSettings;
use crate::domain::{NodeId, Tree};

pub trait TreeConvert {
    fn to_tree_string(&self) -> TextTree<String>;
}

impl<T: Display> TreeConvert for Tree<T> {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> TextTree<String> {
        // post-order: every child subtree is finished before its parent picks it up
        let mut built: HashMap<NodeId, TextTree<String>> = HashMap::new();
        for (node, value) in self.iter_postorder() {
            let mut text = TextTree::new(value.to_string());
            if let Ok(children) = self.children(node) {
                for (child, _) in children {
                    if let Some(subtree) = built.remove(&child) {
                        text.push(subtree);
                    }
                }
            }
            built.insert(node, text);
        }

        built
            .remove(&self.root_id())
            .unwrap_or_else(|| TextTree::new(self.root().value().to_string()))
    }
}

/// Drops a text tree level by level.
///
/// `termtree::Tree` drops its leaves recursively, which overflows the stack for very
/// deep trees.
pub fn dismantle<D: Display>(text: TextTree<D>) {
    let mut pending = vec![text];
    while let Some(mut subtree) = pending.pop() {
        pending.append(&mut subtree.leaves);
    }
}

impl<T> Tree<T> {
    /// Renders every parent → child edge as a graphviz digraph, one edge per line.
    ///
    /// Debug output only, not meant to be parsed back.
    pub fn graphviz(tree: &Tree<T>) -> String {
        graphviz_with(tree, &RenderSettings::default())
    }
}

/// [`Tree::graphviz`] with configurable graph name, node prefix and super-root edge.
#[instrument(level = "debug", skip(tree))]
pub fn graphviz_with<T>(tree: &Tree<T>, settings: &RenderSettings) -> String {
    let root = tree.root_id();
    let edges = tree
        .edges()
        .filter(|&(_, child)| settings.include_super_root || child != root)
        .map(|(parent, child)| format!("{prefix}{parent} -> {prefix}{child}\n", prefix = settings.node_prefix))
        .join("");

    format!("digraph {} {{\n{}}}\n", settings.graph_name, edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graphviz_single_root() {
        let tree = Tree::new(());
        assert_eq!(Tree::graphviz(&tree), "digraph G {\nn_0 -> n_1\n}\n");
    }

    #[test]
    fn test_graphviz_without_super_root_edge() {
        let mut tree = Tree::new(());
        tree.insert(tree.root_id(), ()).unwrap();
        let settings = RenderSettings {
            graph_name: "dominance".into(),
            node_prefix: "bb".into(),
            include_super_root: false,
        };

        assert_eq!(graphviz_with(&tree, &settings), "digraph dominance {\nbb1 -> bb2\n}\n");
    }

    #[test]
    fn test_to_tree_string_keeps_child_order() {
        let mut tree = Tree::new("root".to_string());
        let a = tree.insert(tree.root_id(), "a".to_string()).unwrap();
        tree.insert(a, "a1".to_string()).unwrap();
        tree.insert(tree.root_id(), "b".to_string()).unwrap();

        let text = tree.to_tree_string().to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "root");
        assert!(lines[1].ends_with("a"));
        assert!(lines[2].ends_with("a1"));
        assert!(lines[3].ends_with("b"));
    }

    #[test]
    fn test_to_tree_string_of_long_chain() {
        let mut tree = Tree::new(0);
        let mut tip = tree.root_id();
        for value in 1..100_000 {
            tip = tree.insert(tip, value).unwrap();
        }

        let text = tree.to_tree_string();

        let mut levels = 0;
        let mut current = &text;
        loop {
            levels += 1;
            assert_eq!(current.root, (levels - 1).to_string());
            match current.leaves.as_slice() {
                [] => break,
                [only] => current = only,
                _ => panic!("chain node with several children"),
            }
        }
        assert_eq!(levels, 100_000);
        dismantle(text);
    }
}
