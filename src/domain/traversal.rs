//! Depth-first traversals, snapshots and structural equality.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::domain::cursor::Cursor;
use crate::domain::error::TreeResult;
use crate::domain::node::{NodeId, ROOT};
use crate::domain::tree::Tree;

impl<T> Tree<T> {
    /// Post-order walk of everything reachable from `start`, each identity once.
    pub(super) fn postorder_ids(&self, start: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut visited = HashSet::new();
        let mut stack = vec![(start, false)];

        while let Some((node, expanded)) = stack.pop() {
            if expanded {
                order.push(node);
                continue;
            }
            if !visited.insert(node) {
                continue;
            }
            stack.push((node, true));
            if let Some(children) = self.children.get(&node) {
                // Push children in reverse order for left-to-right traversal
                for &child in children.iter().rev() {
                    if !visited.contains(&child) {
                        stack.push((child, false));
                    }
                }
            }
        }

        order
    }

    /// Materializes the post-order traversal starting at `start`.
    ///
    /// Children are visited in child-list order before their parent. The returned
    /// cursor owns its identity sequence.
    ///
    /// # Panics
    /// If the walk does not reach every node of the tree. Only a start node from which
    /// the whole tree is reachable, normally the root, is valid.
    #[instrument(level = "trace", skip(self))]
    pub fn depth_first_search(&self, start: NodeId) -> TreeResult<Cursor<'_, T>> {
        self.ensure_node(start)?;
        Ok(self.snapshot_from(start))
    }

    fn snapshot_from(&self, start: NodeId) -> Cursor<'_, T> {
        let ids = self.postorder_ids(start);
        assert_eq!(
            ids.len(),
            self.size(),
            "depth-first search from node {start} reached {} of {} nodes",
            ids.len(),
            self.size()
        );
        debug!(start = %start, visited = ids.len(), "materialized snapshot");
        Cursor::snapshot(&self.items, Arc::from(ids))
    }

    /// Pre-order iterator over `(NodeId, &T)`.
    pub fn iter(&self) -> PreOrderIter<'_, T> {
        PreOrderIter::new(self)
    }

    /// Post-order iterator over `(NodeId, &T)`, without materializing a snapshot.
    pub fn iter_postorder(&self) -> PostOrderIter<'_, T> {
        PostOrderIter::new(self)
    }
}

/// Trees are equal when their post-order payload sequences are equal.
impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        let ours = self.snapshot_from(ROOT);
        let theirs = other.snapshot_from(ROOT);
        ours.values().eq(theirs.values())
    }
}

impl<T: Eq> Eq for Tree<T> {}

pub struct PreOrderIter<'a, T> {
    tree: &'a Tree<T>,
    stack: Vec<NodeId>,
}

impl<'a, T> PreOrderIter<'a, T> {
    fn new(tree: &'a Tree<T>) -> Self {
        Self {
            tree,
            stack: vec![ROOT],
        }
    }
}

impl<'a, T> Iterator for PreOrderIter<'a, T> {
    type Item = (NodeId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.stack.pop() {
            if let Some(value) = self.tree.items.get(&current) {
                if let Some(children) = self.tree.children.get(&current) {
                    self.stack.extend(children.iter().rev());
                }
                return Some((current, value));
            }
        }
        None
    }
}

pub struct PostOrderIter<'a, T> {
    tree: &'a Tree<T>,
    stack: Vec<(NodeId, bool)>,
}

impl<'a, T> PostOrderIter<'a, T> {
    fn new(tree: &'a Tree<T>) -> Self {
        Self {
            tree,
            stack: vec![(ROOT, false)],
        }
    }
}

impl<'a, T> Iterator for PostOrderIter<'a, T> {
    type Item = (NodeId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current, visited)) = self.stack.pop() {
            let Some(value) = self.tree.items.get(&current) else {
                continue;
            };
            if visited {
                return Some((current, value));
            }
            self.stack.push((current, true));
            if let Some(children) = self.tree.children.get(&current) {
                for &child in children.iter().rev() {
                    self.stack.push((child, false));
                }
            }
        }
        None
    }
}
