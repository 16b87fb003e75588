use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use itertools::Itertools;
use tracing::{instrument, trace};

use crate::domain::cursor::Cursor;
use crate::domain::error::{TreeError, TreeResult};
use crate::domain::node::{NodeId, ROOT, SUPER_ROOT};

/// Ordered multi-way tree with stable node identities.
///
/// Nodes live in three synchronized maps: payloads, parent links and ordered child
/// lists. The super-root `0` owns a child list holding exactly the root `1`, which
/// always exists. Siblings keep insertion order.
///
/// Identities from another tree instance are a precondition violation: they are not
/// detected and resolve by number. Removed identities are detected and rejected with
/// [`TreeError::UnknownNode`].
#[derive(Debug)]
pub struct Tree<T> {
    /// Next identity to hand out
    next: AtomicUsize,
    /// Payload per real node
    pub(super) items: HashMap<NodeId, T>,
    /// Parent per real node, the root points at the super-root
    pub(super) parents: HashMap<NodeId, NodeId>,
    /// Ordered children per node, including the super-root
    pub(super) children: HashMap<NodeId, Vec<NodeId>>,
}

impl<T: Default> Default for Tree<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> From<T> for Tree<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Clone> Clone for Tree<T> {
    fn clone(&self) -> Self {
        Self {
            next: AtomicUsize::new(self.next.load(Ordering::SeqCst)),
            items: self.items.clone(),
            parents: self.parents.clone(),
            children: self.children.clone(),
        }
    }
}

impl<T> Tree<T> {
    /// Creates a tree holding a single root node with `value`.
    pub fn new(value: T) -> Self {
        let mut tree = Self {
            next: AtomicUsize::new(ROOT.get()),
            items: HashMap::new(),
            parents: HashMap::new(),
            children: HashMap::new(),
        };
        let root = tree.allocate();
        tree.items.insert(root, value);
        tree.parents.insert(root, SUPER_ROOT);
        tree.children.insert(root, Vec::new());
        tree.children.insert(SUPER_ROOT, vec![root]);
        tree
    }

    fn allocate(&self) -> NodeId {
        NodeId::new(self.next.fetch_add(1, Ordering::SeqCst))
    }

    pub fn root_id(&self) -> NodeId {
        ROOT
    }

    /// Live cursor positioned at the root.
    pub fn root(&self) -> Cursor<'_, T> {
        Cursor::live(&self.items, self.child_list(SUPER_ROOT).unwrap_or(&[]), 0)
    }

    /// Live cursor at the first child of `node`.
    #[instrument(level = "trace", skip(self))]
    pub fn begin(&self, node: NodeId) -> TreeResult<Cursor<'_, T>> {
        self.ensure_node(node)?;
        Ok(Cursor::live(&self.items, self.child_list(node)?, 0))
    }

    /// Live cursor past the last child of `node`.
    #[instrument(level = "trace", skip(self))]
    pub fn end(&self, node: NodeId) -> TreeResult<Cursor<'_, T>> {
        self.ensure_node(node)?;
        let ids = self.child_list(node)?;
        Ok(Cursor::live(&self.items, ids, ids.len()))
    }

    /// Iterates the children of `node` in insertion order.
    pub fn children(&self, node: NodeId) -> TreeResult<Cursor<'_, T>> {
        self.begin(node)
    }

    /// Live cursor positioned at `node` inside its parent's child list.
    #[instrument(level = "trace", skip(self))]
    pub fn cursor(&self, node: NodeId) -> TreeResult<Cursor<'_, T>> {
        let parent = *self
            .parents
            .get(&node)
            .ok_or(TreeError::UnknownNode(node))?;
        let siblings = self.child_list(parent)?;
        let position = siblings
            .iter()
            .position(|&sibling| sibling == node)
            .ok_or(TreeError::UnknownNode(node))?;
        Ok(Cursor::live(&self.items, siblings, position))
    }

    pub fn get(&self, node: NodeId) -> Option<&T> {
        self.items.get(&node)
    }

    pub fn get_mut(&mut self, node: NodeId) -> Option<&mut T> {
        self.items.get_mut(&node)
    }

    /// Parent of `node`, `None` for the root and for unknown nodes.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.parents
            .get(&node)
            .copied()
            .filter(|&parent| parent != SUPER_ROOT)
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.items.contains_key(&node)
    }

    /// Number of payload-bearing nodes, never less than one.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Appends a new child holding `value` below `parent`.
    #[instrument(level = "trace", skip(self, value))]
    pub fn insert(&mut self, parent: NodeId, value: T) -> TreeResult<NodeId> {
        self.ensure_node(parent)?;

        let node = self.allocate();
        self.items.insert(node, value);
        self.parents.insert(node, parent);
        self.children.entry(parent).or_default().push(node);
        self.children.insert(node, Vec::new());

        trace!(%node, %parent, "inserted node");
        Ok(node)
    }

    /// All recorded parent → child edges, including the super-root edge, ordered by
    /// child identity.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.parents
            .iter()
            .map(|(&child, &parent)| (parent, child))
            .sorted_by_key(|&(_, child)| child)
    }

    /// Number of levels below and including the root.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(ROOT, 1)];
        while let Some((node, level)) = stack.pop() {
            deepest = deepest.max(level);
            if let Some(children) = self.children.get(&node) {
                stack.extend(children.iter().map(|&child| (child, level + 1)));
            }
        }
        deepest
    }

    /// Collects all nodes without children in pre-order.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_nodes(&self) -> Vec<NodeId> {
        self.iter()
            .map(|(node, _)| node)
            .filter(|node| self.children.get(node).map_or(true, Vec::is_empty))
            .collect()
    }

    pub(super) fn child_list(&self, node: NodeId) -> TreeResult<&[NodeId]> {
        self.children
            .get(&node)
            .map(Vec::as_slice)
            .ok_or(TreeError::UnknownNode(node))
    }

    pub(super) fn ensure_node(&self, node: NodeId) -> TreeResult<()> {
        if self.items.contains_key(&node) {
            Ok(())
        } else {
            Err(TreeError::UnknownNode(node))
        }
    }

    /// Unlinks a non-root node from its parent and drops all of its entries.
    fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.parents.remove(&node) {
            if let Some(siblings) = self.children.get_mut(&parent) {
                if let Some(position) = siblings.iter().position(|&sibling| sibling == node) {
                    siblings.remove(position);
                }
            }
        }
        self.children.remove(&node);
        self.items.remove(&node);
        trace!(%node, "detached node");
    }
}

impl<T: Default> Tree<T> {
    /// Removes `node` together with its whole subtree.
    ///
    /// Descendants go first, in post-order. The root is never removed: its subtree is
    /// cleared and its payload reset to `T::default()`.
    #[instrument(level = "trace", skip(self))]
    pub fn remove(&mut self, node: NodeId) -> TreeResult<()> {
        if node != SUPER_ROOT {
            self.ensure_node(node)?;
        }
        let target = if node == SUPER_ROOT { ROOT } else { node };

        for descendant in self.postorder_ids(target) {
            if descendant != target {
                self.detach(descendant);
            }
        }

        if target == ROOT {
            self.items.insert(ROOT, T::default());
            trace!("reset root payload");
        } else {
            self.detach(target);
        }
        Ok(())
    }
}
