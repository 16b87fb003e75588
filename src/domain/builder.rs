//! Tree construction from flat child → parent maps.

use tracing::{debug, instrument, trace};

use crate::domain::error::{TreeError, TreeResult};
use crate::domain::node::ROOT;
use crate::domain::tree::Tree;

impl<T> Tree<T> {
    /// Rebuilds a tree from `(child, parent)` pairs.
    ///
    /// The root is the single entry whose child equals its parent. Every other entry is
    /// attached below the node created for its parent key, payloads are built from the
    /// keys with `T::from`. Siblings keep the iteration order of `pairs`, so hash map
    /// inputs yield an arbitrary (but structurally equivalent) sibling order. Entries
    /// not reachable from the root are ignored, each reachable entry becomes one node.
    ///
    /// Keys only need `PartialEq`, so finding the children of a node scans all pairs:
    /// building takes `O(n²)` comparisons.
    ///
    /// # Errors
    /// - [`TreeError::MissingRoot`] when no entry references itself.
    /// - [`TreeError::AmbiguousRoot`] when more than one entry does.
    /// - [`TreeError::CycleDetected`] when an entry is reached a second time, which
    ///   happens when the root key also appears as a child below its own subtree.
    #[instrument(level = "debug", skip(pairs))]
    pub fn from_map<M, K>(pairs: M) -> TreeResult<Self>
    where
        M: IntoIterator<Item = (K, K)>,
        K: Clone + PartialEq,
        T: From<K>,
    {
        let pairs: Vec<(K, K)> = pairs.into_iter().collect();
        debug!(entries = pairs.len(), "building tree from map");

        let root = find_root(&pairs)?;
        let mut tree = Tree::new(T::from(pairs[root].0.clone()));
        let mut visited = vec![false; pairs.len()];
        visited[root] = true;
        let mut stack: Vec<(usize, _)> = children_of(&pairs, root)
            .rev()
            .map(|entry| (entry, ROOT))
            .collect();

        while let Some((entry, parent)) = stack.pop() {
            if std::mem::replace(&mut visited[entry], true) {
                return Err(TreeError::CycleDetected(parent));
            }

            let node = tree.insert(parent, T::from(pairs[entry].0.clone()))?;
            trace!(%node, %parent, entry, "attached map entry");
            stack.extend(children_of(&pairs, entry).rev().map(|child| (child, node)));
        }

        Ok(tree)
    }
}

/// Index of the single self-referencing entry.
fn find_root<K: PartialEq>(pairs: &[(K, K)]) -> TreeResult<usize> {
    let mut roots = pairs
        .iter()
        .enumerate()
        .filter(|(_, (child, parent))| child == parent)
        .map(|(entry, _)| entry);
    let root = roots.next().ok_or(TreeError::MissingRoot)?;
    match roots.count() {
        0 => Ok(root),
        others => Err(TreeError::AmbiguousRoot(others + 1)),
    }
}

/// Indices of the entries whose parent is the child key of `pairs[entry]`.
fn children_of<K: PartialEq>(
    pairs: &[(K, K)],
    entry: usize,
) -> impl DoubleEndedIterator<Item = usize> + '_ {
    let key = &pairs[entry].0;
    pairs
        .iter()
        .enumerate()
        .filter(move |(_, (child, parent))| parent == key && child != parent)
        .map(|(index, _)| index)
}
