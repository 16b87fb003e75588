//! Cursors over node identity sequences.
//!
//! A cursor walks either a child list owned by the tree (live) or an identity sequence
//! materialized by a depth-first walk (snapshot). Both dereference through the tree's
//! payload map.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::domain::node::NodeId;

/// Backing sequence of a [`Cursor`].
#[derive(Debug, Clone)]
pub enum Sequence<'a> {
    /// Child list borrowed from the tree.
    Live(&'a [NodeId]),
    /// Identity sequence owned independently of the tree.
    Snapshot(Arc<[NodeId]>),
}

impl Sequence<'_> {
    fn as_slice(&self) -> &[NodeId] {
        match self {
            Sequence::Live(ids) => ids,
            Sequence::Snapshot(ids) => ids,
        }
    }
}

/// Forward cursor yielding `(NodeId, &T)` pairs.
///
/// Two cursors compare equal when both are past the end, or when both point at the
/// same identity. The position is not part of the comparison.
pub struct Cursor<'a, T> {
    items: &'a HashMap<NodeId, T>,
    sequence: Sequence<'a>,
    position: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn live(items: &'a HashMap<NodeId, T>, ids: &'a [NodeId], position: usize) -> Self {
        Self {
            items,
            sequence: Sequence::Live(ids),
            position: position.min(ids.len()),
        }
    }

    pub(crate) fn snapshot(items: &'a HashMap<NodeId, T>, ids: Arc<[NodeId]>) -> Self {
        Self {
            items,
            sequence: Sequence::Snapshot(ids),
            position: 0,
        }
    }

    /// Identity under the cursor, `None` past the end.
    pub fn id(&self) -> Option<NodeId> {
        self.sequence.as_slice().get(self.position).copied()
    }

    /// Payload under the cursor, `None` past the end.
    pub fn get(&self) -> Option<&'a T> {
        self.id().map(|id| self.payload(id))
    }

    /// Payload under the cursor.
    ///
    /// # Panics
    /// If the cursor is past the end of its sequence.
    pub fn value(&self) -> &'a T {
        match self.get() {
            Some(value) => value,
            None => panic!("dereferenced a cursor past the end of its sequence"),
        }
    }

    pub fn is_end(&self) -> bool {
        self.position >= self.sequence.as_slice().len()
    }

    /// Moves the cursor `n` steps forward, stopping at the end.
    pub fn advance(&mut self, n: usize) {
        self.position = (self.position + n).min(self.sequence.as_slice().len());
    }

    pub fn sequence(&self) -> &Sequence<'a> {
        &self.sequence
    }

    /// The owned identity sequence of a snapshot cursor.
    ///
    /// The returned sequence outlives the tree; live cursors return `None`.
    pub fn snapshot_ids(&self) -> Option<Arc<[NodeId]>> {
        match &self.sequence {
            Sequence::Snapshot(ids) => Some(Arc::clone(ids)),
            Sequence::Live(_) => None,
        }
    }

    /// Adapter yielding only the payloads.
    pub fn values(self) -> impl Iterator<Item = &'a T> {
        self.map(|(_, value)| value)
    }

    fn payload(&self, id: NodeId) -> &'a T {
        match self.items.get(&id) {
            Some(value) => value,
            None => panic!("cursor references node {id} which holds no payload"),
        }
    }
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = (NodeId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.id()?;
        self.position += 1;
        Some((id, self.payload(id)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.sequence.as_slice().len() - self.position;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Cursor<'_, T> {}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items,
            sequence: self.sequence.clone(),
            position: self.position,
        }
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("sequence", &self.sequence)
            .field("position", &self.position)
            .finish()
    }
}
