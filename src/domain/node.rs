use std::fmt;

/// Opaque node handle, unique for the lifetime of one tree instance.
///
/// Identities are handed out by [`Tree`](crate::domain::Tree) only. `0` is the
/// virtual super-root, `1` is always the root. Removed identities are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Virtual parent of the root, never holds a payload.
pub(crate) const SUPER_ROOT: NodeId = NodeId(0);

/// Identity of the first node created in every tree.
pub(crate) const ROOT: NodeId = NodeId(1);

impl NodeId {
    pub(crate) const fn new(raw: usize) -> Self {
        Self(raw)
    }

    /// Numeric value of the identity, for display and diagnostics.
    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
