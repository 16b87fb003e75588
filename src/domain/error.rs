//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::node::NodeId;

/// Recoverable tree errors.
///
/// Internal invariant violations (a depth-first snapshot that does not cover the whole
/// tree, dereferencing an end cursor) are not represented here: they panic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("no root: no entry declares itself as its own parent")]
    MissingRoot,

    #[error("ambiguous root: {0} entries declare themselves as their own parent")]
    AmbiguousRoot(usize),

    #[error("unknown node: {0}")]
    UnknownNode(NodeId),

    #[error("cycle detected in parent map below node: {0}")]
    CycleDetected(NodeId),
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, TreeError>;
