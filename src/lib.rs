//! Ordered multi-way tree with stable node identities.
//!
//! A [`Tree`] owns its nodes in three synchronized maps (payload, parent link, ordered
//! children). Nodes are addressed by [`NodeId`] handles that are never reused, even
//! after removal. Traversal happens through [`Cursor`]s, which walk either a live child
//! list or an owned depth-first snapshot.
//!
//! ```
//! use rstree::Tree;
//!
//! let mut tree = Tree::new("root");
//! let child = tree.insert(tree.root_id(), "child")?;
//! tree.insert(child, "grandchild")?;
//!
//! let order: Vec<_> = tree.depth_first_search(tree.root_id())?.values().copied().collect();
//! assert_eq!(order, ["grandchild", "child", "root"]);
//! # Ok::<(), rstree::TreeError>(())
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod parser;
pub mod tree_traits;
pub mod util;

pub use domain::{Cursor, NodeId, Sequence, Tree, TreeError, TreeResult};
pub use tree_traits::{dismantle, graphviz_with, TreeConvert};
