//! Domain layer: the tree container and its traversals
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod builder;
pub mod cursor;
pub mod error;
pub mod node;
pub mod traversal;
pub mod tree;

pub use cursor::{Cursor, Sequence};
pub use error::{TreeError, TreeResult};
pub use node::NodeId;
pub use traversal::{PostOrderIter, PreOrderIter};
pub use tree::Tree;
