//! Self-adjusting binary search tree with the additional property that recently accessed elements
//! are quick to access again.
//!
//! Lookups splay top-down: the search path is restructured with single and double rotations on
//! every other level, so no heights or colors are stored.

mod node;
mod rotate;
mod tree;

pub use self::tree::{SplayTree, SplayTreeIter};
