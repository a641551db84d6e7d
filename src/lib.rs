//! Ordered collections sharing a find-by-value contract.
//!
//! `SortedList` is a sorted singly-linked list with linear lookups. `SplayTree` is a top-down
//! splay tree: every lookup rotates the search path so that the entry it ends at becomes the root,
//! which gives amortized logarithmic lookups without storing any balance information.
//!
//! Both implement `CollectionWithGet`, whose `add` and `get` reject a null (`None`) argument with
//! `Error::InvalidArgument`.
//!
//! Neither structure is synchronized; share one across threads only behind an external lock.

#[macro_use]
extern crate log;

mod collection;
mod error;
pub mod arena;
pub mod sorted_list;
pub mod splay_tree;

pub use self::collection::CollectionWithGet;
pub use self::error::{Error, Result};
pub use self::sorted_list::SortedList;
pub use self::splay_tree::SplayTree;
