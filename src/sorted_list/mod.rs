//! Singly-linked list that keeps its elements in non-decreasing order.

mod list;

pub use self::list::{SortedList, SortedListIter};
