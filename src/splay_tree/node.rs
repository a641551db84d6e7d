use crate::arena::Handle;

/// A struct representing an entry of a splay tree.
///
/// `left` and `right` are the structural edges. `parent` is a back-reference that every
/// relinking operation keeps pointing at the actual structural parent; it is `None` only for
/// the root entry.
pub struct Node<T> {
    pub element: T,
    pub left: Option<Handle>,
    pub right: Option<Handle>,
    pub parent: Option<Handle>,
}

impl<T> Node<T> {
    pub fn new(element: T, parent: Option<Handle>) -> Self {
        Node {
            element,
            left: None,
            right: None,
            parent,
        }
    }
}
