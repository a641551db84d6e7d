//! Rotation primitives used by the splay driver.
//!
//! Every rotation keeps the entry it is applied to at the top of the rotated subtree: instead of
//! relinking a different entry into that position, the elements of the top entry and the entry
//! being raised are swapped and the remaining links are rearranged below it. The parent of the
//! top entry, and any handle to it held elsewhere, stay valid.
//!
//! A rotation requires the child or grandchild named by its pattern to exist. Calling one without
//! it is a bug in the caller and panics.

use crate::arena::{Arena, Handle};
use crate::splay_tree::node::Node;
use std::mem;

pub type Nodes<T> = Arena<Node<T>>;

/// The direction a search took when leaving an entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Dir {
    Left,
    Right,
}

/// One of the six restructuring patterns of a top-down splay.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Rotation {
    Zig,
    Zag,
    ZigZig,
    ZagZag,
    ZigZag,
    ZagZig,
}

impl Rotation {
    /// Selects the rotation for an entry the search left in direction `step`. `next` is the
    /// direction the search left the child in, or `None` if the search stopped at the child.
    pub fn select(step: Dir, next: Option<Dir>) -> Self {
        match (step, next) {
            (Dir::Right, None) => Rotation::Zig,
            (Dir::Left, None) => Rotation::Zag,
            (Dir::Right, Some(Dir::Right)) => Rotation::ZigZig,
            (Dir::Left, Some(Dir::Left)) => Rotation::ZagZag,
            (Dir::Right, Some(Dir::Left)) => Rotation::ZigZag,
            (Dir::Left, Some(Dir::Right)) => Rotation::ZagZig,
        }
    }

    pub fn apply<T>(self, nodes: &mut Nodes<T>, x: Handle) {
        match self {
            Rotation::Zig => zig(nodes, x),
            Rotation::Zag => zag(nodes, x),
            Rotation::ZigZig => zigzig(nodes, x),
            Rotation::ZagZag => zagzag(nodes, x),
            Rotation::ZigZag => zigzag(nodes, x),
            Rotation::ZagZig => zagzig(nodes, x),
        }
    }
}

fn left_of<T>(nodes: &Nodes<T>, x: Handle) -> Handle {
    nodes[x].left.expect("Expected left child node to be `Some`.")
}

fn right_of<T>(nodes: &Nodes<T>, x: Handle) -> Handle {
    nodes[x].right.expect("Expected right child node to be `Some`.")
}

fn attach_left<T>(nodes: &mut Nodes<T>, x: Handle, child: Option<Handle>) {
    nodes[x].left = child;
    if let Some(child) = child {
        nodes[child].parent = Some(x);
    }
}

fn attach_right<T>(nodes: &mut Nodes<T>, x: Handle, child: Option<Handle>) {
    nodes[x].right = child;
    if let Some(child) = child {
        nodes[child].parent = Some(x);
    }
}

fn swap_elements<T>(nodes: &mut Nodes<T>, a: Handle, b: Handle) {
    let (a, b) = nodes.pair_mut(a, b);
    mem::swap(&mut a.element, &mut b.element);
}

/// Single right rotation raising the left child.
///
/// ```text
///       x           y'
///      / \         / \
///     y   C  -->  A   x'
///    / \             / \
///   A   B           B   C
/// ```
pub fn zag<T>(nodes: &mut Nodes<T>, x: Handle) {
    let y = left_of(nodes, x);
    swap_elements(nodes, x, y);
    let (a, b, c) = (nodes[y].left, nodes[y].right, nodes[x].right);

    attach_left(nodes, x, a);
    attach_right(nodes, x, Some(y));
    attach_left(nodes, y, b);
    attach_right(nodes, y, c);
}

/// Single left rotation raising the right child. Inverse of `zag`.
pub fn zig<T>(nodes: &mut Nodes<T>, x: Handle) {
    let y = right_of(nodes, x);
    swap_elements(nodes, x, y);
    let (a, b, c) = (nodes[x].left, nodes[y].left, nodes[y].right);

    attach_left(nodes, x, Some(y));
    attach_right(nodes, x, c);
    attach_left(nodes, y, a);
    attach_right(nodes, y, b);
}

/// Double rotation raising the right child of the left child.
///
/// ```text
///       x               z'
///      / \            /   \
///     y   D   -->    y     x'
///    / \            / \   / \
///   A   z          A   B C   D
///      / \
///     B   C
/// ```
pub fn zagzig<T>(nodes: &mut Nodes<T>, x: Handle) {
    let y = left_of(nodes, x);
    let z = right_of(nodes, y);
    swap_elements(nodes, x, z);
    let (b, c, d) = (nodes[z].left, nodes[z].right, nodes[x].right);

    attach_right(nodes, y, b);
    attach_left(nodes, z, c);
    attach_right(nodes, z, d);
    attach_right(nodes, x, Some(z));
}

/// Double rotation raising the left child of the right child. Mirror of `zagzig`.
pub fn zigzag<T>(nodes: &mut Nodes<T>, x: Handle) {
    let y = right_of(nodes, x);
    let z = left_of(nodes, y);
    swap_elements(nodes, x, z);
    let (a, b, c) = (nodes[x].left, nodes[z].left, nodes[z].right);

    attach_left(nodes, y, c);
    attach_left(nodes, z, a);
    attach_right(nodes, z, b);
    attach_left(nodes, x, Some(z));
}

/// Double rotation raising the left child of the left child.
///
/// ```text
///         x           z'
///        / \         / \
///       y   D       A   y
///      / \     -->     / \
///     z   C           B   x'
///    / \                 / \
///   A   B               C   D
/// ```
pub fn zagzag<T>(nodes: &mut Nodes<T>, x: Handle) {
    let y = left_of(nodes, x);
    let z = left_of(nodes, y);
    swap_elements(nodes, x, z);
    let (a, b) = (nodes[z].left, nodes[z].right);
    let (c, d) = (nodes[y].right, nodes[x].right);

    attach_left(nodes, x, a);
    attach_right(nodes, x, Some(y));
    attach_left(nodes, y, b);
    attach_right(nodes, y, Some(z));
    attach_left(nodes, z, c);
    attach_right(nodes, z, d);
}

/// Double rotation raising the right child of the right child. Inverse of `zagzag`.
pub fn zigzig<T>(nodes: &mut Nodes<T>, x: Handle) {
    let y = right_of(nodes, x);
    let z = right_of(nodes, y);
    swap_elements(nodes, x, z);
    let (a, b) = (nodes[x].left, nodes[y].left);
    let (c, d) = (nodes[z].left, nodes[z].right);

    attach_left(nodes, x, Some(y));
    attach_right(nodes, x, d);
    attach_left(nodes, y, Some(z));
    attach_right(nodes, y, c);
    attach_left(nodes, z, a);
    attach_right(nodes, z, b);
}
