//! Append-only node storage addressed by copyable handles.

use std::ops::{Index, IndexMut};
use std::vec::Vec;

/// A struct representing a slot in an `Arena<T>`.
///
/// Handles are plain indices, so holding one never keeps the value alive and never conflicts
/// with a borrow of the arena itself.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Handle(usize);

/// A growable store of values that are only ever freed all at once.
///
/// Values are addressed by `Handle`. All values are destroyed when the arena is cleared or
/// dropped.
///
/// # Examples
///
/// ```
/// use collections_with_get::arena::Arena;
///
/// let mut arena = Arena::new();
///
/// let x = arena.allocate(1);
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
/// ```
pub struct Arena<T> {
    slots: Vec<T>,
}

impl<T> Arena<T> {
    /// Constructs a new, empty `Arena<T>`.
    pub fn new() -> Self {
        Arena { slots: Vec::new() }
    }

    /// Moves a value into the arena and returns the handle that addresses it.
    ///
    /// # Examples
    ///
    /// ```
    /// use collections_with_get::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// let x = arena.allocate("a");
    /// let y = arena.allocate("b");
    /// assert_ne!(x, y);
    /// ```
    pub fn allocate(&mut self, value: T) -> Handle {
        self.slots.push(value);
        Handle(self.slots.len() - 1)
    }

    /// Returns an immutable reference to a value. Returns `None` if the handle does not belong
    /// to a live value.
    pub fn get(&self, handle: Handle) -> Option<&T> {
        self.slots.get(handle.0)
    }

    /// Returns a mutable reference to a value. Returns `None` if the handle does not belong to
    /// a live value.
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        self.slots.get_mut(handle.0)
    }

    /// Returns mutable references to two distinct values at once.
    ///
    /// # Panics
    ///
    /// Panics if both handles are equal or if either is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use collections_with_get::arena::Arena;
    /// use std::mem;
    ///
    /// let mut arena = Arena::new();
    /// let x = arena.allocate(1);
    /// let y = arena.allocate(2);
    /// {
    ///     let (a, b) = arena.pair_mut(x, y);
    ///     mem::swap(a, b);
    /// }
    /// assert_eq!((arena[x], arena[y]), (2, 1));
    /// ```
    pub fn pair_mut(&mut self, a: Handle, b: Handle) -> (&mut T, &mut T) {
        assert_ne!(a, b, "Error: cannot borrow the same slot twice.");
        if a.0 < b.0 {
            let (head, tail) = self.slots.split_at_mut(b.0);
            (&mut head[a.0], &mut tail[0])
        } else {
            let (head, tail) = self.slots.split_at_mut(a.0);
            (&mut tail[0], &mut head[b.0])
        }
    }

    /// Returns the number of values in the arena.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the arena holds no values.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Drops every value. Previously issued handles become dangling.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<Handle> for Arena<T> {
    type Output = T;

    fn index(&self, handle: Handle) -> &Self::Output {
        self.get(handle).expect("Error: handle out of bounds.")
    }
}

impl<T> IndexMut<Handle> for Arena<T> {
    fn index_mut(&mut self, handle: Handle) -> &mut Self::Output {
        self.get_mut(handle).expect("Error: handle out of bounds.")
    }
}
