use crate::collection::{self, CollectionWithGet};
use crate::error::Result;
use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    element: T,
    next: Link<T>,
}

/// An ordered collection implemented using a sorted singly-linked list.
///
/// Insertion and lookup are `O(n)`. Lookups stop as soon as they pass the position where the key
/// would be, and an element equal to existing ones is inserted in front of them.
///
/// # Examples
///
/// ```
/// use collections_with_get::SortedList;
///
/// let mut list = SortedList::new();
/// list.insert(3);
/// list.insert(1);
/// list.insert(2);
///
/// assert_eq!(list.find(&2), Some(&2));
/// assert_eq!(list.find(&4), None);
/// assert_eq!(list.iter().collect::<Vec<&u32>>(), vec![&1, &2, &3]);
/// ```
pub struct SortedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> SortedList<T> {
    /// Constructs a new, empty `SortedList<T>`.
    pub fn new() -> Self {
        SortedList { head: None, len: 0 }
    }

    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    /// Returns the minimum element of the list. Returns `None` if the list is empty.
    pub fn min(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.element)
    }

    /// Returns the maximum element of the list. Returns `None` if the list is empty.
    pub fn max(&self) -> Option<&T> {
        self.iter().last()
    }

    /// Returns an iterator over the list in non-decreasing order.
    ///
    /// # Examples
    ///
    /// ```
    /// use collections_with_get::SortedList;
    ///
    /// let mut list = SortedList::new();
    /// list.insert(2);
    /// list.insert(1);
    ///
    /// let mut iterator = list.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&2));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> SortedListIter<'_, T> {
        SortedListIter {
            current: self.head.as_ref().map(|node| &**node),
        }
    }
}

impl<T> SortedList<T>
where
    T: Ord,
{
    /// Inserts an element in front of the first element that is greater than or equal to it.
    pub fn insert(&mut self, element: T) {
        let mut link = &mut self.head;
        while link.as_ref().map_or(false, |node| node.element < element) {
            if let Some(node) = link {
                link = &mut node.next;
            }
        }
        let next = link.take();
        *link = Some(Box::new(Node { element, next }));
        self.len += 1;
    }

    /// Returns the first element equal to `key`, or `None` if there is no such element.
    pub fn find(&self, key: &T) -> Option<&T> {
        for element in self.iter() {
            match key.cmp(element) {
                Ordering::Less => return None,
                Ordering::Equal => return Some(element),
                Ordering::Greater => {},
            }
        }
        None
    }

    /// Checks if an element equal to `key` exists in the list.
    pub fn contains(&self, key: &T) -> bool {
        self.find(key).is_some()
    }
}

impl<T> CollectionWithGet<T> for SortedList<T>
where
    T: Ord,
{
    fn add<E>(&mut self, element: E) -> Result<()>
    where
        E: Into<Option<T>>,
    {
        let element = collection::require(element.into(), "element")?;
        self.insert(element);
        Ok(())
    }

    fn get<'a, K>(&mut self, key: K) -> Result<Option<&T>>
    where
        K: Into<Option<&'a T>>,
        T: 'a,
    {
        let key = collection::require(key.into(), "key")?;
        Ok(self.find(key))
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl<T> Drop for SortedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for SortedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for SortedList<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for SortedList<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T> FromIterator<T> for SortedList<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = SortedList::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a SortedList<T>
where
    T: 'a,
{
    type IntoIter = SortedListIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator for `SortedList<T>`.
///
/// This iterator traverses the elements of the list in non-decreasing order and yields immutable
/// references.
pub struct SortedListIter<'a, T>
where
    T: 'a,
{
    current: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for SortedListIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.take().map(|node| {
            self.current = node.next.as_ref().map(|node| &**node);
            &node.element
        })
    }
}
