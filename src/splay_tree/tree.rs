use crate::arena::{Arena, Handle};
use crate::collection::{self, CollectionWithGet};
use crate::error::Result;
use crate::splay_tree::node::Node;
use crate::splay_tree::rotate::{Dir, Nodes, Rotation};
use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::vec::Vec;

/// An ordered collection implemented using a top-down splay tree.
///
/// Every lookup through `find` (or `CollectionWithGet::get`) restructures the tree along the
/// search path so that the last entry examined ends up in the root. Recently accessed elements
/// are therefore cheap to access again, and all operations run in amortized `O(log n)` without
/// any balance bookkeeping. Misses splay as well.
///
/// The root entry never changes identity once the tree is non-empty; rotations move elements
/// into it instead.
///
/// # Examples
///
/// ```
/// use collections_with_get::SplayTree;
///
/// let mut tree = SplayTree::new();
/// for value in &[5, 3, 8, 1, 4, 7, 9] {
///     tree.insert(*value);
/// }
///
/// assert_eq!(tree.depth_of(&4), Some(2));
/// assert_eq!(tree.find(&4), Some(&4));
/// assert_eq!(tree.depth_of(&4), Some(0));
///
/// assert_eq!(tree.find(&6), None);
/// assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&1, &3, &4, &5, &7, &8, &9]);
/// ```
pub struct SplayTree<T> {
    nodes: Nodes<T>,
    root: Option<Handle>,
}

impl<T> SplayTree<T> {
    /// Constructs a new, empty `SplayTree<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use collections_with_get::SplayTree;
    ///
    /// let tree: SplayTree<u32> = SplayTree::new();
    /// ```
    pub fn new() -> Self {
        SplayTree {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Returns the number of elements in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Returns the number of entries on the longest root-to-leaf path. An empty tree has height
    /// zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use collections_with_get::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    /// tree.insert(3);
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        let mut stack: Vec<(Handle, usize)> = self.root.iter().map(|root| (*root, 1)).collect();
        let mut height: usize = 0;
        while let Some((curr, depth)) = stack.pop() {
            height = height.max(depth);
            let node = &self.nodes[curr];
            for child in node.left.iter().chain(node.right.iter()) {
                stack.push((*child, depth + 1));
            }
        }
        height
    }

    /// Returns the minimum element of the tree without splaying. Returns `None` if the tree is
    /// empty.
    pub fn min(&self) -> Option<&T> {
        self.root.map(|root| {
            let mut curr = root;
            while let Some(left) = self.nodes[curr].left {
                curr = left;
            }
            &self.nodes[curr].element
        })
    }

    /// Returns the maximum element of the tree without splaying. Returns `None` if the tree is
    /// empty.
    pub fn max(&self) -> Option<&T> {
        self.root.map(|root| {
            let mut curr = root;
            while let Some(right) = self.nodes[curr].right {
                curr = right;
            }
            &self.nodes[curr].element
        })
    }

    /// Returns an iterator over the tree. The iterator will yield elements using in-order
    /// traversal and does not splay.
    ///
    /// # Examples
    ///
    /// ```
    /// use collections_with_get::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    ///
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&2));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> SplayTreeIter<'_, T> {
        SplayTreeIter {
            nodes: &self.nodes,
            current: self.root,
            stack: Vec::new(),
        }
    }

    // Applies the rotations owed along a search path, deepest first. `path` holds every entry
    // the search stepped out of together with the direction it took; the entry the search
    // stopped at is not part of it.
    //
    // Only entries at even depth rotate. An entry at odd depth passes its direction up so that
    // its even parent can choose a double rotation; a rotation consumes whatever was passed up.
    fn splay_path(&mut self, path: &[(Handle, Dir)]) {
        let mut owed = None;
        for (depth, &(node, step)) in path.iter().enumerate().rev() {
            if depth % 2 == 0 {
                let rotation = Rotation::select(step, owed.take());
                trace!("splay: {:?} at depth {}", rotation, depth);
                rotation.apply(&mut self.nodes, node);
            } else {
                owed = Some(step);
            }
        }
    }
}

impl<T> SplayTree<T>
where
    T: Ord,
{
    /// Inserts an element into the tree as in an ordinary binary search tree, without splaying.
    /// An element equal to one already present is linked in as the in-order successor of the
    /// first equal entry met on the way down.
    ///
    /// # Examples
    ///
    /// ```
    /// use collections_with_get::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, element: T) {
        let mut curr = match self.root {
            Some(root) => root,
            None => {
                self.root = Some(self.nodes.allocate(Node::new(element, None)));
                return;
            },
        };

        loop {
            let (left, right) = (self.nodes[curr].left, self.nodes[curr].right);
            match element.cmp(&self.nodes[curr].element) {
                Ordering::Less => match left {
                    Some(left) => curr = left,
                    None => {
                        let new_node = self.nodes.allocate(Node::new(element, Some(curr)));
                        self.nodes[curr].left = Some(new_node);
                        return;
                    },
                },
                Ordering::Greater => match right {
                    Some(right) => curr = right,
                    None => {
                        let new_node = self.nodes.allocate(Node::new(element, Some(curr)));
                        self.nodes[curr].right = Some(new_node);
                        return;
                    },
                },
                Ordering::Equal => {
                    let new_node = self.nodes.allocate(Node::new(element, Some(curr)));
                    self.nodes[new_node].right = right;
                    if let Some(right) = right {
                        self.nodes[right].parent = Some(new_node);
                    }
                    self.nodes[curr].right = Some(new_node);
                    return;
                },
            }
        }
    }

    /// Searches for an element equal to `key` and splays the search path. Returns the first
    /// matching element, which is now stored in the root, or `None` if there is no match.
    ///
    /// # Examples
    ///
    /// ```
    /// use collections_with_get::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    /// tree.insert(3);
    ///
    /// assert_eq!(tree.find(&3), Some(&3));
    /// assert_eq!(tree.depth_of(&3), Some(0));
    /// assert_eq!(tree.find(&4), None);
    /// ```
    pub fn find(&mut self, key: &T) -> Option<&T> {
        let root = self.root?;
        let mut path = Vec::new();
        let mut curr = root;
        let found = loop {
            let node = &self.nodes[curr];
            let next = match key.cmp(&node.element) {
                Ordering::Less => node.left.map(|child| (Dir::Left, child)),
                Ordering::Greater => node.right.map(|child| (Dir::Right, child)),
                Ordering::Equal => break true,
            };
            match next {
                Some((step, child)) => {
                    path.push((curr, step));
                    curr = child;
                },
                None => break false,
            }
        };

        self.splay_path(&path);
        if found {
            Some(&self.nodes[root].element)
        } else {
            None
        }
    }

    /// Checks if an element equal to `key` exists in the tree. Note that `contains` does not
    /// splay the tree in order to use a non-mutable reference.
    pub fn contains(&self, key: &T) -> bool {
        self.depth_of(key).is_some()
    }

    /// Returns the number of edges between the root and the first entry equal to `key`, without
    /// splaying. Returns `None` if there is no such entry.
    pub fn depth_of(&self, key: &T) -> Option<usize> {
        let mut curr = self.root;
        let mut depth = 0;
        while let Some(handle) = curr {
            let node = &self.nodes[handle];
            curr = match key.cmp(&node.element) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(depth),
            };
            depth += 1;
        }
        None
    }
}

impl<T> CollectionWithGet<T> for SplayTree<T>
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
        self.nodes.len()
    }
}

impl<T> Default for SplayTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for SplayTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for SplayTree<T>
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

impl<T> FromIterator<T> for SplayTree<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = SplayTree::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T> IntoIterator for &'a SplayTree<T>
where
    T: 'a,
{
    type IntoIter = SplayTreeIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator for `SplayTree<T>`.
///
/// This iterator traverses the elements of the tree in-order and yields immutable references.
pub struct SplayTreeIter<'a, T>
where
    T: 'a,
{
    nodes: &'a Nodes<T>,
    current: Option<Handle>,
    stack: Vec<Handle>,
}

impl<'a, T> Iterator for SplayTreeIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let SplayTreeIter {
            nodes,
            ref mut current,
            ref mut stack,
        } = *self;
        while let Some(handle) = current.take() {
            stack.push(handle);
            *current = nodes[handle].left;
        }
        stack.pop().map(|handle| {
            let node = &nodes[handle];
            *current = node.right;
            &node.element
        })
    }
}

#[cfg(test)]
impl<T> SplayTree<T> {
    // Applies a double rotation and its inverse to the root entry. The tree must have a left-left
    // grandchild at the root.
    pub(crate) fn rotate_root_and_back(&mut self) {
        let root = self.root.expect("Expected a non-empty tree.");
        Rotation::ZagZag.apply(&mut self.nodes, root);
        Rotation::ZigZig.apply(&mut self.nodes, root);
    }

    // Panics unless every non-root entry's parent is its structural parent, the root has no
    // parent, and every entry is reachable from the root.
    pub(crate) fn assert_structure(&self) {
        match self.root {
            None => assert_eq!(self.nodes.len(), 0),
            Some(root) => {
                assert_eq!(self.nodes[root].parent, None);
                crate::splay_tree::rotate::tests::assert_parents(&self.nodes, root);
                assert_eq!(self.iter().count(), self.nodes.len());
            },
        }
    }

    pub(crate) fn render(&self) -> String
    where
        T: fmt::Display,
    {
        crate::splay_tree::rotate::tests::render(&self.nodes, self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::SplayTree;
    use crate::collection::CollectionWithGet;
    use crate::error::Error;
    use std::cmp::Ordering;

    #[derive(Debug)]
    struct Tagged(u32, &'static str);

    impl PartialEq for Tagged {
        fn eq(&self, other: &Tagged) -> bool {
            self.0 == other.0
        }
    }

    impl Eq for Tagged {}

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Tagged) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Tagged {
        fn cmp(&self, other: &Tagged) -> Ordering {
            self.0.cmp(&other.0)
        }
    }

    fn sample() -> SplayTree<u32> {
        [5, 3, 8, 1, 4, 7, 9].iter().cloned().collect()
    }

    #[test]
    fn test_len_empty() {
        let tree: SplayTree<u32> = SplayTree::new();
        assert_eq!(tree.len(), 0);
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
    }

    #[test]
    fn test_find_empty() {
        let mut tree: SplayTree<u32> = SplayTree::new();
        assert_eq!(tree.find(&1), None);
        assert_eq!(tree.get(&1), Ok(None));
    }

    #[test]
    fn test_min_max_empty() {
        let tree: SplayTree<u32> = SplayTree::new();
        assert_eq!(tree.min(), None);
        assert_eq!(tree.max(), None);
    }

    #[test]
    fn test_insert() {
        let tree = sample();
        assert_eq!(tree.len(), 7);
        assert_eq!(tree.render(), "((1 3 4) 5 (7 8 9))");
        assert!(tree.contains(&4));
        assert!(!tree.contains(&6));
        tree.assert_structure();
    }

    #[test]
    fn test_find_zagzig() {
        let mut tree = sample();
        assert_eq!(tree.find(&4), Some(&4));
        assert_eq!(tree.render(), "((1 3 .) 4 (. 5 (7 8 9)))");
        assert_eq!(tree.depth_of(&4), Some(0));
        tree.assert_structure();
    }

    #[test]
    fn test_find_zag() {
        let mut tree = sample();
        assert_eq!(tree.find(&3), Some(&3));
        assert_eq!(tree.render(), "(1 3 (4 5 (7 8 9)))");
        tree.assert_structure();
    }

    #[test]
    fn test_find_root() {
        let mut tree = sample();
        assert_eq!(tree.find(&5), Some(&5));
        assert_eq!(tree.render(), "((1 3 4) 5 (7 8 9))");
    }

    #[test]
    fn test_find_miss_splays_last_entry() {
        let mut tree = sample();
        assert_eq!(tree.find(&6), None);
        assert_eq!(tree.render(), "(((1 3 4) 5 .) 7 (. 8 9))");
        assert_eq!(tree.depth_of(&7), Some(0));
        tree.assert_structure();
    }

    #[test]
    fn test_find_miss_beyond_max() {
        let mut tree = sample();
        assert_eq!(tree.find(&10), None);
        assert_eq!(tree.depth_of(&9), Some(0));
        assert_eq!(
            tree.iter().collect::<Vec<&u32>>(),
            vec![&1, &3, &4, &5, &7, &8, &9],
        );
        tree.assert_structure();
    }

    #[test]
    fn test_find_returns_stored_element() {
        let mut tree = SplayTree::new();
        tree.insert(Tagged(1, "stored"));
        tree.insert(Tagged(2, "other"));
        assert_eq!(tree.find(&Tagged(1, "probe")).map(|found| found.1), Some("stored"));
    }

    #[test]
    fn test_duplicates_follow_first_match() {
        let mut tree = SplayTree::new();
        tree.insert(Tagged(2, "a"));
        tree.insert(Tagged(3, "x"));
        tree.insert(Tagged(2, "b"));
        tree.insert(Tagged(2, "c"));
        tree.assert_structure();

        assert_eq!(
            tree.iter().map(|tagged| tagged.1).collect::<Vec<&str>>(),
            vec!["a", "c", "b", "x"],
        );
        assert_eq!(tree.find(&Tagged(2, "?")).map(|found| found.1), Some("a"));
    }

    #[test]
    fn test_min_max() {
        let tree = sample();
        assert_eq!(tree.min(), Some(&1));
        assert_eq!(tree.max(), Some(&9));
    }

    #[test]
    fn test_clear() {
        let mut tree = sample();
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.find(&5), None);
        tree.insert(2);
        assert_eq!(tree.find(&2), Some(&2));
        tree.assert_structure();
    }

    #[test]
    fn test_null_arguments() {
        let mut tree = sample();
        let before = tree.render();
        assert_eq!(tree.add(None::<u32>), Err(Error::InvalidArgument("element")));
        assert_eq!(tree.get(None::<&u32>), Err(Error::InvalidArgument("key")));
        assert_eq!(tree.render(), before);
        assert_eq!(tree.len(), 7);
    }

    #[test]
    fn test_rotate_root_and_back() {
        let mut tree = sample();
        let before = tree.render();
        tree.rotate_root_and_back();
        assert_eq!(tree.render(), before);
        tree.assert_structure();
    }

    #[test]
    fn test_sorted_chain() {
        let n = 10_000;
        let mut tree: SplayTree<u32> = (0..n).collect();
        assert_eq!(tree.height(), n as usize);

        assert_eq!(tree.find(&(n - 1)), Some(&(n - 1)));
        assert_eq!(tree.depth_of(&(n - 1)), Some(0));
        assert!(tree.height() <= n as usize / 2 + 1);
        tree.assert_structure();
    }

    #[test]
    fn test_debug() {
        let tree = sample();
        assert_eq!(format!("{:?}", tree), "{1, 3, 4, 5, 7, 8, 9}");
    }
}
