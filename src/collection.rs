use crate::error::{Error, Result};

/// An ordered collection that can look up a stored element by an equal probe value.
///
/// Both arguments are nullable so that callers holding an `Option` can pass it straight
/// through: a `None` element or key is rejected with `Error::InvalidArgument` and the
/// collection is left untouched. Plain values and references convert implicitly.
///
/// `get` takes `&mut self` because some implementors restructure themselves on lookup.
///
/// # Examples
///
/// ```
/// use collections_with_get::{CollectionWithGet, Error, SplayTree};
///
/// let mut tree = SplayTree::new();
/// tree.add(3).unwrap();
/// tree.add(1).unwrap();
///
/// assert_eq!(tree.get(&3), Ok(Some(&3)));
/// assert_eq!(tree.get(&2), Ok(None));
/// assert_eq!(tree.add(None::<i32>), Err(Error::InvalidArgument("element")));
/// assert_eq!(tree.len(), 2);
/// ```
pub trait CollectionWithGet<T>
where
    T: Ord,
{
    /// Inserts an element. Equal elements are kept side by side.
    fn add<E>(&mut self, element: E) -> Result<()>
    where
        E: Into<Option<T>>;

    /// Returns the first stored element that compares equal to `key`, or `None` if there is no
    /// such element.
    fn get<'a, K>(&mut self, key: K) -> Result<Option<&T>>
    where
        K: Into<Option<&'a T>>,
        T: 'a;

    /// Returns the number of stored elements.
    fn len(&self) -> usize;

    /// Returns `true` if the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// Unwraps a nullable argument, rejecting `None` as an invalid argument named `name`.
pub(crate) fn require<V>(value: Option<V>, name: &'static str) -> Result<V> {
    value.ok_or_else(|| {
        debug!("rejected null `{}`", name);
        Error::InvalidArgument(name)
    })
}
