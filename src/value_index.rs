//! A bijection between values and dense indices.
//!
//! See [`ValueIndex<T, S>`] for more information.
//!
//! [`ValueIndex<T, S>`]: struct.ValueIndex.html

use std::{
    borrow::Borrow,
    hash::{Hash, BuildHasher},
    collections::hash_map::{HashMap, RandomState},
};

/// Maps values onto the indices `0, 1, 2, ...` in the order they are first seen.
///
/// Once a value has an index it keeps it for the lifetime of the `ValueIndex`.
/// The value can be looked up again from its index, which lets the union-find structures
/// work on compact indices and still report the original values.
///
/// # Examples
///
/// ```
/// use bpuf::ValueIndex;
///
/// let mut value_index: ValueIndex<String> = ValueIndex::new();
///
/// assert_eq!(value_index.fetch_index("a"), 0);
/// assert_eq!(value_index.fetch_index("b"), 1);
/// assert_eq!(value_index.fetch_index("a"), 0);
///
/// assert_eq!(value_index.value_at(1), "b");
/// assert_eq!(value_index.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct ValueIndex<T, S = RandomState> {
    /// The index of each value.
    indices: HashMap<T, usize, S>,
    /// The value of each index, in the order they were assigned.
    values: Vec<T>,
}

impl<T> ValueIndex<T, RandomState> where
    T: Eq + Hash + Clone,
{
    /// Constructs a new, empty `ValueIndex<T>`.
    pub fn new() -> Self {
        Self {
            indices: HashMap::new(),
            values: Vec::new(),
        }
    }

    /// Constructs a new, empty `ValueIndex<T>` that can hold `capacity` values
    /// without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            indices: HashMap::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }
}

impl<T, S> ValueIndex<T, S> where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    /// Constructs a new, empty `ValueIndex<T, S>` that uses `hash_builder` to hash values.
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            indices: HashMap::with_hasher(hash_builder),
            values: Vec::new(),
        }
    }

    /// Constructs a new, empty `ValueIndex<T, S>` with the given capacity
    /// that uses `hash_builder` to hash values.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            indices: HashMap::with_capacity_and_hasher(capacity, hash_builder),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Returns the index of `value`, assigning the next free index if it was not seen before.
    ///
    /// Indices are assigned sequentially starting at 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use bpuf::ValueIndex;
    ///
    /// let mut value_index: ValueIndex<String> = ValueIndex::new();
    ///
    /// assert_eq!(value_index.fetch_index("user1"), 0);
    /// assert_eq!(value_index.fetch_index(&"user2".to_owned()), 1);
    /// assert_eq!(value_index.fetch_index("user1"), 0);
    /// ```
    pub fn fetch_index<Q>(&mut self, value: &Q) -> usize where
        T: Borrow<Q>,
        Q: Eq + Hash + ToOwned<Owned = T> + ?Sized,
    {
        if let Some(&index) = self.indices.get(value) {
            return index;
        }

        let index = self.values.len();
        let value = value.to_owned();
        self.values.push(value.clone());
        self.indices.insert(value, index);

        index
    }

    /// Returns the index of `value` if it was seen before.
    ///
    /// Unlike `fetch_index` this never assigns an index.
    pub fn index_of<Q>(&self, value: &Q) -> Option<usize> where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.indices.get(value).copied()
    }

    /// Returns the hasher used by the `ValueIndex<T, S>`.
    pub fn hasher(&self) -> &S {
        self.indices.hasher()
    }
}

impl<T, S> ValueIndex<T, S> {
    /// Returns the value that was assigned `index`.
    ///
    /// # Panics
    ///
    /// If `index` was never returned by `fetch_index` on this `ValueIndex`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bpuf::ValueIndex;
    ///
    /// let mut value_index: ValueIndex<u32> = ValueIndex::new();
    /// let index = value_index.fetch_index(&42);
    ///
    /// assert_eq!(*value_index.value_at(index), 42);
    /// ```
    #[inline]
    pub fn value_at(&self, index: usize) -> &T {
        &self.values[index]
    }

    /// Returns the value that was assigned `index`, or `None` if no value was.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    /// Returns the amount of values that have an index.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no value has an index.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the values in the order of their indices.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }
}

impl<T, S> Default for ValueIndex<T, S> where
    S: Default,
{
    fn default() -> Self {
        Self {
            indices: HashMap::default(),
            values: Vec::new(),
        }
    }
}

impl<'a, T, S> IntoIterator for &'a ValueIndex<T, S> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> std::slice::Iter<'a, T> {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::hash_map::DefaultHasher;
    use std::hash::BuildHasherDefault;

    #[test]
    fn indices_follow_first_seen_order() {
        let mut value_index: ValueIndex<String> = ValueIndex::new();

        for (value, expected) in ["c", "a", "c", "b", "a"].iter().zip([0, 1, 0, 2, 1]) {
            assert_eq!(value_index.fetch_index(*value), expected);
        }

        let values: Vec<&String> = value_index.iter().collect();
        assert_eq!(values, ["c", "a", "b"]);
    }

    #[test]
    fn index_of_does_not_assign() {
        let mut value_index: ValueIndex<String> = ValueIndex::new();
        value_index.fetch_index("present");

        assert_eq!(value_index.index_of("present"), Some(0));
        assert_eq!(value_index.index_of("absent"), None);
        assert_eq!(value_index.len(), 1);
    }

    #[test]
    fn get_is_none_outside_the_domain() {
        let mut value_index = ValueIndex::new();
        value_index.fetch_index(&7u64);

        assert_eq!(value_index.get(0), Some(&7));
        assert_eq!(value_index.get(1), None);
    }

    #[test]
    #[should_panic]
    fn value_at_panics_outside_the_domain() {
        let value_index: ValueIndex<String> = ValueIndex::new();
        value_index.value_at(0);
    }

    #[test]
    fn custom_hasher_is_used() {
        let mut value_index: ValueIndex<u32, BuildHasherDefault<DefaultHasher>> =
            ValueIndex::with_capacity_and_hasher(4, BuildHasherDefault::default());

        assert_eq!(value_index.fetch_index(&10), 0);
        assert_eq!(value_index.fetch_index(&20), 1);
        assert_eq!(value_index.index_of(&20), Some(1));
        assert!(!value_index.is_empty());
    }
}
