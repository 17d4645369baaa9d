//! A [disjoint-sets/union-find] implementation over arbitrary values.
//!
//! See [`ValueUnionFind<T, S>`] for more information.
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [`ValueUnionFind<T, S>`]: struct.ValueUnionFind.html

use {
    std::{
        borrow::Borrow,
        hash::{Hash, BuildHasher},
        collections::hash_map::RandomState,
    },
    crate::{UnionFind, ValueIndex},
};

/// A union-find over values instead of indices.
///
/// Every value gets an index from a [`ValueIndex`] the first time it is seen and the sets
/// are kept in a [`UnionFind`] over those indices. A value that was never joined with another
/// is its own set.
///
/// # Examples
///
/// ```
/// use bpuf::ValueUnionFind;
///
/// let mut union_find: ValueUnionFind<String> = ValueUnionFind::new();
/// union_find.union("user1", "user2");
/// union_find.union("user2", "user3");
/// union_find.union("user4", "user5");
///
/// assert!(union_find.same_set("user1", "user3"));
/// assert!(union_find.same_set("user4", "user5"));
/// assert!(!union_find.same_set("user1", "user4"));
///
/// let root = union_find.find_value("user3").clone();
/// assert_eq!(union_find.find_value("user2"), &root);
/// assert_eq!(union_find.amount_of_sets(), 2);
/// ```
///
/// [`ValueIndex`]: ../value_index/struct.ValueIndex.html
/// [`UnionFind`]: ../disjoint_sets/union_find/struct.UnionFind.html
#[derive(Clone, Debug)]
pub struct ValueUnionFind<T, S = RandomState> {
    values: ValueIndex<T, S>,
    sets: UnionFind,
}

impl<T> ValueUnionFind<T, RandomState> where
    T: Eq + Hash + Clone,
{
    /// Constructs a new, empty `ValueUnionFind<T>`.
    pub fn new() -> Self {
        Self {
            values: ValueIndex::new(),
            sets: UnionFind::new(),
        }
    }

    /// Constructs a new, empty `ValueUnionFind<T>` with room for `capacity` values.
    ///
    /// The capacity is only a hint, more values are still accepted.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: ValueIndex::with_capacity(capacity),
            sets: UnionFind::with_capacity(capacity),
        }
    }
}

impl<T, S> ValueUnionFind<T, S> where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    /// Constructs a new, empty `ValueUnionFind<T, S>` that uses `hash_builder` to hash values.
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            values: ValueIndex::with_hasher(hash_builder),
            sets: UnionFind::new(),
        }
    }

    /// Constructs a new, empty `ValueUnionFind<T, S>` with room for `capacity` values
    /// that uses `hash_builder` to hash values.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            values: ValueIndex::with_capacity_and_hasher(capacity, hash_builder),
            sets: UnionFind::with_capacity(capacity),
        }
    }

    /// Joins the sets of `first_value` and `second_value` and returns the index of the root
    /// of the joined set.
    ///
    /// Values that were not seen before are added first.
    pub fn union<Q1, Q2>(&mut self, first_value: &Q1, second_value: &Q2) -> usize where
        T: Borrow<Q1> + Borrow<Q2>,
        Q1: Eq + Hash + ToOwned<Owned = T> + ?Sized,
        Q2: Eq + Hash + ToOwned<Owned = T> + ?Sized,
    {
        let first_index = self.values.fetch_index(first_value);
        let second_index = self.values.fetch_index(second_value);

        self.sets.union(first_index, second_index)
    }

    /// Joins the sets of `first_value` and `second_value` and returns the value at the root
    /// of the joined set.
    ///
    /// # Examples
    ///
    /// ```
    /// use bpuf::ValueUnionFind;
    ///
    /// let mut union_find: ValueUnionFind<String> = ValueUnionFind::new();
    ///
    /// assert_eq!(union_find.union_value("A", "B"), "A");
    /// assert_eq!(union_find.union_value("B", "C"), "A");
    /// ```
    pub fn union_value<Q1, Q2>(&mut self, first_value: &Q1, second_value: &Q2) -> &T where
        T: Borrow<Q1> + Borrow<Q2>,
        Q1: Eq + Hash + ToOwned<Owned = T> + ?Sized,
        Q2: Eq + Hash + ToOwned<Owned = T> + ?Sized,
    {
        let root = self.union(first_value, second_value);
        self.values.value_at(root)
    }

    /// Gives the index of the representative of the set that `value` belongs to.
    ///
    /// A value that was not seen before is added as its own set.
    pub fn find<Q>(&mut self, value: &Q) -> usize where
        T: Borrow<Q>,
        Q: Eq + Hash + ToOwned<Owned = T> + ?Sized,
    {
        let index = self.values.fetch_index(value);
        self.sets.find(index)
    }

    /// Gives the representative value of the set that `value` belongs to.
    ///
    /// A value that was not seen before is added as its own set and is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bpuf::ValueUnionFind;
    ///
    /// let mut union_find: ValueUnionFind<String> = ValueUnionFind::new();
    /// union_find.union("a", "b");
    ///
    /// assert_eq!(union_find.find_value("b"), "a");
    /// assert_eq!(union_find.find_value("unknown"), "unknown");
    /// ```
    pub fn find_value<Q>(&mut self, value: &Q) -> &T where
        T: Borrow<Q>,
        Q: Eq + Hash + ToOwned<Owned = T> + ?Sized,
    {
        let root = self.find(value);
        self.values.value_at(root)
    }

    /// Returns `true` if `first_value` and `second_value` are in the same set.
    pub fn same_set<Q1, Q2>(&mut self, first_value: &Q1, second_value: &Q2) -> bool where
        T: Borrow<Q1> + Borrow<Q2>,
        Q1: Eq + Hash + ToOwned<Owned = T> + ?Sized,
        Q2: Eq + Hash + ToOwned<Owned = T> + ?Sized,
    {
        self.find(first_value) == self.find(second_value)
    }
}

impl<T, S> ValueUnionFind<T, S> {
    /// Pairs every value with the representative value of its set.
    ///
    /// The values are given in the order they were first seen.
    ///
    /// # Examples
    ///
    /// ```
    /// use bpuf::ValueUnionFind;
    ///
    /// let mut union_find: ValueUnionFind<u32> = ValueUnionFind::new();
    /// union_find.union(&1, &2);
    /// union_find.find(&3);
    ///
    /// let pairs: Vec<(u32, u32)> = union_find
    ///     .representatives()
    ///     .map(|(&value, &root)| (value, root))
    ///     .collect();
    ///
    /// assert_eq!(pairs, [(1, 1), (2, 1), (3, 3)]);
    /// ```
    pub fn representatives(&mut self) -> impl Iterator<Item = (&T, &T)> + '_ {
        let sets = &mut self.sets;
        let roots: Vec<usize> = (0 .. self.values.len()).map(|index| sets.find(index)).collect();
        let values = &self.values;

        roots.into_iter()
            .enumerate()
            .map(move |(index, root)| (values.value_at(index), values.value_at(root)))
    }

    /// Returns the value index used to number the values.
    #[inline]
    pub fn values(&self) -> &ValueIndex<T, S> {
        &self.values
    }

    /// Returns the amount of values seen.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no value was seen.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the amount of sets.
    #[inline]
    pub fn amount_of_sets(&self) -> usize {
        self.sets.amount_of_sets()
    }
}

impl<T, S> Default for ValueUnionFind<T, S> where
    S: Default,
{
    fn default() -> Self {
        Self {
            values: ValueIndex::default(),
            sets: UnionFind::new(),
        }
    }
}
