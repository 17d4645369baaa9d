//! A bipartite union-find over arbitrary values.
//!
//! See [`BipartiteValueUnionFind<U, V, S>`] for more information.
//!
//! [`BipartiteValueUnionFind<U, V, S>`]: struct.BipartiteValueUnionFind.html

use {
    std::{
        borrow::Borrow,
        hash::{Hash, BuildHasher},
        collections::hash_map::RandomState,
    },
    crate::{BipartiteUnionFind, ValueIndex},
};

/// Clusters the `V` values of a bipartite graph that are connected through `U` values.
///
/// The `U` and `V` values are numbered by two separate [`ValueIndex`]es, so a `U` value
/// and a `V` value that compare equal are still unrelated.
/// The sets themselves are kept by a [`BipartiteUnionFind`].
///
/// # Examples
///
/// ```
/// use bpuf::BipartiteValueUnionFind;
///
/// let mut bipartite: BipartiteValueUnionFind<String, String> = BipartiteValueUnionFind::new();
/// bipartite.union("entity1", "group100");
/// bipartite.union("entity1", "group101");
/// bipartite.union("entity2", "group101");
/// bipartite.union("entity3", "group200");
///
/// assert_eq!(bipartite.find_v_root_for_u("entity1"), bipartite.find_v_root_for_u("entity2"));
/// assert_ne!(bipartite.find_v_root_for_u("entity1"), bipartite.find_v_root_for_u("entity3"));
/// assert_eq!(bipartite.find_v_root_for_u("entity3").map(String::as_str), Some("group200"));
/// assert_eq!(bipartite.find_v_root_for_u("entity4"), None);
/// ```
///
/// [`ValueIndex`]: ../value_index/struct.ValueIndex.html
/// [`BipartiteUnionFind`]: ../disjoint_sets/bipartite/struct.BipartiteUnionFind.html
#[derive(Clone, Debug)]
pub struct BipartiteValueUnionFind<U, V, S = RandomState> {
    u_values: ValueIndex<U, S>,
    v_values: ValueIndex<V, S>,
    sets: BipartiteUnionFind,
}

impl<U, V> BipartiteValueUnionFind<U, V, RandomState> where
    U: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    /// Constructs a new, empty `BipartiteValueUnionFind<U, V>`.
    pub fn new() -> Self {
        Self {
            u_values: ValueIndex::new(),
            v_values: ValueIndex::new(),
            sets: BipartiteUnionFind::new(),
        }
    }

    /// Constructs a new, empty `BipartiteValueUnionFind<U, V>` with room for `capacity`
    /// values on each side.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            u_values: ValueIndex::with_capacity(capacity),
            v_values: ValueIndex::with_capacity(capacity),
            sets: BipartiteUnionFind::with_capacity(capacity),
        }
    }
}

impl<U, V, S> BipartiteValueUnionFind<U, V, S> where
    U: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    /// Constructs a new, empty `BipartiteValueUnionFind<U, V, S>` that hashes both sides
    /// with copies of `hash_builder`.
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            u_values: ValueIndex::with_hasher(hash_builder.clone()),
            v_values: ValueIndex::with_hasher(hash_builder),
            sets: BipartiteUnionFind::new(),
        }
    }
}

impl<U, V, S> BipartiteValueUnionFind<U, V, S> where
    U: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
    S: BuildHasher,
{
    /// Joins `v` to the set of `V` values that `u` was last joined to and returns the index
    /// of the root of that set.
    pub fn union<QU, QV>(&mut self, u: &QU, v: &QV) -> usize where
        U: Borrow<QU>,
        V: Borrow<QV>,
        QU: Eq + Hash + ToOwned<Owned = U> + ?Sized,
        QV: Eq + Hash + ToOwned<Owned = V> + ?Sized,
    {
        let u_index = self.u_values.fetch_index(u);
        let v_index = self.v_values.fetch_index(v);

        self.sets.union(u_index, v_index)
    }

    /// Joins `u` and `v` like `union` and returns the value at the root of the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use bpuf::BipartiteValueUnionFind;
    ///
    /// let mut bipartite: BipartiteValueUnionFind<&str, u32> = BipartiteValueUnionFind::new();
    ///
    /// assert_eq!(*bipartite.union_value(&"A", &1), 1);
    /// assert_eq!(*bipartite.union_value(&"B", &1), 1);
    /// assert_eq!(*bipartite.union_value(&"B", &2), 1);
    /// assert_eq!(*bipartite.union_value(&"D", &4), 4);
    /// assert_eq!(*bipartite.union_value(&"D", &1), 1);
    /// ```
    pub fn union_value<QU, QV>(&mut self, u: &QU, v: &QV) -> &V where
        U: Borrow<QU>,
        V: Borrow<QV>,
        QU: Eq + Hash + ToOwned<Owned = U> + ?Sized,
        QV: Eq + Hash + ToOwned<Owned = V> + ?Sized,
    {
        let root = self.union(u, v);
        self.v_values.value_at(root)
    }

    /// Returns the representative `V` value of the set that `u` was last joined to,
    /// or `None` if `u` was never joined.
    pub fn find_v_root_for_u<Q>(&self, u: &Q) -> Option<&V> where
        U: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let u_index = self.u_values.index_of(u)?;
        let root = self.sets.find_associated_root(u_index)?;

        Some(self.v_values.value_at(root))
    }

    /// Gives the representative value of the set that `v` belongs to.
    ///
    /// A `v` that was not seen before is added as its own set and is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bpuf::BipartiteValueUnionFind;
    ///
    /// let mut bipartite: BipartiteValueUnionFind<String, String> = BipartiteValueUnionFind::new();
    /// bipartite.union("u", "v1");
    /// bipartite.union("u", "v2");
    ///
    /// assert_eq!(bipartite.find_value("v2"), "v1");
    /// assert_eq!(bipartite.find_value("v3"), "v3");
    /// ```
    pub fn find_value<Q>(&mut self, v: &Q) -> &V where
        V: Borrow<Q>,
        Q: Eq + Hash + ToOwned<Owned = V> + ?Sized,
    {
        let v_index = self.v_values.fetch_index(v);
        let root = self.sets.find(v_index);

        self.v_values.value_at(root)
    }
}

impl<U, V, S> BipartiteValueUnionFind<U, V, S> {
    /// Pairs every `U` value that was joined with the representative `V` value of its set.
    ///
    /// The `U` values are given in the order they were first seen.
    pub fn associations(&self) -> impl Iterator<Item = (&U, &V)> + '_ {
        self.u_values.iter().enumerate().filter_map(move |(u_index, u)| {
            let root = self.sets.find_associated_root(u_index)?;
            Some((u, self.v_values.value_at(root)))
        })
    }

    /// Returns the value index used to number the `U` values.
    #[inline]
    pub fn u_values(&self) -> &ValueIndex<U, S> {
        &self.u_values
    }

    /// Returns the value index used to number the `V` values.
    #[inline]
    pub fn v_values(&self) -> &ValueIndex<V, S> {
        &self.v_values
    }

    /// Returns the amount of sets of `V` values.
    #[inline]
    pub fn amount_of_sets(&self) -> usize {
        self.sets.amount_of_sets()
    }
}

impl<U, V, S> Default for BipartiteValueUnionFind<U, V, S> where
    S: Default,
{
    fn default() -> Self {
        Self {
            u_values: ValueIndex::default(),
            v_values: ValueIndex::default(),
            sets: BipartiteUnionFind::new(),
        }
    }
}
