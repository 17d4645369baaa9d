//! A union-find that clusters one side of a [bipartite graph].
//!
//! See [`BipartiteUnionFind`] for more information.
//!
//! [bipartite graph]: https://en.wikipedia.org/wiki/Bipartite_graph
//! [`BipartiteUnionFind`]: struct.BipartiteUnionFind.html

use {
    bit_vec::BitVec,
    crate::disjoint_sets::union_find::UnionFind,
};

/// A union-find over the `V` side of a bipartite graph built only from edges between
/// `U` and `V`.
///
/// Two `U` indices are never joined. Instead each `U` remembers the root of the last `V`
/// set it was joined to, and the next `V` it is joined to is merged into that set.
/// Joining `(u, v1)` and then `(u, v2)` results in `v1` and `v2` sharing a set,
/// so two `V` indices share a set when they are connected through any chain of `U` indices.
///
/// The `U` and `V` indices live in separate index spaces, the same number can be used
/// on both sides without them being related.
///
/// # Examples
///
/// ```
/// use bpuf::BipartiteUnionFind;
///
/// let mut bipartite = BipartiteUnionFind::new();
/// bipartite.union(1, 10);
/// bipartite.union(1, 11);
/// bipartite.union(2, 11);
/// bipartite.union(3, 20);
///
/// assert_eq!(bipartite.find_associated_root(1), bipartite.find_associated_root(2));
/// assert_ne!(bipartite.find_associated_root(1), bipartite.find_associated_root(3));
/// assert_eq!(bipartite.find_associated_root(3), Some(20));
/// assert_eq!(bipartite.find_associated_root(4), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct BipartiteUnionFind {
    /// The sets of the `V` indices.
    sets: UnionFind,
    /// For each `U` index the last root in `V` it was joined to.
    last_root: Vec<usize>,
    /// Whether a `U` index has been joined, this will always have the same length
    /// as `last_root`.
    last_root_initialized: BitVec,
}

impl BipartiteUnionFind {
    /// Constructs a new, empty `BipartiteUnionFind`.
    #[inline]
    pub fn new() -> Self {
        Self {
            sets: UnionFind::new(),
            last_root: Vec::new(),
            last_root_initialized: BitVec::new(),
        }
    }

    /// Constructs a new, empty `BipartiteUnionFind` with room for the indices
    /// `0 .. capacity` on both sides.
    ///
    /// The capacity is only a hint, indices above it are still accepted.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sets: UnionFind::with_capacity(capacity),
            last_root: Vec::with_capacity(capacity),
            last_root_initialized: BitVec::with_capacity(capacity),
        }
    }

    /// Joins `v` to the `V` set that `u` was last joined to and returns the root of that set.
    ///
    /// The first time `u` is seen, `v` becomes its anchor and only `v` itself is touched.
    /// Later calls with the same `u` merge the new `v` into the cached set and the cache is
    /// updated to the root of the merged set.
    ///
    /// # Examples
    ///
    /// ```
    /// use bpuf::BipartiteUnionFind;
    ///
    /// let mut bipartite = BipartiteUnionFind::new();
    /// assert_eq!(bipartite.union(1, 2), 2);
    /// assert_eq!(bipartite.union(1, 3), 2);
    ///
    /// // `U` index 6 starts a separate group.
    /// assert_eq!(bipartite.union(6, 7), 7);
    /// assert_eq!(bipartite.union(6, 8), 7);
    ///
    /// // 2 and 7 are now joined through `U` index 7.
    /// bipartite.union(7, 8);
    /// bipartite.union(7, 2);
    /// assert_eq!(bipartite.find_associated_root(6), bipartite.find_associated_root(1));
    /// ```
    pub fn union(&mut self, u: usize, v: usize) -> usize {
        if u >= self.last_root.len() {
            self.last_root.resize(u + 1, 0);
            let additional = self.last_root.len() - self.last_root_initialized.len();
            self.last_root_initialized.grow(additional, false);
        }

        let anchor = if self.last_root_initialized[u] {
            self.last_root[u]
        } else {
            v
        };

        let root = self.sets.union(anchor, v);
        self.last_root[u] = root;
        self.last_root_initialized.set(u, true);

        root
    }

    /// Returns the current root of the `V` set that `u` was last joined to,
    /// or `None` if `u` was never joined.
    pub fn find_associated_root(&self, u: usize) -> Option<usize> {
        if !self.last_root_initialized.get(u).unwrap_or(false) {
            return None;
        }

        // The cached index was initialized by the union that stored it.
        self.sets.find_existing(self.last_root[u])
    }

    /// Gives the representative of the `V` set that `v` belongs to,
    /// regardless of any `U` index.
    ///
    /// A `v` that was never referenced becomes its own singleton set.
    #[inline]
    pub fn find(&mut self, v: usize) -> usize {
        self.sets.find(v)
    }

    /// Returns the amount of `V` sets among the referenced `V` indices.
    #[inline]
    pub fn amount_of_sets(&self) -> usize {
        self.sets.amount_of_sets()
    }
}
