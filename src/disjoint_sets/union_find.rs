//! A [disjoint-sets/union-find] implementation over an unbounded index space.
//!
//! See [`UnionFind`] for more information.
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [`UnionFind`]: struct.UnionFind.html

use {
    bit_vec::BitVec,
    std::cmp::Ordering,
    crate::disjoint_sets::metadata::Metadata,
};
#[cfg(feature = "proptest")]
use proptest::prelude::*;

/// A [disjoint-sets/union-find] implementation over indices that grows on demand.
///
/// There is no fixed amount of elements: every index passed to `find` or `union` is
/// accommodated by growing the backing storage, and a slot that has never been referenced
/// is initialized as its own singleton set the first time it is touched.
/// Indices are expected to be assigned densely, as a [`ValueIndex`] does, since every slot
/// up to the highest index referenced is allocated.
///
/// Sets are merged by a weighted union. Each root stores a rank which is an upper bound on
/// the size of its tree and the tree with the smaller rank is attached below the other.
/// When two sets are merged the rank of the absorbed root is added to the surviving root.
/// The rank is a heuristic to keep trees flat and is not an exact size of the set.
///
/// # Examples
///
/// ```
/// use bpuf::UnionFind;
///
/// let mut union_find = UnionFind::new();
/// union_find.union(1, 2);
/// union_find.union(4, 5);
///
/// assert!(union_find.same_set(1, 2));
/// assert!(union_find.same_set(4, 5));
/// assert!(!union_find.same_set(1, 4));
///
/// // Index 3 was never seen and is its own set.
/// assert_eq!(union_find.find(3), 3);
/// ```
///
/// [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
/// [`ValueIndex`]: ../../value_index/struct.ValueIndex.html
#[derive(Clone, Debug, Default)]
pub struct UnionFind {
    /// The metadata for each slot, untouched slots hold a default value.
    meta: Vec<Metadata>,
    /// Whether a slot has been referenced, this will always have the same length as `meta`.
    initialized: BitVec,
    /// The amount of initialized slots.
    len: usize,
}

impl UnionFind {
    /// Constructs a new, empty `UnionFind`.
    ///
    /// The `UnionFind` will not allocate until an index is referenced.
    #[inline]
    pub fn new() -> Self {
        Self {
            meta: Vec::new(),
            initialized: BitVec::new(),
            len: 0,
        }
    }

    /// Constructs a new, empty `UnionFind` with room for the indices `0 .. capacity`.
    ///
    /// The capacity is only a hint, indices above it are still accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use bpuf::UnionFind;
    ///
    /// let mut union_find = UnionFind::with_capacity(4);
    /// assert!(union_find.capacity() >= 4);
    ///
    /// // This will grow the storage.
    /// union_find.union(0, 100);
    /// assert!(union_find.same_set(0, 100));
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            meta: Vec::with_capacity(capacity),
            initialized: BitVec::with_capacity(capacity),
            len: 0,
        }
    }

    /// Joins the sets of the `first_index` and the `second_index` and returns the root
    /// of the joined set.
    ///
    /// The root with the lower rank is attached below the root with the higher rank.
    /// If both ranks are equal the root of `first_index` stays the root.
    /// Joining two indices that already share a set changes nothing.
    ///
    /// This method will be executed in amortized `O(α(n))` time where `α` is the inverse
    /// Ackermann function.
    ///
    /// # Examples
    ///
    /// ```
    /// use bpuf::UnionFind;
    ///
    /// let mut union_find = UnionFind::new();
    ///
    /// let root = union_find.union(1, 2);
    /// assert_eq!(root, 1);
    ///
    /// // The set of 1 and 2 has a higher rank so it absorbs 3.
    /// let root = union_find.union(3, 2);
    /// assert_eq!(root, 1);
    ///
    /// // Repeating a union is a no-op.
    /// assert_eq!(union_find.union(3, 1), 1);
    /// ```
    pub fn union(&mut self, first_index: usize, second_index: usize) -> usize {
        let i = self.find(first_index);
        let j = self.find(second_index);

        if i == j {
            return i;
        }

        let rank_i = self.meta[i].rank();
        let rank_j = self.meta[j].rank();

        // We add to the tree with the highest rank.
        match Ord::cmp(&rank_i, &rank_j) {
            Ordering::Less => {
                self.meta[i].set_parent(j);
                self.meta[j].set_rank(rank_j + rank_i);
                j
            },
            Ordering::Equal | Ordering::Greater => {
                self.meta[j].set_parent(i);
                self.meta[i].set_rank(rank_i + rank_j);
                i
            },
        }
    }

    /// Gives the representative of the set that `index` belongs to.
    ///
    /// An index that was never referenced becomes its own singleton set.
    /// Every node visited on the way to the root is pointed at its grandparent,
    /// which keeps the trees flat for later calls.
    ///
    /// This method will be executed in amortized `O(α(n))` time where `α` is the inverse
    /// Ackermann function.
    ///
    /// # Examples
    ///
    /// ```
    /// use bpuf::UnionFind;
    ///
    /// let mut union_find = UnionFind::new();
    /// union_find.union(7, 8);
    ///
    /// assert_eq!(union_find.find(7), union_find.find(8));
    /// assert_eq!(union_find.find(9), 9);
    /// ```
    pub fn find(&mut self, index: usize) -> usize {
        self.touch(index);
        self.find_compressing(index)
    }

    /// Gives the representative of the set of `index` without initializing it.
    ///
    /// Returns `None` if `index` was never referenced. This still compresses the path
    /// to the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use bpuf::UnionFind;
    ///
    /// let mut union_find = UnionFind::new();
    /// union_find.union(2, 3);
    ///
    /// assert_eq!(union_find.find_existing(3), Some(2));
    /// assert_eq!(union_find.find_existing(1), None);
    /// assert!(!union_find.contains(1));
    /// ```
    pub fn find_existing(&self, index: usize) -> Option<usize> {
        if self.contains(index) {
            Some(self.find_compressing(index))
        } else {
            None
        }
    }

    /// Returns `true` if `first_index` and `second_index` are in the same set.
    ///
    /// Both indices are initialized if they were not referenced before.
    #[inline]
    pub fn same_set(&mut self, first_index: usize, second_index: usize) -> bool {
        self.find(first_index) == self.find(second_index)
    }

    /// Returns `true` if `index` has been referenced by `find` or `union`.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.initialized.get(index).unwrap_or(false)
    }

    /// Returns the amount of indices that have been referenced.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no index has been referenced.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the amount of sets among the referenced indices.
    ///
    /// This method will be executed in `O(n)` time where `n` is the highest index referenced.
    ///
    /// # Examples
    ///
    /// ```
    /// use bpuf::UnionFind;
    ///
    /// let mut union_find = UnionFind::new();
    /// union_find.union(0, 1);
    /// union_find.union(1, 2);
    /// union_find.union(10, 11);
    /// union_find.find(5);
    ///
    /// assert_eq!(union_find.amount_of_sets(), 3);
    /// ```
    pub fn amount_of_sets(&self) -> usize {
        self.initialized
            .iter()
            .enumerate()
            .filter(|&(index, initialized)| initialized && self.meta[index].parent() == index)
            .count()
    }

    /// Returns the number of slots the `UnionFind` can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        usize::min(self.meta.capacity(), self.initialized.capacity())
    }

    /// Reserves capacity for at least `additional` more slots past the highest
    /// index referenced so far.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.meta.reserve(additional);
        self.initialized.reserve(additional);
    }

    /// The rank stored for `index`, only meaningful at roots.
    #[cfg(test)]
    pub(crate) fn rank(&self, index: usize) -> usize {
        self.meta[index].rank()
    }

    /// Makes sure `index` has a slot and initializes it as a singleton on first reference.
    fn touch(&mut self, index: usize) {
        if index >= self.meta.len() {
            // Both grow with amortized doubling.
            self.meta.resize_with(index + 1, Metadata::default);
            let additional = self.meta.len() - self.initialized.len();
            self.initialized.grow(additional, false);
        }

        if !self.initialized[index] {
            self.meta[index] = Metadata::new(index);
            self.initialized.set(index, true);
            self.len += 1;
        }
    }

    /// Walks to the root of an initialized `index` using path halving.
    fn find_compressing(&self, mut index: usize) -> usize {
        loop {
            let parent = self.meta[index].parent();

            // If the node is its own parent we have found the root.
            if parent == index {
                return index;
            }

            let grandparent = self.meta[parent].parent();
            self.meta[index].set_parent(grandparent);
            index = grandparent;
        }
    }
}

#[cfg(feature = "proptest")]
impl Arbitrary for UnionFind {
    type Parameters = proptest::collection::SizeRange;
    type Strategy = BoxedStrategy<Self>;

    /// Builds a `UnionFind` from a random sequence of unions on the indices `0 .. 64`.
    fn arbitrary_with(size_range: Self::Parameters) -> Self::Strategy {
        proptest::collection::vec((0usize .. 64, 0usize .. 64), size_range).prop_map(|pairs| {
            let mut union_find = Self::with_capacity(64);

            for (first_index, second_index) in pairs {
                union_find.union(first_index, second_index);
            }

            union_find
        }).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::{collection::vec, prop_assert_eq, proptest};
    use rstest::rstest;

    #[test]
    fn unions_chain_into_one_set() {
        let mut union_find = UnionFind::new();
        assert_eq!(union_find.union(1, 2), 1);
        assert_eq!(union_find.union(2, 3), 1);
        assert_eq!(union_find.union(3, 4), 1);
        assert_eq!(union_find.union(5, 6), 5);
        assert_eq!(union_find.union(6, 1), 1);
        assert_eq!(union_find.find(5), 1);

        assert_eq!(union_find.union(700, 801), 700);
        assert_eq!(union_find.union(801, 1000), 700);
        assert_eq!(union_find.find(1000), 700);
    }

    #[test]
    fn disjoint_sets_stay_apart() {
        let mut union_find = UnionFind::new();
        union_find.union(1, 2);
        union_find.union(4, 5);

        assert!(union_find.same_set(1, 2));
        assert!(union_find.same_set(4, 5));
        assert!(!union_find.same_set(1, 4));
        assert_eq!(union_find.amount_of_sets(), 2);
    }

    #[test]
    fn growth_keeps_existing_sets() {
        let mut union_find = UnionFind::with_capacity(2);
        union_find.union(0, 1);
        union_find.union(2, 100_000);

        assert!(union_find.same_set(0, 1));
        assert!(union_find.same_set(2, 100_000));
        assert!(!union_find.same_set(0, 100_000));
        assert_eq!(union_find.len(), 4);

        union_find.union(1, 100_000);
        assert!(union_find.same_set(0, 2));
    }

    #[test]
    fn untouched_slots_are_not_initialized() {
        let mut union_find = UnionFind::new();
        union_find.union(3, 10);

        assert!(union_find.contains(3));
        assert!(union_find.contains(10));
        assert!(!union_find.contains(5));
        assert!(!union_find.contains(11));
        assert_eq!(union_find.len(), 2);
        assert_eq!(union_find.amount_of_sets(), 1);
    }

    #[test]
    fn rank_of_survivor_accumulates_absorbed_rank() {
        let mut union_find = UnionFind::new();
        union_find.union(0, 1);
        union_find.union(2, 3);
        union_find.union(2, 4);
        assert_eq!(union_find.rank(0), 2);
        assert_eq!(union_find.rank(2), 3);

        // The smaller tree goes below the larger one even though it is passed first.
        let root = union_find.union(0, 2);
        assert_eq!(root, 2);
        assert_eq!(union_find.rank(2), 5);
    }

    #[test]
    fn path_is_compressed() {
        let mut union_find = UnionFind::new();
        union_find.union(0, 1);
        union_find.union(2, 3);
        union_find.union(0, 2);
        union_find.union(4, 5);
        union_find.union(6, 7);
        union_find.union(4, 6);
        union_find.union(0, 4);

        // 7 -> 6 -> 4 -> 0 before compression.
        assert_eq!(union_find.find(7), 0);
        let parent = union_find.meta[7].parent();
        assert!(parent == 4 || parent == 0);
        assert_eq!(union_find.find(7), 0);
        assert_eq!(union_find.meta[7].parent(), 0);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(63)]
    #[case(100_000)]
    fn unseen_index_is_its_own_root(#[case] index: usize) {
        let mut union_find = UnionFind::new();
        assert_eq!(union_find.find_existing(index), None);
        assert_eq!(union_find.find(index), index);
        assert_eq!(union_find.find_existing(index), Some(index));
    }

    /// Groups the indices `0 .. 32` by their root so partitions can be compared
    /// regardless of which index represents a set.
    fn partition_of(union_find: &mut UnionFind) -> Vec<Vec<usize>> {
        let mut groups = std::collections::BTreeMap::new();

        for index in 0 .. 32 {
            groups.entry(union_find.find(index)).or_insert_with(Vec::new).push(index);
        }

        let mut groups: Vec<Vec<usize>> = groups.into_values().collect();
        groups.sort();
        groups
    }

    proptest! {
        #[test]
        fn partition_is_independent_of_union_order(
            pairs in vec((0usize .. 32, 0usize .. 32), 0 .. 64),
        ) {
            let mut forward = UnionFind::new();
            for &(first, second) in &pairs {
                forward.union(first, second);
            }

            let mut backward = UnionFind::new();
            for &(first, second) in pairs.iter().rev() {
                backward.union(second, first);
            }

            prop_assert_eq!(partition_of(&mut forward), partition_of(&mut backward));
        }

        #[test]
        fn repeated_unions_are_idempotent(
            pairs in vec((0usize .. 32, 0usize .. 32), 0 .. 64),
        ) {
            let mut once = UnionFind::new();
            let mut twice = UnionFind::new();
            for &(first, second) in &pairs {
                once.union(first, second);
                twice.union(first, second);
                twice.union(first, second);
            }

            prop_assert_eq!(partition_of(&mut once), partition_of(&mut twice));
        }

        #[test]
        fn union_joins_transitively(a in 0usize .. 32, b in 0usize .. 32, c in 0usize .. 32) {
            let mut union_find = UnionFind::new();
            union_find.union(a, b);
            union_find.union(b, c);

            prop_assert_eq!(union_find.find(a), union_find.find(b));
            prop_assert_eq!(union_find.find(b), union_find.find(c));
        }
    }

    #[cfg(feature = "proptest")]
    proptest! {
        #[test]
        fn arbitrary_structures_have_consistent_roots(
            union_find in proptest::arbitrary::any::<UnionFind>(),
        ) {
            let mut roots = 0;

            for index in 0 .. 64 {
                if let Some(root) = union_find.find_existing(index) {
                    prop_assert_eq!(union_find.find_existing(root), Some(root));
                    if root == index {
                        roots += 1;
                    }
                }
            }

            prop_assert_eq!(roots, union_find.amount_of_sets());
        }
    }
}
