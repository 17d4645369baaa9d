use std::cell::Cell;

/// This provides additional information about a given index in the `UnionFind`.
///
/// For each slot in the `UnionFind` we store a `Metadata`.
/// A slot that was never touched holds the default value, which is only
/// meaningful once the slot is initialized with `Metadata::new`.
#[derive(Clone, Debug, Default)]
pub(crate) struct Metadata {
    /// The parent of the index in its sets tree.
    /// These form an upside down tree where each child has the index of its parent.
    parent: Cell<usize>,
    /// An upper bound to the size of the tree of the set.
    /// Only read at roots and allowed to drift after repeated merges.
    rank: Cell<usize>,
}

impl Metadata {
    /// Create a new `Metadata` for a singleton set at the given index.
    pub(crate) fn new(index: usize) -> Self {
        Self {
            parent: Cell::new(index),
            rank: Cell::new(1),
        }
    }

    /// Return the `parent` variable.
    pub(crate) fn parent(&self) -> usize {
        self.parent.get()
    }

    /// Set the `parent` variable.
    pub(crate) fn set_parent(&self, value: usize) {
        self.parent.set(value);
    }

    /// Return the `rank` variable.
    pub(crate) fn rank(&self) -> usize {
        self.rank.get()
    }

    /// Set the `rank` variable.
    pub(crate) fn set_rank(&self, value: usize) {
        self.rank.set(value);
    }
}
