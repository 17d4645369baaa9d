//! A [disjoint-sets/union-find] implementation over arbitrary values, including a variant
//! that clusters one side of a [bipartite graph].
//!
//! The base struct of this crate is [`UnionFind`] which keeps sets of indices.
//! There is no fixed amount of indices: any index that is referenced is added as its own set,
//! and sets are joined with the `union` method.
//! The `union` and `find` methods are extremely fast and have an amortized complexity of
//! `O(α(n))` where 'α' is the inverse Ackermann function and length `n`.
//!
//! [`ValueIndex<T>`] numbers arbitrary hashable values in the order they are first seen,
//! and [`ValueUnionFind<T>`] combines the two so sets of values can be joined directly.
//!
//! [`BipartiteUnionFind`] is given only edges between two universes `U` and `V` and
//! joins the `V` side: two `V` values end up in the same set when some chain of `U` values
//! connects them. No two `U` values are ever joined. This can be used for example to find
//! the groups of accounts that share an email, phone number or device,
//! with the accounts as `V` and the shared attributes as `U`.
//! [`BipartiteValueUnionFind<U, V>`] does the same for arbitrary values.
//!
//! With the `cli` feature the crate also contains the request processor used by the `bpuf`
//! binary, which runs these structures as ClickHouse executable user defined functions.
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [bipartite graph]: https://en.wikipedia.org/wiki/Bipartite_graph
//! [`UnionFind`]: disjoint_sets/union_find/struct.UnionFind.html
//! [`ValueIndex<T>`]: value_index/struct.ValueIndex.html
//! [`ValueUnionFind<T>`]: value_union_find/struct.ValueUnionFind.html
//! [`BipartiteUnionFind`]: disjoint_sets/bipartite/struct.BipartiteUnionFind.html
//! [`BipartiteValueUnionFind<U, V>`]: bipartite_value_union_find/struct.BipartiteValueUnionFind.html

pub mod disjoint_sets;
pub mod value_index;
pub mod value_union_find;
pub mod bipartite_value_union_find;

#[cfg(feature = "cli")]
pub mod logging;
#[cfg(feature = "cli")]
pub mod udf;

pub use disjoint_sets::{
    bipartite::BipartiteUnionFind,
    union_find::UnionFind,
};
pub use value_index::ValueIndex;
pub use value_union_find::ValueUnionFind;
pub use bipartite_value_union_find::BipartiteValueUnionFind;
