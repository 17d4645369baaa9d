//! Contains the implementation of the [disjoint-sets/union-find] over indices.
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure

mod metadata;
pub mod bipartite;
pub mod union_find;
