//! Wire types of the `JSONEachRow` requests and responses.

use serde::{Deserialize, Serialize};

/// A `unionFind` request: `{"edges": [["a", "b"], ...]}`.
#[derive(Debug, Default, Deserialize)]
pub struct EdgesRequest {
    #[serde(default)]
    pub edges: Vec<(String, String)>,
}

/// A `bipartiteUnionFind` request: `{"relations": [["u", "v"], ...]}`.
#[derive(Debug, Default, Deserialize)]
pub struct RelationsRequest {
    #[serde(default)]
    pub relations: Vec<(String, String)>,
}

/// A response row, named after the `return_name` of the function.
#[derive(Debug, Serialize, Deserialize)]
pub struct Response<T> {
    pub result: Vec<T>,
}

/// A value together with the representative value of its set.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupEntry {
    pub value: String,
    pub root: String,
}

/// A `U` value together with the representative `V` value it is associated with.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssociationEntry {
    pub u: String,
    pub v_root: String,
}

/// Written in place of a response when a request line is rejected,
/// so the responses stay aligned with the requests.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub error: String,
}
