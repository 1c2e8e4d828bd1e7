//! The weighted undirected graph and its structural queries.
//!
//! - `weighted`: storage, mutation, neighbours, edge iteration
//! - `connectivity`: BFS components and partition
//! - `structure`: bridge, tree and Eulerian tests
//!
//! Trail search lives in `crate::trail` and extends `Graph` from there.

pub mod connectivity;
pub mod structure;
pub mod weighted;

pub use weighted::Graph;
