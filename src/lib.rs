//! # rail-graph
//!
//! A weighted undirected graph engine for scoring rail networks in a
//! board game.
//!
//! ## Design Principles
//!
//! 1. **Fixed vertex set**: A graph is created with `n` vertices (`0..n`)
//!    and only its edges change afterwards. Hosts map their own location
//!    names to these indices (see `network::LocationIndex`).
//!
//! 2. **Simple graphs only**: No self-loops, no parallel edges, positive
//!    weights. Invalid mutations are rejected with `GraphError`.
//!
//! 3. **Read-only queries**: Structural queries never mutate the graph.
//!    Queries that need to delete edges work on an owned copy.
//!
//! 4. **Deterministic**: Neighbours, components and trails are produced in
//!    ascending index order, so results never depend on hashing.
//!
//! ## Modules
//!
//! - `core`: Weight matrix storage and errors
//! - `graph`: `Graph` with mutation, connectivity, bridge, tree and
//!   Eulerian queries
//! - `trail`: Trail enumeration and longest-trail scoring
//! - `network`: Named-location mapping for host games
//!
//! ## Example
//!
//! ```
//! use rail_graph::Graph;
//!
//! let mut g = Graph::new(4);
//! g.add_edge(0, 1, 1).unwrap();
//! g.add_edge(1, 2, 1).unwrap();
//! g.add_edge(2, 3, 1).unwrap();
//!
//! assert!(g.is_tree());
//! assert!(g.has_eulerian_trail());
//! assert!(g.is_bridge(1, 2));
//! assert_eq!(g.longest_trail(), vec![0, 1, 2, 3]);
//! ```
//!
//! ## Concurrency
//!
//! `Graph` performs no locking. Hosts sharing one graph across threads must
//! synchronise mutation themselves, or hand each reader its own clone.

pub mod core;
pub mod graph;
pub mod network;
pub mod trail;

// Re-export commonly used types
pub use crate::core::{GraphError, Result, Weight, WeightMatrix};
pub use crate::graph::Graph;
pub use crate::network::{LocationIndex, Route};
pub use crate::trail::{StartPolicy, Trail, TrailSearchConfig};
