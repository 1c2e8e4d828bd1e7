//! Graph storage, mutation and neighbourhood queries.

use std::fmt;

use crate::core::error::{GraphError, Result};
use crate::core::matrix::{Weight, WeightMatrix};

/// Weighted, undirected, simple graph over a fixed vertex set `0..order`.
///
/// Vertices are created at construction and never change; only edges are
/// mutated. At most one edge joins any pair of vertices, there are no
/// self-loops, and every edge has a positive weight.
///
/// `Clone` produces an independent deep copy with the same edge set. Queries
/// that need a scratch graph (bridge test, trail search) work on such a copy
/// and never touch `self`.
///
/// ## Example
///
/// ```
/// use rail_graph::Graph;
///
/// let mut g = Graph::new(4);
/// g.add_edge(0, 1, 3).unwrap();
/// g.add_edge(1, 2, 1).unwrap();
///
/// assert!(g.has_edge(1, 0));
/// assert_eq!(g.neighbors(1), vec![0, 2]);
/// assert_eq!(g.edge_count(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    weights: WeightMatrix,
}

impl Graph {
    /// Create a graph with `order` vertices and no edges.
    #[must_use]
    pub fn new(order: usize) -> Self {
        Self {
            weights: WeightMatrix::new(order),
        }
    }

    /// Number of vertices.
    #[must_use]
    pub fn order(&self) -> usize {
        self.weights.order()
    }

    /// Iterate over all vertex indices.
    pub fn vertices(&self) -> std::ops::Range<usize> {
        0..self.order()
    }

    /// Add (or overwrite) the edge between `i` and `j`.
    ///
    /// Fails without modifying the graph if either index is out of range,
    /// if `i == j`, or if `weight == 0`. The latest call wins when the pair
    /// is already connected.
    pub fn add_edge(&mut self, i: usize, j: usize, weight: Weight) -> Result<()> {
        self.check_vertex(i)?;
        self.check_vertex(j)?;

        if i == j {
            tracing::debug!(vertex = i, "rejected self-loop");
            return Err(GraphError::SelfLoop { vertex: i });
        }
        if weight == 0 {
            tracing::debug!(from = i, to = j, "rejected zero-weight edge");
            return Err(GraphError::ZeroWeight { from: i, to: j });
        }

        self.weights.set_symmetric(i, j, weight);
        Ok(())
    }

    /// Remove the edge between `i` and `j`.
    ///
    /// Removing a missing edge is a no-op. `i == j` is accepted since the
    /// diagonal is always zero.
    pub fn remove_edge(&mut self, i: usize, j: usize) -> Result<()> {
        self.check_vertex(i)?;
        self.check_vertex(j)?;
        self.weights.set_symmetric(i, j, 0);
        Ok(())
    }

    /// Check whether `i` and `j` are adjacent.
    ///
    /// Panics if either index is out of range.
    #[must_use]
    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        self.weight(i, j) > 0
    }

    /// Weight of the edge between `i` and `j`, or `0` if there is none.
    ///
    /// Panics if either index is out of range.
    #[must_use]
    pub fn weight(&self, i: usize, j: usize) -> Weight {
        self.assert_vertex(i);
        self.assert_vertex(j);
        self.weights.get(i, j)
    }

    /// All vertices adjacent to `v`, in ascending index order.
    ///
    /// The ordering is part of the contract: component, Eulerian and trail
    /// queries rely on it for deterministic results.
    ///
    /// Panics if `v` is out of range.
    #[must_use]
    pub fn neighbors(&self, v: usize) -> Vec<usize> {
        self.assert_vertex(v);
        self.weights
            .row(v)
            .iter()
            .enumerate()
            .filter(|(_, &w)| w > 0)
            .map(|(u, _)| u)
            .collect()
    }

    /// Number of edges incident to `v`.
    #[must_use]
    pub fn degree(&self, v: usize) -> usize {
        self.assert_vertex(v);
        self.weights.row(v).iter().filter(|&&w| w > 0).count()
    }

    /// Number of edges (unordered pairs with a positive weight).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Iterate over edges as `(i, j, weight)` with `i < j`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, Weight)> + '_ {
        let order = self.order();
        (0..order).flat_map(move |i| {
            (i + 1..order).filter_map(move |j| {
                let w = self.weights.get(i, j);
                (w > 0).then_some((i, j, w))
            })
        })
    }

    /// Validate a vertex index for fallible operations.
    pub(crate) fn check_vertex(&self, v: usize) -> Result<()> {
        if v < self.order() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex: v,
                order: self.order(),
            })
        }
    }

    /// Panic on an out-of-range vertex index.
    pub(crate) fn assert_vertex(&self, v: usize) {
        assert!(
            v < self.order(),
            "vertex {} out of range for graph of order {}",
            v,
            self.order()
        );
    }

    /// Drop the edge `(i, j)` on a scratch copy. Indices are already valid.
    pub(crate) fn clear_edge(&mut self, i: usize, j: usize) {
        self.weights.set_symmetric(i, j, 0);
    }
}

/// Renders the weight matrix, one tab-separated row per line.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for row in self.weights.rows() {
            for w in row {
                write!(f, "{}\t", w)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Graph {
        let mut g = Graph::new(5);
        g.add_edge(1, 2, 2).unwrap();
        g.add_edge(2, 3, 2).unwrap();
        g.add_edge(2, 4, 2).unwrap();
        g.add_edge(3, 4, 2).unwrap();
        g
    }

    #[test]
    fn test_new_graph_is_empty() {
        let g = Graph::new(6);
        assert_eq!(g.order(), 6);
        assert_eq!(g.edge_count(), 0);
        for v in g.vertices() {
            assert!(g.neighbors(v).is_empty());
        }
    }

    #[test]
    fn test_has_edge() {
        let g = sample();
        assert!(g.has_edge(2, 3));
        assert!(g.has_edge(3, 2));
        assert!(!g.has_edge(1, 3));
    }

    #[test]
    fn test_neighbors_ascending() {
        let g = sample();
        assert_eq!(g.neighbors(2), vec![1, 3, 4]);
        assert_eq!(g.neighbors(0), Vec::<usize>::new());
        assert_eq!(g.degree(2), 3);
    }

    #[test]
    fn test_add_edge_overwrites() {
        let mut g = Graph::new(3);
        g.add_edge(0, 1, 4).unwrap();
        g.add_edge(1, 0, 9).unwrap();

        assert_eq!(g.weight(0, 1), 9);
        assert_eq!(g.weight(1, 0), 9);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_add_edge_rejects_invalid_input() {
        let mut g = Graph::new(3);

        assert_eq!(
            g.add_edge(0, 3, 1),
            Err(GraphError::VertexOutOfRange { vertex: 3, order: 3 })
        );
        assert_eq!(g.add_edge(1, 1, 1), Err(GraphError::SelfLoop { vertex: 1 }));
        assert_eq!(
            g.add_edge(0, 2, 0),
            Err(GraphError::ZeroWeight { from: 0, to: 2 })
        );
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_remove_edge() {
        let mut g = sample();
        g.remove_edge(3, 2).unwrap();
        assert!(!g.has_edge(2, 3));
        assert_eq!(g.edge_count(), 3);

        // Removing again is a no-op
        g.remove_edge(2, 3).unwrap();
        assert_eq!(g.edge_count(), 3);

        assert!(g.remove_edge(0, 9).is_err());
    }

    #[test]
    fn test_edges_iterator() {
        let g = sample();
        let edges: Vec<_> = g.edges().collect();
        assert_eq!(edges, vec![(1, 2, 2), (2, 3, 2), (2, 4, 2), (3, 4, 2)]);
    }

    #[test]
    fn test_clone_is_independent() {
        let g = sample();
        let mut copy = g.clone();
        copy.remove_edge(1, 2).unwrap();
        copy.add_edge(0, 1, 5).unwrap();

        assert!(g.has_edge(1, 2));
        assert!(!g.has_edge(0, 1));
        assert_ne!(g, copy);
    }

    #[test]
    fn test_display() {
        let mut g = Graph::new(2);
        g.add_edge(0, 1, 3).unwrap();
        assert_eq!(format!("{}", g), "\n0\t3\t\n3\t0\t\n");
    }

    #[test]
    #[should_panic(expected = "vertex 5 out of range for graph of order 5")]
    fn test_neighbors_out_of_range() {
        let _ = sample().neighbors(5);
    }

    #[test]
    fn test_zero_order_graph() {
        let g = Graph::new(0);
        assert_eq!(g.order(), 0);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(format!("{}", g), "\n");
    }
}
