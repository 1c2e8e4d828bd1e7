//! Structural tests: bridges, trees and Eulerian trails.
//!
//! Each test recomputes the component partition from scratch. That is fine
//! for the small networks this engine targets, but none of these are meant
//! to be called in a tight loop over large graphs.

use super::weighted::Graph;

impl Graph {
    /// Check whether the edge `(i, j)` is a bridge.
    ///
    /// Returns `false` when `i` and `j` are not adjacent. Otherwise removes
    /// the edge on a copy and reports whether the component count grew.
    ///
    /// ```
    /// use rail_graph::Graph;
    ///
    /// let mut g = Graph::new(3);
    /// g.add_edge(0, 1, 1).unwrap();
    /// g.add_edge(1, 2, 1).unwrap();
    ///
    /// assert!(g.is_bridge(0, 1));
    /// assert!(!g.is_bridge(0, 2));
    /// ```
    #[must_use]
    pub fn is_bridge(&self, i: usize, j: usize) -> bool {
        if !self.has_edge(i, j) {
            return false;
        }

        let mut scratch = self.clone();
        scratch.clear_edge(i, j);
        let before = self.component_count();
        let after = scratch.component_count();
        tracing::trace!(i, j, before, after, "bridge test");

        after > before
    }

    /// All bridges as `(i, j)` pairs with `i < j`, in edge order.
    #[must_use]
    pub fn bridges(&self) -> Vec<(usize, usize)> {
        self.edges()
            .filter(|&(i, j, _)| self.is_bridge(i, j))
            .map(|(i, j, _)| (i, j))
            .collect()
    }

    /// Check whether the graph is a tree: connected with `order - 1` edges.
    ///
    /// The empty graph has no component and is not a tree; a single vertex
    /// is.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count() == 1 && self.edge_count() + 1 == self.order()
    }

    /// Number of vertices with odd degree.
    #[must_use]
    pub fn odd_degree_count(&self) -> usize {
        self.vertices().filter(|&v| self.degree(v) % 2 == 1).count()
    }

    /// Check whether a trail using every edge exactly once exists.
    ///
    /// Holds iff the graph is connected and has 0 or 2 odd-degree vertices.
    /// Graphs with no vertex or a single vertex qualify.
    #[must_use]
    pub fn has_eulerian_trail(&self) -> bool {
        if !self.is_connected() {
            return false;
        }

        let mut odd = 0;
        for v in self.vertices() {
            if self.degree(v) % 2 == 1 {
                odd += 1;
                if odd > 2 {
                    return false;
                }
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use crate::Graph;

    fn build(order: usize, edges: &[(usize, usize, u32)]) -> Graph {
        let mut g = Graph::new(order);
        for &(i, j, w) in edges {
            g.add_edge(i, j, w).unwrap();
        }
        g
    }

    #[test]
    fn test_is_bridge() {
        let g = build(4, &[(0, 1, 1), (2, 3, 1), (1, 2, 1), (1, 3, 1)]);
        assert!(g.is_bridge(0, 1));
        assert!(g.is_bridge(1, 0));
        assert!(!g.is_bridge(1, 3));
        assert!(!g.is_bridge(2, 3));
    }

    #[test]
    fn test_is_bridge_non_edge() {
        let g = build(4, &[(0, 1, 1)]);
        assert!(!g.is_bridge(2, 3));
        assert!(!g.is_bridge(0, 2));
    }

    #[test]
    fn test_is_bridge_leaves_graph_untouched() {
        let g = build(3, &[(0, 1, 1), (1, 2, 1)]);
        assert!(g.is_bridge(0, 1));
        assert!(g.has_edge(0, 1));
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_bridges() {
        let g = build(5, &[(0, 1, 1), (1, 2, 1), (2, 0, 1), (2, 3, 1), (3, 4, 1)]);
        assert_eq!(g.bridges(), vec![(2, 3), (3, 4)]);
    }

    #[test]
    fn test_is_tree() {
        assert!(build(4, &[(0, 1, 1), (1, 2, 1), (1, 3, 1)]).is_tree());
        assert!(!build(4, &[(0, 1, 1), (1, 2, 1), (2, 0, 1)]).is_tree());
        assert!(!build(3, &[(0, 1, 1), (1, 2, 1), (2, 0, 1)]).is_tree());
        assert!(Graph::new(1).is_tree());
        assert!(!Graph::new(0).is_tree());
    }

    #[test]
    fn test_odd_degree_count() {
        let g = build(4, &[(0, 1, 1), (1, 2, 1), (1, 3, 1)]);
        assert_eq!(g.odd_degree_count(), 4);
    }

    #[test]
    fn test_eulerian_two_odd_vertices() {
        // Path 0-1-2: endpoints odd
        let g = build(3, &[(0, 1, 1), (1, 2, 1)]);
        assert_eq!(g.odd_degree_count(), 2);
        assert!(g.has_eulerian_trail());
    }

    #[test]
    fn test_eulerian_four_odd_vertices() {
        let g = build(5, &[(0, 1, 1), (1, 2, 1), (2, 0, 1), (1, 3, 1), (2, 4, 1)]);
        assert_eq!(g.odd_degree_count(), 4);
        assert!(!g.has_eulerian_trail());
    }

    #[test]
    fn test_eulerian_degenerate_graphs() {
        assert!(Graph::new(0).has_eulerian_trail());
        assert!(Graph::new(1).has_eulerian_trail());
        assert!(!Graph::new(2).has_eulerian_trail());
    }
}
