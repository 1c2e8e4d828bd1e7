//! Connected components.
//!
//! Components are computed by breadth-first traversal from a seed vertex.
//! Results are in visitation order, so the seed is always the first vertex
//! of its component and acts as the component's representative.

use std::collections::VecDeque;

use super::weighted::Graph;

impl Graph {
    /// The connected component containing `v`, in BFS visitation order.
    ///
    /// Panics if `v` is out of range.
    ///
    /// ```
    /// use rail_graph::Graph;
    ///
    /// let mut g = Graph::new(4);
    /// g.add_edge(0, 1, 1).unwrap();
    /// g.add_edge(2, 3, 1).unwrap();
    ///
    /// assert_eq!(g.component_of(2), vec![2, 3]);
    /// ```
    #[must_use]
    pub fn component_of(&self, v: usize) -> Vec<usize> {
        self.assert_vertex(v);

        // Marks both queued and visited vertices
        let mut seen = vec![false; self.order()];
        let mut frontier = VecDeque::from([v]);
        let mut visited = Vec::new();
        seen[v] = true;

        while let Some(current) = frontier.pop_front() {
            for u in self.neighbors(current) {
                if !seen[u] {
                    seen[u] = true;
                    frontier.push_back(u);
                }
            }
            visited.push(current);
        }

        visited
    }

    /// Partition all vertices into connected components.
    ///
    /// Components are seeded from the lowest vertex not yet assigned, so the
    /// partition is deterministic and each component starts with its
    /// smallest vertex.
    #[must_use]
    pub fn all_components(&self) -> Vec<Vec<usize>> {
        let mut assigned = vec![false; self.order()];
        let mut components = Vec::new();

        for seed in self.vertices() {
            if assigned[seed] {
                continue;
            }
            let component = self.component_of(seed);
            for &u in &component {
                assigned[u] = true;
            }
            components.push(component);
        }

        components
    }

    /// Number of connected components. `order()` for an edgeless graph.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.all_components().len()
    }

    /// Check whether `a` and `b` lie in the same component.
    ///
    /// Panics if either index is out of range, checking `a` first.
    #[must_use]
    pub fn are_connected(&self, a: usize, b: usize) -> bool {
        self.assert_vertex(a);
        self.assert_vertex(b);
        a == b || self.component_of(a).contains(&b)
    }

    /// Check whether the graph has at most one component.
    ///
    /// The empty graph is vacuously connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.component_count() <= 1
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
    fn test_component_of_seed_first() {
        let g = build(5, &[(3, 4, 1), (4, 1, 1), (0, 1, 1)]);
        let component = g.component_of(4);
        assert_eq!(component[0], 4);
        assert_eq!(component, vec![4, 1, 3, 0]);
    }

    #[test]
    fn test_component_of_isolated_vertex() {
        let g = build(3, &[(0, 1, 1)]);
        assert_eq!(g.component_of(2), vec![2]);
    }

    #[test]
    fn test_all_components_order() {
        let g = build(6, &[(4, 5, 1), (1, 3, 1), (3, 4, 1)]);
        assert_eq!(
            g.all_components(),
            vec![vec![0], vec![1, 3, 4, 5], vec![2]]
        );
        assert_eq!(g.component_count(), 3);
    }

    #[test]
    fn test_component_count_edgeless() {
        assert_eq!(Graph::new(10).component_count(), 10);
        assert_eq!(Graph::new(0).component_count(), 0);
    }

    #[test]
    fn test_are_connected() {
        let g = build(4, &[(0, 1, 1), (2, 3, 1)]);
        assert!(g.are_connected(0, 1));
        assert!(g.are_connected(3, 3));
        assert!(!g.are_connected(1, 2));
    }

    #[test]
    #[should_panic(expected = "vertex 7 out of range for graph of order 4")]
    fn test_are_connected_reports_first_vertex() {
        let g = build(4, &[(0, 1, 1)]);
        let _ = g.are_connected(7, 9);
    }

    #[test]
    fn test_is_connected() {
        assert!(Graph::new(0).is_connected());
        assert!(Graph::new(1).is_connected());
        assert!(!Graph::new(2).is_connected());
        assert!(build(3, &[(0, 1, 1), (1, 2, 1)]).is_connected());
    }
}
