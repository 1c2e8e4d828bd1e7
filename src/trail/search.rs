//! Exhaustive trail enumeration and longest-trail scoring.
//!
//! The search enumerates every trail from a start vertex by deleting
//! traversed edges from an owned scratch copy of the graph, so vertices may
//! be revisited but edges never are. Each recursion step removes one edge,
//! which bounds the depth by `edge_count()`.
//!
//! The number of trails grows exponentially with the number of edges. This
//! is only practical for small networks (tens of vertices).

use rustc_hash::FxHashSet;

use crate::graph::Graph;

use super::config::TrailSearchConfig;
use super::path::Trail;

impl Graph {
    /// Every trail starting at `start`, in discovery order.
    ///
    /// Neighbours are explored in ascending order and the edge to each one
    /// stays removed while later neighbours are explored. The trivial
    /// trail `[start]` is always the last entry.
    ///
    /// Panics if `start` is out of range.
    ///
    /// ```
    /// use rail_graph::Graph;
    ///
    /// let mut g = Graph::new(3);
    /// g.add_edge(0, 1, 1).unwrap();
    /// g.add_edge(1, 2, 1).unwrap();
    ///
    /// let trails = g.trails_from(1);
    /// assert_eq!(trails.len(), 3);
    /// assert_eq!(trails[0], vec![1, 0]);
    /// assert_eq!(trails[2], vec![1]);
    /// ```
    #[must_use]
    pub fn trails_from(&self, start: usize) -> Vec<Trail> {
        self.assert_vertex(start);
        collect_trails(self, start)
    }

    /// Sum of the weights between consecutive vertices of `trail`.
    ///
    /// Empty and single-vertex trails are worth 0. Panics if the trail
    /// mentions an out-of-range vertex.
    #[must_use]
    pub fn trail_value(&self, trail: &Trail) -> u64 {
        trail
            .steps()
            .map(|(a, b)| u64::from(self.weight(a, b)))
            .sum()
    }

    /// Check that `trail` is a trail of this graph: every vertex in range,
    /// consecutive vertices adjacent, no edge used twice.
    #[must_use]
    pub fn is_trail(&self, trail: &Trail) -> bool {
        if trail.vertices().iter().any(|&v| v >= self.order()) {
            return false;
        }

        let mut used = FxHashSet::default();
        trail
            .steps()
            .all(|(a, b)| self.has_edge(a, b) && used.insert((a.min(b), a.max(b))))
    }

    /// Highest-value trail, searching from each component's representative.
    ///
    /// Returns the empty trail when the graph has no edges.
    ///
    /// ```
    /// use rail_graph::Graph;
    ///
    /// let mut g = Graph::new(4);
    /// g.add_edge(0, 1, 2).unwrap();
    /// g.add_edge(1, 2, 3).unwrap();
    ///
    /// let best = g.longest_trail();
    /// assert_eq!(best, vec![0, 1, 2]);
    /// assert_eq!(g.trail_value(&best), 5);
    /// ```
    #[must_use]
    pub fn longest_trail(&self) -> Trail {
        self.longest_trail_with(&TrailSearchConfig::default())
    }

    /// Highest-value trail with an explicit search configuration.
    ///
    /// A trail only replaces the current best when its value is strictly
    /// greater, so ties keep the first trail found.
    #[must_use]
    pub fn longest_trail_with(&self, config: &TrailSearchConfig) -> Trail {
        let components = self.all_components();
        let mut best = Trail::new();
        let mut best_value = 0;
        let mut examined = 0usize;

        for component in &components {
            for &start in config.start.starts(component) {
                tracing::trace!(start, "enumerating trails");
                for trail in self.trails_from(start) {
                    examined += 1;
                    let value = self.trail_value(&trail);
                    if value > best_value {
                        best_value = value;
                        best = trail;
                    }
                }
            }
        }

        tracing::debug!(
            components = components.len(),
            examined,
            best_value,
            "longest trail search complete"
        );

        best
    }

    /// Value of `longest_trail()`.
    #[must_use]
    pub fn longest_trail_value(&self) -> u64 {
        self.trail_value(&self.longest_trail())
    }
}

/// Enumerate trails from `start` over a private copy of `scratch`.
fn collect_trails(scratch: &Graph, start: usize) -> Vec<Trail> {
    let mut graph = scratch.clone();
    let mut seen = FxHashSet::default();
    let mut trails = Vec::new();

    for next in graph.neighbors(start) {
        graph.clear_edge(start, next);
        for tail in collect_trails(&graph, next) {
            let trail = Trail::prefixed(start, &tail);
            if seen.insert(trail.clone()) {
                trails.push(trail);
            }
        }
    }

    let trivial = Trail::single(start);
    if seen.insert(trivial.clone()) {
        trails.push(trivial);
    }

    trails
}
