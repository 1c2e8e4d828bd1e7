//! Location registry and graph building from named routes.

use rustc_hash::FxHashMap;

use crate::core::error::{GraphError, Result};
use crate::core::matrix::Weight;
use crate::graph::Graph;

/// A weighted connection between two named locations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub from: String,
    pub to: String,
    pub length: Weight,
}

impl Route {
    /// Create a new route.
    pub fn new(from: impl Into<String>, to: impl Into<String>, length: Weight) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            length,
        }
    }
}

/// Assigns dense vertex indices to location names in registration order.
///
/// ## Example
///
/// ```
/// use rail_graph::network::{LocationIndex, Route};
///
/// let index: LocationIndex = ["Paris", "Bruxelles", "Amsterdam"].into_iter().collect();
/// let routes = vec![
///     Route::new("Paris", "Bruxelles", 2),
///     Route::new("Bruxelles", "Amsterdam", 1),
/// ];
///
/// let graph = index.build_graph(&routes).unwrap();
/// let paris = index.vertex("Paris").unwrap();
/// let amsterdam = index.vertex("Amsterdam").unwrap();
/// assert!(graph.are_connected(paris, amsterdam));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LocationIndex {
    names: Vec<String>,
    by_name: FxHashMap<String, usize>,
}

impl LocationIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a location, returning its vertex. Re-registering a name
    /// returns the existing vertex.
    pub fn register(&mut self, name: impl Into<String>) -> usize {
        let name = name.into();
        if let Some(&vertex) = self.by_name.get(&name) {
            return vertex;
        }

        let vertex = self.names.len();
        self.by_name.insert(name.clone(), vertex);
        self.names.push(name);
        vertex
    }

    /// Vertex for a registered name.
    pub fn vertex(&self, name: &str) -> Result<usize> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::UnknownLocation { name: name.to_string() })
    }

    /// Name of a vertex, if registered.
    #[must_use]
    pub fn name(&self, vertex: usize) -> Option<&str> {
        self.names.get(vertex).map(String::as_str)
    }

    /// Number of registered locations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check whether no location is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// An edgeless graph with one vertex per registered location.
    #[must_use]
    pub fn empty_graph(&self) -> Graph {
        Graph::new(self.len())
    }

    /// Add a named route to `graph`.
    pub fn add_route(&self, graph: &mut Graph, route: &Route) -> Result<()> {
        let from = self.vertex(&route.from)?;
        let to = self.vertex(&route.to)?;
        graph.add_edge(from, to, route.length)
    }

    /// Build a graph over all registered locations from `routes`.
    ///
    /// Fails on the first route naming an unknown location or carrying an
    /// invalid edge.
    pub fn build_graph<'a>(&self, routes: impl IntoIterator<Item = &'a Route>) -> Result<Graph> {
        let mut graph = self.empty_graph();
        for route in routes {
            self.add_route(&mut graph, route)?;
        }
        Ok(graph)
    }

    /// Translate vertex indices back into location names.
    ///
    /// Unregistered vertices are skipped.
    pub fn names_of<'a>(&'a self, vertices: &'a [usize]) -> impl Iterator<Item = &'a str> + 'a {
        vertices.iter().filter_map(move |&v| self.name(v))
    }
}

impl<S: Into<String>> FromIterator<S> for LocationIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut index = Self::new();
        for name in iter {
            index.register(name);
        }
        index
    }
}
