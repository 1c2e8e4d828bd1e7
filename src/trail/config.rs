//! Longest-trail search configuration.

use serde::{Deserialize, Serialize};

/// Which vertices of each component the longest-trail search starts from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartPolicy {
    /// Only the component's representative (its first vertex).
    ///
    /// The result is the best trail starting at that vertex, which is not
    /// necessarily the longest trail of the component.
    #[default]
    Representative,

    /// Every vertex of the component, in component order.
    EveryVertex,
}

impl StartPolicy {
    /// Start vertices for one component under this policy.
    #[must_use]
    pub fn starts<'a>(&self, component: &'a [usize]) -> &'a [usize] {
        match self {
            StartPolicy::Representative => component.get(..1).unwrap_or(&[]),
            StartPolicy::EveryVertex => component,
        }
    }
}

/// Longest-trail search parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrailSearchConfig {
    /// Start vertices searched in each component.
    pub start: StartPolicy,
}

impl TrailSearchConfig {
    /// Set the start policy.
    #[must_use]
    pub fn with_start(mut self, start: StartPolicy) -> Self {
        self.start = start;
        self
    }

    /// Search from every vertex of every component.
    #[must_use]
    pub fn every_vertex() -> Self {
        Self::default().with_start(StartPolicy::EveryVertex)
    }
}
