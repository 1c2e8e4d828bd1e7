//! The `Trail` value type.

use std::fmt;

use smallvec::SmallVec;

/// An ordered sequence of vertices. Vertices may repeat.
///
/// Construction does not check the sequence against any graph; use
/// `Graph::is_trail` to verify that consecutive vertices are adjacent and
/// no edge is used twice.
///
/// Equality and hashing are structural over the vertex sequence, so trails
/// can be deduplicated in a hash set. Most trails in a rail network are
/// short enough to stay inline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Trail {
    vertices: SmallVec<[usize; 16]>,
}

impl Trail {
    /// The empty trail.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The zero-edge trail consisting of `v` alone.
    #[must_use]
    pub fn single(v: usize) -> Self {
        let mut vertices = SmallVec::new();
        vertices.push(v);
        Self { vertices }
    }

    /// `start` followed by every vertex of `tail`.
    #[must_use]
    pub fn prefixed(start: usize, tail: &Trail) -> Self {
        let mut trail = Self::single(start);
        trail.vertices.extend_from_slice(&tail.vertices);
        trail
    }

    /// The vertex sequence.
    #[must_use]
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// Number of vertices (not edges).
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Check whether the trail has no vertex at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of edges traversed.
    #[must_use]
    pub fn edge_len(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// First vertex.
    #[must_use]
    pub fn start(&self) -> Option<usize> {
        self.vertices.first().copied()
    }

    /// Last vertex.
    #[must_use]
    pub fn end(&self) -> Option<usize> {
        self.vertices.last().copied()
    }

    /// Append a vertex.
    pub fn push(&mut self, v: usize) {
        self.vertices.push(v);
    }

    /// Iterate over consecutive vertex pairs (the traversed edges).
    pub fn steps(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.vertices.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

impl From<Vec<usize>> for Trail {
    fn from(vertices: Vec<usize>) -> Self {
        Self {
            vertices: SmallVec::from_vec(vertices),
        }
    }
}

impl FromIterator<usize> for Trail {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            vertices: iter.into_iter().collect(),
        }
    }
}

impl PartialEq<[usize]> for Trail {
    fn eq(&self, other: &[usize]) -> bool {
        self.vertices.as_slice() == other
    }
}

impl PartialEq<Vec<usize>> for Trail {
    fn eq(&self, other: &Vec<usize>) -> bool {
        self.vertices.as_slice() == other.as_slice()
    }
}

impl fmt::Display for Trail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (k, v) in self.vertices.iter().enumerate() {
            if k > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "]")
    }
}
