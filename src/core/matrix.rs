//! Symmetric weight storage.
//!
//! `WeightMatrix` is a dense `order × order` grid backed by a single `Vec`
//! for O(1) access, indexed by `(row, column)`. A weight of `0` means the
//! pair is not connected.

use std::ops::Index;

/// Edge weight (length of a connection). `0` is reserved for "no edge".
pub type Weight = u32;

/// Dense symmetric matrix of edge weights.
///
/// Writes go through `set_symmetric`, so `m[(i, j)] == m[(j, i)]` always
/// holds. Bounds are the caller's responsibility; out-of-range access panics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct WeightMatrix {
    order: usize,
    data: Vec<Weight>,
}

impl WeightMatrix {
    /// Create an all-zero matrix for `order` vertices.
    #[must_use]
    pub fn new(order: usize) -> Self {
        Self {
            order,
            data: vec![0; order * order],
        }
    }

    /// Number of rows (and columns).
    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Weight at `(i, j)`.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Weight {
        self.data[i * self.order + j]
    }

    /// Write `weight` at both `(i, j)` and `(j, i)`.
    pub fn set_symmetric(&mut self, i: usize, j: usize, weight: Weight) {
        let order = self.order;
        self.data[i * order + j] = weight;
        self.data[j * order + i] = weight;
    }

    /// A full row: the weights from `i` to every vertex.
    #[must_use]
    pub fn row(&self, i: usize) -> &[Weight] {
        let start = i * self.order;
        &self.data[start..start + self.order]
    }

    /// Iterate over rows in index order.
    pub fn rows(&self) -> impl Iterator<Item = &[Weight]> {
        (0..self.order).map(move |i| self.row(i))
    }
}

impl Index<(usize, usize)> for WeightMatrix {
    type Output = Weight;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.data[i * self.order + j]
    }
}
