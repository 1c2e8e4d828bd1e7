//! Core building blocks: weight storage and error types.

pub mod error;
pub mod matrix;

pub use error::{GraphError, Result};
pub use matrix::{Weight, WeightMatrix};
