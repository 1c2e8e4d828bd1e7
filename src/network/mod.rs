//! Mapping host locations to graph vertices.
//!
//! The graph engine works on dense integer indices. `LocationIndex` lets a
//! host register its named locations (cities) once and then build graphs
//! from named, weighted connections (routes).

pub mod locations;

pub use locations::{LocationIndex, Route};
