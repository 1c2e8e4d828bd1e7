//! Trails and the longest-trail search.
//!
//! A trail is a walk that never reuses an edge; unlike a simple path it may
//! pass through a vertex several times. The longest trail of a player's
//! network is what the "longest route" bonus is scored on.

pub mod config;
pub mod path;
pub mod search;

pub use config::{StartPolicy, TrailSearchConfig};
pub use path::Trail;
