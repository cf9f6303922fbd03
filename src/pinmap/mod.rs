//! Deterministic map layout: pin placement plus grid-bucket clustering.
//!
//! Positions come from a fixed arithmetic formula over a listing's ordinal
//! index, not from real coordinates. Clustering buckets those positions
//! into a zoom-dependent grid and collapses any bucket with two or more
//! listings into a single counted marker.

mod engine;
mod position;
mod types;
mod zoom;

pub use engine::{cluster, cluster_with};
pub use position::{position_of, PinKeying};
pub use types::{Cluster, Pin, PinLayout, Position};
pub use zoom::ZoomLevel;

#[cfg(test)]
mod tests;
