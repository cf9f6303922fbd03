use crate::listing::Listing;

/// Percentage offsets into the map viewport, each in [0, 100).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub top: f64,
    pub left: f64,
}

/// A single listing placed on the map.
#[derive(Debug, Clone)]
pub struct Pin<'a> {
    pub listing: &'a Listing,
    pub position: Position,
}

/// A synthetic marker standing in for two or more nearby listings.
///
/// Exists only for the duration of one layout pass; recomputed from
/// scratch whenever the listing set or zoom changes.
#[derive(Debug, Clone)]
pub struct Cluster<'a> {
    /// Grid bucket key, "{gx}-{gy}".
    pub key: String,
    pub count: usize,
    /// Arithmetic mean of the members' individual positions.
    pub position: Position,
    pub members: Vec<&'a Listing>,
}

/// Render-ready output of one layout pass.
#[derive(Debug, Clone)]
pub struct PinLayout<'a> {
    pub clusters: Vec<Cluster<'a>>,
    /// Individually rendered listings, in their original relative order.
    pub singles: Vec<Pin<'a>>,
}
