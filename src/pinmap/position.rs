use sha2::{Digest, Sha256};

use super::types::Position;
use crate::listing::Listing;

/// Deterministic screen position for the pin at a given index.
///
/// Stands in for a real coordinate projection: spreads pins over the
/// viewport from nothing but an ordinal, so layout is reproducible for
/// any listing set. Total for every index.
pub fn position_of(index: u64) -> Position {
    Position {
        top: (20 + (index * 20) % 60) as f64,
        left: (15 + (index * 25) % 70) as f64,
    }
}

/// How a listing is mapped to a position index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PinKeying {
    /// Ordinal index within the currently displayed collection. Matches
    /// the historical behavior: a pin moves when the collection is
    /// filtered or reordered, even though the listing itself did not.
    #[default]
    DisplayOrder,
    /// Pseudo-index derived from a hash of the listing id, so a pin keeps
    /// its place regardless of filtering or ordering.
    StableId,
}

pub(super) fn index_for(keying: PinKeying, ordinal: usize, listing: &Listing) -> u64 {
    match keying {
        PinKeying::DisplayOrder => ordinal as u64,
        PinKeying::StableId => stable_index(&listing.id),
    }
}

fn stable_index(id: &str) -> u64 {
    let digest = Sha256::digest(id.as_bytes());
    u64::from(u32::from_le_bytes([digest[0], digest[1], digest[2], digest[3]]))
}
