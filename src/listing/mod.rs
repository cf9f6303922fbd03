mod record;
mod search;
pub mod seed;

pub use record::{Category, Listing, ListingStatus, MarkerGlyph, Shift};
pub use search::search;
