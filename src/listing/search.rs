use super::Listing;

/// Filter listings by a free-text query over title and organization.
///
/// Matching is case-insensitive substring search. An empty or
/// whitespace-only query matches everything. Input order is preserved.
pub fn search<'a>(listings: &'a [Listing], query: &str) -> Vec<&'a Listing> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return listings.iter().collect();
    }

    listings
        .iter()
        .filter(|listing| {
            listing.title.to_lowercase().contains(&needle)
                || listing.organization.to_lowercase().contains(&needle)
        })
        .collect()
}
