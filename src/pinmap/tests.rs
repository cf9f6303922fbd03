use super::*;
use crate::listing::{seed, Category, Listing, ListingStatus, Shift};
use chrono::Utc;

fn make_listing(id: &str) -> Listing {
    Listing {
        id: id.to_string(),
        title: format!("Job {id}"),
        organization: "Corner Shop".to_string(),
        category: Category::Shop,
        salary: "$1,500/mo".to_string(),
        shift: Shift::Flexible,
        distance_km: 1.0,
        address: "10 Commerce St".to_string(),
        description: "General help.".to_string(),
        requirements: vec![],
        created_at: Utc::now(),
        status: ListingStatus::Open,
    }
}

fn make_listings(n: usize) -> Vec<Listing> {
    (0..n).map(|i| make_listing(&i.to_string())).collect()
}

fn refs(listings: &[Listing]) -> Vec<&Listing> {
    listings.iter().collect()
}

fn ids<'a>(layout: &PinLayout<'a>) -> Vec<&'a str> {
    let mut out: Vec<&str> = layout
        .clusters
        .iter()
        .flat_map(|c| c.members.iter().map(|l| l.id.as_str()))
        .chain(layout.singles.iter().map(|p| p.listing.id.as_str()))
        .collect();
    out.sort();
    out
}

#[test]
fn test_position_values_match_layout_formula() {
    assert_eq!(position_of(0), Position { top: 20.0, left: 15.0 });
    assert_eq!(position_of(1), Position { top: 40.0, left: 40.0 });
    assert_eq!(position_of(2), Position { top: 60.0, left: 65.0 });
    assert_eq!(position_of(3), Position { top: 20.0, left: 20.0 });
}

#[test]
fn test_position_is_pure() {
    for index in [0u64, 7, 1_000, u64::from(u32::MAX)] {
        assert_eq!(position_of(index), position_of(index));
    }
}

#[test]
fn test_position_stays_inside_viewport() {
    for index in 0..500u64 {
        let p = position_of(index);
        assert!((20.0..80.0).contains(&p.top), "top out of range at {index}");
        assert!((15.0..85.0).contains(&p.left), "left out of range at {index}");
    }
}

#[test]
fn test_max_zoom_renders_every_listing_individually() {
    let listings = make_listings(16);
    let layout = cluster(&refs(&listings), ZoomLevel::MAX);

    assert!(layout.clusters.is_empty());
    assert_eq!(layout.singles.len(), 16);
    // Original order preserved, pins at their formula positions
    for (i, pin) in layout.singles.iter().enumerate() {
        assert_eq!(pin.listing.id, i.to_string());
        assert_eq!(pin.position, position_of(i as u64));
    }
}

#[test]
fn test_empty_input_yields_empty_layout() {
    for level in 1..=3 {
        let layout = cluster(&[], ZoomLevel::new(level));
        assert!(layout.clusters.is_empty());
        assert!(layout.singles.is_empty());
    }
}

#[test]
fn test_single_listing_never_clusters() {
    let listings = make_listings(1);
    for level in 1..=3 {
        let layout = cluster(&refs(&listings), ZoomLevel::new(level));
        assert!(layout.clusters.is_empty());
        assert_eq!(layout.singles.len(), 1);
    }
}

#[test]
fn test_sample_set_clusters_first_and_fourth_listing() {
    // Indices 0..=3 sit at (20,15), (40,40), (60,65), (20,20); with a
    // 25-percent grid the first and fourth share bucket "0-0".
    let listings = seed::sample_listings();
    let layout = cluster(&refs(&listings), ZoomLevel::MIN);

    assert_eq!(layout.clusters.len(), 1);
    let c = &layout.clusters[0];
    assert_eq!(c.key, "0-0");
    assert_eq!(c.count, 2);
    assert_eq!(c.count, c.members.len());
    let member_ids: Vec<&str> = c.members.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(member_ids, vec!["1", "4"]);
    assert_eq!(c.position, Position { top: 20.0, left: 17.5 });

    let single_ids: Vec<&str> = layout.singles.iter().map(|p| p.listing.id.as_str()).collect();
    assert_eq!(single_ids, vec!["2", "3"]);
}

#[test]
fn test_partition_is_exact_at_every_zoom() {
    let listings = make_listings(16);
    let expected: Vec<String> = {
        let mut v: Vec<String> = (0..16).map(|i| i.to_string()).collect();
        v.sort();
        v
    };

    for level in 1..=3 {
        let layout = cluster(&refs(&listings), ZoomLevel::new(level));
        assert_eq!(ids(&layout), expected, "lost or duplicated a listing at zoom {level}");
        for c in &layout.clusters {
            assert!(c.count >= 2, "bucket of one must not cluster");
            assert_eq!(c.count, c.members.len());
        }
    }
}

#[test]
fn test_cluster_position_is_mean_of_member_positions() {
    let listings = make_listings(16);
    let layout = cluster(&refs(&listings), ZoomLevel::MIN);
    assert!(!layout.clusters.is_empty());

    for c in &layout.clusters {
        let (sum_top, sum_left) = c
            .members
            .iter()
            .map(|m| position_of(m.id.parse::<u64>().unwrap()))
            .fold((0.0, 0.0), |(t, l), p| (t + p.top, l + p.left));
        let n = c.count as f64;
        assert!((c.position.top - sum_top / n).abs() < 1e-9);
        assert!((c.position.left - sum_left / n).abs() < 1e-9);
    }
}

#[test]
fn test_shared_bucket_splits_as_zoom_increases() {
    // Indices 12 and 15 both land at top 20 with lefts 35 and 40: one
    // bucket at the 25-percent grid, two at the 12-percent grid.
    let listings = make_listings(16);

    let coarse = cluster(&refs(&listings), ZoomLevel::MIN);
    let together = coarse.clusters.iter().any(|c| {
        let m: Vec<&str> = c.members.iter().map(|l| l.id.as_str()).collect();
        m.contains(&"12") && m.contains(&"15")
    });
    assert!(together, "12 and 15 should share a cluster at zoom 1");

    let finer = cluster(&refs(&listings), ZoomLevel::MIN.zoom_in());
    let still_together = finer.clusters.iter().any(|c| {
        let m: Vec<&str> = c.members.iter().map(|l| l.id.as_str()).collect();
        m.contains(&"12") && m.contains(&"15")
    });
    assert!(!still_together, "12 and 15 should split at zoom 2");
}

#[test]
fn test_zoom_saturates_at_both_ends() {
    assert_eq!(ZoomLevel::MAX.zoom_in(), ZoomLevel::MAX);
    assert_eq!(ZoomLevel::MIN.zoom_out(), ZoomLevel::MIN);
    assert_eq!(ZoomLevel::MIN.zoom_in().level(), 2);
    assert_eq!(ZoomLevel::MAX.zoom_out().level(), 2);
    // Out-of-range construction clamps
    assert_eq!(ZoomLevel::new(0), ZoomLevel::MIN);
    assert_eq!(ZoomLevel::new(9), ZoomLevel::MAX);
}

#[test]
fn test_display_order_keying_moves_pins_when_filtered() {
    let listings = make_listings(3);
    let all = refs(&listings);
    let without_first: Vec<&Listing> = listings.iter().skip(1).collect();

    let full = cluster(&all, ZoomLevel::MAX);
    let filtered = cluster(&without_first, ZoomLevel::MAX);

    // Listing "1" was at index 1; after filtering it shifts to index 0.
    assert_eq!(full.singles[1].listing.id, "1");
    assert_eq!(filtered.singles[0].listing.id, "1");
    assert_ne!(full.singles[1].position, filtered.singles[0].position);
}

#[test]
fn test_stable_id_keying_survives_reordering() {
    let listings = make_listings(6);
    let forward = refs(&listings);
    let backward: Vec<&Listing> = listings.iter().rev().collect();

    let a = cluster_with(&forward, ZoomLevel::MAX, PinKeying::StableId);
    let b = cluster_with(&backward, ZoomLevel::MAX, PinKeying::StableId);

    for pin in &a.singles {
        let twin = b
            .singles
            .iter()
            .find(|p| p.listing.id == pin.listing.id)
            .expect("listing present in both layouts");
        assert_eq!(pin.position, twin.position);
    }
}
