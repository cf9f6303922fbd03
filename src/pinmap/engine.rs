use std::collections::HashMap;

use super::position::{index_for, position_of, PinKeying};
use super::types::{Cluster, Pin, PinLayout, Position};
use super::zoom::ZoomLevel;
use crate::listing::Listing;

/// Lay out listings at the given zoom with display-order pin keying.
pub fn cluster<'a>(listings: &[&'a Listing], zoom: ZoomLevel) -> PinLayout<'a> {
    cluster_with(listings, zoom, PinKeying::default())
}

/// Lay out listings at the given zoom with an explicit pin keying mode.
///
/// Every listing ends up exactly once in the output: either as a member
/// of one cluster or as an individual pin. Cluster order follows the
/// first-seen order of their grid buckets, so output is deterministic.
pub fn cluster_with<'a>(
    listings: &[&'a Listing],
    zoom: ZoomLevel,
    keying: PinKeying,
) -> PinLayout<'a> {
    let positions: Vec<Position> = listings
        .iter()
        .enumerate()
        .map(|(i, listing)| position_of(index_for(keying, i, listing)))
        .collect();

    // 1. Max zoom renders everything individually.
    let Some(cell) = zoom.cell_size() else {
        let singles = listings
            .iter()
            .zip(&positions)
            .map(|(&listing, &position)| Pin { listing, position })
            .collect();
        return PinLayout {
            clusters: Vec::new(),
            singles,
        };
    };

    // 2. Bucket every listing into the zoom-dependent grid.
    let mut buckets: HashMap<String, Vec<usize>> = HashMap::new();
    let mut bucket_order: Vec<String> = Vec::new();
    for (i, position) in positions.iter().enumerate() {
        let gx = (position.left / cell).floor() as i64;
        let gy = (position.top / cell).floor() as i64;
        let key = format!("{gx}-{gy}");
        buckets
            .entry(key.clone())
            .or_insert_with(|| {
                bucket_order.push(key);
                Vec::new()
            })
            .push(i);
    }

    // 3. Buckets with two or more listings collapse into one marker
    //    placed at the mean of the members' own positions.
    let mut clusters = Vec::new();
    let mut clustered = vec![false; listings.len()];
    for key in bucket_order {
        let members = &buckets[&key];
        if members.len() < 2 {
            continue;
        }

        let (sum_top, sum_left) = members.iter().fold((0.0, 0.0), |(top, left), &i| {
            (top + positions[i].top, left + positions[i].left)
        });
        let n = members.len() as f64;
        for &i in members {
            clustered[i] = true;
        }

        clusters.push(Cluster {
            key,
            count: members.len(),
            position: Position {
                top: sum_top / n,
                left: sum_left / n,
            },
            members: members.iter().map(|&i| listings[i]).collect(),
        });
    }

    // 4. Size-1 buckets stay individual pins, in input order.
    let singles = listings
        .iter()
        .zip(&positions)
        .enumerate()
        .filter(|(i, _)| !clustered[*i])
        .map(|(_, (&listing, &position))| Pin { listing, position })
        .collect();

    PinLayout { clusters, singles }
}
