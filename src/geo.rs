// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Great-circle distance and nearest-match scans over located records.
//!
//! Every reference feed (YouBike stations, air-quality sites, forecast
//! districts) resolves rider coordinates through the same two scans:
//! single nearest match, and everything-within-radius sorted by distance.

use crate::models::GeoPoint;
use std::cmp::Ordering;

/// Earth radius in meters (spherical approximation, matching the upstream
/// feeds' own distance calculations).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A record carrying a geographic coordinate.
///
/// `location()` returns `None` for degenerate records: coordinates the feed
/// could not supply as numbers, or the (0, 0) sentinel the feeds use for
/// "unknown". Degenerate records are skipped by the scans below, never
/// treated as valid candidates at the null island.
pub trait Located {
    fn location(&self) -> Option<GeoPoint>;
}

impl<T: Located> Located for &T {
    fn location(&self) -> Option<GeoPoint> {
        (*self).location()
    }
}

/// Great-circle distance in meters between two coordinates (Haversine).
pub fn haversine_distance(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlng = (b.lng - a.lng).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);

    2.0 * h.sqrt().asin() * EARTH_RADIUS_M
}

/// Find the record closest to `point`.
///
/// Linear scan; degenerate records are skipped. Returns `None` when the
/// collection is empty or every record is degenerate. Exact distance ties
/// resolve to the first candidate in input order (strict `<` comparison);
/// callers should not rely on the tie order, but tests pin it.
pub fn nearest<'a, T: Located>(point: &GeoPoint, records: &'a [T]) -> Option<&'a T> {
    let mut best: Option<(&T, f64)> = None;

    for record in records {
        let Some(loc) = record.location() else {
            continue;
        };
        let dist = haversine_distance(point, &loc);
        if best.is_none_or(|(_, min)| dist < min) {
            best = Some((record, dist));
        }
    }

    best.map(|(record, _)| record)
}

/// Every record within `radius_m` meters of `point`, paired with its
/// distance, sorted ascending and truncated to `limit`.
///
/// The sort is stable, so equal-distance records keep their input order.
pub fn within_radius<'a, T: Located>(
    point: &GeoPoint,
    records: &'a [T],
    radius_m: f64,
    limit: usize,
) -> Vec<(&'a T, f64)> {
    let mut hits: Vec<(&T, f64)> = records
        .iter()
        .filter_map(|record| {
            let loc = record.location()?;
            let dist = haversine_distance(point, &loc);
            (dist <= radius_m).then_some((record, dist))
        })
        .collect();

    hits.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
    hits.truncate(limit);
    hits
}

/// Round to a fixed number of decimal places (display precision).
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
