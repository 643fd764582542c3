// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Air-quality lookups over a caller-supplied monitoring-site snapshot.

use crate::geo;
use crate::models::{AqiSite, GeoPoint};

/// The monitoring site closest to a rider position. Sites without usable
/// coordinates are skipped; `None` when nothing qualifies.
pub fn nearest_site<'a>(sites: &'a [AqiSite], point: &GeoPoint) -> Option<&'a AqiSite> {
    geo::nearest(point, sites)
}

/// All sites in a county (for name-based lookups when the rider position
/// is unknown).
pub fn by_county<'a>(sites: &'a [AqiSite], county: &str) -> Vec<&'a AqiSite> {
    sites.iter().filter(|site| site.county == county).collect()
}

/// Exact lookup by site name.
pub fn by_name<'a>(sites: &'a [AqiSite], sitename: &str) -> Option<&'a AqiSite> {
    sites.iter().find(|site| site.sitename == sitename)
}
