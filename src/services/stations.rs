// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Nearby-station search over a caller-supplied YouBike feed snapshot.
//!
//! The feed is fetched and cached upstream; every query here scans the
//! snapshot it is handed, so results are as fresh as the caller's data.

use crate::config::Config;
use crate::geo::{self, round_to};
use crate::models::{GeoPoint, NearbyStation, Station};

/// Availability constraint for nearby-station queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityFilter {
    /// Stations with at least `min_bikes` rentable bikes
    Available,
    /// Stations with at least one free dock
    Empty,
}

/// Parameters for a nearby-station query.
#[derive(Debug, Clone)]
pub struct NearbyQuery {
    /// Search radius in meters
    pub radius_m: f64,
    /// Maximum number of results
    pub limit: usize,
    pub filter: Option<AvailabilityFilter>,
    /// Minimum rentable bikes for the `Available` filter
    pub min_bikes: u32,
}

impl NearbyQuery {
    pub fn from_config(config: &Config) -> Self {
        Self {
            radius_m: config.station_radius_m,
            limit: config.station_limit,
            filter: None,
            min_bikes: config.min_available_bikes,
        }
    }
}

impl Default for NearbyQuery {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Stations within the query radius, availability-filtered, sorted by
/// distance ascending and capped at the query limit. Distances are meters
/// rounded to 2 decimals.
pub fn nearby(stations: &[Station], point: &GeoPoint, query: &NearbyQuery) -> Vec<NearbyStation> {
    // Filter before the radius scan so the result cap applies to eligible
    // stations only.
    let eligible: Vec<&Station> = stations
        .iter()
        .filter(|station| matches_filter(station, query))
        .collect();

    geo::within_radius(point, &eligible, query.radius_m, query.limit)
        .into_iter()
        .map(|(station, distance)| NearbyStation {
            station: (*station).clone(),
            distance: round_to(distance, 2),
        })
        .collect()
}

/// Exact lookup by station id.
pub fn by_sno<'a>(stations: &'a [Station], sno: &str) -> Option<&'a Station> {
    stations.iter().find(|station| station.sno == sno)
}

/// All stations in a district, matched against the Chinese or English name.
pub fn by_area<'a>(stations: &'a [Station], area: &str) -> Vec<&'a Station> {
    stations
        .iter()
        .filter(|station| station.sarea == area || station.sareaen == area)
        .collect()
}

fn matches_filter(station: &Station, query: &NearbyQuery) -> bool {
    match query.filter {
        Some(AvailabilityFilter::Available) => station.available_rent_bikes >= query.min_bikes,
        Some(AvailabilityFilter::Empty) => station.available_return_bikes > 0,
        None => true,
    }
}
