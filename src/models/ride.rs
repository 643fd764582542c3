// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Finished-ride records and the summary math that closes a session.

use crate::geo::round_to;
use crate::models::session::{GeoPoint, RideSession, RoutePoint};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kilograms of CO2 avoided per kilometer cycled instead of driven.
pub const CARBON_KG_PER_KM: f64 = 0.12;

/// Values derived when a session is closed.
///
/// Kept separate from the record assembly so the math is testable without a
/// store or a live clock.
#[derive(Debug, Clone, Copy)]
pub struct RideTotals {
    pub end_time: DateTime<Utc>,
    /// Wall-clock seconds between start and finish
    pub total_elapsed: f64,
    /// `total_elapsed - paused_time`; may be negative on clock skew or a
    /// caller-reported paused total exceeding the elapsed time. Passed
    /// through un-clamped.
    pub active_duration: f64,
    pub distance_km: f64,
    /// km/h over the active duration; 0 when the active duration is not
    /// positive (guards the division only, not the negative-duration case)
    pub avg_speed: f64,
    pub carbon_saved: f64,
}

impl RideTotals {
    pub fn compute(
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        paused_time: f64,
        distance_m: f64,
    ) -> Self {
        let total_elapsed = (end_time - start_time).num_milliseconds() as f64 / 1000.0;
        let active_duration = total_elapsed - paused_time;
        let distance_km = distance_m / 1000.0;

        let avg_speed = if active_duration > 0.0 {
            distance_km / (active_duration / 3600.0)
        } else {
            0.0
        };

        Self {
            end_time,
            total_elapsed,
            active_duration,
            distance_km,
            avg_speed,
            carbon_saved: distance_km * CARBON_KG_PER_KM,
        }
    }
}

/// Departure-station reference carried on rides that began at a YouBike dock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationRef {
    pub name: String,
    pub sno: String,
}

/// Environmental conditions at ride completion, as captured by the client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeatherContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aqi: Option<String>,
}

/// Durable record of one completed ride. Immutable after creation except
/// for deletion by its owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinishedRide {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Active duration in whole seconds (rounded; negative passes through)
    pub duration: i64,
    /// Distance in whole meters
    pub distance: i64,
    pub calories: i64,
    /// Average speed in km/h over the active duration
    pub avg_speed: f64,
    /// Highest observed speed in km/h
    pub max_speed: f64,
    pub route: Vec<RoutePoint>,
    pub start_location: GeoPoint,
    pub end_location: GeoPoint,
    /// CO2 avoided versus the same distance by car, in kg
    pub carbon_saved: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_station: Option<StationRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherContext>,
}

impl FinishedRide {
    /// Convert a closing session into its durable shape.
    ///
    /// Pure mapping: integers are normalized by rounding, the route is
    /// carried verbatim, and the optional context passes through unchanged.
    /// All derivation lives in [`RideTotals::compute`].
    pub fn from_session(
        session: &RideSession,
        totals: &RideTotals,
        end_location: GeoPoint,
        weather: Option<WeatherContext>,
    ) -> Self {
        Self {
            start_time: session.start_time,
            end_time: totals.end_time,
            duration: totals.active_duration.round() as i64,
            distance: session.distance.round() as i64,
            calories: session.calories.round() as i64,
            avg_speed: round_to(totals.avg_speed, 2),
            max_speed: session.max_speed,
            route: session.route.clone(),
            start_location: session.start_location,
            end_location,
            carbon_saved: round_to(totals.carbon_saved, 3),
            start_station: None,
            weather,
        }
    }
}

/// Persisted envelope around a [`FinishedRide`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredRide {
    pub ride_id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub ride: FinishedRide,
}

/// Display-precision view of a finished ride, returned to the rider.
#[derive(Debug, Clone, Serialize)]
pub struct RideSummary {
    /// Active duration in minutes, 1 decimal
    pub duration_minutes: f64,
    /// Distance in km, 2 decimals
    pub distance_km: f64,
    /// 2 decimals
    pub avg_speed_kmh: f64,
    /// 2 decimals
    pub max_speed_kmh: f64,
    /// 2 decimals
    pub calories: f64,
    /// 3 decimals
    pub carbon_saved_kg: f64,
}

impl RideSummary {
    pub fn from_totals(totals: &RideTotals, max_speed: f64, calories: f64) -> Self {
        Self {
            duration_minutes: round_to(totals.active_duration / 60.0, 1),
            distance_km: round_to(totals.distance_km, 2),
            avg_speed_kmh: round_to(totals.avg_speed, 2),
            max_speed_kmh: round_to(max_speed, 2),
            calories: round_to(calories, 2),
            carbon_saved_kg: round_to(totals.carbon_saved, 3),
        }
    }
}
