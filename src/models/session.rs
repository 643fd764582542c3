// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-progress ride session model and telemetry update shapes.

use crate::error::{AppError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A latitude/longitude pair, using the telemetry wire keys `lat`/`lng`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// A usable coordinate: finite and inside the WGS84 value ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// One GPS fix on the recorded route, timestamped by the engine clock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutePoint {
    pub lat: f64,
    pub lng: f64,
    pub timestamp: DateTime<Utc>,
}

/// Session lifecycle state. Finishing a ride deletes the session outright,
/// so there is no `finished` value here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Active,
    Paused,
}

/// Live state of one in-progress ride.
///
/// `distance`, `calories` and `paused_time` are caller-authoritative running
/// totals (replaced, never summed); `max_speed` is a running maximum;
/// `elevation_profile` and `route` are append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RideSession {
    pub ride_id: String,
    pub user_id: String,
    pub status: SessionStatus,
    pub start_time: DateTime<Utc>,
    pub start_location: GeoPoint,
    pub current_location: Option<GeoPoint>,
    /// Cumulative distance in meters
    pub distance: f64,
    /// Highest observed instantaneous speed (km/h)
    pub max_speed: f64,
    /// Cumulative calories burned
    pub calories: f64,
    /// Cumulative paused time in seconds
    pub paused_time: f64,
    pub elevation_profile: Vec<f64>,
    pub route: Vec<RoutePoint>,
}

impl RideSession {
    /// Fresh session with all cumulative fields zeroed and status `active`.
    pub fn new(
        ride_id: String,
        user_id: &str,
        start_location: GeoPoint,
        start_time: DateTime<Utc>,
    ) -> Self {
        Self {
            ride_id,
            user_id: user_id.to_string(),
            status: SessionStatus::Active,
            start_time,
            start_location,
            current_location: None,
            distance: 0.0,
            max_speed: 0.0,
            calories: 0.0,
            paused_time: 0.0,
            elevation_profile: Vec::new(),
            route: Vec::new(),
        }
    }
}

/// One telemetry update: a sparse partial snapshot of current ride metrics.
///
/// Numeric fields arrive as raw JSON values because tracking clients send
/// numbers and numeric strings interchangeably; coercion happens inside
/// `update_session`, where a bad value rejects the whole update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TelemetryUpdate {
    /// Total distance in meters (running total, replaces)
    pub distance: Option<Value>,
    /// Current instantaneous speed in km/h (feeds the max-speed tracker)
    pub speed: Option<Value>,
    /// Total calories burned (running total, replaces)
    pub calories: Option<Value>,
    /// Total paused time in seconds (running total, replaces)
    pub paused_time: Option<Value>,
    /// Current elevation in meters (appended to the profile)
    pub elevation: Option<Value>,
    /// Current GPS position (also appends a route point)
    pub current_location: Option<GeoPoint>,
}

/// Echo of what a telemetry update actually applied.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdatedFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paused_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_location: Option<GeoPoint>,
    pub elevation_added: bool,
    pub route_point_added: bool,
}

/// Coerce a telemetry metric to `f64`, accepting JSON numbers and numeric
/// strings. Anything else fails the whole update with `InvalidMetric`.
pub(crate) fn metric_f64(field: &'static str, value: &Value) -> Result<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| AppError::InvalidMetric(format!("{field}: {value}")))
}
