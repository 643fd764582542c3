// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the engine.

pub mod air_quality;
pub mod ride;
pub mod session;
pub mod station;
pub mod stats;
pub mod user;
pub mod weather;

pub use air_quality::{AqiLevel, AqiSite};
pub use ride::{FinishedRide, RideSummary, RideTotals, StationRef, StoredRide, WeatherContext};
pub use session::{GeoPoint, RideSession, RoutePoint, SessionStatus, TelemetryUpdate, UpdatedFields};
pub use station::{NearbyStation, Station, StationColor};
pub use stats::{UserStats, UserStatsView};
pub use user::{UserPreferences, UserProfile};
pub use weather::{DistrictForecast, ForecastPeriod};

pub(crate) mod de {
    //! Lenient deserializers for the loosely-typed upstream feeds.

    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Accept a coordinate as a JSON number or a numeric string; anything
    /// else (including an unparseable string) becomes `None` rather than a
    /// deserialization error, so one bad record cannot poison a whole feed.
    pub fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().and_then(|v| match v {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }))
    }
}
