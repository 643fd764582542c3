// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Forecast-district resolution, current-conditions summaries, and the
//! environmental context attached to finished rides.

use crate::geo;
use crate::models::{AqiSite, DistrictForecast, GeoPoint, WeatherContext};
use crate::time_utils::format_utc_rfc3339;
use chrono::{NaiveDateTime, Utc};
use serde::Serialize;

/// The forecast district whose centroid is closest to the rider.
pub fn nearest_district<'a>(
    districts: &'a [DistrictForecast],
    point: &GeoPoint,
) -> Option<&'a DistrictForecast> {
    geo::nearest(point, districts)
}

/// Exact lookup by district name.
pub fn by_name<'a>(districts: &'a [DistrictForecast], name: &str) -> Option<&'a DistrictForecast> {
    districts.iter().find(|district| district.name == name)
}

/// Summarized present-moment weather for one district.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentConditions {
    pub location_name: String,
    /// When this summary was assembled (RFC3339, UTC)
    pub timestamp: String,
    /// Estimated from the current period's min/max, e.g. `"30.5°C"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    /// Mean precipitation probability over the next few hours, percent
    pub rain_probability_3h: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comfort_index: Option<String>,
}

/// Condense a district forecast into what a rider checks before setting
/// off. `now` anchors the short-term rain window.
pub fn conditions_for(district: &DistrictForecast, now: NaiveDateTime) -> CurrentConditions {
    let current = district.current_period();
    CurrentConditions {
        location_name: district.name.clone(),
        timestamp: format_utc_rfc3339(Utc::now()),
        temperature: district.current_temperature().map(|t| format!("{t}°C")),
        condition: current.and_then(|p| p.condition.clone()),
        rain_probability_3h: district.rain_probability_next_3h(now),
        comfort_index: current.and_then(|p| p.comfort_index.clone()),
    }
}

/// Assemble the context payload stored with a finished ride: current
/// temperature and condition from the district forecast, AQI reading from
/// the nearest monitoring site. Missing inputs simply leave fields empty.
pub fn context_for(district: Option<&DistrictForecast>, site: Option<&AqiSite>) -> WeatherContext {
    WeatherContext {
        temperature: district
            .and_then(|d| d.current_temperature())
            .map(|t| format!("{t}°C")),
        condition: district
            .and_then(|d| d.current_period())
            .and_then(|p| p.condition.clone()),
        aqi: site.map(|s| s.aqi.clone()).filter(|aqi| !aqi.is_empty()),
    }
}
