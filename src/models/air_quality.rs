// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Air-quality monitoring site records from the EPA open-data feed.

use crate::geo::Located;
use crate::models::de::lenient_f64;
use crate::models::session::GeoPoint;
use serde::{Deserialize, Serialize};

/// One monitoring-site row. The feed publishes every field as a string,
/// including the AQI reading itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AqiSite {
    pub sitename: String,
    #[serde(default)]
    pub county: String,
    /// AQI reading as published (numeric string, possibly empty)
    #[serde(default)]
    pub aqi: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, rename = "pm2.5")]
    pub pm25: String,
    #[serde(default)]
    pub pollutant: String,
    #[serde(default)]
    pub publishtime: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub longitude: Option<f64>,
}

impl AqiSite {
    /// Banded AQI level, or `None` when the reading is missing/non-numeric.
    pub fn level(&self) -> Option<AqiLevel> {
        self.aqi.trim().parse::<i64>().ok().map(AqiLevel::from_value)
    }
}

impl Located for AqiSite {
    fn location(&self) -> Option<GeoPoint> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) if !(lat == 0.0 && lng == 0.0) => Some(GeoPoint::new(lat, lng)),
            _ => None,
        }
    }
}

/// Standard AQI banding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AqiLevel {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiLevel {
    pub fn from_value(aqi: i64) -> Self {
        match aqi {
            ..=50 => AqiLevel::Good,
            51..=100 => AqiLevel::Moderate,
            101..=150 => AqiLevel::UnhealthyForSensitiveGroups,
            151..=200 => AqiLevel::Unhealthy,
            201..=300 => AqiLevel::VeryUnhealthy,
            _ => AqiLevel::Hazardous,
        }
    }

    /// Bilingual display label, matching the city app's copy.
    pub fn label(&self) -> &'static str {
        match self {
            AqiLevel::Good => "良好 (Good)",
            AqiLevel::Moderate => "普通 (Moderate)",
            AqiLevel::UnhealthyForSensitiveGroups => {
                "對敏感族群不健康 (Unhealthy for Sensitive Groups)"
            }
            AqiLevel::Unhealthy => "對所有族群不健康 (Unhealthy)",
            AqiLevel::VeryUnhealthy => "非常不健康 (Very Unhealthy)",
            AqiLevel::Hazardous => "危害 (Hazardous)",
        }
    }
}
