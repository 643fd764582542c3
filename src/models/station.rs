// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! YouBike 2.0 station records, as parsed from the Taipei open-data feed.

use crate::geo::Located;
use crate::models::de::lenient_f64;
use crate::models::session::GeoPoint;
use serde::{Deserialize, Serialize};

/// Station names in the feed carry this prefix; displays strip it.
const STATION_NAME_PREFIX: &str = "YouBike2.0_";

/// One station row from the availability feed.
///
/// The feed is loosely typed: coordinates arrive as numbers or strings
/// depending on the publishing batch, and the active flag is the string
/// `"1"`/`"0"`. Coordinates that fail coercion deserialize to `None` and
/// the record is treated as degenerate by the geo scans.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    /// Station ID
    pub sno: String,
    /// Station name (Chinese, prefixed)
    pub sna: String,
    /// Station name (English)
    #[serde(default)]
    pub snaen: String,
    /// District (Chinese)
    #[serde(default)]
    pub sarea: String,
    /// District (English)
    #[serde(default)]
    pub sareaen: String,
    /// Street address
    #[serde(default)]
    pub ar: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub available_rent_bikes: u32,
    #[serde(default)]
    pub available_return_bikes: u32,
    /// `"1"` when the station is in service
    #[serde(default)]
    pub act: String,
    #[serde(default, rename = "updateTime")]
    pub update_time: String,
}

impl Station {
    /// Station name with the `YouBike2.0_` feed prefix stripped.
    pub fn display_name(&self) -> &str {
        self.sna
            .strip_prefix(STATION_NAME_PREFIX)
            .unwrap_or(&self.sna)
    }

    pub fn is_active(&self) -> bool {
        self.act == "1"
    }

    /// Marker color reflecting availability: red when no docks are free,
    /// yellow when no bikes are rentable, green otherwise.
    pub fn availability_color(&self) -> StationColor {
        if self.available_return_bikes == 0 {
            StationColor::Red
        } else if self.available_rent_bikes == 0 {
            StationColor::Yellow
        } else {
            StationColor::Green
        }
    }
}

impl Located for Station {
    fn location(&self) -> Option<GeoPoint> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) if !(lat == 0.0 && lng == 0.0) => Some(GeoPoint::new(lat, lng)),
            _ => None,
        }
    }
}

/// Marker color for the map frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StationColor {
    Green,
    Yellow,
    Red,
}

/// A station paired with its distance from the query point (meters,
/// rounded to 2 decimals).
#[derive(Debug, Clone, Serialize)]
pub struct NearbyStation {
    #[serde(flatten)]
    pub station: Station,
    pub distance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn station_json() -> serde_json::Value {
        json!({
            "sno": "500101001",
            "sna": "YouBike2.0_捷運科技大樓站",
            "snaen": "YouBike2.0_MRT Technology Bldg. Sta.",
            "sarea": "大安區",
            "sareaen": "Daan Dist.",
            "ar": "復興南路二段235號前",
            "latitude": 25.02605,
            "longitude": 121.5436,
            "available_rent_bikes": 6,
            "available_return_bikes": 22,
            "act": "1",
            "updateTime": "2026-08-06 17:10:05"
        })
    }

    #[test]
    fn test_deserializes_feed_row() {
        let station: Station = serde_json::from_value(station_json()).unwrap();
        assert_eq!(station.sno, "500101001");
        assert_eq!(station.available_rent_bikes, 6);
        assert!(station.is_active());
        assert_eq!(station.update_time, "2026-08-06 17:10:05");
    }

    #[test]
    fn test_coordinates_accept_strings() {
        let mut row = station_json();
        row["latitude"] = json!("25.02605");
        row["longitude"] = json!("121.5436");

        let station: Station = serde_json::from_value(row).unwrap();
        let loc = station.location().expect("should have a location");
        assert_eq!(loc.lat, 25.02605);
    }

    #[test]
    fn test_unparseable_coordinate_is_degenerate_not_an_error() {
        let mut row = station_json();
        row["latitude"] = json!("unknown");

        let station: Station = serde_json::from_value(row).unwrap();
        assert!(station.latitude.is_none());
        assert!(station.location().is_none());
    }

    #[test]
    fn test_zero_zero_sentinel_is_degenerate() {
        let mut row = station_json();
        row["latitude"] = json!(0.0);
        row["longitude"] = json!(0.0);

        let station: Station = serde_json::from_value(row).unwrap();
        assert!(station.location().is_none());
    }

    #[test]
    fn test_display_name_strips_prefix() {
        let station: Station = serde_json::from_value(station_json()).unwrap();
        assert_eq!(station.display_name(), "捷運科技大樓站");
    }

    #[test]
    fn test_availability_color() {
        let mut station: Station = serde_json::from_value(station_json()).unwrap();
        assert_eq!(station.availability_color(), StationColor::Green);

        station.available_rent_bikes = 0;
        assert_eq!(station.availability_color(), StationColor::Yellow);

        // No free docks wins over no bikes
        station.available_return_bikes = 0;
        assert_eq!(station.availability_color(), StationColor::Red);
    }
}
