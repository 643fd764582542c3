// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weather-forecast district records from the CWA 36-hour forecast feed.

use crate::geo::{round_to, Located};
use crate::models::de::lenient_f64;
use crate::models::session::GeoPoint;
use crate::time_utils::parse_forecast_time;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Forecast periods starting inside this window (hours relative to "now")
/// count toward the short-term rain probability. The lower bound keeps the
/// period that is currently in effect, whose start time is in the past.
const RAIN_WINDOW_HOURS: (f64, f64) = (-12.0, 3.0);

/// One forecast time slice for a district.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastPeriod {
    /// `YYYY-MM-DD HH:MM:SS`, local civil time
    pub start_time: String,
    pub end_time: String,
    /// Wx element: weather condition description
    #[serde(default)]
    pub condition: Option<String>,
    /// PoP element: precipitation probability in percent
    #[serde(default)]
    pub rain_probability: Option<i32>,
    /// MinT element, degrees Celsius as published
    #[serde(default)]
    pub min_temperature: Option<String>,
    /// MaxT element
    #[serde(default)]
    pub max_temperature: Option<String>,
    /// CI element: comfort index description
    #[serde(default)]
    pub comfort_index: Option<String>,
}

/// Parsed forecast for one administrative district, located at its centroid
/// so rider coordinates can be resolved to the covering forecast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistrictForecast {
    pub name: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub periods: Vec<ForecastPeriod>,
}

impl DistrictForecast {
    /// Estimated current temperature: mean of the current period's min and
    /// max, rounded to 1 decimal. `None` when either bound is missing or
    /// non-numeric.
    pub fn current_temperature(&self) -> Option<f64> {
        let period = self.periods.first()?;
        let min: f64 = period.min_temperature.as_deref()?.trim().parse().ok()?;
        let max: f64 = period.max_temperature.as_deref()?.trim().parse().ok()?;
        Some(round_to((min + max) / 2.0, 1))
    }

    /// Mean precipitation probability over the periods starting within the
    /// short-term window around `now`, rounded to 1 decimal. Periods with
    /// unparseable start times are skipped; no qualifying periods yield 0.
    pub fn rain_probability_next_3h(&self, now: NaiveDateTime) -> f64 {
        let pops: Vec<f64> = self
            .periods
            .iter()
            .filter_map(|period| {
                let start = parse_forecast_time(&period.start_time)?;
                let diff_hours = (start - now).num_seconds() as f64 / 3600.0;
                if (RAIN_WINDOW_HOURS.0..=RAIN_WINDOW_HOURS.1).contains(&diff_hours) {
                    Some(f64::from(period.rain_probability.unwrap_or(0)))
                } else {
                    None
                }
            })
            .collect();

        if pops.is_empty() {
            return 0.0;
        }
        round_to(pops.iter().sum::<f64>() / pops.len() as f64, 1)
    }

    /// The forecast period currently in effect (the feed orders them).
    pub fn current_period(&self) -> Option<&ForecastPeriod> {
        self.periods.first()
    }
}

impl Located for DistrictForecast {
    fn location(&self) -> Option<GeoPoint> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) if !(lat == 0.0 && lng == 0.0) => Some(GeoPoint::new(lat, lng)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(start: &str, pop: i32) -> ForecastPeriod {
        ForecastPeriod {
            start_time: start.to_string(),
            end_time: String::new(),
            condition: Some("多雲時晴".to_string()),
            rain_probability: Some(pop),
            min_temperature: Some("26".to_string()),
            max_temperature: Some("33".to_string()),
            comfort_index: Some("悶熱".to_string()),
        }
    }

    fn district(periods: Vec<ForecastPeriod>) -> DistrictForecast {
        DistrictForecast {
            name: "臺北市".to_string(),
            latitude: Some(25.0375),
            longitude: Some(121.5637),
            periods,
        }
    }

    fn now() -> NaiveDateTime {
        parse_forecast_time("2026-08-06 12:00:00").unwrap()
    }

    #[test]
    fn test_current_temperature_is_mean_of_bounds() {
        let forecast = district(vec![period("2026-08-06 12:00:00", 30)]);
        assert_eq!(forecast.current_temperature(), Some(29.5));
    }

    #[test]
    fn test_current_temperature_missing_bound() {
        let mut p = period("2026-08-06 12:00:00", 30);
        p.max_temperature = None;
        let forecast = district(vec![p]);
        assert_eq!(forecast.current_temperature(), None);
    }

    #[test]
    fn test_rain_probability_averages_window() {
        let forecast = district(vec![
            period("2026-08-06 06:00:00", 20), // in effect, -6 h
            period("2026-08-06 14:00:00", 40), // +2 h
            period("2026-08-06 18:00:00", 90), // +6 h, outside window
        ]);
        assert_eq!(forecast.rain_probability_next_3h(now()), 30.0);
    }

    #[test]
    fn test_rain_probability_empty_periods() {
        let forecast = district(vec![]);
        assert_eq!(forecast.rain_probability_next_3h(now()), 0.0);
    }

    #[test]
    fn test_rain_probability_skips_unparseable_start() {
        let forecast = district(vec![period("whenever", 80), period("2026-08-06 13:00:00", 10)]);
        assert_eq!(forecast.rain_probability_next_3h(now()), 10.0);
    }
}
