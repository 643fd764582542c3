//! Lifetime ride aggregates, pre-computed so the stats endpoint never has
//! to scan a user's ride history.

use crate::models::ride::FinishedRide;
use serde::{Deserialize, Serialize};

/// Per-user aggregate counters.
///
/// Incremented atomically with each ride write; `distance` is meters,
/// `duration` seconds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserStats {
    #[serde(default)]
    pub total_rides: u64,
    #[serde(default)]
    pub total_distance: i64,
    #[serde(default)]
    pub total_duration: i64,
    #[serde(default)]
    pub total_calories: i64,
}

impl UserStats {
    /// Fold one finished ride into the aggregates.
    pub fn record_ride(&mut self, ride: &FinishedRide) {
        self.total_rides += 1;
        self.total_distance += ride.distance;
        self.total_duration += ride.duration;
        self.total_calories += ride.calories;
    }

    /// Mean distance per ride in meters (0 for a user with no rides).
    pub fn avg_distance(&self) -> f64 {
        self.total_distance as f64 / self.total_rides.max(1) as f64
    }

    /// Mean duration per ride in seconds (0 for a user with no rides).
    pub fn avg_duration(&self) -> f64 {
        self.total_duration as f64 / self.total_rides.max(1) as f64
    }

    /// Aggregates plus the derived averages, for the stats endpoint.
    pub fn view(&self) -> UserStatsView {
        UserStatsView {
            total_rides: self.total_rides,
            total_distance: self.total_distance,
            total_duration: self.total_duration,
            total_calories: self.total_calories,
            avg_distance: self.avg_distance(),
            avg_duration: self.avg_duration(),
        }
    }
}

/// Serialized stats response shape.
#[derive(Debug, Clone, Serialize)]
pub struct UserStatsView {
    pub total_rides: u64,
    pub total_distance: i64,
    pub total_duration: i64,
    pub total_calories: i64,
    pub avg_distance: f64,
    pub avg_duration: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::session::GeoPoint;
    use chrono::Utc;

    fn make_ride(distance: i64, duration: i64, calories: i64) -> FinishedRide {
        let now = Utc::now();
        FinishedRide {
            start_time: now,
            end_time: now,
            duration,
            distance,
            calories,
            avg_speed: 0.0,
            max_speed: 0.0,
            route: Vec::new(),
            start_location: GeoPoint::new(25.04, 121.51),
            end_location: GeoPoint::new(25.05, 121.52),
            carbon_saved: 0.0,
            start_station: None,
            weather: None,
        }
    }

    #[test]
    fn test_record_ride_sums_fields() {
        let mut stats = UserStats::default();
        stats.record_ride(&make_ride(5000, 1800, 120));
        stats.record_ride(&make_ride(3000, 900, 80));

        assert_eq!(stats.total_rides, 2);
        assert_eq!(stats.total_distance, 8000);
        assert_eq!(stats.total_duration, 2700);
        assert_eq!(stats.total_calories, 200);
    }

    #[test]
    fn test_averages() {
        let mut stats = UserStats::default();
        stats.record_ride(&make_ride(5000, 1800, 120));
        stats.record_ride(&make_ride(3000, 900, 80));

        assert_eq!(stats.avg_distance(), 4000.0);
        assert_eq!(stats.avg_duration(), 1350.0);
    }

    #[test]
    fn test_zero_rides_do_not_divide_by_zero() {
        let stats = UserStats::default();
        assert_eq!(stats.avg_distance(), 0.0);
        assert_eq!(stats.avg_duration(), 0.0);

        let view = stats.view();
        assert_eq!(view.total_rides, 0);
        assert_eq!(view.avg_duration, 0.0);
    }
}
