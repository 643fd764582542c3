// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use townpass_tracker::config::Config;
use townpass_tracker::error::{AppError, Result};
use townpass_tracker::models::{
    FinishedRide, GeoPoint, RideSession, StoredRide, TelemetryUpdate, UserProfile, UserStats,
};
use townpass_tracker::store::{MemoryStore, RideStore};
use townpass_tracker::Engine;

/// Engine over a fresh in-memory store with default configuration.
#[allow(dead_code)]
pub fn test_engine() -> Engine<MemoryStore> {
    Engine::new(Config::default(), MemoryStore::new())
}

/// A plausible rider position (Taipei Main Station).
#[allow(dead_code)]
pub fn start_point() -> GeoPoint {
    GeoPoint::new(25.0478, 121.5170)
}

#[allow(dead_code)]
pub fn end_point() -> GeoPoint {
    GeoPoint::new(25.0340, 121.5645)
}

/// Build a telemetry update from its wire shape.
#[allow(dead_code)]
pub fn telemetry(value: serde_json::Value) -> TelemetryUpdate {
    serde_json::from_value(value).expect("telemetry fixture should deserialize")
}

/// A completed-ride fixture for manual-save tests.
#[allow(dead_code)]
pub fn finished_ride(distance: i64, duration: i64, calories: i64) -> FinishedRide {
    let now = chrono::Utc::now();
    FinishedRide {
        start_time: now,
        end_time: now,
        duration,
        distance,
        calories,
        avg_speed: 18.5,
        max_speed: 31.2,
        route: Vec::new(),
        start_location: start_point(),
        end_location: end_point(),
        carbon_saved: distance as f64 / 1000.0 * 0.12,
        start_station: None,
        weather: None,
    }
}

/// Store wrapper that fails every ride write while leaving session
/// operations intact, for exercising finish-persistence failures.
#[allow(dead_code)]
#[derive(Clone)]
pub struct FailingRideWrites {
    pub inner: MemoryStore,
}

impl RideStore for FailingRideWrites {
    async fn insert_session(&self, session: &RideSession) -> Result<()> {
        self.inner.insert_session(session).await
    }

    async fn get_session(&self, ride_id: &str) -> Result<Option<RideSession>> {
        self.inner.get_session(ride_id).await
    }

    async fn put_session(&self, session: &RideSession) -> Result<()> {
        self.inner.put_session(session).await
    }

    async fn delete_session(&self, ride_id: &str) -> Result<bool> {
        self.inner.delete_session(ride_id).await
    }

    async fn active_sessions(&self, user_id: Option<&str>) -> Result<Vec<RideSession>> {
        self.inner.active_sessions(user_id).await
    }

    async fn get_or_create_user(&self, user_id: &str) -> Result<UserProfile> {
        self.inner.get_or_create_user(user_id).await
    }

    async fn append_ride(&self, _user_id: &str, _ride: &FinishedRide) -> Result<String> {
        Err(AppError::Persistence("ride write failed".to_string()))
    }

    async fn get_ride(&self, ride_id: &str, user_id: Option<&str>) -> Result<Option<StoredRide>> {
        self.inner.get_ride(ride_id, user_id).await
    }

    async fn rides_for_user(
        &self,
        user_id: &str,
        limit: usize,
        skip: usize,
    ) -> Result<Vec<StoredRide>> {
        self.inner.rides_for_user(user_id, limit, skip).await
    }

    async fn delete_ride(&self, ride_id: &str, user_id: &str) -> Result<bool> {
        self.inner.delete_ride(ride_id, user_id).await
    }

    async fn user_stats(&self, user_id: &str) -> Result<Option<UserStats>> {
        self.inner.user_stats(user_id).await
    }
}
