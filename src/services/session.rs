// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Ride session engine: lifecycle, telemetry accumulation, and the
//! summary that closes a session into a durable ride.
//!
//! Every operation re-reads the persisted session, mutates it, and writes
//! it back before returning. There is no per-ride locking: concurrent
//! updates against the same `ride_id` race and the last write wins, which
//! replace semantics make safe for callers that submit running totals.

use crate::error::{AppError, Result};
use crate::models::session::metric_f64;
use crate::models::{
    FinishedRide, GeoPoint, RideSession, RideSummary, RideTotals, RoutePoint, SessionStatus,
    TelemetryUpdate, UpdatedFields, WeatherContext,
};
use crate::store::RideStore;
use chrono::Utc;
use uuid::Uuid;

/// Session lifecycle and telemetry engine over one store handle.
#[derive(Clone)]
pub struct SessionService<S> {
    store: S,
}

impl<S: RideStore> SessionService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Start a new ride session.
    ///
    /// `user_id` must be non-blank and `start_location` a usable
    /// coordinate. The session clock, not the client, stamps `start_time`.
    pub async fn create_session(
        &self,
        user_id: &str,
        start_location: GeoPoint,
    ) -> Result<RideSession> {
        if user_id.trim().is_empty() {
            return Err(AppError::Validation("user_id is required".to_string()));
        }
        if !start_location.is_valid() {
            return Err(AppError::Validation(
                "start_location must be a valid coordinate".to_string(),
            ));
        }

        self.store.get_or_create_user(user_id).await?;

        let session = RideSession::new(
            Uuid::new_v4().to_string(),
            user_id,
            start_location,
            Utc::now(),
        );
        self.store.insert_session(&session).await?;

        tracing::info!(ride_id = %session.ride_id, user_id, "Ride session started");
        Ok(session)
    }

    /// Apply one telemetry update to an in-progress session.
    ///
    /// Only fields present in the update are touched. All supplied numeric
    /// fields are coerced before anything is applied, so a single bad value
    /// rejects the whole update with `InvalidMetric` and the session is
    /// left exactly as it was.
    pub async fn update_session(
        &self,
        ride_id: &str,
        update: &TelemetryUpdate,
    ) -> Result<UpdatedFields> {
        let mut session = self.load_session(ride_id).await?;

        let distance = coerce("distance", &update.distance)?;
        let speed = coerce("speed", &update.speed)?;
        let calories = coerce("calories", &update.calories)?;
        let paused_time = coerce("paused_time", &update.paused_time)?;
        let elevation = coerce("elevation", &update.elevation)?;

        let mut applied = UpdatedFields::default();

        if let Some(distance) = distance {
            session.distance = distance;
            applied.distance = Some(distance);
        }

        if let Some(speed) = speed {
            session.max_speed = session.max_speed.max(speed);
            applied.current_speed = Some(speed);
            applied.max_speed = Some(session.max_speed);
        }

        if let Some(calories) = calories {
            session.calories = calories;
            applied.calories = Some(calories);
        }

        if let Some(paused_time) = paused_time {
            session.paused_time = paused_time;
            applied.paused_time = Some(paused_time);
        }

        if let Some(elevation) = elevation {
            session.elevation_profile.push(elevation);
            applied.elevation_added = true;
        }

        if let Some(location) = update.current_location {
            session.current_location = Some(location);
            session.route.push(RoutePoint {
                lat: location.lat,
                lng: location.lng,
                timestamp: Utc::now(),
            });
            applied.current_location = Some(location);
            applied.route_point_added = true;
        }

        self.store.put_session(&session).await?;
        tracing::debug!(ride_id, "Telemetry applied");

        Ok(applied)
    }

    /// Pause an in-progress session. Accumulated metrics are untouched;
    /// pausing an already-paused session just re-asserts the status.
    pub async fn pause_session(&self, ride_id: &str) -> Result<()> {
        self.set_status(ride_id, SessionStatus::Paused).await
    }

    /// Resume a paused session. Idempotent like pause.
    pub async fn resume_session(&self, ride_id: &str) -> Result<()> {
        self.set_status(ride_id, SessionStatus::Active).await
    }

    /// Close a session: derive the final metrics, persist the ride, delete
    /// the session, and return the display summary.
    ///
    /// The ride write and the aggregate update happen before the session
    /// delete; on a persistence failure the session survives, so the
    /// caller can retry the finish without losing the ride.
    pub async fn finish_session(
        &self,
        ride_id: &str,
        end_location: GeoPoint,
        weather: Option<WeatherContext>,
    ) -> Result<RideSummary> {
        if !end_location.is_valid() {
            return Err(AppError::Validation(
                "end_location must be a valid coordinate".to_string(),
            ));
        }

        let session = self.load_session(ride_id).await?;

        let totals = RideTotals::compute(
            session.start_time,
            Utc::now(),
            session.paused_time,
            session.distance,
        );
        let ride = FinishedRide::from_session(&session, &totals, end_location, weather);

        self.store.append_ride(&session.user_id, &ride).await?;

        // The ride is durable from here on; a failed session delete must
        // not fail the finish, since retrying would double-write the ride.
        if let Err(err) = self.store.delete_session(ride_id).await {
            tracing::warn!(ride_id, error = %err, "Failed to delete session after finish");
        }

        let summary = RideSummary::from_totals(&totals, session.max_speed, session.calories);
        tracing::info!(
            ride_id,
            user_id = %session.user_id,
            distance_km = summary.distance_km,
            duration_minutes = summary.duration_minutes,
            "Ride finished"
        );

        Ok(summary)
    }

    /// All in-progress sessions, optionally filtered to one user.
    pub async fn active_sessions(&self, user_id: Option<&str>) -> Result<Vec<RideSession>> {
        self.store.active_sessions(user_id).await
    }

    /// The user's currently active (not paused) session, if any.
    pub async fn active_session_for_user(&self, user_id: &str) -> Result<Option<RideSession>> {
        let sessions = self.store.active_sessions(Some(user_id)).await?;
        Ok(sessions
            .into_iter()
            .find(|s| s.status == SessionStatus::Active))
    }

    async fn load_session(&self, ride_id: &str) -> Result<RideSession> {
        self.store
            .get_session(ride_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("ride session {ride_id}")))
    }

    async fn set_status(&self, ride_id: &str, status: SessionStatus) -> Result<()> {
        let mut session = self.load_session(ride_id).await?;
        session.status = status;
        self.store.put_session(&session).await?;

        tracing::info!(ride_id, ?status, "Session status changed");
        Ok(())
    }
}

/// Coerce an optional telemetry field, failing the update on a bad value.
fn coerce(field: &'static str, value: &Option<serde_json::Value>) -> Result<Option<f64>> {
    value.as_ref().map(|v| metric_f64(field, v)).transpose()
}
