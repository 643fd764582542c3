// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory store backed by DashMap.
//!
//! Mirrors the document layout of the production deployment: one map per
//! collection, sessions keyed by `ride_id`, rides by a generated id. Used
//! by the test suites and for local development without a database.

use crate::error::{AppError, Result};
use crate::models::{FinishedRide, RideSession, StoredRide, UserProfile, UserStats};
use crate::store::RideStore;
use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Shareable in-memory store handle.
///
/// Clones share state, like a database client handle would. An `offline()`
/// store has no state at all and fails every operation, for exercising
/// collaborator-failure paths.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Option<Arc<Collections>>,
}

#[derive(Default)]
struct Collections {
    sessions: DashMap<String, RideSession>,
    users: DashMap<String, UserProfile>,
    rides: DashMap<String, StoredRide>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Some(Arc::new(Collections::default())),
        }
    }

    /// A store that is unreachable: every operation returns
    /// `StoreUnavailable`.
    pub fn offline() -> Self {
        Self { inner: None }
    }

    fn collections(&self) -> Result<&Collections> {
        self.inner
            .as_deref()
            .ok_or_else(|| AppError::StoreUnavailable("store offline".to_string()))
    }
}

impl RideStore for MemoryStore {
    async fn insert_session(&self, session: &RideSession) -> Result<()> {
        let collections = self.collections()?;
        match collections.sessions.entry(session.ride_id.clone()) {
            Entry::Occupied(_) => Err(AppError::Persistence(format!(
                "session {} already exists",
                session.ride_id
            ))),
            Entry::Vacant(entry) => {
                entry.insert(session.clone());
                Ok(())
            }
        }
    }

    async fn get_session(&self, ride_id: &str) -> Result<Option<RideSession>> {
        let collections = self.collections()?;
        Ok(collections.sessions.get(ride_id).map(|s| s.clone()))
    }

    async fn put_session(&self, session: &RideSession) -> Result<()> {
        let collections = self.collections()?;
        collections
            .sessions
            .insert(session.ride_id.clone(), session.clone());
        Ok(())
    }

    async fn delete_session(&self, ride_id: &str) -> Result<bool> {
        let collections = self.collections()?;
        Ok(collections.sessions.remove(ride_id).is_some())
    }

    async fn active_sessions(&self, user_id: Option<&str>) -> Result<Vec<RideSession>> {
        let collections = self.collections()?;
        Ok(collections
            .sessions
            .iter()
            .filter(|entry| user_id.is_none_or(|uid| entry.user_id == uid))
            .map(|entry| entry.clone())
            .collect())
    }

    async fn get_or_create_user(&self, user_id: &str) -> Result<UserProfile> {
        let collections = self.collections()?;
        let profile = collections
            .users
            .entry(user_id.to_string())
            .or_insert_with(|| {
                tracing::info!(user_id, "Created new user profile");
                UserProfile::new(user_id, Utc::now())
            });
        Ok(profile.clone())
    }

    async fn append_ride(&self, user_id: &str, ride: &FinishedRide) -> Result<String> {
        let collections = self.collections()?;
        let now = Utc::now();

        // Hold the user entry across both writes so the ride insert and the
        // aggregate update land together, as the production transaction does.
        let mut profile = collections
            .users
            .entry(user_id.to_string())
            .or_insert_with(|| UserProfile::new(user_id, now));

        let ride_id = Uuid::new_v4().to_string();
        let stored = StoredRide {
            ride_id: ride_id.clone(),
            user_id: user_id.to_string(),
            created_at: now,
            ride: ride.clone(),
        };
        collections.rides.insert(ride_id.clone(), stored);
        profile.stats.record_ride(ride);

        Ok(ride_id)
    }

    async fn get_ride(&self, ride_id: &str, user_id: Option<&str>) -> Result<Option<StoredRide>> {
        let collections = self.collections()?;
        Ok(collections
            .rides
            .get(ride_id)
            .filter(|ride| user_id.is_none_or(|uid| ride.user_id == uid))
            .map(|ride| ride.clone()))
    }

    async fn rides_for_user(
        &self,
        user_id: &str,
        limit: usize,
        skip: usize,
    ) -> Result<Vec<StoredRide>> {
        let collections = self.collections()?;
        let mut rides: Vec<StoredRide> = collections
            .rides
            .iter()
            .filter(|ride| ride.user_id == user_id)
            .map(|ride| ride.clone())
            .collect();

        // Most recent first
        rides.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(rides.into_iter().skip(skip).take(limit).collect())
    }

    async fn delete_ride(&self, ride_id: &str, user_id: &str) -> Result<bool> {
        let collections = self.collections()?;
        Ok(collections
            .rides
            .remove_if(ride_id, |_, ride| ride.user_id == user_id)
            .is_some())
    }

    async fn user_stats(&self, user_id: &str) -> Result<Option<UserStats>> {
        let collections = self.collections()?;
        Ok(collections
            .users
            .get(user_id)
            .map(|profile| profile.stats.clone()))
    }
}
