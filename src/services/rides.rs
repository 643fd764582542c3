// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Ride history: pass-through over the store for completed rides and the
//! per-user aggregate stats.

use crate::error::{AppError, Result};
use crate::models::{FinishedRide, StoredRide, UserStatsView};
use crate::store::RideStore;

/// Completed-ride queries and manual saves over one store handle.
#[derive(Clone)]
pub struct RideHistoryService<S> {
    store: S,
    page_size: usize,
}

impl<S: RideStore> RideHistoryService<S> {
    pub fn new(store: S, page_size: usize) -> Self {
        Self { store, page_size }
    }

    /// Save an externally-assembled completed ride (a client sync, not a
    /// live session finish). Ensures the user profile exists first; the
    /// aggregate update rides along atomically with the write.
    pub async fn save_ride(&self, user_id: &str, ride: &FinishedRide) -> Result<String> {
        if user_id.trim().is_empty() {
            return Err(AppError::Validation("user_id is required".to_string()));
        }

        self.store.get_or_create_user(user_id).await?;
        let ride_id = self.store.append_ride(user_id, ride).await?;

        tracing::info!(ride_id = %ride_id, user_id, "Ride saved");
        Ok(ride_id)
    }

    /// Newest-first page of the user's ride history. `limit: None` uses
    /// the configured page size.
    pub async fn rides_for_user(
        &self,
        user_id: &str,
        limit: Option<usize>,
        skip: usize,
    ) -> Result<Vec<StoredRide>> {
        self.store
            .rides_for_user(user_id, limit.unwrap_or(self.page_size), skip)
            .await
    }

    /// Fetch one ride; with `user_id` set the lookup is owner-scoped.
    pub async fn ride(&self, ride_id: &str, user_id: Option<&str>) -> Result<StoredRide> {
        self.store
            .get_ride(ride_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("ride {ride_id}")))
    }

    /// Delete a ride on behalf of its owner. A missing ride and a ride
    /// owned by someone else are indistinguishable to the caller.
    pub async fn delete_ride(&self, ride_id: &str, user_id: &str) -> Result<()> {
        if self.store.delete_ride(ride_id, user_id).await? {
            tracing::info!(ride_id, user_id, "Ride deleted");
            Ok(())
        } else {
            Err(AppError::NotFound(format!("ride {ride_id}")))
        }
    }

    /// Lifetime aggregates plus derived averages. Creates the profile on
    /// first contact, so an unknown user reads as zeroed stats.
    pub async fn stats_for_user(&self, user_id: &str) -> Result<UserStatsView> {
        let profile = self.store.get_or_create_user(user_id).await?;
        Ok(profile.stats.view())
    }
}
