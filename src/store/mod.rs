//! Persistence seam for sessions, rides, and user aggregates.
//!
//! The engine never talks to a database directly; it consumes this trait.
//! Production deployments wire in their document-store client, while
//! [`MemoryStore`] serves tests and local development.

pub mod memory;

pub use memory::MemoryStore;

use crate::error::Result;
use crate::models::{FinishedRide, RideSession, StoredRide, UserProfile, UserStats};

/// Store contract for the ride engine.
///
/// Sessions are keyed by `ride_id`; that key's uniqueness is the only
/// concurrency guarantee the engine relies on. Implementations surface
/// connectivity failures as `StoreUnavailable` and write failures as
/// `Persistence`.
#[allow(async_fn_in_trait)]
pub trait RideStore {
    /// Create a session document. Fails if the `ride_id` already exists.
    async fn insert_session(&self, session: &RideSession) -> Result<()>;

    async fn get_session(&self, ride_id: &str) -> Result<Option<RideSession>>;

    /// Whole-document replace of an existing session.
    async fn put_session(&self, session: &RideSession) -> Result<()>;

    /// Returns whether a session was actually removed.
    async fn delete_session(&self, ride_id: &str) -> Result<bool>;

    /// All in-progress sessions, optionally filtered to one owner.
    async fn active_sessions(&self, user_id: Option<&str>) -> Result<Vec<RideSession>>;

    /// Fetch the user profile, creating a zeroed one on first contact.
    async fn get_or_create_user(&self, user_id: &str) -> Result<UserProfile>;

    /// Persist a finished ride and fold it into the owner's lifetime
    /// aggregates as one atomic step. Returns the stored ride's id.
    async fn append_ride(&self, user_id: &str, ride: &FinishedRide) -> Result<String>;

    /// Owner-scoped read: with `user_id` set, a ride owned by someone else
    /// reads as absent.
    async fn get_ride(&self, ride_id: &str, user_id: Option<&str>) -> Result<Option<StoredRide>>;

    /// Newest-first page of a user's ride history.
    async fn rides_for_user(
        &self,
        user_id: &str,
        limit: usize,
        skip: usize,
    ) -> Result<Vec<StoredRide>>;

    /// Owner-scoped delete; returns whether a ride was removed.
    async fn delete_ride(&self, ride_id: &str, user_id: &str) -> Result<bool>;

    /// Aggregates for a user, `None` if the profile does not exist yet.
    async fn user_stats(&self, user_id: &str) -> Result<Option<UserStats>>;
}
