//! User profile model for storage.

use crate::models::stats::UserStats;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rider profile document, created lazily on first contact.
///
/// The lifetime aggregates live on the same document so a ride write can
/// update both in one atomic store operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub preferences: UserPreferences,
    #[serde(flatten)]
    pub stats: UserStats,
}

impl UserProfile {
    pub fn new(user_id: &str, now: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.to_string(),
            created_at: now,
            preferences: UserPreferences::default(),
            stats: UserStats::default(),
        }
    }
}

/// Client display preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreferences {
    pub units: String,
    pub theme: String,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            units: "metric".to_string(),
            theme: "light".to_string(),
        }
    }
}
