// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod air_quality;
pub mod rides;
pub mod session;
pub mod stations;
pub mod weather;

pub use rides::RideHistoryService;
pub use session::SessionService;
pub use stations::{AvailabilityFilter, NearbyQuery};
pub use weather::CurrentConditions;
