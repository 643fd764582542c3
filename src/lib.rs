// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! TownPass Tracker: ride telemetry engine for the city cycling companion
//!
//! This crate provides the session engine behind live ride tracking:
//! telemetry accumulation for in-progress rides, the summary produced when
//! a ride finishes, and geospatial resolution of rider positions against
//! the YouBike, air-quality, and weather reference feeds. The HTTP layer
//! and the production document store live in the embedding service; this
//! crate consumes the store through the [`store::RideStore`] seam.

pub mod config;
pub mod error;
pub mod geo;
pub mod models;
pub mod services;
pub mod store;
pub mod time_utils;

use config::Config;
use services::{RideHistoryService, SessionService};
use store::RideStore;

/// Engine facade bundling the services over one store handle.
pub struct Engine<S> {
    pub config: Config,
    pub sessions: SessionService<S>,
    pub rides: RideHistoryService<S>,
}

impl<S: RideStore + Clone> Engine<S> {
    pub fn new(config: Config, store: S) -> Self {
        Self {
            sessions: SessionService::new(store.clone()),
            rides: RideHistoryService::new(store, config.ride_page_size),
            config,
        }
    }
}
