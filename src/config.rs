//! Engine configuration loaded from environment variables.
//!
//! Every knob has a default, so the engine works with an empty environment;
//! deployments override via env vars or a `.env` file.

use std::env;
use std::str::FromStr;

/// Engine configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default search radius for nearby-station queries (meters)
    pub station_radius_m: f64,
    /// Default result cap for nearby-station queries
    pub station_limit: usize,
    /// Default minimum rentable bikes for availability-filtered queries
    pub min_available_bikes: u32,
    /// Page size for ride-history listings
    pub ride_page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            station_radius_m: 1000.0,
            station_limit: 10,
            min_available_bikes: 1,
            ride_page_size: 50,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Reads a `.env` file if present. Unset variables fall back to the
    /// defaults above; set-but-unparseable values are an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = Self::default();
        Ok(Self {
            station_radius_m: parse_var("TOWNPASS_STATION_RADIUS_M")?
                .unwrap_or(defaults.station_radius_m),
            station_limit: parse_var("TOWNPASS_STATION_LIMIT")?.unwrap_or(defaults.station_limit),
            min_available_bikes: parse_var("TOWNPASS_MIN_AVAILABLE_BIKES")?
                .unwrap_or(defaults.min_available_bikes),
            ride_page_size: parse_var("TOWNPASS_RIDE_PAGE_SIZE")?
                .unwrap_or(defaults.ride_page_size),
        })
    }
}

/// Read and parse an optional environment variable.
fn parse_var<T: FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(name, raw)),
        Err(_) => Ok(None),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so concurrent test threads never race on process env vars
    #[test]
    fn test_config_from_env() {
        env::remove_var("TOWNPASS_STATION_RADIUS_M");
        env::remove_var("TOWNPASS_STATION_LIMIT");

        let config = Config::from_env().expect("Config should load");
        assert_eq!(config.station_radius_m, 1000.0);
        assert_eq!(config.station_limit, 10);
        assert_eq!(config.min_available_bikes, 1);
        assert_eq!(config.ride_page_size, 50);

        env::set_var("TOWNPASS_STATION_LIMIT", "25");
        let config = Config::from_env().expect("Config should load");
        assert_eq!(config.station_limit, 25);
        env::remove_var("TOWNPASS_STATION_LIMIT");

        env::set_var("TOWNPASS_STATION_RADIUS_M", "not-a-number");
        let result = Config::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::Invalid("TOWNPASS_STATION_RADIUS_M", _))
        ));
        env::remove_var("TOWNPASS_STATION_RADIUS_M");
    }
}
