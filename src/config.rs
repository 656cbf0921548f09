//! Configuration Module
//!
//! Loads service settings from environment variables. The freshness window
//! and campus region are fixed constants and not configurable here.

use std::env;

use crate::cache::DEFAULT_CAPACITY;

/// Service configuration parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Maximum number of keys the location cache holds
    pub cache_capacity: usize,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `LOCATION_CACHE_CAPACITY` - Location cache capacity (default: 10)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    ///
    /// Unparseable or zero values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            cache_capacity: lookup("LOCATION_CACHE_CAPACITY")
                .and_then(|v| v.parse().ok())
                .filter(|&n: &usize| n > 0)
                .unwrap_or(defaults.cache_capacity),
            server_port: lookup("SERVER_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CAPACITY,
            server_port: 3000,
        }
    }
}
