//! Response DTOs for the campus gate API
//!
//! Defines the structure of outgoing HTTP response bodies.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cache::{CacheStats, CachedLocation};
use crate::geo::Location;

/// Response body for GET /locations/:key
#[derive(Debug, Clone, Serialize)]
pub struct LocationResponse {
    pub key: String,
    pub location: Location,
    pub observed_at: DateTime<Utc>,
    /// Milliseconds since observation at the time of the read
    pub age_ms: u64,
}

impl LocationResponse {
    pub fn new(key: impl Into<String>, cached: CachedLocation, now: DateTime<Utc>) -> Self {
        let age_ms = cached
            .age(now)
            .map(|age| u64::try_from(age.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or(0);
        Self {
            key: key.into(),
            location: cached.location,
            observed_at: cached.observed_at,
            age_ms,
        }
    }
}

/// Response body for PUT /locations/:key
#[derive(Debug, Clone, Serialize)]
pub struct PutLocationResponse {
    pub message: String,
    pub key: String,
    pub observed_at: DateTime<Utc>,
}

impl PutLocationResponse {
    pub fn new(key: impl Into<String>, observed_at: DateTime<Utc>) -> Self {
        let key = key.into();
        Self {
            message: format!("Location for '{}' recorded", key),
            key,
            observed_at,
        }
    }
}

/// Response body for GET /eligibility/:key
///
/// Always returned with 200; an unknown or stale location is simply
/// not inside the campus.
#[derive(Debug, Clone, Serialize)]
pub struct EligibilityResponse {
    pub key: String,
    pub location_available: bool,
    pub inside_campus: bool,
}

/// Response body for POST /geofence/check
#[derive(Debug, Clone, Serialize)]
pub struct GeofenceCheckResponse {
    pub inside: bool,
}

/// Response body for GET /stats
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub stale_evictions: u64,
    pub capacity_evictions: u64,
    pub total_entries: usize,
    pub capacity: usize,
    pub hit_rate: f64,
}

impl StatsResponse {
    pub fn new(stats: CacheStats, capacity: usize) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            stale_evictions: stats.stale_evictions,
            capacity_evictions: stats.capacity_evictions,
            total_entries: stats.total_entries,
            capacity,
        }
    }
}

/// Response body for GET /health
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
