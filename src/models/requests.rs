//! Request DTOs for the campus gate API
//!
//! Defines the structure of incoming HTTP request bodies.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::{GateError, Result};
use crate::geo::Location;
use crate::timestamp::parse_observed_at;

/// Maximum accepted key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Checks a cache key taken from the URL path.
pub fn validate_key(key: &str) -> Option<String> {
    if key.is_empty() {
        return Some("Key cannot be empty".to_string());
    }
    if key.len() > MAX_KEY_LENGTH {
        return Some(format!(
            "Key exceeds maximum length of {} bytes",
            MAX_KEY_LENGTH
        ));
    }
    None
}

/// Request body for PUT /locations/:key
///
/// A location fix the caller just obtained from the device provider.
#[derive(Debug, Clone, Deserialize)]
pub struct PutLocationRequest {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub accuracy_m: Option<f64>,
    #[serde(default)]
    pub provider: Option<String>,
    /// When the fix was taken; defaults to the time of the request
    #[serde(default)]
    pub observed_at: Option<String>,
}

impl PutLocationRequest {
    /// Builds the location carried by this request, rejecting bad coordinates.
    pub fn location(&self) -> Result<Location> {
        let location = Location {
            latitude: self.latitude,
            longitude: self.longitude,
            accuracy_m: self.accuracy_m,
            provider: self.provider.clone(),
        };
        match location.validate() {
            Some(msg) => Err(GateError::InvalidRequest(msg)),
            None => Ok(location),
        }
    }

    /// Parses `observed_at`, if present.
    pub fn observed_at(&self) -> Result<Option<DateTime<Utc>>> {
        self.observed_at
            .as_deref()
            .map(parse_observed_at)
            .transpose()
    }
}

/// Request body for POST /geofence/check
///
/// Either coordinate may be missing, which means "no location available".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeofenceCheckRequest {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl GeofenceCheckRequest {
    /// The location to check, or `None` unless both coordinates are present.
    pub fn location(&self) -> Option<Location> {
        Some(Location::new(self.latitude?, self.longitude?))
    }
}
