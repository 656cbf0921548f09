//! API Handlers
//!
//! HTTP request handlers for each campus gate endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use tracing::debug;

use crate::cache::{LocationCache, FRESHNESS_WINDOW};
use crate::clock::Clock;
use crate::config::Config;
use crate::error::{GateError, Result};
use crate::geo::CampusGeofence;
use crate::models::{
    validate_key, EligibilityResponse, GeofenceCheckRequest, GeofenceCheckResponse,
    HealthResponse, LocationResponse, PutLocationRequest, PutLocationResponse, StatsResponse,
};

/// Application state shared across all handlers.
///
/// The single location cache for the process is created here and handed
/// to every handler; the cache does its own locking.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<LocationCache>,
    pub geofence: CampusGeofence,
}

impl AppState {
    /// Creates state around an existing cache, gating on the campus region.
    pub fn new(cache: LocationCache) -> Self {
        Self::with_geofence(cache, CampusGeofence::campus())
    }

    pub fn with_geofence(cache: LocationCache, geofence: CampusGeofence) -> Self {
        Self {
            cache: Arc::new(cache),
            geofence,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(LocationCache::with_capacity(config.cache_capacity))
    }
}

fn check_key(key: &str) -> Result<()> {
    match validate_key(key) {
        Some(msg) => Err(GateError::InvalidRequest(msg)),
        None => Ok(()),
    }
}

/// Caps a client-reported observation time at `now`.
///
/// Timestamps up to one freshness window ahead are clock skew and are
/// clamped; anything further ahead is rejected. A fix can then never be
/// served for longer than the window after it is recorded.
fn bound_observation(reported: DateTime<Utc>, now: DateTime<Utc>) -> Result<DateTime<Utc>> {
    if reported <= now {
        return Ok(reported);
    }
    let skew = reported - now;
    match skew.to_std() {
        Ok(ahead) if ahead <= FRESHNESS_WINDOW => Ok(now),
        _ => Err(GateError::InvalidTimestamp(format!(
            "observed_at {} is in the future",
            reported.to_rfc3339()
        ))),
    }
}

/// Handler for PUT /locations/:key
///
/// Records a location fix the caller just obtained from its provider.
pub async fn put_location_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(req): Json<PutLocationRequest>,
) -> Result<Json<PutLocationResponse>> {
    check_key(&key)?;
    let location = req.location()?;
    let now = state.cache.clock().now();
    let observed_at = match req.observed_at()? {
        Some(reported) => bound_observation(reported, now)?,
        None => now,
    };

    state.cache.put(key.clone(), location, observed_at);

    Ok(Json(PutLocationResponse::new(key, observed_at)))
}

/// Handler for GET /locations/:key
///
/// Returns the cached location while it is fresh, 404 otherwise.
pub async fn get_location_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<LocationResponse>> {
    check_key(&key)?;
    let cached = state
        .cache
        .get(&key)
        .ok_or_else(|| GateError::LocationUnavailable(key.clone()))?;

    let now = state.cache.clock().now();
    Ok(Json(LocationResponse::new(key, cached, now)))
}

/// Handler for GET /eligibility/:key
///
/// Answers whether `key` may perform campus-only actions right now.
/// Missing or stale locations are reported as not inside.
pub async fn eligibility_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<EligibilityResponse>> {
    check_key(&key)?;
    let cached = state.cache.get(&key);
    let location = cached.as_ref().map(|c| &c.location);
    let inside_campus = state.geofence.is_inside(location);

    debug!(
        key = %key,
        location_available = cached.is_some(),
        inside_campus,
        "eligibility checked"
    );

    Ok(Json(EligibilityResponse {
        key,
        location_available: cached.is_some(),
        inside_campus,
    }))
}

/// Handler for POST /geofence/check
pub async fn geofence_check_handler(
    State(state): State<AppState>,
    Json(req): Json<GeofenceCheckRequest>,
) -> Json<GeofenceCheckResponse> {
    let location = req.location();
    Json(GeofenceCheckResponse {
        inside: state.geofence.is_inside(location.as_ref()),
    })
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::new(
        state.cache.stats(),
        state.cache.capacity(),
    ))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
