//! Campus Gate - location-gated eligibility for favor marketplace actions
//!
//! Combines a freshness-windowed last-known-location cache with a campus
//! bounding-box geofence, and exposes both over a small HTTP API.

pub mod api;
pub mod cache;
pub mod clock;
pub mod config;
pub mod error;
pub mod geo;
pub mod models;
pub mod timestamp;

pub use api::AppState;
pub use cache::{CachedLocation, LocationCache};
pub use config::Config;
pub use geo::{CampusGeofence, Location};
