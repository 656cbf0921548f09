//! API Module
//!
//! HTTP handlers and routing for the campus gate REST API.
//!
//! # Endpoints
//! - `PUT /locations/:key` - Record a location fix
//! - `GET /locations/:key` - Read a fresh cached location
//! - `GET /eligibility/:key` - Campus eligibility for a key
//! - `POST /geofence/check` - Check a coordinate against the campus
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
