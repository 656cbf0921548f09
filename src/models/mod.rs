//! Request and Response models for the campus gate API
//!
//! DTOs used for serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

pub use requests::{validate_key, GeofenceCheckRequest, PutLocationRequest, MAX_KEY_LENGTH};
pub use responses::{
    EligibilityResponse, ErrorResponse, GeofenceCheckResponse, HealthResponse, LocationResponse,
    PutLocationResponse, StatsResponse,
};
