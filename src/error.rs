//! Error types for the campus gate service
//!
//! The cache and geofence never fail: absence is `None` / `false`. These
//! errors cover request validation and the HTTP surface.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Gate Error Enum ==
#[derive(Error, Debug)]
pub enum GateError {
    /// No fresh location is cached for the key
    #[error("No fresh location for key: {0}")]
    LocationUnavailable(String),

    /// Malformed request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Observation timestamp could not be parsed
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for GateError {
    fn into_response(self) -> Response {
        let status = match &self {
            GateError::LocationUnavailable(_) => StatusCode::NOT_FOUND,
            GateError::InvalidRequest(_) | GateError::InvalidTimestamp(_) => {
                StatusCode::BAD_REQUEST
            }
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
pub type Result<T> = std::result::Result<T, GateError>;
