//! API Routes
//!
//! Configures the Axum router with all campus gate endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    eligibility_handler, geofence_check_handler, get_location_handler, health_handler,
    put_location_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `PUT /locations/:key` - Record a freshly fetched location
/// - `GET /locations/:key` - Read a fresh cached location
/// - `GET /eligibility/:key` - Is the key's location inside the campus?
/// - `POST /geofence/check` - Check an arbitrary coordinate
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/locations/:key",
            get(get_location_handler).put(put_location_handler),
        )
        .route("/eligibility/:key", get(eligibility_handler))
        .route("/geofence/check", post(geofence_check_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
