//! Geo Module
//!
//! Location values and the campus geofence check.

mod geofence;
mod location;

pub use geofence::{CampusGeofence, CAMPUS_CORNER_A, CAMPUS_CORNER_B};
pub use location::Location;
