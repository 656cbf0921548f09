//! Campus Geofence Module
//!
//! Axis-aligned bounding-box check that gates location-restricted actions.

use crate::geo::Location;

// == Campus Corners ==
/// First corner of the campus bounding box (latitude, longitude).
pub const CAMPUS_CORNER_A: (f64, f64) = (4.598, -74.069);

/// Opposite corner of the campus bounding box (latitude, longitude).
pub const CAMPUS_CORNER_B: (f64, f64) = (4.605, -74.062);

// == Campus Geofence ==
/// Rectangular region described by two opposite corners.
///
/// The corners may be given in any order; the bounds of each axis are
/// derived independently when checking a point. Not a true polygon: the
/// protected area is treated as a rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CampusGeofence {
    corner_a: (f64, f64),
    corner_b: (f64, f64),
}

impl CampusGeofence {
    // == Constructors ==
    /// Creates a geofence from two opposite `(latitude, longitude)` corners.
    pub fn new(corner_a: (f64, f64), corner_b: (f64, f64)) -> Self {
        Self { corner_a, corner_b }
    }

    /// The fixed campus region.
    pub fn campus() -> Self {
        Self::new(CAMPUS_CORNER_A, CAMPUS_CORNER_B)
    }

    // == Bounds ==
    /// Returns `(min, max)` latitude.
    pub fn latitude_bounds(&self) -> (f64, f64) {
        ordered(self.corner_a.0, self.corner_b.0)
    }

    /// Returns `(min, max)` longitude.
    pub fn longitude_bounds(&self) -> (f64, f64) {
        ordered(self.corner_a.1, self.corner_b.1)
    }

    // == Is Inside ==
    /// Returns true iff `location` lies within the closed bounding box.
    ///
    /// A missing location is never inside.
    pub fn is_inside(&self, location: Option<&Location>) -> bool {
        let Some(location) = location else {
            return false;
        };

        let (min_lat, max_lat) = self.latitude_bounds();
        let (min_lon, max_lon) = self.longitude_bounds();

        (min_lat..=max_lat).contains(&location.latitude)
            && (min_lon..=max_lon).contains(&location.longitude)
    }
}

impl Default for CampusGeofence {
    fn default() -> Self {
        Self::campus()
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
