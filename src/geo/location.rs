//! Location Module
//!
//! Coordinate value produced by the device location provider.

use serde::{Deserialize, Serialize};

// == Location ==
/// A latitude/longitude fix in decimal degrees.
///
/// `accuracy_m` and `provider` are provider metadata carried along untouched;
/// neither the cache nor the geofence looks at them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

impl Location {
    /// Creates a location without provider metadata.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            accuracy_m: None,
            provider: None,
        }
    }

    /// Attaches the reported horizontal accuracy in meters.
    pub fn with_accuracy(mut self, accuracy_m: f64) -> Self {
        self.accuracy_m = Some(accuracy_m);
        self
    }

    /// Attaches the name of the provider that produced the fix.
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    // == Validation ==
    /// Returns an error message if the coordinates are outside the WGS84 ranges.
    pub fn validate(&self) -> Option<String> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Some(format!(
                "Latitude {} must be within [-90, 90]",
                self.latitude
            ));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Some(format!(
                "Longitude {} must be within [-180, 180]",
                self.longitude
            ));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_builder() {
        let loc = Location::new(4.6, -74.06)
            .with_accuracy(12.5)
            .with_provider("gps");

        assert_eq!(loc.latitude, 4.6);
        assert_eq!(loc.longitude, -74.06);
        assert_eq!(loc.accuracy_m, Some(12.5));
        assert_eq!(loc.provider.as_deref(), Some("gps"));
    }

    #[test]
    fn test_validate_accepts_extremes() {
        assert!(Location::new(90.0, 180.0).validate().is_none());
        assert!(Location::new(-90.0, -180.0).validate().is_none());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert!(Location::new(90.1, 0.0).validate().is_some());
        assert!(Location::new(0.0, -180.5).validate().is_some());
        assert!(Location::new(f64::NAN, 0.0).validate().is_some());
        assert!(Location::new(0.0, f64::INFINITY).validate().is_some());
    }

    #[test]
    fn test_metadata_skipped_when_absent() {
        let json = serde_json::to_string(&Location::new(1.0, 2.0)).unwrap();
        assert_eq!(json, r#"{"latitude":1.0,"longitude":2.0}"#);
    }
}
