//! Cached Location Module
//!
//! A location together with the instant it was observed.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::geo::Location;

// == Cached Location ==
/// A location fix and the instant the provider observed it.
///
/// Age is always measured from `observed_at`, not from when the entry
/// was written to the cache.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CachedLocation {
    pub location: Location,
    pub observed_at: DateTime<Utc>,
}

impl CachedLocation {
    pub fn new(location: Location, observed_at: DateTime<Utc>) -> Self {
        Self {
            location,
            observed_at,
        }
    }

    // == Age ==
    /// Time elapsed between observation and `now`.
    ///
    /// Returns `None` when `observed_at` lies after `now` (a provider clock
    /// running ahead of ours).
    pub fn age(&self, now: DateTime<Utc>) -> Option<Duration> {
        (now - self.observed_at).to_std().ok()
    }

    // == Is Fresh ==
    /// Checks whether the entry may still be served.
    ///
    /// The window is inclusive: an entry exactly `window` old is fresh.
    /// Observations stamped in the future count as age zero.
    pub fn is_fresh(&self, now: DateTime<Utc>, window: Duration) -> bool {
        match self.age(now) {
            Some(age) => age <= window,
            None => true,
        }
    }
}
