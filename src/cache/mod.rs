//! Cache Module
//!
//! Freshness-windowed last-known-location cache with LRU eviction.

mod entry;
mod lru;
mod stats;
mod store;


use std::time::Duration;

// Re-export public types
pub use entry::CachedLocation;
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::LocationCache;

// == Public Constants ==
/// Maximum age of a location that may still be served from the cache.
pub const FRESHNESS_WINDOW: Duration = Duration::from_millis(5000);

/// Number of entries a cache holds unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 10;
