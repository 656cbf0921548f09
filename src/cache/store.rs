//! Location Cache Module
//!
//! Bounded per-key memo of the last known location, with lazy staleness
//! expiry on read and LRU eviction on insert.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::cache::{
    CacheStats, CachedLocation, LruTracker, DEFAULT_CAPACITY, FRESHNESS_WINDOW,
};
use crate::clock::{Clock, SystemClock};
use crate::geo::Location;

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<String, CachedLocation>,
    lru: LruTracker,
    stats: CacheStats,
}

// == Location Cache ==
/// Shared, thread-safe last-known-location cache.
///
/// All state sits behind one mutex, held only for in-memory map work.
/// Share one instance per process as `Arc<LocationCache>`.
pub struct LocationCache {
    inner: Mutex<Inner>,
    capacity: usize,
    clock: Arc<dyn Clock>,
}

impl LocationCache {
    // == Constructors ==
    /// Cache with the default capacity, measuring age on the wall clock.
    pub fn new() -> Self {
        Self::with_clock(DEFAULT_CAPACITY, Arc::new(SystemClock))
    }

    /// Cache holding at most `capacity` entries (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_clock(capacity, Arc::new(SystemClock))
    }

    /// Cache measuring entry age against `clock`.
    pub fn with_clock(capacity: usize, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
            capacity: capacity.max(1),
            clock,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // == Get ==
    /// Returns the cached location for `key` if it is still fresh.
    ///
    /// An entry older than [`FRESHNESS_WINDOW`] is removed and reported as
    /// absent, exactly like a key that was never cached.
    pub fn get(&self, key: &str) -> Option<CachedLocation> {
        let now = self.clock.now();
        let mut guard = self.lock();
        let inner = &mut *guard;

        let fresh = match inner.entries.get(key) {
            None => {
                inner.stats.record_miss();
                debug!(key, "location cache miss");
                return None;
            }
            Some(entry) => entry.is_fresh(now, FRESHNESS_WINDOW),
        };

        if !fresh {
            inner.entries.remove(key);
            inner.lru.remove(key);
            inner.stats.record_stale();
            debug!(key, "location cache entry expired, evicted on read");
            return None;
        }

        inner.lru.touch(key);
        inner.stats.record_hit();
        debug!(key, "location cache hit");
        inner.entries.get(key).cloned()
    }

    // == Put ==
    /// Stores `location` for `key`, observed at `observed_at`.
    ///
    /// Overwrites any existing entry for the key. Inserting a new key into
    /// a full cache first evicts the least recently used entry.
    pub fn put(&self, key: impl Into<String>, location: Location, observed_at: DateTime<Utc>) {
        let key = key.into();
        let mut guard = self.lock();
        let inner = &mut *guard;

        if !inner.entries.contains_key(&key) && inner.entries.len() >= self.capacity {
            if let Some(evicted) = inner.lru.evict_oldest() {
                inner.entries.remove(&evicted);
                inner.stats.record_capacity_eviction();
                info!(
                    evicted = %evicted,
                    capacity = self.capacity,
                    "location cache full, evicted least recently used entry"
                );
            }
        }

        inner.lru.touch(&key);
        inner
            .entries
            .insert(key, CachedLocation::new(location, observed_at));
    }

    /// Stores `location` for `key`, observed now according to the cache's clock.
    pub fn put_now(&self, key: impl Into<String>, location: Location) -> DateTime<Utc> {
        let observed_at = self.clock.now();
        self.put(key, location, observed_at);
        observed_at
    }

    // == Introspection ==
    pub fn stats(&self) -> CacheStats {
        let inner = self.lock();
        let mut stats = inner.stats.clone();
        stats.total_entries = inner.entries.len();
        stats
    }

    /// Number of resident entries, stale ones included until they are read.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The clock entry ages are measured against.
    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }
}

impl Default for LocationCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LocationCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationCache")
            .field("capacity", &self.capacity)
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use chrono::{Duration, TimeZone};

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn cache_with_clock(capacity: usize) -> (LocationCache, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(start()));
        let cache = LocationCache::with_clock(capacity, clock.clone());
        (cache, clock)
    }

    fn campus_point() -> Location {
        Location::new(4.600, -74.065)
    }

    #[test]
    fn test_cache_new() {
        let cache = LocationCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let cache = LocationCache::with_capacity(0);
        assert_eq!(cache.capacity(), 1);
    }

    #[test]
    fn test_miss_then_hit_round_trip() {
        let (cache, clock) = cache_with_clock(10);

        assert_eq!(cache.get("student-1"), None);

        let now = clock.now();
        cache.put("student-1", campus_point(), now);

        let hit = cache.get("student-1").unwrap();
        assert_eq!(hit.location, campus_point());
        assert_eq!(hit.observed_at, now);
    }

    #[test]
    fn test_hit_just_inside_window() {
        let (cache, clock) = cache_with_clock(10);
        cache.put("student-1", campus_point(), start());

        clock.advance(Duration::milliseconds(4999));
        assert!(cache.get("student-1").is_some());

        clock.set(start() + Duration::milliseconds(5000));
        assert!(cache.get("student-1").is_some());
    }

    #[test]
    fn test_stale_entry_is_evicted_on_read() {
        let (cache, clock) = cache_with_clock(10);
        cache.put("student-1", campus_point(), start());

        clock.advance(Duration::milliseconds(5001));
        assert_eq!(cache.get("student-1"), None);
        assert!(cache.is_empty());

        // Rewinding the clock cannot resurrect it.
        clock.set(start());
        assert_eq!(cache.get("student-1"), None);

        let stats = cache.stats();
        assert_eq!(stats.stale_evictions, 1);
        assert_eq!(stats.misses, 2);
    }

    #[test]
    fn test_age_measured_from_observation() {
        let (cache, clock) = cache_with_clock(10);

        // Observed 4s before insertion: only 1s of freshness remains.
        cache.put("student-1", campus_point(), start() - Duration::seconds(4));
        clock.advance(Duration::milliseconds(1001));

        assert_eq!(cache.get("student-1"), None);
    }

    #[test]
    fn test_overwrite_resets_age() {
        let (cache, clock) = cache_with_clock(10);
        let first = Location::new(4.590, -74.065);
        let second = campus_point();

        cache.put("student-1", first, start());
        clock.advance(Duration::seconds(4));
        cache.put("student-1", second.clone(), clock.now());
        clock.advance(Duration::seconds(4));

        let hit = cache.get("student-1").unwrap();
        assert_eq!(hit.location, second);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_capacity_evicts_least_recently_used() {
        let (cache, clock) = cache_with_clock(3);
        let now = clock.now();

        cache.put("a", campus_point(), now);
        cache.put("b", campus_point(), now);
        cache.put("c", campus_point(), now);

        // Reading "a" makes "b" the coldest key.
        assert!(cache.get("a").is_some());
        cache.put("d", campus_point(), now);

        assert_eq!(cache.len(), 3);
        assert_eq!(cache.get("b"), None);
        assert!(cache.get("a").is_some());
        assert!(cache.get("c").is_some());
        assert!(cache.get("d").is_some());
        assert_eq!(cache.stats().capacity_evictions, 1);
    }

    #[test]
    fn test_overwrite_at_capacity_does_not_evict() {
        let (cache, clock) = cache_with_clock(2);
        let now = clock.now();

        cache.put("a", campus_point(), now);
        cache.put("b", campus_point(), now);
        cache.put("a", Location::new(4.601, -74.064), now);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.stats().capacity_evictions, 0);
        assert!(cache.get("b").is_some());
    }

    #[test]
    fn test_put_now_uses_cache_clock() {
        let (cache, clock) = cache_with_clock(10);
        let stamped = cache.put_now("student-1", campus_point());

        assert_eq!(stamped, clock.now());
        assert_eq!(cache.get("student-1").unwrap().observed_at, stamped);
    }

    #[test]
    fn test_stats_track_reads() {
        let (cache, clock) = cache_with_clock(10);
        cache.put("student-1", campus_point(), clock.now());

        cache.get("student-1");
        cache.get("student-2");

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }

    #[test]
    fn test_concurrent_put_and_get() {
        let cache = Arc::new(LocationCache::with_capacity(10));
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || {
                    let key = format!("student-{}", i % 4);
                    for _ in 0..100 {
                        cache.put_now(key.clone(), Location::new(4.600, -74.065));
                        cache.get(&key);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(cache.len(), 4);
        let stats = cache.stats();
        assert_eq!(stats.hits + stats.misses, 800);
    }
}
