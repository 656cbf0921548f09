//! Cache Statistics Module
//!
//! Counters describing how the location cache is being used.

use serde::Serialize;

// == Cache Stats ==
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Reads that returned a fresh location
    pub hits: u64,
    /// Reads that returned nothing (never cached or stale)
    pub misses: u64,
    /// Entries dropped on read because they outlived the freshness window
    pub stale_evictions: u64,
    /// Entries dropped to make room for a new key
    pub capacity_evictions: u64,
    /// Entries currently resident
    pub total_entries: usize,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// hits / (hits + misses), or 0.0 before the first read.
    pub fn hit_rate(&self) -> f64 {
        let reads = self.hits + self.misses;
        if reads == 0 {
            0.0
        } else {
            self.hits as f64 / reads as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// A stale read is both a miss and an eviction.
    pub fn record_stale(&mut self) {
        self.misses += 1;
        self.stale_evictions += 1;
    }

    pub fn record_capacity_eviction(&mut self) {
        self.capacity_evictions += 1;
    }
}
