//! Response DTOs for the simulator API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::{AccessResult, CacheSimulator, CacheStats, Entry, EvictionPolicy};

/// Response body for POST /caches/:policy/access
#[derive(Debug, Clone, Serialize)]
pub struct AccessResponse {
    pub policy: EvictionPolicy,
    /// True if the key was already resident
    pub hit: bool,
    /// Key evicted to make room, if any
    pub evicted: Option<char>,
    /// Residents after the access, in display order
    pub entries: Vec<Entry>,
    /// Key the next miss would evict
    pub next_victim: Option<char>,
}

impl AccessResponse {
    /// Wraps an access result with the cache's post-access context.
    pub fn new(cache: &CacheSimulator, result: AccessResult) -> Self {
        Self {
            policy: cache.policy(),
            hit: result.hit,
            evicted: result.evicted,
            entries: result.entries,
            next_victim: cache.peek_victim(),
        }
    }
}

/// Response body for GET /caches/:policy, reset and scenario loads
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotResponse {
    pub policy: EvictionPolicy,
    pub capacity: usize,
    pub entries: Vec<Entry>,
    pub next_victim: Option<char>,
}

impl SnapshotResponse {
    pub fn new(cache: &CacheSimulator) -> Self {
        Self {
            policy: cache.policy(),
            capacity: cache.capacity(),
            entries: cache.snapshot(),
            next_victim: cache.peek_victim(),
        }
    }
}

/// One row of GET /caches
#[derive(Debug, Clone, Serialize)]
pub struct CacheSummary {
    pub policy: EvictionPolicy,
    pub description: &'static str,
    pub capacity: usize,
    pub len: usize,
}

impl CacheSummary {
    pub fn new(cache: &CacheSimulator) -> Self {
        Self {
            policy: cache.policy(),
            description: cache.policy().description(),
            capacity: cache.capacity(),
            len: cache.len(),
        }
    }
}

/// Response body for GET /caches/:policy/stats
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub policy: EvictionPolicy,
    /// Number of hits
    pub hits: u64,
    /// Number of misses
    pub misses: u64,
    /// Number of evictions
    pub evictions: u64,
    /// Current number of resident entries
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(policy: EvictionPolicy, stats: &CacheStats) -> Self {
        Self {
            policy,
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
