//! API Handlers
//!
//! HTTP request handlers for each simulator endpoint.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::cache::{CacheSimulator, EvictionPolicy, Scenario, DEFAULT_CAPACITY};
use crate::config::Config;
use crate::error::{Result, SimError};
use crate::models::{
    AccessRequest, AccessResponse, CacheSummary, HealthResponse, SnapshotResponse, StatsResponse,
};

/// Application state shared across all handlers.
///
/// Holds one independent simulator per policy, each behind its own lock.
#[derive(Clone)]
pub struct AppState {
    caches: Arc<HashMap<EvictionPolicy, RwLock<CacheSimulator>>>,
}

impl AppState {
    /// Creates empty caches of `capacity` for every policy.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::build(capacity, false)
    }

    /// Creates the caches described by the configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::build(config.capacity, config.load_scenarios)
    }

    fn build(capacity: usize, load_scenarios: bool) -> Result<Self> {
        // Presets describe three-slot caches; at other sizes they replay into a different state
        let load_scenarios = if load_scenarios && capacity != DEFAULT_CAPACITY {
            warn!(
                "Skipping preset scenarios: they assume capacity {}, configured {}",
                DEFAULT_CAPACITY, capacity
            );
            false
        } else {
            load_scenarios
        };

        let mut caches = HashMap::with_capacity(EvictionPolicy::ALL.len());
        for policy in EvictionPolicy::ALL {
            let mut cache = CacheSimulator::new(capacity, policy)?;
            if load_scenarios {
                cache.load(Scenario::default_for(policy));
            }
            caches.insert(policy, RwLock::new(cache));
        }

        Ok(Self {
            caches: Arc::new(caches),
        })
    }

    /// Looks up the simulator for a policy name from the URL.
    pub fn cache(&self, policy: &str) -> Result<&RwLock<CacheSimulator>> {
        let policy: EvictionPolicy = policy.parse()?;
        self.caches
            .get(&policy)
            .ok_or_else(|| SimError::UnknownPolicy(policy.to_string()))
    }
}

/// Handler for GET /caches
pub async fn list_handler(State(state): State<AppState>) -> Result<Json<Vec<CacheSummary>>> {
    let mut summaries = Vec::with_capacity(EvictionPolicy::ALL.len());
    for policy in EvictionPolicy::ALL {
        let cache = state.cache(policy.name())?.read().await;
        summaries.push(CacheSummary::new(&cache));
    }
    Ok(Json(summaries))
}

/// Handler for GET /caches/:policy
pub async fn snapshot_handler(
    State(state): State<AppState>,
    Path(policy): Path<String>,
) -> Result<Json<SnapshotResponse>> {
    let cache = state.cache(&policy)?.read().await;
    Ok(Json(SnapshotResponse::new(&cache)))
}

/// Handler for POST /caches/:policy/access
///
/// Accesses one key, inserting it on a miss.
pub async fn access_handler(
    State(state): State<AppState>,
    Path(policy): Path<String>,
    Json(req): Json<AccessRequest>,
) -> Result<Json<AccessResponse>> {
    let key = req.parse_key()?;

    // Write lock: hits mutate recency and frequency too
    let mut cache = state.cache(&policy)?.write().await;
    let result = cache.access(key);

    Ok(Json(AccessResponse::new(&cache, result)))
}

/// Handler for POST /caches/:policy/reset
pub async fn reset_handler(
    State(state): State<AppState>,
    Path(policy): Path<String>,
) -> Result<Json<SnapshotResponse>> {
    let mut cache = state.cache(&policy)?.write().await;
    cache.reset();
    Ok(Json(SnapshotResponse::new(&cache)))
}

/// Handler for POST /caches/:policy/scenario/:name
///
/// Resets the cache and replays a preset.
pub async fn scenario_handler(
    State(state): State<AppState>,
    Path((policy, name)): Path<(String, String)>,
) -> Result<Json<SnapshotResponse>> {
    let scenario: Scenario = name.parse()?;
    let mut cache = state.cache(&policy)?.write().await;
    cache.load(scenario);
    info!(policy = %cache.policy(), %scenario, "scenario requested");
    Ok(Json(SnapshotResponse::new(&cache)))
}

/// Handler for GET /caches/:policy/stats
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(policy): Path<String>,
) -> Result<Json<StatsResponse>> {
    let cache = state.cache(&policy)?.read().await;
    Ok(Json(StatsResponse::new(cache.policy(), &cache.stats())))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
