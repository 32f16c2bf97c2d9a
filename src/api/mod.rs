//! API Module
//!
//! HTTP handlers and routing that expose one simulator per eviction policy.
//!
//! # Endpoints
//! - `GET /health` - Health check endpoint
//! - `GET /caches` - List all simulated caches
//! - `GET /caches/:policy` - Snapshot of one cache
//! - `POST /caches/:policy/access` - Access a key
//! - `POST /caches/:policy/reset` - Reset one cache
//! - `POST /caches/:policy/scenario/:name` - Load a preset scenario
//! - `GET /caches/:policy/stats` - Counters for one cache

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
