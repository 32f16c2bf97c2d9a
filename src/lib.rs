//! Eviction Sim - A bounded cache simulator with pluggable eviction policies
//!
//! Simulates FIFO, LRU, LFU, LIFO and MRU eviction over single-character keys
//! and serves one independent cache per policy over HTTP.
//!
//! ```
//! use eviction_sim::{CacheSimulator, EvictionPolicy};
//!
//! let mut cache = CacheSimulator::new(3, EvictionPolicy::Fifo).unwrap();
//! for key in ['A', 'B', 'C'] {
//!     cache.access(key);
//! }
//! let result = cache.access('D');
//! assert_eq!(result.evicted, Some('A'));
//! ```

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use cache::{AccessResult, CacheSimulator, CacheStats, Entry, EvictionPolicy, Scenario};
pub use config::Config;
pub use error::{Result, SimError};
