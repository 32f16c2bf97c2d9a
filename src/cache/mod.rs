//! Cache Module
//!
//! Provides the bounded cache simulator and its eviction policies.

mod entry;
mod policy;
mod scenario;
mod simulator;
mod stats;


// Re-export public types
pub use entry::Entry;
pub use policy::EvictionPolicy;
pub use scenario::Scenario;
pub use simulator::{AccessResult, CacheSimulator};
pub use stats::CacheStats;

// == Public Constants ==
/// Capacity used by the demo caches unless configured otherwise
pub const DEFAULT_CAPACITY: usize = 3;
