//! Eviction Policy Module
//!
//! The closed set of eviction policies and the single dispatch point for
//! victim selection and display ordering.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cache::Entry;
use crate::error::SimError;

// == Eviction Policy ==
/// Rule used to choose which resident entry leaves when a miss hits a full cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvictionPolicy {
    /// First in, first out: evicts the oldest insertion
    Fifo,
    /// Least recently used: evicts the stalest access
    Lru,
    /// Least frequently used: evicts the lowest count, oldest insertion on ties
    Lfu,
    /// Last in, first out: evicts the newest insertion
    Lifo,
    /// Most recently used: evicts the freshest access
    Mru,
}

impl EvictionPolicy {
    /// Every supported policy, in tab order.
    pub const ALL: [EvictionPolicy; 5] = [
        EvictionPolicy::Fifo,
        EvictionPolicy::Lru,
        EvictionPolicy::Lfu,
        EvictionPolicy::Lifo,
        EvictionPolicy::Mru,
    ];

    // == Name ==
    /// Lowercase name used in URLs and JSON.
    pub fn name(self) -> &'static str {
        match self {
            EvictionPolicy::Fifo => "fifo",
            EvictionPolicy::Lru => "lru",
            EvictionPolicy::Lfu => "lfu",
            EvictionPolicy::Lifo => "lifo",
            EvictionPolicy::Mru => "mru",
        }
    }

    // == Description ==
    /// One-line summary of how the policy picks its victim.
    pub fn description(self) -> &'static str {
        match self {
            EvictionPolicy::Fifo => {
                "Oldest data gets evicted first, regardless of how often it is used."
            }
            EvictionPolicy::Lru => "Keeps items you are actually using; discards the neglected ones.",
            EvictionPolicy::Lfu => "Counts usage; the item with the lowest count is kicked out.",
            EvictionPolicy::Lifo => "Behaves like a stack; the newest item added is evicted first.",
            EvictionPolicy::Mru => "Evicts the item most recently accessed; useful for cyclic scans.",
        }
    }

    // == Select Victim ==
    /// Picks the entry this policy evicts, or None when `entries` is empty.
    ///
    /// Sequence numbers are unique per cache, so every rule yields exactly one
    /// candidate. LFU breaks frequency ties on the smaller insertion sequence.
    pub fn select_victim(self, entries: &[Entry]) -> Option<&Entry> {
        let iter = entries.iter();
        match self {
            EvictionPolicy::Fifo => iter.min_by_key(|e| e.insertion_sequence),
            EvictionPolicy::Lifo => iter.max_by_key(|e| e.insertion_sequence),
            EvictionPolicy::Lru => iter.min_by_key(|e| e.last_access_sequence),
            EvictionPolicy::Mru => iter.max_by_key(|e| e.last_access_sequence),
            EvictionPolicy::Lfu => iter.min_by_key(|e| (e.frequency, e.insertion_sequence)),
        }
    }

    // == Display Order ==
    /// Sort key for presenting entries.
    ///
    /// Insertion order for FIFO/LIFO, oldest to newest access for LRU/MRU,
    /// frequency then insertion for LFU.
    pub fn display_key(self, entry: &Entry) -> (u64, u64) {
        match self {
            EvictionPolicy::Fifo | EvictionPolicy::Lifo => (entry.insertion_sequence, 0),
            EvictionPolicy::Lru | EvictionPolicy::Mru => (entry.last_access_sequence, 0),
            EvictionPolicy::Lfu => (entry.frequency, entry.insertion_sequence),
        }
    }
}

impl fmt::Display for EvictionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name().to_ascii_uppercase())
    }
}

impl FromStr for EvictionPolicy {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EvictionPolicy::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SimError::UnknownPolicy(s.to_string()))
    }
}
