//! Cache Simulator Module
//!
//! Bounded cache engine parameterized by a single eviction policy.

use serde::Serialize;
use tracing::{debug, info};

use crate::cache::{CacheStats, Entry, EvictionPolicy, Scenario};
use crate::error::{Result, SimError};

// == Access Result ==
/// Outcome of one `access` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessResult {
    /// True if the key was already resident
    pub hit: bool,
    /// Key removed to make room, if any
    pub evicted: Option<char>,
    /// Resident entries after the call, in the policy's display order
    pub entries: Vec<Entry>,
}

// == Cache Simulator ==
/// Bounded cache applying one eviction policy on overflow.
///
/// Not internally synchronized; callers sharing an instance must serialize
/// access themselves.
#[derive(Debug, Clone)]
pub struct CacheSimulator {
    /// Resident entries, kept in insertion order
    entries: Vec<Entry>,
    /// Active eviction policy, fixed for the lifetime
    policy: EvictionPolicy,
    /// Maximum number of resident entries
    capacity: usize,
    /// Next sequence number to issue
    next_sequence: u64,
    /// Hit/miss/eviction counters
    stats: CacheStats,
}

impl CacheSimulator {
    // == Constructor ==
    /// Creates an empty cache.
    ///
    /// # Errors
    /// `SimError::InvalidConfiguration` if `capacity` is zero.
    pub fn new(capacity: usize, policy: EvictionPolicy) -> Result<Self> {
        if capacity < 1 {
            return Err(SimError::InvalidConfiguration(format!(
                "capacity must be at least 1, got {}",
                capacity
            )));
        }

        Ok(Self {
            entries: Vec::with_capacity(capacity),
            policy,
            capacity,
            next_sequence: 0,
            stats: CacheStats::new(),
        })
    }

    // == Access ==
    /// Accesses `key`, inserting it on a miss and evicting one victim if full.
    ///
    /// Every call consumes exactly one sequence number.
    pub fn access(&mut self, key: char) -> AccessResult {
        let sequence = self.issue_sequence();

        if let Some(entry) = self.entries.iter_mut().find(|e| e.key == key) {
            entry.touch(sequence);
            debug!(policy = %self.policy, %key, frequency = entry.frequency, "cache hit");
            self.stats.record_hit();
            return AccessResult {
                hit: true,
                evicted: None,
                entries: self.snapshot(),
            };
        }

        self.stats.record_miss();
        let evicted = if self.entries.len() >= self.capacity {
            self.evict()
        } else {
            None
        };

        self.entries.push(Entry::new(key, sequence));
        self.stats.set_total_entries(self.entries.len());
        debug!(policy = %self.policy, %key, ?evicted, "cache miss");

        AccessResult {
            hit: false,
            evicted,
            entries: self.snapshot(),
        }
    }

    // == Insert ==
    /// Same as `access`; inserting a resident key counts as a hit.
    pub fn insert(&mut self, key: char) -> AccessResult {
        self.access(key)
    }

    // == Snapshot ==
    /// Returns resident entries in the policy's display order.
    pub fn snapshot(&self) -> Vec<Entry> {
        let mut entries = self.entries.clone();
        entries.sort_by_key(|e| self.policy.display_key(e));
        entries
    }

    // == Reset ==
    /// Empties the cache, restarts sequence numbers at zero, and clears stats.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.next_sequence = 0;
        self.stats = CacheStats::new();
        info!(policy = %self.policy, "cache reset");
    }

    // == Load Scenario ==
    /// Resets, then replays the scenario's accesses.
    ///
    /// Stats are cleared afterwards so the preset does not count as traffic.
    pub fn load(&mut self, scenario: Scenario) -> Vec<Entry> {
        self.reset();
        for key in scenario.accesses() {
            self.access(*key);
        }
        self.stats = CacheStats::new();
        self.stats.set_total_entries(self.entries.len());
        info!(policy = %self.policy, %scenario, "scenario loaded");
        self.snapshot()
    }

    // == Peek Victim ==
    /// Key the next miss would evict, or None if the cache is not full.
    pub fn peek_victim(&self) -> Option<char> {
        if !self.is_full() {
            return None;
        }
        self.policy.select_victim(&self.entries).map(|e| e.key)
    }

    // == Lookup ==
    /// Returns the resident entry for `key`, if any.
    pub fn get(&self, key: char) -> Option<&Entry> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// Returns true if `key` is resident.
    pub fn contains(&self, key: char) -> bool {
        self.get(key).is_some()
    }

    // == Accessors ==
    /// Returns the number of resident entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is resident.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if the next miss will evict.
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Returns the maximum number of resident entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the eviction policy fixed at construction.
    pub fn policy(&self) -> EvictionPolicy {
        self.policy
    }

    /// Sequence number the next access will receive.
    pub fn next_sequence(&self) -> u64 {
        self.next_sequence
    }

    /// Returns counters since construction or the last reset.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    fn issue_sequence(&mut self) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        sequence
    }

    fn evict(&mut self) -> Option<char> {
        let victim = self.policy.select_victim(&self.entries)?.key;
        self.entries.retain(|e| e.key != victim);
        self.stats.record_eviction();
        debug!(policy = %self.policy, key = %victim, "evicted");
        Some(victim)
    }
}
