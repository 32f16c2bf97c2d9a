//! Cache Entry Module
//!
//! Defines the bookkeeping record kept for every resident key.

use serde::Serialize;

// == Cache Entry ==
/// One resident item together with the counters the eviction policies order by.
///
/// Only real cache state lives here. Display states such as "hot" or
/// "evicting" belong to whoever renders the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// The resident key
    pub key: char,
    /// Number of accesses since insertion, starting at 1
    pub frequency: u64,
    /// Sequence number issued when the key was inserted; never reassigned
    pub insertion_sequence: u64,
    /// Sequence number of the most recent access, including the insertion
    pub last_access_sequence: u64,
}

impl Entry {
    // == Constructor ==
    /// Creates a freshly inserted entry stamped with `sequence`.
    pub fn new(key: char, sequence: u64) -> Self {
        Self {
            key,
            frequency: 1,
            insertion_sequence: sequence,
            last_access_sequence: sequence,
        }
    }

    // == Touch ==
    /// Records a hit: bumps the frequency and refreshes recency.
    pub fn touch(&mut self, sequence: u64) {
        self.frequency += 1;
        self.last_access_sequence = sequence;
    }
}
