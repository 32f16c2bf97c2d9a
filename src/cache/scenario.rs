//! Scenario Module
//!
//! Preset starting states, each expressed as a key sequence replayed through
//! `CacheSimulator::access`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cache::EvictionPolicy;
use crate::error::SimError;

// == Scenario ==
/// Preset starting state for a demo cache.
///
/// Presets are written for three-slot caches; at other capacities the replay
/// still runs but evictions reshape the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    /// Nothing resident
    Empty,
    /// A, B, C with frequencies 5, 2, 1
    Frequencies,
    /// A, B, C inserted in order, never touched again
    Stack,
    /// A, B, C inserted in order, then C hit so it is the most recent
    HotTail,
}

impl Scenario {
    /// Every preset, in declaration order.
    pub const ALL: [Scenario; 4] = [
        Scenario::Empty,
        Scenario::Frequencies,
        Scenario::Stack,
        Scenario::HotTail,
    ];

    /// Keys to access, in order, starting from an empty cache.
    pub fn accesses(self) -> &'static [char] {
        match self {
            Scenario::Empty => &[],
            Scenario::Frequencies => &['A', 'B', 'C', 'A', 'A', 'A', 'A', 'B'],
            Scenario::Stack => &['A', 'B', 'C'],
            Scenario::HotTail => &['A', 'B', 'C', 'C'],
        }
    }

    /// Starting state each policy's demo opens with.
    pub fn default_for(policy: EvictionPolicy) -> Self {
        match policy {
            EvictionPolicy::Fifo | EvictionPolicy::Lru => Scenario::Empty,
            EvictionPolicy::Lfu => Scenario::Frequencies,
            EvictionPolicy::Lifo => Scenario::Stack,
            EvictionPolicy::Mru => Scenario::HotTail,
        }
    }

    /// Kebab-case name used in URLs and JSON.
    pub fn name(self) -> &'static str {
        match self {
            Scenario::Empty => "empty",
            Scenario::Frequencies => "frequencies",
            Scenario::Stack => "stack",
            Scenario::HotTail => "hot-tail",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scenario::ALL
            .into_iter()
            .find(|sc| sc.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SimError::UnknownScenario(s.to_string()))
    }
}
