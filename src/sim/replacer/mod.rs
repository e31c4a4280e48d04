//! Page replacement policies.
//!
//! Three interchangeable policies sit behind the [`Replacer`] enum, selected
//! once at simulator construction:
//!
//! - **LRU**: intrusive recency order over slot indices, evicts the least
//!   recently used frame.
//! - **Clock**: second-chance scan over per-slot reference bits.
//! - **LFU**: per-slot access counters, evicts the least frequently used
//!   frame, earliest-installed among ties.
//!
//! Each policy answers the same four calls: `record_hit`, `record_install`,
//! `remove`, and `victim`.

mod clock;
mod lfu;
mod lru;

use std::fmt;
use std::str::FromStr;

pub use clock::ClockReplacer;
pub use lfu::LfuReplacer;
pub use lru::LruReplacer;

use crate::common::types::FrameId;
use crate::sim::error::SimError;
use crate::sim::snapshot::SlotMeta;
use crate::sim::table::FrameTable;

/// Replacement policy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    Lru,
    Clock,
    Lfu,
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyKind::Lru => write!(f, "lru"),
            PolicyKind::Clock => write!(f, "clock"),
            PolicyKind::Lfu => write!(f, "lfu"),
        }
    }
}

impl FromStr for PolicyKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lru" => Ok(PolicyKind::Lru),
            "clock" => Ok(PolicyKind::Clock),
            "lfu" => Ok(PolicyKind::Lfu),
            other => Err(SimError::UnknownPolicy(other.to_string())),
        }
    }
}

/// Tagged-variant dispatch over the three policy implementations.
#[derive(Debug)]
pub enum Replacer {
    Lru(LruReplacer),
    Clock(ClockReplacer),
    Lfu(LfuReplacer),
}

impl Replacer {
    pub fn new(kind: PolicyKind, capacity: usize) -> Self {
        match kind {
            PolicyKind::Lru => Replacer::Lru(LruReplacer::new(capacity)),
            PolicyKind::Clock => Replacer::Clock(ClockReplacer::new(capacity)),
            PolicyKind::Lfu => Replacer::Lfu(LfuReplacer::new(capacity)),
        }
    }

    pub fn kind(&self) -> PolicyKind {
        match self {
            Replacer::Lru(_) => PolicyKind::Lru,
            Replacer::Clock(_) => PolicyKind::Clock,
            Replacer::Lfu(_) => PolicyKind::Lfu,
        }
    }

    /// Record an access to a resident frame.
    pub fn record_hit(&mut self, slot: FrameId) {
        match self {
            Replacer::Lru(lru) => lru.record_hit(slot),
            Replacer::Clock(clock) => clock.record_hit(slot),
            Replacer::Lfu(lfu) => lfu.record_hit(slot),
        }
    }

    /// Record that a frame has been filled with a new page.
    pub fn record_install(&mut self, slot: FrameId) {
        match self {
            Replacer::Lru(lru) => lru.record_install(slot),
            Replacer::Clock(clock) => clock.record_install(slot),
            Replacer::Lfu(lfu) => lfu.record_install(slot),
        }
    }

    /// Drop a frame's policy metadata ahead of its eviction.
    pub fn remove(&mut self, slot: FrameId) {
        match self {
            Replacer::Lru(lru) => lru.remove(slot),
            Replacer::Clock(clock) => clock.remove(slot),
            Replacer::Lfu(lfu) => lfu.remove(slot),
        }
    }

    /// Select the slot to evict next.
    pub fn victim(&mut self, table: &FrameTable) -> FrameId {
        match self {
            Replacer::Lru(lru) => lru.victim(table),
            Replacer::Clock(clock) => clock.victim(table),
            Replacer::Lfu(lfu) => lfu.victim(table),
        }
    }

    /// Per-slot metadata for the snapshot projection.
    pub fn slot_metas(&self, capacity: usize) -> Vec<SlotMeta> {
        match self {
            Replacer::Lru(lru) => {
                let mut ranks = vec![None; capacity];
                for (rank, slot) in lru.order().enumerate() {
                    ranks[slot] = Some(rank);
                }
                ranks.into_iter().map(|rank| SlotMeta::Lru { rank }).collect()
            }
            Replacer::Clock(clock) => (0..capacity)
                .map(|slot| SlotMeta::Clock {
                    referenced: clock.ref_bit(slot),
                })
                .collect(),
            Replacer::Lfu(lfu) => (0..capacity)
                .map(|slot| SlotMeta::Lfu {
                    frequency: lfu.frequency(slot),
                })
                .collect(),
        }
    }

    /// Current clock hand position, if this is the clock policy.
    pub fn hand(&self) -> Option<FrameId> {
        match self {
            Replacer::Clock(clock) => Some(clock.hand()),
            _ => None,
        }
    }
}
