use std::fmt;

use crate::common::types::{FrameId, PageId};
use crate::sim::replacer::PolicyKind;

/// Per-slot policy metadata as exposed by [`Snapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotMeta {
    /// Position in the recency order, 0 = most recently used; None for an
    /// empty slot.
    Lru { rank: Option<usize> },
    /// Reference bit state.
    Clock { referenced: bool },
    /// Access counter; 0 for an empty slot.
    Lfu { frequency: u64 },
}

/// State of one frame at snapshot time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSnapshot {
    pub slot: FrameId,
    pub page: Option<PageId>,
    pub meta: SlotMeta,
}

/// Read-only projection of the simulator state after the last reference.
///
/// Pure and idempotent: two snapshots taken with no intervening reference
/// compare equal. `hand` is the clock cursor and is None for other policies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub policy: PolicyKind,
    pub hand: Option<FrameId>,
    pub frames: Vec<FrameSnapshot>,
}

impl Snapshot {
    /// Pages currently resident, in slot order.
    pub fn resident_pages(&self) -> Vec<PageId> {
        self.frames.iter().filter_map(|frame| frame.page).collect()
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "policy: {}", self.policy)?;
        for frame in &self.frames {
            match frame.page {
                Some(page) => {
                    write!(f, "frame {}: page {}", frame.slot, page)?;
                    match frame.meta {
                        SlotMeta::Lru { rank: Some(rank) } => writeln!(f, " (recency {rank})")?,
                        SlotMeta::Lru { rank: None } => writeln!(f)?,
                        SlotMeta::Clock { referenced } => {
                            writeln!(f, " (ref {})", referenced as u8)?
                        }
                        SlotMeta::Lfu { frequency } => writeln!(f, " (freq {frequency})")?,
                    }
                }
                None => writeln!(f, "frame {}: empty", frame.slot)?,
            }
        }
        if let Some(hand) = self.hand {
            writeln!(f, "hand -> frame {hand}")?;
        }
        Ok(())
    }
}
