use std::collections::VecDeque;

use log::debug;

use crate::common::types::{FrameId, PageId};
use crate::sim::error::SimError;
use crate::sim::replacer::{PolicyKind, Replacer};
use crate::sim::snapshot::{FrameSnapshot, Snapshot};
use crate::sim::table::FrameTable;

/// Result of a single page reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceOutcome {
    /// The page was already resident.
    Hit,
    /// The page was installed into a free frame.
    MissInstalled,
    /// The page displaced a resident page.
    MissEvicted(PageId),
}

/// Page-replacement simulator over a fixed set of frames.
///
/// One entry point, [`reference`](Simulator::reference), drives the whole
/// state machine: lookup, policy bookkeeping, and eviction when the frame
/// table is full. The replacement policy is chosen once at construction.
#[derive(Debug)]
pub struct Simulator {
    table: FrameTable,
    replacer: Replacer,
    free_list: VecDeque<FrameId>,
}

impl Simulator {
    pub fn new(capacity: usize, kind: PolicyKind) -> Result<Self, SimError> {
        if capacity < 1 {
            return Err(SimError::InvalidCapacity(capacity));
        }
        Ok(Self {
            table: FrameTable::new(capacity),
            replacer: Replacer::new(kind, capacity),
            free_list: (0..capacity).collect(),
        })
    }

    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    pub fn occupied(&self) -> usize {
        self.table.occupied()
    }

    pub fn policy(&self) -> PolicyKind {
        self.replacer.kind()
    }

    /// Finds the frame currently holding `page`.
    pub fn lookup(&self, page: PageId) -> Option<FrameId> {
        self.table.lookup(page)
    }

    /// Process one page reference.
    ///
    /// On a hit the policy refreshes its per-slot metadata. On a miss the
    /// page goes into the lowest-indexed free frame, or, with the table
    /// full, into the frame the policy picks as its victim. Infallible:
    /// every page id is legal.
    pub fn reference(&mut self, page: PageId) -> ReferenceOutcome {
        if let Some(slot) = self.table.lookup(page) {
            self.replacer.record_hit(slot);
            return ReferenceOutcome::Hit;
        }

        // Free frames are handed out in index order
        if let Some(slot) = self.free_list.pop_front() {
            self.table.install(slot, page);
            self.replacer.record_install(slot);
            debug!("Installed page {} into free frame {}", page, slot);
            return ReferenceOutcome::MissInstalled;
        }

        let slot = self.replacer.victim(&self.table);
        let victim = self.table.evict(slot);
        self.replacer.remove(slot);
        self.table.install(slot, page);
        self.replacer.record_install(slot);
        debug!("Evicted page {} from frame {} for page {}", victim, slot, page);
        ReferenceOutcome::MissEvicted(victim)
    }

    /// Process a whole reference stream, returning one outcome per page.
    pub fn run<I>(&mut self, stream: I) -> Vec<ReferenceOutcome>
    where
        I: IntoIterator<Item = PageId>,
    {
        stream.into_iter().map(|page| self.reference(page)).collect()
    }

    /// Read-only projection of the current frame state.
    pub fn snapshot(&self) -> Snapshot {
        let metas = self.replacer.slot_metas(self.table.capacity());
        let frames = metas
            .into_iter()
            .enumerate()
            .map(|(slot, meta)| FrameSnapshot {
                slot,
                page: self.table.page(slot),
                meta,
            })
            .collect();
        Snapshot {
            policy: self.replacer.kind(),
            hand: self.replacer.hand(),
            frames,
        }
    }
}
