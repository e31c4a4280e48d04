use std::collections::HashMap;

use crate::common::types::{FrameId, PageId};

/// Fixed-capacity table of physical frames.
///
/// Each slot holds at most one virtual page. A page-to-slot map accelerates
/// lookup; the slot array remains the source of truth for occupancy.
#[derive(Debug)]
pub struct FrameTable {
    frames: Vec<Option<PageId>>,
    page_table: HashMap<PageId, FrameId>,
    occupied: usize,
}

impl FrameTable {
    pub fn new(capacity: usize) -> Self {
        Self {
            frames: vec![None; capacity],
            page_table: HashMap::with_capacity(capacity),
            occupied: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.frames.len()
    }

    pub fn occupied(&self) -> usize {
        self.occupied
    }

    pub fn is_full(&self) -> bool {
        self.occupied == self.frames.len()
    }

    pub fn is_occupied(&self, slot: FrameId) -> bool {
        self.frames[slot].is_some()
    }

    /// Returns the page resident in `slot`, or None for an empty slot.
    pub fn page(&self, slot: FrameId) -> Option<PageId> {
        self.frames[slot]
    }

    /// Finds the slot currently holding `page`.
    pub fn lookup(&self, page: PageId) -> Option<FrameId> {
        self.page_table.get(&page).copied()
    }

    /// Places `page` into `slot`. The slot must be empty.
    pub fn install(&mut self, slot: FrameId, page: PageId) {
        if let Some(resident) = self.frames[slot] {
            panic!("install into occupied frame {slot} (holds page {resident})");
        }
        self.frames[slot] = Some(page);
        self.page_table.insert(page, slot);
        self.occupied += 1;
    }

    /// Empties `slot` and returns the page it held. The slot must be occupied.
    pub fn evict(&mut self, slot: FrameId) -> PageId {
        let Some(page) = self.frames[slot].take() else {
            panic!("evict from empty frame {slot}");
        };
        self.page_table.remove(&page);
        self.occupied -= 1;
        page
    }

    /// Iterates the occupied slots in index order.
    pub fn occupied_slots(&self) -> impl Iterator<Item = FrameId> + '_ {
        self.frames
            .iter()
            .enumerate()
            .filter_map(|(slot, page)| page.map(|_| slot))
    }
}
