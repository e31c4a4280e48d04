use crate::common::types::FrameId;
use crate::sim::table::FrameTable;

/// LRU (Least Recently Used) page replacement policy.
///
/// The recency order is an intrusive doubly linked list threaded through two
/// slot-indexed vectors, head = most recently used, tail = eviction
/// candidate. Promotions and removals relink integer indices only; no
/// allocation happens after construction.
#[derive(Debug)]
pub struct LruReplacer {
    prev: Vec<Option<FrameId>>,
    next: Vec<Option<FrameId>>,
    head: Option<FrameId>,
    tail: Option<FrameId>,
}

impl LruReplacer {
    pub fn new(capacity: usize) -> Self {
        Self {
            prev: vec![None; capacity],
            next: vec![None; capacity],
            head: None,
            tail: None,
        }
    }

    /// Record that a resident frame has been accessed: promote it to head.
    pub fn record_hit(&mut self, slot: FrameId) {
        if self.head == Some(slot) {
            return;
        }
        self.detach(slot);
        self.push_front(slot);
    }

    /// Record that a frame has been filled with a new page: insert at head.
    pub fn record_install(&mut self, slot: FrameId) {
        self.push_front(slot);
    }

    /// Drop a frame from the recency order ahead of its eviction.
    pub fn remove(&mut self, slot: FrameId) {
        self.detach(slot);
    }

    /// Victim selection: the least recently used frame, i.e. the tail.
    pub fn victim(&self, _table: &FrameTable) -> FrameId {
        match self.tail {
            Some(slot) => slot,
            None => panic!("LRU victim requested but the recency order is empty"),
        }
    }

    /// Walks the recency order, yielding slots from most to least recent.
    pub fn order(&self) -> impl Iterator<Item = FrameId> + '_ {
        let mut cursor = self.head;
        std::iter::from_fn(move || {
            let slot = cursor?;
            cursor = self.next[slot];
            Some(slot)
        })
    }

    fn push_front(&mut self, slot: FrameId) {
        self.prev[slot] = None;
        self.next[slot] = self.head;
        if let Some(head) = self.head {
            self.prev[head] = Some(slot);
        }
        self.head = Some(slot);
        if self.tail.is_none() {
            self.tail = Some(slot);
        }
    }

    fn detach(&mut self, slot: FrameId) {
        let prev = self.prev[slot];
        let next = self.next[slot];
        match prev {
            Some(p) => self.next[p] = next,
            None if self.head == Some(slot) => self.head = next,
            None => return, // not linked
        }
        match next {
            Some(n) => self.prev[n] = prev,
            None => self.tail = prev,
        }
        self.prev[slot] = None;
        self.next[slot] = None;
    }
}
