use anyhow::Result;
use framesim::{PageId, PolicyKind, Simulator, SlotMeta, Snapshot};

// Create a simulator with the standard test capacity of 4 frames
pub fn create_test_simulator(kind: PolicyKind) -> Result<Simulator> {
    Ok(Simulator::new(4, kind)?)
}

// Pages by slot index, None for empty frames
pub fn pages_by_slot(snapshot: &Snapshot) -> Vec<Option<PageId>> {
    snapshot.frames.iter().map(|frame| frame.page).collect()
}

// Resident pages sorted ascending, for set comparisons
pub fn resident_sorted(snapshot: &Snapshot) -> Vec<PageId> {
    let mut pages = snapshot.resident_pages();
    pages.sort_unstable();
    pages
}

// LRU recency order as pages, head (most recent) to tail
pub fn recency_order(snapshot: &Snapshot) -> Vec<PageId> {
    let mut ranked: Vec<(usize, PageId)> = snapshot
        .frames
        .iter()
        .filter_map(|frame| match (frame.meta, frame.page) {
            (SlotMeta::Lru { rank: Some(rank) }, Some(page)) => Some((rank, page)),
            _ => None,
        })
        .collect();
    ranked.sort_unstable();
    ranked.into_iter().map(|(_, page)| page).collect()
}

// Clock reference bits by slot index
pub fn ref_bits(snapshot: &Snapshot) -> Vec<bool> {
    snapshot
        .frames
        .iter()
        .map(|frame| match frame.meta {
            SlotMeta::Clock { referenced } => referenced,
            other => panic!("expected clock metadata, got {:?}", other),
        })
        .collect()
}

// LFU access counters by slot index
pub fn frequencies(snapshot: &Snapshot) -> Vec<u64> {
    snapshot
        .frames
        .iter()
        .map(|frame| match frame.meta {
            SlotMeta::Lfu { frequency } => frequency,
            other => panic!("expected lfu metadata, got {:?}", other),
        })
        .collect()
}
