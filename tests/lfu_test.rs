use anyhow::Result;
use framesim::{PolicyKind, ReferenceOutcome, Simulator};

mod common;
use common::{create_test_simulator, frequencies, pages_by_slot};

use ReferenceOutcome::{Hit, MissEvicted, MissInstalled};

#[test]
fn test_tie_break_evicts_earliest_installed() -> Result<()> {
    let mut sim = create_test_simulator(PolicyKind::Lfu)?;
    sim.run([1, 2, 3, 4]);

    // All counters tied at 1: page 1 was installed first and is the victim
    assert_eq!(sim.reference(5), MissEvicted(1));
    assert_eq!(pages_by_slot(&sim.snapshot()), vec![Some(5), Some(2), Some(3), Some(4)]);
    Ok(())
}

#[test]
fn test_demo_stream_replay() -> Result<()> {
    let mut sim = create_test_simulator(PolicyKind::Lfu)?;
    let outcomes = sim.run([1, 2, 3, 4, 5, 1, 2, 1, 3, 4]);

    // Each miss on the full table displaces the least frequent page,
    // earliest installed among ties
    assert_eq!(
        outcomes,
        vec![
            MissInstalled,
            MissInstalled,
            MissInstalled,
            MissInstalled,
            MissEvicted(1),
            MissEvicted(2),
            MissEvicted(3),
            Hit,
            MissEvicted(4),
            MissEvicted(5),
        ]
    );

    let snapshot = sim.snapshot();
    assert_eq!(pages_by_slot(&snapshot), vec![Some(4), Some(1), Some(2), Some(3)]);
    assert_eq!(frequencies(&snapshot), vec![1, 2, 1, 1]);
    Ok(())
}

#[test]
fn test_most_frequent_page_is_never_evicted() -> Result<()> {
    let mut sim = Simulator::new(2, PolicyKind::Lfu)?;
    sim.run([1, 1, 1, 2]);

    // Page 1 has a strictly higher counter than every other resident page,
    // so a string of one-shot pages only ever displaces the other slot
    for page in [3, 4, 5, 6] {
        let outcome = sim.reference(page);
        assert!(matches!(outcome, MissEvicted(victim) if victim != 1));
        assert!(sim.lookup(1).is_some());
    }
    Ok(())
}

#[test]
fn test_counter_resets_when_page_returns() -> Result<()> {
    let mut sim = Simulator::new(2, PolicyKind::Lfu)?;
    sim.run([1, 1, 2]);

    // Page 2 (counter 1) is evicted for 3; page 1 keeps its counter
    assert_eq!(sim.reference(3), MissEvicted(2));

    // When 2 returns it starts over at counter 1
    assert_eq!(sim.reference(2), MissEvicted(3));
    let snapshot = sim.snapshot();
    assert_eq!(frequencies(&snapshot), vec![2, 1]);
    assert_eq!(pages_by_slot(&snapshot), vec![Some(1), Some(2)]);
    Ok(())
}

#[test]
fn test_hit_increments_counter() -> Result<()> {
    let mut sim = create_test_simulator(PolicyKind::Lfu)?;
    sim.run([7, 7, 7, 8]);

    let snapshot = sim.snapshot();
    assert_eq!(frequencies(&snapshot), vec![3, 1, 0, 0]);
    assert_eq!(pages_by_slot(&snapshot), vec![Some(7), Some(8), None, None]);
    Ok(())
}
