use anyhow::Result;

use framesim::{PolicyKind, Simulator};

fn main() -> Result<()> {
    // LRU: fill the four frames, then force one replacement
    let mut sim = Simulator::new(4, PolicyKind::Lru)?;
    for page in [1, 2, 3, 4] {
        sim.reference(page);
    }
    println!("{}", sim.snapshot());
    sim.reference(5);
    println!("{}", sim.snapshot());

    // Clock: same stream; the sweep clears every bit before evicting
    let mut sim = Simulator::new(4, PolicyKind::Clock)?;
    for page in [1, 2, 3, 4] {
        sim.reference(page);
    }
    println!("{}", sim.snapshot());
    sim.reference(5);
    println!("{}", sim.snapshot());

    // LFU: a longer stream with repeats, dumping after every reference
    let mut sim = Simulator::new(4, PolicyKind::Lfu)?;
    for page in [1, 2, 3, 4, 5, 1, 2, 1, 3, 4] {
        sim.reference(page);
        println!("{}", sim.snapshot());
    }

    Ok(())
}
