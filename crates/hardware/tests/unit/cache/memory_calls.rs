//! Memory call discipline, verified with a strict mock.
//!
//! Any memory call without a matching expectation fails the test, so hits
//! are shown to leave memory untouched simply by setting no expectations.

use cachesim_core::action::Action;
use cachesim_core::cache::CacheSim;
use cachesim_core::common::data::Word;
use cachesim_core::config::CacheConfig;
use mockall::Sequence;
use mockall::predicate::eq;

use crate::common::mocks::memory::MockMemory;

fn config(block_size: usize, num_sets: usize, blocks_per_set: usize) -> CacheConfig {
    CacheConfig {
        block_size,
        num_sets,
        blocks_per_set,
    }
}

fn expect_fill(memory: &mut MockMemory, seq: &mut Sequence, base: u64, block_size: u64) {
    for addr in base..base + block_size {
        let _ = memory
            .expect_read_word()
            .with(eq(addr))
            .times(1)
            .in_sequence(seq)
            .returning(|a| a as Word * 10);
    }
}

#[test]
fn fill_reads_block_in_order() {
    let mut memory = MockMemory::new();
    let mut seq = Sequence::new();
    expect_fill(&mut memory, &mut seq, 8, 4);

    let mut cache = CacheSim::new(config(4, 1, 1), memory, Vec::<Action>::new()).unwrap();
    assert_eq!(cache.read(10), 100);
}

#[test]
fn hits_never_touch_memory() {
    let mut memory = MockMemory::new();
    let mut seq = Sequence::new();
    expect_fill(&mut memory, &mut seq, 0, 2);

    let mut cache = CacheSim::new(config(2, 1, 1), memory, Vec::<Action>::new()).unwrap();
    assert_eq!(cache.read(0), 0);
    assert_eq!(cache.read(1), 10);
    cache.write(0, 5);
    cache.write(1, 6);
    assert_eq!(cache.read(0), 5);
    assert_eq!(cache.read(1), 6);
}

#[test]
fn write_back_precedes_fill() {
    let mut memory = MockMemory::new();
    let mut seq = Sequence::new();
    expect_fill(&mut memory, &mut seq, 0, 2);
    for (addr, word) in [(0, 5), (1, 10)] {
        let _ = memory
            .expect_write_word()
            .with(eq(addr), eq(word))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
    }
    expect_fill(&mut memory, &mut seq, 2, 2);

    let mut cache = CacheSim::new(config(2, 1, 1), memory, Vec::<Action>::new()).unwrap();
    cache.write(0, 5);
    assert_eq!(cache.read(3), 30);
}

#[test]
fn clean_eviction_never_writes() {
    let mut memory = MockMemory::new();
    let mut seq = Sequence::new();
    expect_fill(&mut memory, &mut seq, 0, 1);
    expect_fill(&mut memory, &mut seq, 1, 1);
    expect_fill(&mut memory, &mut seq, 2, 1);
    let _ = memory.expect_write_word().never();

    let mut cache = CacheSim::new(config(1, 1, 2), memory, Vec::<Action>::new()).unwrap();
    let _ = cache.read(0);
    let _ = cache.read(1);
    let _ = cache.read(2);
}

#[test]
fn write_back_uses_victim_address() {
    let mut memory = MockMemory::new();
    let mut seq = Sequence::new();
    expect_fill(&mut memory, &mut seq, 9, 3);
    for addr in 9..12 {
        let _ = memory
            .expect_write_word()
            .with(eq(addr), mockall::predicate::always())
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
    }
    expect_fill(&mut memory, &mut seq, 0, 3);

    let mut cache = CacheSim::new(config(3, 3, 1), memory, Vec::<Action>::new()).unwrap();
    cache.write(10, 1);
    let _ = cache.read(2);
}
