use cachesim_core::cache::BlockStore;
use cachesim_core::common::constants::INVALID_TAG;
use cachesim_core::common::error::ConfigError;
use cachesim_core::config::CacheConfig;
use pretty_assertions::assert_eq;

use crate::common::cache;

fn store(block_size: usize, num_sets: usize, blocks_per_set: usize) -> BlockStore {
    BlockStore::new(CacheConfig {
        block_size,
        num_sets,
        blocks_per_set,
    })
    .unwrap()
}

#[test]
fn new_store_is_empty() {
    let store = store(4, 2, 3);
    assert_eq!(store.blocks().len(), 6);
    for block in store.blocks() {
        assert!(!block.is_valid());
        assert!(!block.is_dirty());
        assert_eq!(block.tag(), INVALID_TAG);
        assert_eq!(block.data(), &[0, 0, 0, 0]);
    }
    assert_eq!(store.valid_count(0), 0);
    assert_eq!(store.find_free_slot(1), Some(0));
}

#[test]
fn lines_know_their_set() {
    let store = store(1, 3, 2);
    for set in 0..3 {
        assert_eq!(store.set_blocks(set).len(), 2);
        assert!(store.set_blocks(set).iter().all(|b| b.set() == set));
    }
}

#[test]
fn new_rejects_invalid_geometry() {
    let config = CacheConfig {
        block_size: 300,
        num_sets: 1,
        blocks_per_set: 1,
    };
    assert!(matches!(
        BlockStore::new(config),
        Err(ConfigError::BlockTooLarge { .. })
    ));
}

#[test]
fn find_requires_valid_line() {
    let store = store(1, 1, 2);
    assert_eq!(store.find(0, INVALID_TAG), None);
    assert_eq!(store.find(0, 0), None);
}

#[test]
fn fills_use_free_slots_in_order() {
    let mut cache = cache(1, 1, 3);
    let _ = cache.read(7);
    let _ = cache.read(3);
    let store = cache.store();
    assert_eq!(store.find(0, 7), Some(0));
    assert_eq!(store.find(0, 3), Some(1));
    assert_eq!(store.find_free_slot(0), Some(2));
    assert_eq!(store.valid_count(0), 2);
}

#[test]
fn labels_track_recency_through_the_engine() {
    let mut cache = cache(1, 1, 3);
    let _ = cache.read(0);
    let _ = cache.read(1);
    let _ = cache.read(2);
    let labels: Vec<usize> = cache.store().set_blocks(0).iter().map(|b| b.label()).collect();
    assert_eq!(labels, vec![2, 1, 0]);

    let _ = cache.read(1);
    let labels: Vec<usize> = cache.store().set_blocks(0).iter().map(|b| b.label()).collect();
    assert_eq!(labels, vec![2, 0, 1]);
    assert_eq!(cache.store().select_victim(0), 0);
}

#[test]
fn dump_of_empty_store() {
    let store = store(2, 2, 1);
    assert_eq!(
        store.to_string(),
        "\ncache:\n\tset 0:\n\t\t[ 0 ]: { 0 0 }\n\tset 1:\n\t\t[ 0 ]: { 0 0 }\nend cache"
    );
}

#[test]
fn dump_shows_cached_words() {
    let mut cache = cache(2, 1, 2);
    let _ = cache.read(2);
    cache.write(0, -5);
    assert_eq!(
        cache.store().to_string(),
        "\ncache:\n\tset 0:\n\t\t[ 0 ]: { 102 103 }\n\t\t[ 1 ]: { -5 101 }\nend cache"
    );
}
