//! # Address Decoding Tests
//!
//! Verifies `decode` and `block_address` for a range of geometries,
//! including ones whose dimensions are not powers of two.

use cachesim_core::common::addr::{DecodedAddr, block_address, decode};
use cachesim_core::config::CacheConfig;
use proptest::prelude::*;
use rstest::rstest;

fn geometry(block_size: usize, num_sets: usize) -> CacheConfig {
    CacheConfig {
        block_size,
        num_sets,
        blocks_per_set: 1,
    }
}

/// Hand-computed decodings.
///
/// offset = addr % block_size, set = (addr / block_size) % num_sets,
/// tag = addr / block_size / num_sets.
#[rstest]
#[case(1, 1, 0, 0, 0, 0)]
#[case(1, 1, 7, 0, 0, 7)]
#[case(4, 2, 5, 1, 1, 0)]
#[case(4, 2, 13, 1, 1, 1)]
#[case(4, 2, 16, 0, 0, 2)]
#[case(8, 4, 255, 7, 3, 7)]
#[case(3, 3, 10, 1, 0, 1)]
#[case(5, 3, 74, 4, 2, 4)]
fn decode_matches_hand_computation(
    #[case] block_size: usize,
    #[case] num_sets: usize,
    #[case] addr: u64,
    #[case] offset: usize,
    #[case] set: usize,
    #[case] tag: u64,
) {
    let decoded = decode(addr, &geometry(block_size, num_sets));
    assert_eq!(decoded, DecodedAddr { offset, set, tag });
}

/// The block base strips the offset only.
#[test]
fn block_base_strips_offset() {
    let config = geometry(4, 2);
    let decoded = decode(13, &config);
    assert_eq!(decoded.block_base(13), 12);
}

/// Blocks map round-robin onto sets.
#[test]
fn consecutive_blocks_rotate_through_sets() {
    let config = geometry(2, 4);
    let sets: Vec<usize> = (0..8).map(|b| decode(b * 2, &config).set).collect();
    assert_eq!(sets, vec![0, 1, 2, 3, 0, 1, 2, 3]);
}

proptest! {
    /// `block_address` rebuilds the base of the block an address lives in,
    /// for any geometry, including non-powers of two.
    #[test]
    fn block_address_inverts_decode(
        block_size in 1usize..=256,
        num_sets in 1usize..=256,
        addr in 0u64..1_000_000,
    ) {
        let config = geometry(block_size, num_sets);
        let decoded = decode(addr, &config);
        prop_assert!(decoded.offset < block_size);
        prop_assert!(decoded.set < num_sets);
        prop_assert_eq!(
            block_address(decoded.tag, decoded.set, &config),
            decoded.block_base(addr)
        );
    }
}
