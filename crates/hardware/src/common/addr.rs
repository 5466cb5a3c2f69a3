//! Word Address Decomposition.
//!
//! This module splits a linear word address into the three fields used by a
//! set-associative cache. It provides the following:
//! 1. **Decoding:** `(offset, set, tag)` from an address and the cache geometry.
//! 2. **Reconstruction:** The base address of the memory block held by a line.
//!
//! Decoding uses integer division and remainder rather than bit masks, so it is
//! correct for geometries whose dimensions are not powers of two.

use crate::config::CacheConfig;

/// An address split into its cache fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DecodedAddr {
    /// Word offset within the cache line.
    pub offset: usize,
    /// Index of the set the address maps to.
    pub set: usize,
    /// Tag identifying which memory block occupies the line.
    pub tag: u64,
}

impl DecodedAddr {
    /// Returns the address of the first word of the block containing `addr`.
    ///
    /// `addr` must be the address this value was decoded from.
    #[inline]
    pub const fn block_base(&self, addr: u64) -> u64 {
        addr - self.offset as u64
    }
}

/// Decodes a word address under the given cache geometry.
///
/// # Arguments
///
/// * `addr` - Linear word address.
/// * `config` - Cache geometry (block size and set count).
///
/// # Returns
///
/// The `offset`, `set` and `tag` fields of the address.
#[inline]
pub const fn decode(addr: u64, config: &CacheConfig) -> DecodedAddr {
    let block_size = config.block_size as u64;
    let num_sets = config.num_sets as u64;
    let block_number = addr / block_size;
    DecodedAddr {
        offset: (addr % block_size) as usize,
        set: (block_number % num_sets) as usize,
        tag: block_number / num_sets,
    }
}

/// Returns the first word address of the memory block identified by `tag` in `set`.
///
/// This is the inverse of [`decode`] for offset zero and is used to find where
/// an evicted line belongs in memory.
#[inline]
pub const fn block_address(tag: u64, set: usize, config: &CacheConfig) -> u64 {
    (tag * config.num_sets as u64 + set as u64) * config.block_size as u64
}
