//! Global Cache Constants.
//!
//! This module defines the fixed limits of the simulated cache. It includes:
//! 1. **Capacity Limits:** Maximum number of lines and maximum words per line.
//! 2. **Sentinels:** The tag value held by lines that have never been filled.
//! 3. **Memory Defaults:** Size of the default flat word-addressable memory.

/// Maximum total number of cache lines (`num_sets * blocks_per_set`).
pub const MAX_CACHE_SIZE: usize = 256;

/// Maximum number of words in a single cache line.
pub const MAX_BLOCK_SIZE: usize = 256;

/// Tag stored in a line that has never been filled.
///
/// All-ones, so it can never equal a tag produced by decoding an address
/// inside a realistic memory.
pub const INVALID_TAG: u64 = u64::MAX;

/// Number of words in the default backing memory (the 16-bit LC-2K word space).
pub const DEFAULT_MEMORY_WORDS: usize = 65536;

/// Marker that starts every action log line.
pub const ACTION_MARKER: &str = "$$$";
