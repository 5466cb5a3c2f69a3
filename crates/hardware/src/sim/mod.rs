//! Simulation utilities and input loading.
//!
//! Provides loaders for memory images and access traces, and replay of a
//! trace through a cache.

/// Memory image loading.
pub mod loader;

/// Access trace parsing.
pub mod trace;

pub use loader::{load_memory_image, parse_memory_image};
pub use trace::{TraceOp, load_trace, parse_trace};

use crate::action::ActionSink;
use crate::cache::CacheSim;
use crate::common::data::Word;
use crate::memory::WordMemory;

/// Applies `ops` to `cache` in order.
///
/// # Returns
///
/// The words returned by the reads, in trace order.
pub fn replay<M: WordMemory, L: ActionSink>(cache: &mut CacheSim<M, L>, ops: &[TraceOp]) -> Vec<Word> {
    ops.iter()
        .filter_map(|op| cache.access(op.addr, op.access))
        .collect()
}
