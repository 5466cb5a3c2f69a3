//! Memory Access Types.
//!
//! This module defines the classification of processor accesses handled by the cache.
//! These types are used for the following:
//! 1. **Request Encoding:** Carrying the store data together with the write request.
//! 2. **Trace Replay:** Representing parsed access traces.
//! 3. **Statistics Tracking:** Categorizing accesses into reads and writes.

/// A machine word as stored in the cache and in backing memory.
pub type Word = i32;

/// Type of processor access.
///
/// Writes carry the word to store, so a write request can never be issued
/// without its data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessType {
    /// Data read access (`lw` / instruction fetch).
    ///
    /// Returns the addressed word to the processor.
    Read,

    /// Data write access (`sw`).
    ///
    /// Stores the associated word at the addressed location.
    Write(Word),
}

impl AccessType {
    /// Returns `true` for write accesses.
    #[inline]
    pub const fn is_write(self) -> bool {
        matches!(self, Self::Write(_))
    }
}
