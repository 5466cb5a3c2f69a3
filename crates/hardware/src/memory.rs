//! Word-Addressable Backing Memory.
//!
//! This module defines the memory the cache fills from and writes back to. It provides:
//! 1. **Interface:** The `WordMemory` trait, the only way the cache reaches memory.
//! 2. **Flat Memory:** A `Vec`-backed implementation with an access counter.
//!
//! The cache calls memory one word at a time, so implementations can count
//! calls to verify that hits never touch memory.

use crate::common::constants::DEFAULT_MEMORY_WORDS;
use crate::common::data::Word;

/// Word-granular backing store behind the cache.
pub trait WordMemory {
    /// Reads the word at `addr`.
    fn read_word(&mut self, addr: u64) -> Word;

    /// Writes `word` to `addr`.
    fn write_word(&mut self, addr: u64, word: Word);
}

impl<T: WordMemory + ?Sized> WordMemory for &mut T {
    #[inline]
    fn read_word(&mut self, addr: u64) -> Word {
        (**self).read_word(addr)
    }

    #[inline]
    fn write_word(&mut self, addr: u64, word: Word) {
        (**self).write_word(addr, word);
    }
}

/// Flat array of words starting at address zero.
///
/// Reads outside the array return 0 and writes outside it are dropped; both
/// are logged, since the cache itself never checks address ranges.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlatMemory {
    words: Vec<Word>,
    accesses: u64,
}

impl FlatMemory {
    /// Creates a zero-filled memory of `size` words.
    pub fn new(size: usize) -> Self {
        Self {
            words: vec![0; size],
            accesses: 0,
        }
    }

    /// Creates a memory holding exactly `words`.
    pub const fn from_words(words: Vec<Word>) -> Self {
        Self { words, accesses: 0 }
    }

    /// Copies `data` into memory starting at `offset`.
    ///
    /// Words falling past the end of memory are ignored. Loading does not
    /// count as an access.
    pub fn load(&mut self, offset: usize, data: &[Word]) {
        if offset >= self.words.len() {
            return;
        }
        let end = (offset + data.len()).min(self.words.len());
        self.words[offset..end].copy_from_slice(&data[..end - offset]);
    }

    /// Returns the memory contents.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words in memory.
    pub const fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the memory holds no words.
    pub const fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of `read_word`/`write_word` calls since creation.
    pub const fn num_accesses(&self) -> u64 {
        self.accesses
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new(DEFAULT_MEMORY_WORDS)
    }
}

impl WordMemory for FlatMemory {
    fn read_word(&mut self, addr: u64) -> Word {
        self.accesses += 1;
        if let Some(word) = usize::try_from(addr).ok().and_then(|i| self.words.get(i)) {
            *word
        } else {
            tracing::warn!(addr, size = self.words.len(), "read outside memory");
            0
        }
    }

    fn write_word(&mut self, addr: u64, word: Word) {
        self.accesses += 1;
        if let Some(slot) = usize::try_from(addr)
            .ok()
            .and_then(|i| self.words.get_mut(i))
        {
            *slot = word;
        } else {
            tracing::warn!(addr, size = self.words.len(), "write outside memory dropped");
        }
    }
}
