//! Set-Associative Write-Back Cache.
//!
//! This module implements the cache access engine. It models:
//! 1. **Lookup:** Address decoding and tag match within the addressed set.
//! 2. **Write-back, allocate-on-miss:** Misses always fill a line; stores only
//!    reach memory when a dirty victim is evicted.
//! 3. **LRU replacement:** Label-based recency ranks (see [`lru`]).
//! 4. **Action logging:** Every data movement is reported to an [`ActionSink`].
//!
//! Memory is touched only on a miss: `block_size` writes for a dirty victim,
//! then `block_size` reads for the fill.

/// Label-based LRU recency tracking.
pub mod lru;

/// Line storage grouped into sets.
pub mod store;

pub use store::{Block, BlockStore};

use crate::action::{Action, ActionSink, ActionType};
use crate::common::addr::{DecodedAddr, block_address, decode};
use crate::common::data::{AccessType, Word};
use crate::common::error::ConfigError;
use crate::config::CacheConfig;
use crate::memory::WordMemory;
use crate::stats::CacheStats;

/// Cache between a processor and a word-addressable memory.
///
/// Owns the line table, the backing memory `M`, and the action log `L`.
/// Several independent instances may coexist; nothing is global.
///
/// # Examples
///
/// ```
/// use cachesim_core::action::{Action, ActionType};
/// use cachesim_core::cache::CacheSim;
/// use cachesim_core::config::CacheConfig;
/// use cachesim_core::memory::FlatMemory;
///
/// let memory = FlatMemory::from_words((0..16).collect());
/// let mut cache = CacheSim::new(CacheConfig::default(), memory, Vec::<Action>::new()).unwrap();
///
/// assert_eq!(cache.read(5), 5);
/// assert_eq!(
///     cache.log().as_slice(),
///     &[
///         Action::new(4, 4, ActionType::MemoryToCache),
///         Action::new(5, 1, ActionType::CacheToProcessor),
///     ]
/// );
/// ```
#[derive(Debug)]
pub struct CacheSim<M, L> {
    store: BlockStore,
    memory: M,
    log: L,
    stats: CacheStats,
}

impl<M: WordMemory, L: ActionSink> CacheSim<M, L> {
    /// Validates `config` and builds an empty cache in front of `memory`.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] for an invalid geometry.
    pub fn new(config: CacheConfig, memory: M, log: L) -> Result<Self, ConfigError> {
        Ok(Self {
            store: BlockStore::new(config)?,
            memory,
            log,
            stats: CacheStats::default(),
        })
    }

    /// Rebuilds the cache with a new geometry, discarding all lines and statistics.
    ///
    /// Dirty lines are dropped without being written back. Memory and log are kept.
    /// On error the cache is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] for an invalid geometry.
    pub fn initialize(&mut self, config: CacheConfig) -> Result<(), ConfigError> {
        self.store = BlockStore::new(config)?;
        self.stats = CacheStats::default();
        Ok(())
    }

    /// Performs one processor access.
    ///
    /// # Arguments
    ///
    /// * `addr` - Word address; must lie inside the backing memory.
    /// * `access` - Read, or write with the word to store.
    ///
    /// # Returns
    ///
    /// The addressed word for a read, `None` for a write.
    pub fn access(&mut self, addr: u64, access: AccessType) -> Option<Word> {
        let decoded = decode(addr, self.store.config());
        match access {
            AccessType::Read => self.stats.reads += 1,
            AccessType::Write(_) => self.stats.writes += 1,
        }

        let slot = self.make_resident(addr, decoded);
        let block = self.store.block_mut(decoded.set, slot);
        match access {
            AccessType::Read => {
                let word = block.data[decoded.offset];
                self.emit(Action::new(addr, 1, ActionType::CacheToProcessor));
                Some(word)
            }
            AccessType::Write(word) => {
                block.data[decoded.offset] = word;
                block.dirty = true;
                block.valid = true;
                self.emit(Action::new(addr, 1, ActionType::ProcessorToCache));
                None
            }
        }
    }

    /// Reads the word at `addr` through the cache.
    pub fn read(&mut self, addr: u64) -> Word {
        self.access(addr, AccessType::Read).unwrap_or_default()
    }

    /// Writes `word` to `addr` through the cache.
    pub fn write(&mut self, addr: u64, word: Word) {
        let _ = self.access(addr, AccessType::Write(word));
    }

    /// Returns the slot holding the block of `addr`, filling it on a miss.
    ///
    /// Hits are touched; fills are inserted as most recently used.
    fn make_resident(&mut self, addr: u64, decoded: DecodedAddr) -> usize {
        let DecodedAddr { set, tag, .. } = decoded;
        if let Some(slot) = self.store.find(set, tag) {
            tracing::debug!(addr, set, tag, slot, "hit");
            self.stats.hits += 1;
            self.store.touch(set, slot);
            return slot;
        }

        tracing::debug!(addr, set, tag, "miss");
        self.stats.misses += 1;
        let slot = match self.store.find_free_slot(set) {
            Some(slot) => slot,
            None => {
                let victim = self.store.select_victim(set);
                self.evict(set, victim);
                victim
            }
        };
        self.fill(addr, decoded, slot);
        self.store.insert(set, slot);
        slot
    }

    /// Writes back or discards the line at `(set, slot)`.
    fn evict(&mut self, set: usize, slot: usize) {
        let config = *self.store.config();
        let block = self.store.block(set, slot);
        let base = block_address(block.tag, block.set, &config);

        if block.dirty {
            for (i, &word) in block.data.iter().enumerate() {
                self.memory.write_word(base + i as u64, word);
            }
            self.stats.writebacks += 1;
            self.stats.words_to_memory += config.block_size as u64;
            self.emit(Action::new(base, config.block_size, ActionType::CacheToMemory));
        } else {
            self.stats.clean_evictions += 1;
            self.emit(Action::new(base, config.block_size, ActionType::CacheToNowhere));
        }
    }

    /// Loads the memory block containing `addr` into `(decoded.set, slot)`.
    fn fill(&mut self, addr: u64, decoded: DecodedAddr, slot: usize) {
        let base = decoded.block_base(addr);
        let block_size = self.store.config().block_size;
        let block = self.store.block_mut(decoded.set, slot);
        for (i, word) in block.data.iter_mut().enumerate() {
            *word = self.memory.read_word(base + i as u64);
        }
        block.tag = decoded.tag;
        block.valid = true;
        block.dirty = false;

        self.stats.words_from_memory += block_size as u64;
        self.emit(Action::new(base, block_size, ActionType::MemoryToCache));
    }

    fn emit(&mut self, action: Action) {
        tracing::trace!(%action);
        self.log.record(action);
    }
}

impl<M, L> CacheSim<M, L> {
    /// Returns `true` if the block containing `addr` is resident.
    ///
    /// Pure query: no recency update, no logging, no memory access.
    pub fn contains(&self, addr: u64) -> bool {
        let decoded = decode(addr, self.store.config());
        self.store.find(decoded.set, decoded.tag).is_some()
    }

    /// Line table.
    pub const fn store(&self) -> &BlockStore {
        &self.store
    }

    /// Cache geometry.
    pub const fn config(&self) -> &CacheConfig {
        self.store.config()
    }

    /// Counters accumulated since the last initialization.
    pub const fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Backing memory.
    pub const fn memory(&self) -> &M {
        &self.memory
    }

    /// Mutable backing memory, for loading images between accesses.
    pub const fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Action log.
    pub const fn log(&self) -> &L {
        &self.log
    }

    /// Mutable action log.
    pub const fn log_mut(&mut self) -> &mut L {
        &mut self.log
    }

    /// Consumes the cache and returns its memory and log.
    pub fn into_parts(self) -> (M, L) {
        (self.memory, self.log)
    }
}
