//! Cache Line Storage.
//!
//! The store owns every line of the cache in one contiguous table. Set `s`
//! occupies indices `s * blocks_per_set .. (s + 1) * blocks_per_set`; lines are
//! addressed by `(set, slot)` with `slot` relative to the start of the set.

use std::fmt;
use std::ops::Range;

use crate::common::constants::INVALID_TAG;
use crate::common::data::Word;
use crate::common::error::ConfigError;
use crate::config::CacheConfig;

/// Cache line: data words plus tag, validity, dirty bit, and recency label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub(crate) data: Vec<Word>,
    pub(crate) dirty: bool,
    pub(crate) valid: bool,
    pub(crate) tag: u64,
    pub(crate) set: usize,
    pub(crate) label: usize,
}

impl Block {
    /// Creates an empty line owned by `set`.
    fn empty(block_size: usize, set: usize) -> Self {
        Self {
            data: vec![0; block_size],
            dirty: false,
            valid: false,
            tag: INVALID_TAG,
            set,
            label: 0,
        }
    }

    /// Words held by the line.
    pub fn data(&self) -> &[Word] {
        &self.data
    }

    /// Returns `true` if the line was written since it was filled.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns `true` if the line holds a memory block.
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Tag of the held block; [`INVALID_TAG`] for a line never filled.
    pub const fn tag(&self) -> u64 {
        self.tag
    }

    /// Set that owns this line.
    pub const fn set(&self) -> usize {
        self.set
    }

    /// Recency rank among the valid lines of the set; 0 is most recently used.
    pub const fn label(&self) -> usize {
        self.label
    }
}

/// Fixed table of cache lines grouped into sets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockStore {
    config: CacheConfig,
    blocks: Vec<Block>,
}

impl BlockStore {
    /// Validates `config` and builds a store with every line invalid.
    ///
    /// Advisory warnings for the geometry are logged.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] reported by [`CacheConfig::validate`].
    pub fn new(config: CacheConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        for warning in config.warnings() {
            tracing::warn!("{warning}");
        }
        tracing::info!(
            total_lines = config.total_blocks(),
            block_size = config.block_size,
            blocks_per_set = config.blocks_per_set,
            num_sets = config.num_sets,
            "cache initialized"
        );

        let blocks = (0..config.num_sets)
            .flat_map(|set| (0..config.blocks_per_set).map(move |_| set))
            .map(|set| Block::empty(config.block_size, set))
            .collect();
        Ok(Self { config, blocks })
    }

    /// Geometry of the store.
    pub const fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Every line, set by set.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Table indices covered by `set`.
    #[inline]
    const fn set_range(&self, set: usize) -> Range<usize> {
        let base = set * self.config.blocks_per_set;
        base..base + self.config.blocks_per_set
    }

    /// Lines of `set`, indexed by slot.
    #[inline]
    pub fn set_blocks(&self, set: usize) -> &[Block] {
        &self.blocks[self.set_range(set)]
    }

    /// Mutable lines of `set`, indexed by slot.
    #[inline]
    pub(crate) fn set_blocks_mut(&mut self, set: usize) -> &mut [Block] {
        let range = self.set_range(set);
        &mut self.blocks[range]
    }

    /// Line at `(set, slot)`.
    #[inline]
    pub fn block(&self, set: usize, slot: usize) -> &Block {
        &self.set_blocks(set)[slot]
    }

    /// Mutable line at `(set, slot)`.
    #[inline]
    pub(crate) fn block_mut(&mut self, set: usize, slot: usize) -> &mut Block {
        &mut self.set_blocks_mut(set)[slot]
    }

    /// Slot of the valid line in `set` holding `tag`, if any.
    pub fn find(&self, set: usize, tag: u64) -> Option<usize> {
        self.set_blocks(set)
            .iter()
            .position(|b| b.valid && b.tag == tag)
    }

    /// First invalid slot in `set`, or `None` if the set is full.
    pub fn find_free_slot(&self, set: usize) -> Option<usize> {
        self.set_blocks(set).iter().position(|b| !b.valid)
    }

    /// Number of valid lines in `set`.
    pub fn valid_count(&self, set: usize) -> usize {
        self.set_blocks(set).iter().filter(|b| b.valid).count()
    }
}

impl fmt::Display for BlockStore {
    /// Dumps every line's data, set by set.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "cache:")?;
        for set in 0..self.config.num_sets {
            writeln!(f, "\tset {set}:")?;
            for (slot, block) in self.set_blocks(set).iter().enumerate() {
                write!(f, "\t\t[ {slot} ]: {{")?;
                for word in &block.data {
                    write!(f, " {word}")?;
                }
                writeln!(f, " }}")?;
            }
        }
        write!(f, "end cache")
    }
}
