//! Configuration system for the cache simulator.
//!
//! This module defines the cache geometry and its validation. It provides:
//! 1. **Defaults:** Baseline geometry used when fields are omitted.
//! 2. **Structure:** `CacheConfig` (block size, set count, blocks per set).
//! 3. **Validation:** Fatal limit checks and advisory power-of-two warnings.
//!
//! Configuration is supplied as three integers on the command line or as a JSON
//! document; `CacheConfig::default()` is used by tests and examples.

use serde::Deserialize;

use crate::common::constants::{MAX_BLOCK_SIZE, MAX_CACHE_SIZE};
use crate::common::error::{ConfigError, ConfigWarning};

/// Default configuration constants for the simulator.
mod defaults {
    /// Default words per cache line.
    pub const BLOCK_SIZE: usize = 4;

    /// Default number of sets.
    pub const NUM_SETS: usize = 2;

    /// Default associativity (lines per set).
    pub const BLOCKS_PER_SET: usize = 2;
}

/// Cache geometry.
///
/// Immutable once a cache has been built from it. All three dimensions must
/// be positive, `num_sets * blocks_per_set` must not exceed
/// [`MAX_CACHE_SIZE`] and `block_size` must not exceed [`MAX_BLOCK_SIZE`].
///
/// # Examples
///
/// ```
/// use cachesim_core::config::CacheConfig;
///
/// let config = CacheConfig::from_json(r#"{ "block_size": 8, "num_sets": 4 }"#).unwrap();
/// assert_eq!(config.block_size, 8);
/// assert_eq!(config.num_sets, 4);
/// assert_eq!(config.blocks_per_set, 2);
/// assert_eq!(config.total_blocks(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CacheConfig {
    /// Words per cache line
    #[serde(default = "CacheConfig::default_block_size", alias = "blockSize")]
    pub block_size: usize,

    /// Number of sets
    #[serde(default = "CacheConfig::default_num_sets", alias = "numSets")]
    pub num_sets: usize,

    /// Lines per set (associativity)
    #[serde(
        default = "CacheConfig::default_blocks_per_set",
        alias = "blocksPerSet"
    )]
    pub blocks_per_set: usize,
}

impl CacheConfig {
    /// Builds and validates a geometry from signed integers, as typed by a user.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonPositive`] if any value is zero or negative,
    /// otherwise any error reported by [`CacheConfig::validate`].
    pub fn new(block_size: i64, num_sets: i64, blocks_per_set: i64) -> Result<Self, ConfigError> {
        if block_size <= 0 || num_sets <= 0 || blocks_per_set <= 0 {
            return Err(ConfigError::NonPositive);
        }
        let to_usize = |v: i64| usize::try_from(v).unwrap_or(usize::MAX);
        let config = Self {
            block_size: to_usize(block_size),
            num_sets: to_usize(num_sets),
            blocks_per_set: to_usize(blocks_per_set),
        };
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a JSON configuration document.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input, otherwise any error
    /// reported by [`CacheConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the fatal geometry limits.
    ///
    /// # Errors
    ///
    /// In order: [`ConfigError::NonPositive`], [`ConfigError::TooManyBlocks`],
    /// [`ConfigError::BlockTooLarge`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.block_size == 0 || self.num_sets == 0 || self.blocks_per_set == 0 {
            return Err(ConfigError::NonPositive);
        }
        match self.num_sets.checked_mul(self.blocks_per_set) {
            Some(total) if total <= MAX_CACHE_SIZE => {}
            _ => return Err(ConfigError::too_many_blocks()),
        }
        if self.block_size > MAX_BLOCK_SIZE {
            return Err(ConfigError::block_too_large());
        }
        Ok(())
    }

    /// Returns the advisory warnings for this geometry (possibly none).
    pub fn warnings(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();
        if !self.block_size.is_power_of_two() {
            warnings.push(ConfigWarning::BlockSizeNotPowerOfTwo(self.block_size));
        }
        if !self.num_sets.is_power_of_two() {
            warnings.push(ConfigWarning::NumSetsNotPowerOfTwo(self.num_sets));
        }
        warnings
    }

    /// Total number of lines in the cache.
    #[inline]
    pub const fn total_blocks(&self) -> usize {
        self.num_sets * self.blocks_per_set
    }

    /// Returns the default block size.
    const fn default_block_size() -> usize {
        defaults::BLOCK_SIZE
    }

    /// Returns the default set count.
    const fn default_num_sets() -> usize {
        defaults::NUM_SETS
    }

    /// Returns the default associativity.
    const fn default_blocks_per_set() -> usize {
        defaults::BLOCKS_PER_SET
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            block_size: defaults::BLOCK_SIZE,
            num_sets: defaults::NUM_SETS,
            blocks_per_set: defaults::BLOCKS_PER_SET,
        }
    }
}
