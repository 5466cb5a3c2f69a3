//! Configuration and Input Error definitions.
//!
//! This module defines the error and warning types for the simulator. It provides:
//! 1. **Configuration Errors:** Fatal geometry violations detected at initialization.
//! 2. **Configuration Warnings:** Advisory conditions that do not stop the simulation.
//! 3. **Input Errors:** Failures while reading access traces and memory images.
//!
//! The `Display` text of the configuration diagnostics is printed verbatim by
//! the command-line front end after an `error:` or `warning:` prefix.

use std::fmt;
use std::io;

use thiserror::Error;

use super::constants::{MAX_BLOCK_SIZE, MAX_CACHE_SIZE};

/// Fatal cache configuration errors.
///
/// Checked once, in declaration order, before any access is processed.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Block size, set count, or blocks per set is zero or negative.
    #[error("input parameters must be positive numbers")]
    NonPositive,

    /// `num_sets * blocks_per_set` exceeds the line capacity.
    #[error("cache must be no larger than {max} blocks")]
    TooManyBlocks {
        /// Maximum number of lines.
        max: usize,
    },

    /// Block size exceeds the maximum line width.
    #[error("blocks must be no larger than {max} words")]
    BlockTooLarge {
        /// Maximum words per line.
        max: usize,
    },

    /// A JSON configuration document could not be parsed.
    #[error("invalid cache configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConfigError {
    /// Capacity error carrying the built-in line limit.
    pub const fn too_many_blocks() -> Self {
        Self::TooManyBlocks {
            max: MAX_CACHE_SIZE,
        }
    }

    /// Block width error carrying the built-in word limit.
    pub const fn block_too_large() -> Self {
        Self::BlockTooLarge {
            max: MAX_BLOCK_SIZE,
        }
    }
}

/// Non-fatal configuration conditions.
///
/// Address decoding divides rather than masks, so the simulation stays
/// correct; the warning only flags an unusual geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigWarning {
    /// The block size is not a power of two.
    BlockSizeNotPowerOfTwo(usize),
    /// The number of sets is not a power of two.
    NumSetsNotPowerOfTwo(usize),
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlockSizeNotPowerOfTwo(n) => write!(f, "blockSize {n} is not a power of 2"),
            Self::NumSetsNotPowerOfTwo(n) => write!(f, "numSets {n} is not a power of 2"),
        }
    }
}

/// Errors raised while loading access traces or memory images.
#[derive(Debug, Error)]
pub enum TraceError {
    /// The input file could not be read.
    #[error("could not read '{path}': {source}")]
    Io {
        /// Path of the file being read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A line could not be parsed.
    #[error("line {line}: {reason}: '{text}'")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// Offending line with surrounding whitespace removed.
        text: String,
        /// What was wrong with it.
        reason: &'static str,
    },
}
