//! Set-associative cache simulator library.
//!
//! This crate models a write-back, allocate-on-miss cache with LRU replacement
//! sitting between a processor and a word-addressable memory:
//! 1. **Cache:** Address decoding, line storage, label-based LRU, and the access engine.
//! 2. **Memory:** The word-memory interface and a flat implementation.
//! 3. **Action log:** One record per data movement, in a fixed text format.
//! 4. **Simulation:** Configuration, statistics, memory images, and trace replay.

/// Data-movement records and sinks.
pub mod action;
/// Cache engine, line storage, and LRU tracking.
pub mod cache;
/// Common types and constants (address decoding, access types, errors).
pub mod common;
/// Cache geometry and validation.
pub mod config;
/// Backing memory interface and flat implementation.
pub mod memory;
/// Trace parsing, memory images, and replay.
pub mod sim;
/// Cache statistics collection and reporting.
pub mod stats;

/// Main cache type; construct with `CacheSim::new`.
pub use crate::cache::CacheSim;
/// Cache geometry; use `CacheConfig::default()`, `CacheConfig::new`, or JSON.
pub use crate::config::CacheConfig;
