//! # Simulation Tests
//!
//! Trace parsing, memory images, and replaying traces through a cache.
