//! # Cache Tests
//!
//! Tests for the line table, the access engine, and the order in which the
//! engine talks to memory.


/// Exact memory call order, checked against a mock memory.
pub mod memory_calls;


/// Line table queries, recency labels, and the cache dump.
pub mod store;
