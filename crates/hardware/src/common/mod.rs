//! Common utilities and types used throughout the cache simulator.
//!
//! This module provides the building blocks shared by every component. It includes:
//! 1. **Address Decoding:** Splitting word addresses into offset, set, and tag.
//! 2. **Constants:** Capacity limits and sentinels.
//! 3. **Access Types:** The read/write request classification and the word type.
//! 4. **Error Handling:** Configuration errors, warnings, and input errors.

/// Word address decomposition.
pub mod addr;

/// Capacity limits and sentinel values.
pub mod constants;

/// Access type and word definitions.
pub mod data;

/// Error and warning types.
pub mod error;

pub use addr::{DecodedAddr, block_address, decode};
pub use constants::{INVALID_TAG, MAX_BLOCK_SIZE, MAX_CACHE_SIZE};
pub use data::{AccessType, Word};
pub use error::{ConfigError, ConfigWarning, TraceError};
