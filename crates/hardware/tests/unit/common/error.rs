//! # Error Diagnostic Tests
//!
//! The configuration diagnostics are printed verbatim by the CLI after an
//! `error:` or `warning:` prefix, so their text is checked exactly.

use cachesim_core::common::error::{ConfigError, ConfigWarning, TraceError};

#[test]
fn non_positive_message() {
    assert_eq!(
        ConfigError::NonPositive.to_string(),
        "input parameters must be positive numbers"
    );
}

#[test]
fn capacity_messages_carry_limits() {
    assert_eq!(
        ConfigError::too_many_blocks().to_string(),
        "cache must be no larger than 256 blocks"
    );
    assert_eq!(
        ConfigError::block_too_large().to_string(),
        "blocks must be no larger than 256 words"
    );
}

#[test]
fn warning_messages() {
    assert_eq!(
        ConfigWarning::BlockSizeNotPowerOfTwo(3).to_string(),
        "blockSize 3 is not a power of 2"
    );
    assert_eq!(
        ConfigWarning::NumSetsNotPowerOfTwo(6).to_string(),
        "numSets 6 is not a power of 2"
    );
}

#[test]
fn json_error_wraps_serde() {
    let err = serde_json_error();
    assert!(matches!(err, ConfigError::Json(_)));
    assert!(err.to_string().starts_with("invalid cache configuration:"));
}

#[test]
fn trace_parse_error_names_line() {
    let err = TraceError::Parse {
        line: 3,
        text: "x 1".to_string(),
        reason: "unknown access kind",
    };
    assert_eq!(err.to_string(), "line 3: unknown access kind: 'x 1'");
}

fn serde_json_error() -> ConfigError {
    cachesim_core::config::CacheConfig::from_json("{ not json").unwrap_err()
}
