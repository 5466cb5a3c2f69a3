//! Memory Image Loader.
//!
//! This module reads the initial contents of backing memory. It performs:
//! 1. **Parsing:** One signed decimal word per line, in address order from 0
//!    (the LC-2K machine-code file layout).
//! 2. **Loading:** Reading an image file from disk.
//!
//! Blank lines are skipped and do not consume an address.

use std::fs;
use std::path::Path;

use crate::common::data::Word;
use crate::common::error::TraceError;

/// Parses a memory image from text.
///
/// # Errors
///
/// Returns [`TraceError::Parse`] for the first line that is not a word.
pub fn parse_memory_image(text: &str) -> Result<Vec<Word>, TraceError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            line.trim()
                .parse::<Word>()
                .map_err(|_| TraceError::Parse {
                    line: idx + 1,
                    text: line.trim().to_string(),
                    reason: "invalid word",
                })
        })
        .collect()
}

/// Reads and parses a memory image file.
///
/// # Errors
///
/// Returns [`TraceError::Io`] if the file cannot be read, otherwise any parse error.
pub fn load_memory_image(path: impl AsRef<Path>) -> Result<Vec<Word>, TraceError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| TraceError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_memory_image(&text)
}
