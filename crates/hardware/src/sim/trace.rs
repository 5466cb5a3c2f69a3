//! Access Trace Parsing.
//!
//! A trace is a text file with one processor access per line:
//!
//! ```text
//! # comment
//! r 12        # read word 12
//! w 12 -7     # write -7 to word 12
//! ```
//!
//! `read`/`write` are accepted as long forms; blank lines and anything after
//! `#` are ignored.

use std::fs;
use std::path::Path;

use crate::common::data::{AccessType, Word};
use crate::common::error::TraceError;

/// One access from a trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceOp {
    /// Word address accessed.
    pub addr: u64,
    /// Read, or write with its data.
    pub access: AccessType,
}

impl TraceOp {
    /// A read of `addr`.
    pub const fn read(addr: u64) -> Self {
        Self {
            addr,
            access: AccessType::Read,
        }
    }

    /// A write of `word` to `addr`.
    pub const fn write(addr: u64, word: Word) -> Self {
        Self {
            addr,
            access: AccessType::Write(word),
        }
    }
}

/// Parses a trace from text.
///
/// # Errors
///
/// Returns [`TraceError::Parse`] for the first malformed line.
pub fn parse_trace(text: &str) -> Result<Vec<TraceOp>, TraceError> {
    let mut ops = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        let err = |reason| TraceError::Parse {
            line: idx + 1,
            text: raw.trim().to_string(),
            reason,
        };

        let mut fields = line.split_whitespace();
        let kind = fields.next().unwrap_or_default();
        let addr = fields
            .next()
            .ok_or_else(|| err("missing address"))?
            .parse::<u64>()
            .map_err(|_| err("invalid address"))?;
        let op = match kind.to_ascii_lowercase().as_str() {
            "r" | "read" => TraceOp::read(addr),
            "w" | "write" => {
                let word = fields
                    .next()
                    .ok_or_else(|| err("missing write data"))?
                    .parse::<Word>()
                    .map_err(|_| err("invalid write data"))?;
                TraceOp::write(addr, word)
            }
            _ => return Err(err("unknown access kind")),
        };
        if fields.next().is_some() {
            return Err(err("trailing fields"));
        }
        ops.push(op);
    }
    Ok(ops)
}

/// Reads and parses a trace file.
///
/// # Errors
///
/// Returns [`TraceError::Io`] if the file cannot be read, otherwise any parse error.
pub fn load_trace(path: impl AsRef<Path>) -> Result<Vec<TraceOp>, TraceError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| TraceError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_trace(&text)
}
