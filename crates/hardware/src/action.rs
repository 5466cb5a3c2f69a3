//! Cache Action Log.
//!
//! Every data movement performed by the cache is reported as an [`Action`]. This module provides:
//! 1. **Action Records:** Address range, size, and direction of each transfer.
//! 2. **Log Format:** The `Display` form, a fixed line format consumed by existing grading
//!    harnesses, e.g. `$$$ transferring word [4-7] from the memory to the cache`.
//! 3. **Sinks:** The `ActionSink` trait and sinks that collect or write records.

use std::fmt;
use std::io::{self, Write};

use crate::common::constants::ACTION_MARKER;

/// Source and destination of a transfer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionType {
    /// A word read by the processor out of the cache.
    CacheToProcessor,
    /// A word stored by the processor into the cache.
    ProcessorToCache,
    /// A line filled from memory.
    MemoryToCache,
    /// A dirty victim written back to memory.
    CacheToMemory,
    /// A clean victim discarded.
    CacheToNowhere,
}

impl ActionType {
    /// Text following the address range in a log line.
    pub const fn description(self) -> &'static str {
        match self {
            Self::CacheToProcessor => "from the cache to the processor",
            Self::ProcessorToCache => "from the processor to the cache",
            Self::MemoryToCache => "from the memory to the cache",
            Self::CacheToMemory => "from the cache to the memory",
            Self::CacheToNowhere => "from the cache to nowhere",
        }
    }

    /// Returns `true` if the transfer moves a whole line rather than one word.
    pub const fn is_line_transfer(self) -> bool {
        matches!(
            self,
            Self::MemoryToCache | Self::CacheToMemory | Self::CacheToNowhere
        )
    }
}

/// One transfer of `size` consecutive words starting at `address`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Action {
    /// First word address of the range.
    pub address: u64,
    /// Number of words moved.
    pub size: usize,
    /// Direction of the transfer.
    pub kind: ActionType,
}

impl Action {
    /// Creates an action record.
    pub const fn new(address: u64, size: usize, kind: ActionType) -> Self {
        Self {
            address,
            size,
            kind,
        }
    }

    /// Last word address of the range (inclusive).
    pub const fn last_address(&self) -> u64 {
        self.address + self.size as u64 - 1
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{ACTION_MARKER} transferring word [{}-{}] {}",
            self.address,
            self.last_address(),
            self.kind.description()
        )
    }
}

/// Receiver of action records, called once per transfer in the order they happen.
pub trait ActionSink {
    /// Records one transfer.
    fn record(&mut self, action: Action);
}

impl ActionSink for Vec<Action> {
    fn record(&mut self, action: Action) {
        self.push(action);
    }
}

impl<S: ActionSink + ?Sized> ActionSink for &mut S {
    #[inline]
    fn record(&mut self, action: Action) {
        (**self).record(action);
    }
}

/// Sink that writes one formatted line per action to an [`io::Write`].
///
/// The cache has no error path, so the first I/O error is kept and returned
/// by [`WriterSink::finish`]; later records are dropped.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
    error: Option<io::Error>,
}

impl<W: Write> WriterSink<W> {
    /// Wraps `writer`.
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    /// Flushes the writer and returns it, or the first error encountered.
    ///
    /// # Errors
    ///
    /// Returns the first write error, or the error from the final flush.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> ActionSink for WriterSink<W> {
    fn record(&mut self, action: Action) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.writer, "{action}") {
            tracing::error!(error = %e, "action log write failed");
            self.error = Some(e);
        }
    }
}
