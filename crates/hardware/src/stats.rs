//! Cache statistics collection and reporting.
//!
//! This module tracks what the cache did over a run. It provides:
//! 1. **Access mix:** Reads and writes issued by the processor.
//! 2. **Outcomes:** Hits, misses, dirty write-backs, and clean evictions.
//! 3. **Memory traffic:** Words moved between the cache and backing memory.

use std::fmt;

/// Counters updated by the cache on every access.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Read accesses issued.
    pub reads: u64,
    /// Write accesses issued.
    pub writes: u64,
    /// Accesses served by a resident line.
    pub hits: u64,
    /// Accesses that required a fill.
    pub misses: u64,
    /// Dirty victims written back to memory.
    pub writebacks: u64,
    /// Clean victims discarded.
    pub clean_evictions: u64,
    /// Words read from memory by fills.
    pub words_from_memory: u64,
    /// Words written to memory by write-backs.
    pub words_to_memory: u64,
}

impl CacheStats {
    /// Total accesses issued.
    pub const fn accesses(&self) -> u64 {
        self.reads + self.writes
    }

    /// Fraction of accesses that hit, or 0.0 before the first access.
    pub fn hit_rate(&self) -> f64 {
        let total = self.accesses();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Total evictions, dirty or clean.
    pub const fn evictions(&self) -> u64 {
        self.writebacks + self.clean_evictions
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==========================================================")?;
        writeln!(f, "CACHE STATISTICS")?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(
            f,
            "  accesses     {:<10} (reads {}, writes {})",
            self.accesses(),
            self.reads,
            self.writes
        )?;
        writeln!(
            f,
            "  hits         {:<10} (hit rate {:.2}%)",
            self.hits,
            self.hit_rate() * 100.0
        )?;
        writeln!(f, "  misses       {}", self.misses)?;
        writeln!(
            f,
            "  evictions    {:<10} (dirty {}, clean {})",
            self.evictions(),
            self.writebacks,
            self.clean_evictions
        )?;
        writeln!(
            f,
            "  mem traffic  {} words in, {} words out",
            self.words_from_memory, self.words_to_memory
        )?;
        write!(f, "==========================================================")
    }
}
