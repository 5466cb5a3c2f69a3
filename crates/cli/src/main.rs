//! Cache simulator CLI.
//!
//! This binary replays an access trace through a single cache. It performs:
//! 1. **Configuration:** Geometry from three positional integers or a JSON file.
//! 2. **Loading:** Optional memory image and the access trace.
//! 3. **Replay:** One action line per data movement on stdout, then an optional
//!    cache dump and statistics report.

use clap::{ArgAction, Parser};
use std::error::Error;
use std::fmt::Display;
use std::io::{self, Write};
use std::path::PathBuf;
use std::{fs, process};
use tracing_subscriber::EnvFilter;

use cachesim_core::action::WriterSink;
use cachesim_core::cache::CacheSim;
use cachesim_core::common::constants::DEFAULT_MEMORY_WORDS;
use cachesim_core::config::CacheConfig;
use cachesim_core::memory::FlatMemory;
use cachesim_core::sim;

#[derive(Parser, Debug)]
#[command(
    name = "cachesim",
    author,
    version,
    about = "Set-associative write-back cache simulator",
    long_about = "Replay a trace of word reads and writes through an LRU, write-back, allocate-on-miss cache and print every data movement.\n\nTrace lines are `r <addr>` or `w <addr> <value>`; memory images hold one decimal word per line.\n\nExamples:\n  cachesim 4 2 2 --trace accesses.txt\n  cachesim 1 1 2 --trace accesses.txt --memory prog.mc --dump --stats\n  cachesim --config cache.json --trace accesses.txt",
    allow_negative_numbers = true
)]
struct Cli {
    /// Words per cache line.
    #[arg(required_unless_present = "config", requires_all = ["num_sets", "blocks_per_set"])]
    block_size: Option<i64>,

    /// Number of sets.
    num_sets: Option<i64>,

    /// Lines per set (associativity).
    blocks_per_set: Option<i64>,

    /// JSON cache configuration (instead of the three positional values).
    #[arg(long, conflicts_with_all = ["block_size", "num_sets", "blocks_per_set"])]
    config: Option<PathBuf>,

    /// Access trace to replay.
    #[arg(short, long)]
    trace: PathBuf,

    /// Initial memory image, loaded at address 0.
    #[arg(short, long)]
    memory: Option<PathBuf>,

    /// Size of backing memory in words.
    #[arg(long, default_value_t = DEFAULT_MEMORY_WORDS)]
    memory_size: usize,

    /// Print every cache line after the trace.
    #[arg(long)]
    dump: bool,

    /// Print hit/miss statistics after the trace.
    #[arg(long)]
    stats: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = resolve_config(&cli).unwrap_or_else(|e| fatal(e));
    for warning in config.warnings() {
        println!("warning: {warning}");
    }
    println!(
        "Simulating a cache with {} total lines; each line has {} words",
        config.total_blocks(),
        config.block_size
    );
    println!(
        "Each set in the cache contains {} lines; there are {} sets",
        config.blocks_per_set, config.num_sets
    );

    let mut memory = FlatMemory::new(cli.memory_size);
    if let Some(path) = &cli.memory {
        let image = sim::load_memory_image(path).unwrap_or_else(|e| fatal(e));
        if image.len() > memory.len() {
            tracing::warn!(
                image = image.len(),
                memory = memory.len(),
                "memory image truncated"
            );
        }
        memory.load(0, &image);
    }
    let ops = sim::load_trace(&cli.trace).unwrap_or_else(|e| fatal(e));

    let sink = WriterSink::new(io::stdout().lock());
    let mut cache = CacheSim::new(config, memory, sink).unwrap_or_else(|e| fatal(e));
    let reads = sim::replay(&mut cache, &ops);
    tracing::info!(accesses = ops.len(), reads = reads.len(), "trace complete");

    let stats = *cache.stats();
    let dump = cache.store().to_string();
    let (_, sink) = cache.into_parts();
    let mut out = sink.finish().unwrap_or_else(|e| fatal(e));

    if cli.dump {
        writeln!(out, "{dump}").unwrap_or_else(|e| fatal(e));
    }
    if cli.stats {
        writeln!(out, "{stats}").unwrap_or_else(|e| fatal(e));
    }
    out.flush().unwrap_or_else(|e| fatal(e));
}

/// Builds the cache geometry from `--config` or the positional values.
fn resolve_config(cli: &Cli) -> Result<CacheConfig, Box<dyn Error>> {
    if let Some(path) = &cli.config {
        let json = fs::read_to_string(path)
            .map_err(|e| format!("could not read '{}': {}", path.display(), e))?;
        return Ok(CacheConfig::from_json(&json)?);
    }
    match (cli.block_size, cli.num_sets, cli.blocks_per_set) {
        (Some(block_size), Some(num_sets), Some(blocks_per_set)) => {
            Ok(CacheConfig::new(block_size, num_sets, blocks_per_set)?)
        }
        _ => Err("specify BLOCK_SIZE NUM_SETS BLOCKS_PER_SET or --config <file>".into()),
    }
}

/// Installs the stderr log subscriber; `RUST_LOG` overrides `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Prints `error: <e>` and exits with status 1.
fn fatal(e: impl Display) -> ! {
    println!("error: {e}");
    process::exit(1);
}
