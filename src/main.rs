//! Hashing benchmark CLI
//!
//! Usage:
//!   hash_bench                      # 100000 inputs, 4 workers
//!   hash_bench -b 1000000 -w 8      # Larger batch, more workers
//!   hash_bench -s parallel --ordered --verify -v

use std::process;

use clap::Parser;
use tracing::info;

use hash_bench::{bench, logging, Config, InputBatch};

fn main() {
    let config = Config::parse();
    logging::init(config.log_filter());

    // Validate configuration
    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {}", e);
        process::exit(1);
    }

    info!(
        batch_size = config.batch_size,
        workers = config.worker_count(),
        cpus = num_cpus::get(),
        strategy = %config.selection(),
        ordered = config.ordered,
        "starting benchmark"
    );

    // Built outside any timed section
    let batch = InputBatch::generate(&config.prefix, config.batch_size);

    if let Err(e) = bench::run(&config, &batch, |report| println!("{}", report)) {
        eprintln!("{}", e);
        process::exit(1);
    }
}
