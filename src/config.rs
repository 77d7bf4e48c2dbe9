//! Runtime configuration for the hashing benchmark.

use clap::Parser;

use crate::batch::DEFAULT_PREFIX;
use crate::strategy::Selection;

/// Default number of generated inputs.
pub const DEFAULT_BATCH_SIZE: usize = 100_000;

/// Default number of pool workers.
pub const DEFAULT_WORKERS: usize = 4;

/// Sequential vs worker-pool SHA-256 hashing benchmark
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Number of inputs to generate
    #[arg(short = 'b', long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Number of worker threads in the parallel runner
    #[arg(short = 'w', long, default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// Prefix of each generated input (inputs are prefix + index)
    #[arg(short = 'p', long, default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Strategies to run: both, sequential, or parallel
    #[arg(short = 's', long, default_value = "both")]
    pub strategy: Selection,

    /// Preserve input order in the parallel runner
    #[arg(long, default_value = "false")]
    pub ordered: bool,

    /// Check that both runners produced the same digests
    #[arg(long, default_value = "false")]
    pub verify: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            workers: DEFAULT_WORKERS,
            prefix: DEFAULT_PREFIX.into(),
            strategy: Selection::Both,
            ordered: false,
            verify: false,
            verbose: 0,
        }
    }
}

impl Config {
    /// Returns the number of pool workers
    pub fn worker_count(&self) -> usize {
        self.workers
    }

    /// Returns the strategies selected on the command line
    pub fn selection(&self) -> Selection {
        self.strategy
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == 0 {
            return Err(ConfigError::NoWorkers);
        }

        Ok(())
    }

    /// Returns the default log filter directive for the chosen verbosity.
    ///
    /// `RUST_LOG` takes precedence when set.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Worker count must be at least 1")]
    NoWorkers,
}
