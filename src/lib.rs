//! # hash_bench
//!
//! Compares sequential and worker-pool SHA-256 hashing over a generated batch.
//!
//! ## Architecture
//!
//! - `crypto`: SHA-256 digest and hex rendering
//! - `batch`: Input batch generation
//! - `worker`: Sequential runner and worker pool pipeline
//! - `timing`: Wall-clock measurement and report lines
//! - `bench`: Driver running the selected strategies back-to-back
//! - `config`: Runtime configuration

pub mod batch;
pub mod bench;
pub mod config;
pub mod crypto;
pub mod logging;
pub mod strategy;
pub mod timing;
pub mod worker;

pub use batch::InputBatch;
pub use bench::{BenchError, Outcome};
pub use config::{Config, ConfigError};
pub use crypto::{sha256_hex, Digest};
pub use strategy::{Selection, Strategy};
pub use timing::{format_duration, measure, Report, Timed};
pub use worker::{hash_sequential, PipelineError, PoolRun, WorkerPool};
