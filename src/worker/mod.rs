//! Runners that hash an input batch.
//!
//! This module provides:
//! - The single-threaded baseline
//! - The fixed-size worker pool pipeline
//! - Comparison of their outputs

mod hasher;
mod pool;
mod sequential;

pub use hasher::{HashWorker, HashedItem, WorkItem};
pub use pool::{PipelineError, PoolRun, WorkerPool};
pub use sequential::hash_sequential;

/// Returns true if both runs hold the same digests, ignoring order.
pub fn same_digests(a: &[String], b: &[String]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut a: Vec<&str> = a.iter().map(String::as_str).collect();
    let mut b: Vec<&str> = b.iter().map(String::as_str).collect();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}
