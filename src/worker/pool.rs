//! Worker pool pipeline.
//!
//! A feeder thread fills a bounded work queue, N workers hash from it into a
//! bounded result queue, a closer thread waits for every worker and then
//! closes the result queue, and the calling thread collects until it is
//! drained. Each queue has exactly one closer: the feeder drops the only work
//! sender, the closer drops the last result sender.

use std::io;
use std::thread::{self, Builder, Scope, ScopedJoinHandle};

use crossbeam_channel::{bounded, Receiver, Sender};
use tracing::{debug, trace};

use super::hasher::{HashWorker, HashedItem, WorkItem};
use crate::config::ConfigError;

/// Digests produced by one pipeline run.
#[derive(Debug, Clone, Default)]
pub struct PoolRun {
    /// Hex digests, in completion order unless the pool is ordered
    pub digests: Vec<String>,
    /// Items hashed by each worker, indexed by worker ID
    pub worker_counts: Vec<u64>,
}

impl PoolRun {
    /// Returns the number of items hashed across all workers.
    pub fn total_hashed(&self) -> u64 {
        self.worker_counts.iter().sum()
    }
}

/// A fixed-size pool of hashing workers.
///
/// Threads and queues are created per [`WorkerPool::run`] call and never reused.
#[derive(Debug, Clone)]
pub struct WorkerPool {
    /// Number of workers
    num_workers: usize,
    /// Whether results are returned in input order
    ordered: bool,
}

impl WorkerPool {
    /// Creates a pool with the specified number of workers.
    ///
    /// A pool without workers would never drain its queue, so zero is rejected.
    pub fn new(num_workers: usize) -> Result<Self, ConfigError> {
        if num_workers == 0 {
            return Err(ConfigError::NoWorkers);
        }

        Ok(Self {
            num_workers,
            ordered: false,
        })
    }

    /// Sets whether results are returned in input order.
    pub fn ordered(mut self, ordered: bool) -> Self {
        self.ordered = ordered;
        self
    }

    /// Returns the number of workers.
    pub fn num_workers(&self) -> usize {
        self.num_workers
    }

    /// Returns true if results are returned in input order.
    pub fn is_ordered(&self) -> bool {
        self.ordered
    }

    /// Hashes every input through the pipeline.
    ///
    /// Returns one digest per input. Without [`ordered`](Self::ordered) the
    /// digests come back in completion order.
    pub fn run<S>(&self, inputs: &[S]) -> Result<PoolRun, PipelineError>
    where
        S: AsRef<str> + Sync,
    {
        let (work_tx, work_rx) = bounded::<WorkItem<'_>>(self.num_workers);
        let (result_tx, result_rx) = bounded::<HashedItem>(self.num_workers);

        thread::scope(|scope| -> Result<PoolRun, PipelineError> {
            let workers = Self::spawn_workers(scope, self.num_workers, &work_rx, &result_tx)?;
            drop(work_rx);

            let closer = Self::spawn_closer(scope, workers, result_tx)?;
            let feeder = Self::spawn_feeder(scope, inputs, work_tx)?;

            let mut items = Self::collect(result_rx, inputs.len());

            let fed = feeder.join().map_err(|_| PipelineError::FeederPanicked)?;
            let worker_counts = closer.join().map_err(|_| PipelineError::CloserPanicked)??;
            trace!(fed, collected = items.len(), "pipeline drained");

            if self.ordered {
                items.sort_unstable_by_key(|item| item.index);
            }

            Ok(PoolRun {
                digests: items.into_iter().map(|item| item.hex).collect(),
                worker_counts,
            })
        })
    }

    /// Spawns worker threads.
    fn spawn_workers<'scope, 'env, 'a>(
        scope: &'scope Scope<'scope, 'env>,
        num_workers: usize,
        work_rx: &Receiver<WorkItem<'a>>,
        result_tx: &Sender<HashedItem>,
    ) -> io::Result<Vec<ScopedJoinHandle<'scope, u64>>>
    where
        'a: 'scope,
    {
        (0..num_workers)
            .map(|id| {
                let worker = HashWorker::new(id, work_rx.clone(), result_tx.clone());

                Builder::new()
                    .name(format!("hash-worker-{}", id))
                    .spawn_scoped(scope, move || worker.run())
            })
            .collect()
    }

    /// Spawns the thread that closes the result queue once every worker exits.
    fn spawn_closer<'scope, 'env>(
        scope: &'scope Scope<'scope, 'env>,
        workers: Vec<ScopedJoinHandle<'scope, u64>>,
        result_tx: Sender<HashedItem>,
    ) -> io::Result<ScopedJoinHandle<'scope, Result<Vec<u64>, PipelineError>>> {
        Builder::new()
            .name("hash-closer".into())
            .spawn_scoped(scope, move || {
                let mut counts = Vec::with_capacity(workers.len());
                let mut outcome = Ok(());

                for (worker_id, handle) in workers.into_iter().enumerate() {
                    match handle.join() {
                        Ok(hashed) => counts.push(hashed),
                        Err(_) => {
                            counts.push(0);
                            if outcome.is_ok() {
                                outcome = Err(PipelineError::WorkerPanicked { worker_id });
                            }
                        }
                    }
                }

                drop(result_tx);
                trace!("result queue closed");
                outcome.map(|()| counts)
            })
    }

    /// Spawns the thread that feeds every input and then closes the work queue.
    fn spawn_feeder<'scope, 'env, 'a, S>(
        scope: &'scope Scope<'scope, 'env>,
        inputs: &'a [S],
        work_tx: Sender<WorkItem<'a>>,
    ) -> io::Result<ScopedJoinHandle<'scope, usize>>
    where
        S: AsRef<str> + Sync,
        'a: 'scope,
    {
        Builder::new()
            .name("hash-feeder".into())
            .spawn_scoped(scope, move || {
                let mut fed = 0;
                for (index, input) in inputs.iter().enumerate() {
                    let item = WorkItem {
                        index,
                        input: input.as_ref(),
                    };
                    if work_tx.send(item).is_err() {
                        debug!(fed, "work queue disconnected");
                        break;
                    }
                    fed += 1;
                }

                drop(work_tx);
                trace!(fed, "work queue closed");
                fed
            })
    }

    /// Drains the result queue until it is closed and empty.
    fn collect(result_rx: Receiver<HashedItem>, expected: usize) -> Vec<HashedItem> {
        let mut items = Vec::with_capacity(expected);
        items.extend(result_rx.iter());
        items
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Failed to spawn pipeline thread: {0}")]
    Spawn(#[from] io::Error),

    #[error("Worker {worker_id} panicked")]
    WorkerPanicked { worker_id: usize },

    #[error("Feeder thread panicked")]
    FeederPanicked,

    #[error("Closer thread panicked")]
    CloserPanicked,
}
