//! Pool worker that hashes items from the work queue.

use crossbeam_channel::{Receiver, Sender};
use tracing::{debug, trace};

use crate::crypto::sha256_hex;

/// An input waiting to be hashed, tagged with its position in the batch.
#[derive(Debug, Clone, Copy)]
pub struct WorkItem<'a> {
    pub index: usize,
    pub input: &'a str,
}

/// A finished digest, tagged with the position of its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedItem {
    pub index: usize,
    pub hex: String,
}

/// A worker draining the shared work queue.
pub struct HashWorker<'a> {
    /// Worker ID
    id: usize,
    /// Shared work queue
    work_rx: Receiver<WorkItem<'a>>,
    /// Shared result queue
    result_tx: Sender<HashedItem>,
}

impl<'a> HashWorker<'a> {
    /// Creates a new worker.
    pub fn new(id: usize, work_rx: Receiver<WorkItem<'a>>, result_tx: Sender<HashedItem>) -> Self {
        Self {
            id,
            work_rx,
            result_tx,
        }
    }

    /// Runs the worker loop and returns how many items this worker hashed.
    ///
    /// The loop ends when:
    /// - The work queue is closed and drained
    /// - The result queue has no receiver left
    pub fn run(self) -> u64 {
        let mut hashed = 0;

        for item in self.work_rx.iter() {
            let result = HashedItem {
                index: item.index,
                hex: sha256_hex(item.input),
            };

            if self.result_tx.send(result).is_err() {
                trace!(worker_id = self.id, "result queue disconnected");
                break;
            }
            hashed += 1;
        }

        debug!(worker_id = self.id, hashed, "worker finished");
        hashed
    }

    /// Returns the worker ID.
    pub fn id(&self) -> usize {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;

    #[test]
    fn test_drains_closed_queue() {
        let (work_tx, work_rx) = bounded(4);
        let (result_tx, result_rx) = bounded(4);

        work_tx
            .send(WorkItem {
                index: 0,
                input: "password0",
            })
            .unwrap();
        work_tx
            .send(WorkItem {
                index: 1,
                input: "password1",
            })
            .unwrap();
        drop(work_tx);

        let worker = HashWorker::new(7, work_rx, result_tx);
        assert_eq!(worker.id(), 7);
        assert_eq!(worker.run(), 2);

        let results: Vec<HashedItem> = result_rx.iter().collect();
        assert_eq!(
            results,
            vec![
                HashedItem {
                    index: 0,
                    hex: sha256_hex("password0"),
                },
                HashedItem {
                    index: 1,
                    hex: sha256_hex("password1"),
                },
            ]
        );
    }

    #[test]
    fn test_stops_when_results_dropped() {
        let (work_tx, work_rx) = bounded(2);
        let (result_tx, result_rx) = bounded(2);
        drop(result_rx);

        for (index, input) in ["a", "b"].into_iter().enumerate() {
            work_tx.send(WorkItem { index, input }).unwrap();
        }

        let worker = HashWorker::new(0, work_rx, result_tx);
        assert_eq!(worker.run(), 0);
    }
}
