//! Benchmark driver: times each selected runner back-to-back.

use tracing::{info, warn};

use crate::batch::InputBatch;
use crate::config::{Config, ConfigError};
use crate::strategy::Strategy;
use crate::timing::{format_duration, measure, Report};
use crate::worker::{hash_sequential, same_digests, PipelineError, WorkerPool};

/// Reports and outputs of one benchmark invocation.
#[derive(Debug, Clone, Default)]
pub struct Outcome {
    /// One report per runner, in the order they ran
    pub reports: Vec<Report>,
    /// Sequential runner output, if it ran
    pub sequential: Option<Vec<String>>,
    /// Parallel runner output, if it ran
    pub parallel: Option<Vec<String>>,
}

/// Runs every selected strategy over `batch`, sequential first.
///
/// `on_report` is called as soon as each runner finishes. With
/// `config.verify` set and both runners selected, their outputs are compared.
pub fn run(
    config: &Config,
    batch: &InputBatch,
    mut on_report: impl FnMut(&Report),
) -> Result<Outcome, BenchError> {
    config.validate()?;
    let pool = WorkerPool::new(config.worker_count())?.ordered(config.ordered);
    info!(workers = pool.num_workers(), ordered = pool.is_ordered(), "pool configured");

    if config.verify && !config.selection().is_both() {
        warn!("verification needs both strategies; skipping");
    }

    let mut outcome = Outcome::default();

    for &strategy in config.selection().strategies() {
        let digests = match strategy {
            Strategy::Sequential => {
                let timed = measure(|| hash_sequential(batch.as_slice()));
                let report = Report::new(strategy, timed.elapsed, timed.output.len());
                record(&mut outcome, report, &mut on_report);
                timed.output
            }
            Strategy::Parallel => {
                let timed = measure(|| pool.run(batch.as_slice()));
                let run = timed.output?;
                let report = Report::new(strategy, timed.elapsed, run.digests.len());
                info!(worker_counts = ?run.worker_counts, "worker distribution");
                record(&mut outcome, report, &mut on_report);
                run.digests
            }
        };

        match strategy {
            Strategy::Sequential => outcome.sequential = Some(digests),
            Strategy::Parallel => outcome.parallel = Some(digests),
        }
    }

    if config.verify {
        if let (Some(sequential), Some(parallel)) = (&outcome.sequential, &outcome.parallel) {
            verify(sequential, parallel, config.ordered)?;
        }
    }

    Ok(outcome)
}

fn record(outcome: &mut Outcome, report: Report, on_report: &mut impl FnMut(&Report)) {
    info!(
        strategy = %report.strategy,
        elapsed = %format_duration(report.elapsed),
        results = report.results,
        "runner finished"
    );
    on_report(&report);
    outcome.reports.push(report);
}

/// Compares runner outputs, element-wise when `ordered`, as multisets otherwise.
fn verify(sequential: &[String], parallel: &[String], ordered: bool) -> Result<(), BenchError> {
    let matched = if ordered {
        sequential == parallel
    } else {
        same_digests(sequential, parallel)
    };

    if !matched {
        return Err(BenchError::Mismatch {
            sequential: sequential.len(),
            parallel: parallel.len(),
        });
    }

    info!(digests = sequential.len(), ordered, "runner outputs match");
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    #[error("Runner outputs differ ({sequential} sequential vs {parallel} parallel digests)")]
    Mismatch { sequential: usize, parallel: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::Selection;

    fn small_config() -> Config {
        Config {
            batch_size: 64,
            verify: true,
            ..Config::default()
        }
    }

    #[test]
    fn test_reports_in_order() {
        let config = small_config();
        let batch = InputBatch::generate(&config.prefix, config.batch_size);

        let mut seen = Vec::new();
        let outcome = run(&config, &batch, |report| seen.push(report.strategy)).unwrap();

        assert_eq!(seen, vec![Strategy::Sequential, Strategy::Parallel]);
        assert_eq!(outcome.reports.len(), 2);
        assert!(outcome.reports.iter().all(|r| r.results == 64));
        assert_eq!(outcome.sequential.as_ref().map(Vec::len), Some(64));
    }

    #[test]
    fn test_ordered_verification() {
        let config = Config {
            ordered: true,
            ..small_config()
        };
        let batch = InputBatch::generate(&config.prefix, config.batch_size);

        let outcome = run(&config, &batch, |_| {}).unwrap();
        assert_eq!(outcome.sequential, outcome.parallel);
    }

    #[test]
    fn test_single_strategy() {
        let config = Config {
            strategy: Selection::Only(Strategy::Parallel),
            ..small_config()
        };
        let batch = InputBatch::generate(&config.prefix, config.batch_size);

        let outcome = run(&config, &batch, |_| {}).unwrap();
        assert_eq!(outcome.reports.len(), 1);
        assert!(outcome.sequential.is_none());
        assert_eq!(outcome.parallel.map(|d| d.len()), Some(64));
    }

    #[test]
    fn test_empty_batch() {
        let config = small_config();
        let batch = InputBatch::generate(&config.prefix, 0);

        let outcome = run(&config, &batch, |_| {}).unwrap();
        assert!(outcome.reports.iter().all(|r| r.results == 0));
    }

    fn digests(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_verify_rejects_different_digests() {
        let sequential = digests(&["aa", "bb"]);
        let parallel = digests(&["aa", "cc"]);

        for ordered in [false, true] {
            assert!(matches!(
                verify(&sequential, &parallel, ordered),
                Err(BenchError::Mismatch {
                    sequential: 2,
                    parallel: 2
                })
            ));
        }
    }

    #[test]
    fn test_verify_reordered_digests() {
        let sequential = digests(&["aa", "bb"]);
        let parallel = digests(&["bb", "aa"]);

        assert!(verify(&sequential, &parallel, false).is_ok());
        assert!(matches!(
            verify(&sequential, &parallel, true),
            Err(BenchError::Mismatch { .. })
        ));
    }

    #[test]
    fn test_verify_length_mismatch() {
        let sequential = digests(&["aa", "bb"]);
        let parallel = digests(&["aa"]);

        assert!(matches!(
            verify(&sequential, &parallel, false),
            Err(BenchError::Mismatch {
                sequential: 2,
                parallel: 1
            })
        ));
    }

    #[test]
    fn test_verify_skipped_for_single_strategy() {
        let config = Config {
            strategy: Selection::Only(Strategy::Sequential),
            ..small_config()
        };
        assert!(config.verify);
        let batch = InputBatch::generate(&config.prefix, config.batch_size);

        let outcome = run(&config, &batch, |_| {}).unwrap();
        assert!(outcome.parallel.is_none());
        assert_eq!(outcome.sequential.map(|d| d.len()), Some(64));
    }

    #[test]
    fn test_zero_workers() {
        let config = Config {
            workers: 0,
            ..small_config()
        };
        let batch = InputBatch::generate(&config.prefix, 4);

        assert!(matches!(
            run(&config, &batch, |_| {}),
            Err(BenchError::Config(ConfigError::NoWorkers))
        ));
    }
}
