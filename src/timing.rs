//! Wall-clock timing of runner invocations.

use std::fmt;
use std::time::{Duration, Instant};

use crate::strategy::Strategy;

/// The output of a timed call together with how long it took.
#[derive(Debug, Clone)]
pub struct Timed<T> {
    pub output: T,
    pub elapsed: Duration,
}

/// Runs `f`, measuring monotonic time immediately before and after the call.
///
/// Anything the caller prepares before calling `measure` is not included.
pub fn measure<T>(f: impl FnOnce() -> T) -> Timed<T> {
    let start = Instant::now();
    let output = f();
    let elapsed = start.elapsed();
    Timed { output, elapsed }
}

/// Elapsed time of a single runner, attributed to its strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// The strategy that was timed
    pub strategy: Strategy,
    /// Wall-clock time of the runner call
    pub elapsed: Duration,
    /// Number of digests the runner produced
    pub results: usize,
}

impl Report {
    /// Creates a report for one runner invocation.
    pub fn new(strategy: Strategy, elapsed: Duration, results: usize) -> Self {
        Self {
            strategy,
            elapsed,
            results,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: Elapsed time: {}",
            self.strategy,
            format_duration(self.elapsed)
        )
    }
}

/// Formats a duration the way Go's `time.Duration` prints itself.
///
/// Sub-second values use the largest unit below one second (`ns`, `µs`, `ms`)
/// with trailing zeros trimmed; longer values print as `1h2m3.5s`.
pub fn format_duration(d: Duration) -> String {
    const NANOS_PER_MICRO: u128 = 1_000;
    const NANOS_PER_MILLI: u128 = 1_000_000;
    const NANOS_PER_SEC: u128 = 1_000_000_000;

    let nanos = d.as_nanos();
    if nanos == 0 {
        return "0s".into();
    }
    if nanos < NANOS_PER_MICRO {
        return format!("{}ns", nanos);
    }
    if nanos < NANOS_PER_MILLI {
        return format!("{}µs", with_fraction(nanos, NANOS_PER_MICRO));
    }
    if nanos < NANOS_PER_SEC {
        return format!("{}ms", with_fraction(nanos, NANOS_PER_MILLI));
    }

    let total_secs = d.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs / 60) % 60;
    let seconds = with_fraction(
        u128::from(total_secs % 60) * NANOS_PER_SEC + u128::from(d.subsec_nanos()),
        NANOS_PER_SEC,
    );

    if hours > 0 {
        format!("{}h{}m{}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m{}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

/// Renders `value / unit` as a decimal, dropping trailing zeros.
fn with_fraction(value: u128, unit: u128) -> String {
    let whole = value / unit;
    let frac = value % unit;
    if frac == 0 {
        return whole.to_string();
    }

    let width = unit.ilog10() as usize;
    let digits = format!("{:0width$}", frac, width = width);
    format!("{}.{}", whole, digits.trim_end_matches('0'))
}
