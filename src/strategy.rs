//! Hashing strategies and the CLI selection between them.

use std::fmt;
use std::str::FromStr;

/// A way of hashing an input batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Single-threaded loop, input order preserved
    Sequential,
    /// Fixed-size worker pool pipeline
    Parallel,
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sequential" | "seq" => Ok(Strategy::Sequential),
            "parallel" | "par" | "pool" => Ok(Strategy::Parallel),
            _ => Err(format!("Unknown strategy: {}", s)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Sequential => write!(f, "Sequential"),
            Strategy::Parallel => write!(f, "Parallel"),
        }
    }
}

/// Which strategies to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Sequential, then parallel
    #[default]
    Both,
    /// A single strategy
    Only(Strategy),
}

impl Selection {
    /// Returns the selected strategies, sequential first.
    pub fn strategies(self) -> &'static [Strategy] {
        match self {
            Selection::Both => &[Strategy::Sequential, Strategy::Parallel],
            Selection::Only(Strategy::Sequential) => &[Strategy::Sequential],
            Selection::Only(Strategy::Parallel) => &[Strategy::Parallel],
        }
    }

    /// Returns true if both runners are selected.
    pub fn is_both(self) -> bool {
        matches!(self, Selection::Both)
    }
}

impl FromStr for Selection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "both" | "all" => Ok(Selection::Both),
            other => other.parse().map(Selection::Only),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Both => write!(f, "both"),
            Selection::Only(strategy) => write!(f, "{}", strategy.to_string().to_lowercase()),
        }
    }
}
