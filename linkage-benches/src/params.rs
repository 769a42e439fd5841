//! Benchmark parameter types.

use std::fmt;

/// Parameters for an edge-sequencing benchmark run.
#[derive(Clone, Debug)]
pub struct EdgeBenchParams {
    /// Number of points in the dataset.
    pub point_count: usize,
}

impl fmt::Display for EdgeBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.point_count)
    }
}

/// Parameters for a budgeted tracker benchmark run.
#[derive(Clone, Debug)]
pub struct BudgetBenchParams {
    /// Number of points in the dataset.
    pub point_count: usize,
    /// Edges consumed by the run.
    pub pair_budget: usize,
}

impl fmt::Display for BudgetBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},pairs={}", self.point_count, self.pair_budget)
    }
}
