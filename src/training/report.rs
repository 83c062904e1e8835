//! Batch training result.

/// Result of a batch training run.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchTrainingReport {
    /// Mean-squared error of the last completed iteration, or positive
    /// infinity when no iteration ran.
    pub error: f64,
    /// Number of iterations actually executed.
    pub iterations: usize,
    /// Elapsed wall-clock time in milliseconds.
    pub time_ms: u64,
}
