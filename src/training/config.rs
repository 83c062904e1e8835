//! Batch training configuration.

/// Configuration for batch training.
#[derive(Debug, Clone)]
pub struct BatchTrainingConfig {
    /// Maximum number of iterations over the full example set.
    pub max_iterations: usize,
    /// Mean-squared-error threshold that finishes training early when
    /// reached.
    pub error_threshold: f64,
    /// Whether to log the error per iteration.
    pub verbose: bool,
}

impl Default for BatchTrainingConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1,
            error_threshold: 0.005,
            verbose: false,
        }
    }
}

impl BatchTrainingConfig {
    /// Creates a new BatchTrainingConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of iterations.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the error threshold.
    pub fn error_threshold(mut self, error_threshold: f64) -> Self {
        self.error_threshold = error_threshold;
        self
    }

    /// Sets whether to log progress.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
