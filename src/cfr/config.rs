//! Configuration and statistics for the trainer.

use serde::{Deserialize, Serialize};

/// Configuration for a training run.
///
/// # Example
/// ```
/// use kuhn_cfr::cfr::CfrConfig;
///
/// let config = CfrConfig::default().with_seed(42);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CfrConfig {
    /// Random seed for reproducible deals.
    ///
    /// If `None`, the deal order is seeded from entropy and each run
    /// explores the tree in a different order.
    pub seed: Option<u64>,

    /// How many iterations between running-average-utility log lines.
    ///
    /// Set to 0 to disable the periodic log entirely.
    pub log_interval: u64,
}

impl Default for CfrConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_interval: 100_000,
        }
    }
}

impl CfrConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder method: set the logging interval.
    pub fn with_log_interval(mut self, interval: u64) -> Self {
        self.log_interval = interval;
        self
    }
}

/// Statistics tracked across a training run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainStats {
    /// Total number of simulated hands completed.
    pub iterations: u64,

    /// Number of unique information sets discovered.
    pub info_sets: usize,

    /// Total time spent training, in seconds.
    pub elapsed_seconds: f64,

    /// Iterations per second.
    pub iterations_per_second: f64,

    /// Running average utility per hand, from player 0's perspective.
    ///
    /// A convergence health signal: as the strategies approach
    /// equilibrium this trends toward the game value, which for Kuhn
    /// poker is -1/18 to the first player.
    pub average_utility: f64,
}

impl TrainStats {
    /// Create empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the iteration rate from elapsed time.
    pub fn update_rate(&mut self) {
        if self.elapsed_seconds > 0.0 {
            self.iterations_per_second = self.iterations as f64 / self.elapsed_seconds;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let config = CfrConfig::new().with_seed(7).with_log_interval(500);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.log_interval, 500);
    }

    #[test]
    fn rate_update_needs_elapsed_time() {
        let mut stats = TrainStats::new();
        stats.iterations = 1000;
        stats.update_rate();
        assert_eq!(stats.iterations_per_second, 0.0);

        stats.elapsed_seconds = 2.0;
        stats.update_rate();
        assert_eq!(stats.iterations_per_second, 500.0);
    }
}
