//! Chance-sampled CFR+ solver and training driver.
//!
//! Each training iteration deals one random pair of private cards and
//! walks the entire betting tree for that deal, updating both players'
//! regrets and strategy sums in a single pass. The tree is never
//! materialized: decision points are looked up lazily in the
//! [`NodeStore`] by information set key, so memory is bounded by the
//! number of distinct knowledge states rather than the number of hands.
//!
//! The recursion carries both players' reach probabilities. Regret
//! updates are weighted by the *opponent's* reach (how often the
//! situation arises at all, which is what makes the regret
//! counterfactual) and strategy-sum updates by the actor's *own* reach
//! (which makes the time-average converge to the equilibrium strategy).

use std::time::Instant;

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cfr::config::{CfrConfig, TrainStats};
use crate::cfr::storage::NodeStore;
use crate::games::kuhn::{self, History, KuhnAction, NUM_ACTIONS, NUM_PLAYERS};

/// The trainer: owns the node table and drives self-play iterations.
///
/// # Example
/// ```
/// use kuhn_cfr::cfr::{CfrConfig, CfrSolver};
///
/// let mut solver = CfrSolver::new(CfrConfig::default().with_seed(42));
/// solver.train(10_000);
///
/// let root_jack = solver.get_average_strategy("0/").unwrap();
/// assert!((root_jack[0] + root_jack[1] - 1.0).abs() < 1e-9);
/// ```
pub struct CfrSolver {
    /// Configuration for the run.
    config: CfrConfig,

    /// All information set nodes discovered so far.
    store: NodeStore,

    /// Deal randomness.
    rng: StdRng,

    /// Hands simulated so far.
    iteration: u64,

    /// Sum of root utilities over all hands, player 0's perspective.
    total_utility: f64,

    /// Statistics tracking.
    stats: TrainStats,
}

impl CfrSolver {
    /// Create a solver with an empty node store.
    pub fn new(config: CfrConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            config,
            store: NodeStore::new(),
            rng,
            iteration: 0,
            total_utility: 0.0,
            stats: TrainStats::new(),
        }
    }

    /// Create a solver with pre-allocated node storage.
    pub fn with_capacity(config: CfrConfig, capacity: usize) -> Self {
        let mut solver = Self::new(config);
        solver.store = NodeStore::with_capacity(capacity);
        solver
    }

    /// Simulate one hand: deal random cards and solve from the root.
    ///
    /// Returns the hand's expected utility for player 0 under the
    /// current strategies.
    pub fn run_iteration(&mut self) -> f64 {
        self.iteration += 1;
        let cards = kuhn::deal(&mut self.rng);
        let utility = self.solve(cards, History::new(), 1.0, 1.0);
        self.total_utility += utility;
        utility
    }

    /// Train for a number of hands.
    ///
    /// Calling `train` again continues learning in the same node store.
    pub fn train(&mut self, iterations: u64) -> &TrainStats {
        let start = Instant::now();

        for _ in 0..iterations {
            self.run_iteration();

            if self.config.log_interval > 0 && self.iteration % self.config.log_interval == 0 {
                debug!(
                    "iteration {}: average utility {:+.5}",
                    self.iteration,
                    self.average_utility()
                );
            }
        }

        self.refresh_stats(start.elapsed().as_secs_f64());
        &self.stats
    }

    /// Train with a progress callback.
    ///
    /// The callback runs every `callback_interval` iterations with
    /// up-to-date statistics; useful for progress bars.
    pub fn train_with_callback<F>(
        &mut self,
        iterations: u64,
        callback_interval: u64,
        mut callback: F,
    ) -> &TrainStats
    where
        F: FnMut(&TrainStats),
    {
        let start = Instant::now();

        for i in 0..iterations {
            self.run_iteration();

            if callback_interval > 0 && (i + 1) % callback_interval == 0 {
                self.refresh_stats(start.elapsed().as_secs_f64());
                callback(&self.stats);
            }
        }

        self.refresh_stats(start.elapsed().as_secs_f64());
        &self.stats
    }

    /// The recursive tree walk.
    ///
    /// Returns the expected value of the rest of the hand from the
    /// perspective of the player to act at `history`. `reach0` and
    /// `reach1` are the probabilities that each player's current strategy
    /// brought the hand to this exact history; both start at 1.0 at the
    /// root.
    fn solve(
        &mut self,
        cards: [u8; NUM_PLAYERS],
        history: History,
        reach0: f64,
        reach1: f64,
    ) -> f64 {
        let player = history.player_to_act();

        if kuhn::is_terminal(&history) {
            // The rules table speaks for player 0; flip for the other seat.
            let payoff = kuhn::payoff_to_first_player(cards, &history);
            return if player == 0 { payoff } else { -payoff };
        }

        let key = kuhn::info_set_key(cards[player], &history);
        let strategy = self.store.get_or_create(&key).current_strategy();

        // A child call returns utility from the next player's
        // perspective; the hand is zero-sum, so negate it back.
        let mut action_utility = [0.0; NUM_ACTIONS];
        let mut node_utility = 0.0;
        for (i, &action) in KuhnAction::ALL.iter().enumerate() {
            let next = history.push(action);
            action_utility[i] = if player == 0 {
                -self.solve(cards, next, reach0 * strategy[i], reach1)
            } else {
                -self.solve(cards, next, reach0, reach1 * strategy[i])
            };
            node_utility += strategy[i] * action_utility[i];
        }

        let (own_reach, opponent_reach) = if player == 0 {
            (reach0, reach1)
        } else {
            (reach1, reach0)
        };

        let node = self.store.get_or_create(&key);
        for i in 0..NUM_ACTIONS {
            node.add_regret(i, opponent_reach * (action_utility[i] - node_utility));
            node.add_strategy_weight(i, own_reach * strategy[i]);
        }

        node_utility
    }

    /// Average strategy learned for an information set.
    ///
    /// Returns `(pass, bet)` probabilities, or `None` if the key was
    /// never visited during training.
    pub fn get_average_strategy(&self, info_key: &str) -> Option<[f64; NUM_ACTIONS]> {
        self.store.lookup(info_key).map(|node| node.average_strategy())
    }

    /// Current regret-matched strategy for an information set.
    ///
    /// Diagnostic read-out; the equilibrium approximation is
    /// [`get_average_strategy`](Self::get_average_strategy).
    pub fn get_current_strategy(&self, info_key: &str) -> Option<[f64; NUM_ACTIONS]> {
        self.store.lookup(info_key).map(|node| node.current_strategy())
    }

    /// Running average utility per hand, player 0's perspective.
    pub fn average_utility(&self) -> f64 {
        if self.iteration == 0 {
            0.0
        } else {
            self.total_utility / self.iteration as f64
        }
    }

    /// Hands simulated so far.
    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    /// Number of information sets discovered.
    pub fn num_info_sets(&self) -> usize {
        self.store.len()
    }

    /// Current statistics.
    pub fn stats(&self) -> &TrainStats {
        &self.stats
    }

    /// The node store, for inspection.
    pub fn store(&self) -> &NodeStore {
        &self.store
    }

    /// The configuration in use.
    pub fn config(&self) -> &CfrConfig {
        &self.config
    }

    fn refresh_stats(&mut self, elapsed_seconds: f64) {
        self.stats.iterations = self.iteration;
        self.stats.info_sets = self.store.len();
        self.stats.elapsed_seconds = elapsed_seconds;
        self.stats.average_utility = self.average_utility();
        self.stats.update_rate();
    }
}
