//! Counterfactual Regret Minimization for the Kuhn betting game.
//!
//! CFR is an iterative self-play algorithm that converges to a Nash
//! equilibrium:
//!
//! 1. Walk the game tree and compute, at every decision point, the
//!    counterfactual regret of each action against the current strategy.
//! 2. Update the current strategy by regret matching (play in proportion
//!    to accumulated positive regret).
//! 3. Average the per-iteration strategies over time; the time-average,
//!    not the final strategy, is what approaches equilibrium.
//!
//! This implementation is the chance-sampled variant with the CFR+
//! regret floor: each iteration deals one random pair of cards, walks
//! the whole betting tree for that deal updating both players at once,
//! and clamps accumulated regrets at zero.
//!
//! # Usage
//!
//! ```
//! use kuhn_cfr::cfr::{CfrConfig, CfrSolver};
//!
//! let mut solver = CfrSolver::new(CfrConfig::default().with_seed(42));
//! solver.train(10_000);
//!
//! // "0/": player 0 holding the Jack, no actions yet.
//! let strategy = solver.get_average_strategy("0/").unwrap();
//! println!("pass {:.3}, bet {:.3}", strategy[0], strategy[1]);
//! ```
//!
//! # References
//!
//! - Zinkevich, M., et al. "Regret Minimization in Games with Incomplete
//!   Information" (2007)
//! - Tammelin, O. "Solving Large Imperfect Information Games Using CFR+"
//!   (2014)

pub mod config;
pub mod node;
pub mod solver;
pub mod storage;

// Re-export main types for convenient access
pub use config::{CfrConfig, TrainStats};
pub use node::Node;
pub use solver::CfrSolver;
pub use storage::NodeStore;
