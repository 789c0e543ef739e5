//! # Kuhn CFR
//!
//! A chance-sampled Counterfactual Regret Minimization (CFR+) trainer
//! that learns an approximate Nash equilibrium for Kuhn poker by
//! self-play.
//!
//! ## Quick Start
//!
//! ```
//! use kuhn_cfr::cfr::{CfrConfig, CfrSolver};
//!
//! // 1. Create a solver
//! let mut solver = CfrSolver::new(CfrConfig::default().with_seed(42));
//!
//! // 2. Train over simulated hands
//! solver.train(100_000);
//!
//! // 3. Read out the learned strategy per information set
//! if let Some([pass, bet]) = solver.get_average_strategy("0/") {
//!     println!("Jack at the root: pass {:.1}%, bet {:.1}%", pass * 100.0, bet * 100.0);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`cfr`]: the solver — node store, regret bookkeeping, training loop
//! - [`games`]: the game definition — cards, actions, histories, payoffs
//!
//! The solver never materializes the game tree. Decision points are
//! collapsed into information sets ("what the acting player knows": own
//! card plus public history) and stored in a lazily grown table, so
//! memory is bounded by the number of distinct knowledge states.

#![warn(missing_docs)]

/// CFR solver: node storage, regret matching, and the training driver.
pub mod cfr;

/// Game definitions (Kuhn poker).
pub mod games;

// Re-export commonly used types at crate root for convenience
pub use cfr::{CfrConfig, CfrSolver, TrainStats};
