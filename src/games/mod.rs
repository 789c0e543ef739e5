//! Game definitions for the solver.
//!
//! The solver in [`crate::cfr`] is specific to the betting structure
//! defined here; this module keeps the game vocabulary (cards, actions,
//! histories, payoff rules) separate from the learning algorithm.

pub mod kuhn;
