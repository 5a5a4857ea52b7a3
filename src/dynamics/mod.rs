//! Best response dynamics for two player games.
//!
//! This module runs fictitious play: every round each player best responds
//! to the empirical frequency of the opponent's past actions. The output is
//! the full history of empirical strategies for both players.
//!
//! # Example
//!
//! ```
//! use rs_regret::core::PayoffMatrix;
//! use rs_regret::dynamics::simulate;
//!
//! let a = PayoffMatrix::new(vec![
//!     vec![0.0, -1.0, 1.0],
//!     vec![1.0, 0.0, -1.0],
//!     vec![-1.0, 1.0, 0.0],
//! ])
//! .unwrap();
//! let b = PayoffMatrix::from_fn(3, 3, |r, c| -a.get(r, c)).unwrap();
//!
//! let (history_one, history_two) = simulate(&a, &b, 1000).unwrap();
//! assert_eq!(history_one.len(), 1000);
//! assert_eq!(history_two.len(), 1000);
//! ```
mod builder;
mod config;
mod history;
mod runner;
mod strategy;

pub use builder::FictitiousPlayBuilder;
pub use config::{
    DEFAULT_ROUNDS, DEFAULT_START_ACTION_ONE, DEFAULT_START_ACTION_TWO, FictitiousPlayConfig,
};
pub use history::PlayHistory;
pub use runner::FictitiousPlay;
pub use strategy::{ActionCounts, EmpiricalStrategy, best_response};

use crate::core::PayoffMatrix;
use crate::errors::Result;

/// Run fictitious play from the default opening actions.
///
/// Returns one empirical strategy per round for each player.
pub fn simulate(
    payoff_one: &PayoffMatrix,
    payoff_two: &PayoffMatrix,
    rounds: usize,
) -> Result<(Vec<EmpiricalStrategy>, Vec<EmpiricalStrategy>)> {
    simulate_from(
        payoff_one,
        payoff_two,
        rounds,
        DEFAULT_START_ACTION_ONE,
        DEFAULT_START_ACTION_TWO,
    )
}

/// Run fictitious play from explicit opening actions (0-based).
pub fn simulate_from(
    payoff_one: &PayoffMatrix,
    payoff_two: &PayoffMatrix,
    rounds: usize,
    start_action_one: usize,
    start_action_two: usize,
) -> Result<(Vec<EmpiricalStrategy>, Vec<EmpiricalStrategy>)> {
    let play = FictitiousPlayBuilder::new()
        .payoff_one(payoff_one.clone())
        .payoff_two(payoff_two.clone())
        .rounds(rounds)
        .start_actions(start_action_one, start_action_two)
        .build()?;

    Ok(play.run().into_parts())
}
