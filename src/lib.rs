//! RS-Regret
//!
//! This is a library for simulating repeated two player games and measuring
//! how well an online decision maker did compared to what it could have done
//! in hindsight.
//!
//! # Dynamics
//!
//! The [`dynamics`] module runs fictitious play. Each round both players
//! best respond to the empirical frequency of the other player's past
//! actions. The full history of empirical strategies is returned so that it
//! can be plotted or checked for convergence.
//!
//! ```
//! use rs_regret::core::PayoffMatrix;
//! use rs_regret::dynamics::FictitiousPlayBuilder;
//!
//! // Zero sum rock paper scissors.
//! let a = PayoffMatrix::new(vec![
//!     vec![0.0, -1.0, 1.0],
//!     vec![1.0, 0.0, -1.0],
//!     vec![-1.0, 1.0, 0.0],
//! ])
//! .unwrap();
//! let b = PayoffMatrix::from_fn(3, 3, |r, c| -a.get(r, c)).unwrap();
//!
//! let history = FictitiousPlayBuilder::new()
//!     .payoff_one(a)
//!     .payoff_two(b)
//!     .rounds(1000)
//!     .build()
//!     .unwrap()
//!     .run();
//!
//! let (one, _two) = history.final_strategies().unwrap();
//! assert!(one.max_distance(&[1.0 / 3.0; 3]) < 0.05);
//! ```
//!
//! # Selection and Regret
//!
//! The [`selection`] module picks one option per round from a known cost
//! sequence, always following the option that has been cheapest so far.
//! The [`regret`] module then scores those picks against the best fixed
//! option (external regret) and the best per option substitution rule
//! (swap regret).
//!
//! ```
//! use rs_regret::core::CostSequence;
//! use rs_regret::regret::RegretReport;
//! use rs_regret::selection::{SelectionPolicy, TieBreak};
//!
//! let costs = CostSequence::from_fn(7, 4, |t, a| if (t + 4 - a) % 4 == 0 { 1.0 } else { 0.0 })
//!     .unwrap();
//! let selection = SelectionPolicy::new(4, TieBreak::LowestIndex)
//!     .unwrap()
//!     .select(&costs)
//!     .unwrap();
//! let report = RegretReport::for_selection(&selection, &costs).unwrap();
//!
//! assert_eq!(report.external_regret, 6.0);
//! assert_eq!(report.swap_regret, 7.0);
//! ```
//!
//! Nothing here keeps state between calls. Every run owns its own counters
//! and returns freshly allocated results.

/// Validated numeric inputs: payoff matrices and cost sequences.
pub mod core;
/// Fictitious play best response dynamics.
pub mod dynamics;
/// Error types for every engine.
pub mod errors;
/// External and swap regret.
pub mod regret;
/// Follow the leader selection with configurable tie breaking.
pub mod selection;

#[cfg(any(test, feature = "test-util"))]
pub mod test_util;

pub use crate::core::{CostSequence, PayoffMatrix};
pub use dynamics::{simulate, simulate_from};
pub use errors::{ConfigError, ErrorKind, InputError, RegretError, Result};
pub use regret::{external_regret, swap_regret};
pub use selection::{TieBreak, select};
