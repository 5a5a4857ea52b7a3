//! Hindsight regret of a decision sequence.
//!
//! - External regret compares against the best single option played in
//!   every round.
//! - Swap regret compares against the best rule that replaces each played
//!   option by another, chosen separately for every source option.
//!
//! Always playing one option is a special case of a substitution rule, so
//! swap regret is never below external regret for the same decisions.
//!
//! # Example
//!
//! ```
//! use rs_regret::core::CostSequence;
//! use rs_regret::regret::{external_regret, swap_regret};
//! use rs_regret::selection::{TieBreak, select};
//!
//! let costs = CostSequence::new(vec![
//!     vec![1.0, 0.0, 0.0],
//!     vec![0.0, 1.0, 0.0],
//!     vec![0.0, 0.0, 1.0],
//!     vec![1.0, 0.0, 0.0],
//! ])
//! .unwrap();
//!
//! let (picks, total) = select(&costs, 3, TieBreak::LowestIndex).unwrap();
//! let external = external_regret(&costs, total);
//! let swap = swap_regret(&picks, &costs).unwrap();
//! assert!(swap >= external);
//! ```
mod external;
mod report;
mod swap;

pub use external::{FixedAction, best_fixed_action, external_regret};
pub use report::RegretReport;
pub use swap::{Substitution, SubstitutionMap, best_substitutions, realized_cost, swap_regret};
