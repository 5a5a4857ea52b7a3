//! Deterministic option selection over a known cost sequence.
//!
//! The policy here is follow the leader with full information: each round
//! it takes an option with the lowest total cost so far. Its decisions feed
//! the regret evaluator in [`crate::regret`].
mod config;
mod decision;
mod policy;
mod tie_break;

pub use config::{DEFAULT_NUM_OPTIONS, SelectionConfig};
pub use decision::DecisionSequence;
pub use policy::{Selection, SelectionPolicy};
pub use tie_break::TieBreak;

use crate::core::CostSequence;
use crate::errors::Result;

/// Run a follow the leader policy over `costs`.
///
/// `num_options` is the policy's option count and must match `costs`.
pub fn select(
    costs: &CostSequence,
    num_options: usize,
    tie_break: TieBreak,
) -> Result<(DecisionSequence, f64)> {
    let selection = SelectionPolicy::new(num_options, tie_break)?.select(costs)?;
    Ok(selection.into_parts())
}
