use tracing::event;

use crate::core::CostSequence;
use crate::errors::InputError;
use crate::selection::{DecisionSequence, Selection};

use super::external::{FixedAction, best_fixed_action};
use super::swap::{SubstitutionMap, best_substitutions, realized_cost};

/// Both hindsight benchmarks for one decision sequence.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RegretReport {
    /// Cost the caller reports as paid
    pub realized_cost: f64,
    /// Cost recomputed from the picks
    pub recomputed_cost: f64,
    /// Best single option in hindsight
    pub best_fixed: FixedAction,
    /// `realized_cost - best_fixed.cost`
    pub external_regret: f64,
    /// Best per option replacement rule in hindsight
    pub substitutions: SubstitutionMap,
    /// `recomputed_cost - substitutions.total_cost()`
    pub swap_regret: f64,
}

impl RegretReport {
    /// Evaluate `picks` against `costs`.
    ///
    /// `realized_cost` is used for the external regret exactly as given. The
    /// swap regret always uses the cost recomputed from `picks`.
    pub fn evaluate(
        picks: &DecisionSequence,
        costs: &CostSequence,
        realized_cost_paid: f64,
    ) -> Result<Self, InputError> {
        let substitutions = best_substitutions(picks, costs)?;
        let recomputed_cost = realized_cost(picks, costs)?;
        let best_fixed = best_fixed_action(costs);

        let report = Self {
            realized_cost: realized_cost_paid,
            recomputed_cost,
            best_fixed,
            external_regret: realized_cost_paid - best_fixed.cost,
            swap_regret: recomputed_cost - substitutions.total_cost(),
            substitutions,
        };

        event!(
            tracing::Level::DEBUG,
            realized_cost = report.realized_cost,
            external_regret = report.external_regret,
            swap_regret = report.swap_regret,
            best_fixed_option = report.best_fixed.option,
            "Regret evaluated"
        );

        Ok(report)
    }

    /// Evaluate the output of a selection policy.
    pub fn for_selection(selection: &Selection, costs: &CostSequence) -> Result<Self, InputError> {
        Self::evaluate(&selection.picks, costs, selection.total_cost)
    }

    /// Whether the caller's realized cost matches the one recomputed from
    /// the picks, within `epsilon`.
    pub fn is_consistent(&self, epsilon: f64) -> bool {
        (self.realized_cost - self.recomputed_cost).abs() <= epsilon
    }
}
