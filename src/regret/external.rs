use crate::core::CostSequence;

/// The best single option to have played every round, in hindsight.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAction {
    /// 0-based option index
    pub option: usize,
    /// Total cost of always playing `option`
    pub cost: f64,
}

/// Find the option with the smallest total cost.
///
/// Ties go to the lowest option index.
pub fn best_fixed_action(costs: &CostSequence) -> FixedAction {
    let mut best = FixedAction {
        option: 0,
        cost: costs.column_sum(0),
    };
    for option in 1..costs.num_options() {
        let cost = costs.column_sum(option);
        if cost < best.cost {
            best = FixedAction { option, cost };
        }
    }
    best
}

/// Realized cost minus the cost of the best fixed option in hindsight.
pub fn external_regret(costs: &CostSequence, realized_cost: f64) -> f64 {
    realized_cost - best_fixed_action(costs).cost
}
