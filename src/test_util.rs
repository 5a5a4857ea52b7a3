use approx::assert_abs_diff_eq;

use crate::dynamics::{EmpiricalStrategy, PlayHistory};
use crate::regret::RegretReport;

/// Tolerance for sums of probabilities and costs.
const EPSILON: f64 = 1e-9;

pub fn assert_valid_strategy(strategy: &EmpiricalStrategy) {
    assert!(!strategy.is_empty(), "Strategy has no actions");
    for p in strategy.probabilities() {
        assert!(
            (0.0..=1.0).contains(p),
            "Probability out of range in {:?}",
            strategy
        );
    }
    assert_abs_diff_eq!(strategy.total(), 1.0, epsilon = EPSILON);
}

pub fn assert_valid_history(history: &PlayHistory) {
    let rounds = history.rounds();
    assert_eq!(rounds, history.player_one.len());
    assert_eq!(rounds, history.player_two.len());

    for (idx, (one, two)) in history
        .player_one
        .iter()
        .zip(&history.player_two)
        .enumerate()
    {
        assert_valid_strategy(one);
        assert_valid_strategy(two);

        // Each round moves exactly one unit of weight onto the played action.
        let (action_one, action_two) = history.actions[idx];
        let t = (idx + 1) as f64;
        assert!(one.probability(action_one) * t >= 1.0 - EPSILON);
        assert!(two.probability(action_two) * t >= 1.0 - EPSILON);
    }
}

pub fn assert_regret_bounds(report: &RegretReport) {
    // Both benchmarks can only beat the realized cost when picks and cost agree.
    if report.is_consistent(EPSILON) {
        assert!(
            report.swap_regret >= report.external_regret - EPSILON,
            "Swap regret below external regret: {:?}",
            report
        );
        assert!(
            report.swap_regret >= -EPSILON,
            "Negative swap regret: {:?}",
            report
        );
    }
    assert!(report.substitutions.total_cost() >= -EPSILON);
    assert!(report.substitutions.total_cost() <= report.best_fixed.cost + EPSILON);
}
