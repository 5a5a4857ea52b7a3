/// How often each action has been played so far.
///
/// Every round increments exactly one entry, the action actually played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionCounts {
    counts: Vec<u64>,
}

impl ActionCounts {
    pub fn new(num_actions: usize) -> Self {
        Self {
            counts: vec![0; num_actions],
        }
    }

    pub fn record(&mut self, action: usize) {
        self.counts[action] += 1;
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Empirical strategy after `round` rounds (1-based, never zero).
    ///
    /// The result is a fresh vector; later calls to [`record`](Self::record)
    /// don't change it.
    pub fn strategy(&self, round: usize) -> EmpiricalStrategy {
        debug_assert!(round > 0);
        let t = round as f64;
        EmpiricalStrategy {
            probabilities: self.counts.iter().map(|c| *c as f64 / t).collect(),
        }
    }
}

/// Frequency distribution of the actions a player has chosen.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EmpiricalStrategy {
    probabilities: Vec<f64>,
}

impl EmpiricalStrategy {
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    pub fn probability(&self, action: usize) -> f64 {
        self.probabilities[action]
    }

    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    /// Sum of all probabilities. One up to rounding.
    pub fn total(&self) -> f64 {
        self.probabilities.iter().sum()
    }

    /// Actions that have been played at least once.
    pub fn support(&self) -> Vec<usize> {
        self.probabilities
            .iter()
            .enumerate()
            .filter(|(_, p)| **p > 0.0)
            .map(|(action, _)| action)
            .collect()
    }

    /// Largest absolute difference to `other` over all actions.
    pub fn max_distance(&self, other: &[f64]) -> f64 {
        self.probabilities
            .iter()
            .zip(other)
            .map(|(p, q)| (p - q).abs())
            .fold(0.0, f64::max)
    }
}

impl From<EmpiricalStrategy> for Vec<f64> {
    fn from(strategy: EmpiricalStrategy) -> Self {
        strategy.probabilities
    }
}

/// The action with the highest expected payoff.
///
/// Ties go to the lowest index: the first maximal element wins. Selection
/// policies in [`crate::selection`] can break ties the other way.
pub fn best_response(expected_payoffs: &[f64]) -> usize {
    let mut best = 0;
    for (action, payoff) in expected_payoffs.iter().enumerate().skip(1) {
        if *payoff > expected_payoffs[best] {
            best = action;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_counts_to_strategy() {
        let mut counts = ActionCounts::new(3);
        counts.record(0);
        counts.record(2);
        counts.record(2);
        counts.record(2);

        assert_eq!(counts.total(), 4);
        let strategy = counts.strategy(4);
        assert_eq!(strategy.probabilities(), &[0.25, 0.0, 0.75]);
        assert_eq!(strategy.support(), vec![0, 2]);
        assert_abs_diff_eq!(strategy.total(), 1.0);
    }

    #[test]
    fn test_strategy_is_a_copy() {
        let mut counts = ActionCounts::new(2);
        counts.record(1);
        let before = counts.strategy(1);
        counts.record(0);

        assert_eq!(before.probabilities(), &[0.0, 1.0]);
        assert_eq!(counts.strategy(2).probabilities(), &[0.5, 0.5]);
    }

    #[test]
    fn test_best_response_prefers_first_max() {
        assert_eq!(best_response(&[1.0, 3.0, 3.0]), 1);
        assert_eq!(best_response(&[0.0, 0.0, 0.0]), 0);
        assert_eq!(best_response(&[-1.0, -2.0, 0.5]), 2);
        assert_eq!(best_response(&[7.0]), 0);
    }

    #[test]
    fn test_max_distance() {
        let mut counts = ActionCounts::new(3);
        counts.record(0);
        let strategy = counts.strategy(1);
        let uniform = [1.0 / 3.0; 3];
        assert_abs_diff_eq!(strategy.max_distance(&uniform), 2.0 / 3.0);
    }
}
