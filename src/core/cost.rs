use crate::errors::InputError;

use super::rectangular_width;

/// Per round costs for a fixed set of options.
///
/// Round `t` holds one non-negative cost for each option. The number of
/// rounds and options is fixed when the sequence is built.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct CostSequence {
    num_options: usize,
    // Round major
    costs: Vec<f64>,
}

impl CostSequence {
    /// Create a cost sequence from one cost vector per round.
    ///
    /// # Errors
    ///
    /// Fails if there are no rounds, no options, rounds of different
    /// lengths, or any cost that is negative or not finite.
    pub fn new(rounds: Vec<Vec<f64>>) -> Result<Self, InputError> {
        if rounds.is_empty() {
            return Err(InputError::EmptyCostSequence);
        }
        let num_options = match rectangular_width(&rounds) {
            Err(InputError::EmptyMatrix) => return Err(InputError::NoOptions),
            other => other?,
        };

        for (round, costs) in rounds.iter().enumerate() {
            if let Some(option) = costs.iter().position(|c| *c < 0.0) {
                return Err(InputError::NegativeCost { round, option });
            }
        }

        Ok(Self {
            num_options,
            costs: rounds.into_iter().flatten().collect(),
        })
    }

    /// Build a sequence by calling `f(round, option)` with 0-based indices.
    pub fn from_fn<F>(rounds: usize, num_options: usize, mut f: F) -> Result<Self, InputError>
    where
        F: FnMut(usize, usize) -> f64,
    {
        Self::new(
            (0..rounds)
                .map(|round| (0..num_options).map(|option| f(round, option)).collect())
                .collect(),
        )
    }

    pub fn rounds(&self) -> usize {
        self.costs.len() / self.num_options
    }

    pub fn num_options(&self) -> usize {
        self.num_options
    }

    /// The cost vector for a 0-based round.
    pub fn round(&self, round: usize) -> &[f64] {
        let start = round * self.num_options;
        &self.costs[start..start + self.num_options]
    }

    pub fn cost(&self, round: usize, option: usize) -> f64 {
        self.costs[round * self.num_options + option]
    }

    /// Total cost of playing `option` in every round.
    pub fn column_sum(&self, option: usize) -> f64 {
        self.iter().map(|round| round[option]).sum()
    }

    /// Iterate over the per round cost vectors in order.
    pub fn iter(&self) -> std::slice::Chunks<'_, f64> {
        self.costs.chunks(self.num_options)
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.iter().map(|round| round.to_vec()).collect()
    }
}

impl TryFrom<Vec<Vec<f64>>> for CostSequence {
    type Error = InputError;

    fn try_from(rounds: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::new(rounds)
    }
}

impl From<CostSequence> for Vec<Vec<f64>> {
    fn from(costs: CostSequence) -> Self {
        costs.to_rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let costs = CostSequence::new(vec![vec![1.0, 0.0, 2.0], vec![0.0, 3.0, 1.0]]).unwrap();
        assert_eq!(costs.rounds(), 2);
        assert_eq!(costs.num_options(), 3);
        assert_eq!(costs.round(1), &[0.0, 3.0, 1.0]);
        assert_eq!(costs.cost(0, 2), 2.0);
    }

    #[test]
    fn test_column_sum() {
        let costs = CostSequence::from_fn(5, 2, |round, option| (round * option) as f64).unwrap();
        assert_eq!(costs.column_sum(0), 0.0);
        assert_eq!(costs.column_sum(1), 10.0);
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(CostSequence::new(vec![]), Err(InputError::EmptyCostSequence));
        assert_eq!(
            CostSequence::new(vec![vec![], vec![]]),
            Err(InputError::NoOptions)
        );
    }

    #[test]
    fn test_negative_cost() {
        assert_eq!(
            CostSequence::new(vec![vec![0.0, 1.0], vec![0.5, -1.0]]),
            Err(InputError::NegativeCost {
                round: 1,
                option: 1
            })
        );
    }

    #[test]
    fn test_ragged_rounds() {
        assert!(matches!(
            CostSequence::new(vec![vec![0.0, 1.0], vec![0.5]]),
            Err(InputError::RaggedRow { row: 1, .. })
        ));
    }

    #[test]
    fn test_iter_matches_rows() {
        let rows = vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]];
        let costs = CostSequence::new(rows.clone()).unwrap();
        let collected: Vec<Vec<f64>> = costs.iter().map(<[f64]>::to_vec).collect();
        assert_eq!(collected, rows);
    }
}
