use super::strategy::EmpiricalStrategy;

/// Everything recorded during a fictitious play run.
///
/// Entry `t` of each vector describes round `t + 1`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PlayHistory {
    /// Player one's empirical strategy after each round
    pub player_one: Vec<EmpiricalStrategy>,
    /// Player two's empirical strategy after each round
    pub player_two: Vec<EmpiricalStrategy>,
    /// The pair of actions played in each round
    pub actions: Vec<(usize, usize)>,
}

impl PlayHistory {
    pub(crate) fn with_capacity(rounds: usize) -> Self {
        Self {
            player_one: Vec::with_capacity(rounds),
            player_two: Vec::with_capacity(rounds),
            actions: Vec::with_capacity(rounds),
        }
    }

    pub fn rounds(&self) -> usize {
        self.actions.len()
    }

    /// Empirical strategies after the last round.
    pub fn final_strategies(&self) -> Option<(&EmpiricalStrategy, &EmpiricalStrategy)> {
        self.player_one.last().zip(self.player_two.last())
    }

    /// Split into the two per player histories.
    pub fn into_parts(self) -> (Vec<EmpiricalStrategy>, Vec<EmpiricalStrategy>) {
        (self.player_one, self.player_two)
    }
}
