use crate::core::PayoffMatrix;
use crate::errors::InputError;

use super::config::FictitiousPlayConfig;
use super::runner::FictitiousPlay;

/// Builder for constructing [`FictitiousPlay`] runs
///
/// # Example
///
/// ```
/// use rs_regret::core::PayoffMatrix;
/// use rs_regret::dynamics::FictitiousPlayBuilder;
///
/// let a = PayoffMatrix::new(vec![vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
/// let b = PayoffMatrix::new(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
///
/// let history = FictitiousPlayBuilder::new()
///     .payoff_one(a)
///     .payoff_two(b)
///     .rounds(100)
///     .start_actions(0, 1)
///     .build()
///     .unwrap()
///     .run();
///
/// assert_eq!(history.rounds(), 100);
/// ```
#[derive(Debug, Default)]
pub struct FictitiousPlayBuilder {
    payoff_one: Option<PayoffMatrix>,
    payoff_two: Option<PayoffMatrix>,
    rounds: Option<usize>,
    start_actions: Option<(usize, usize)>,
}

impl FictitiousPlayBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set player one's payoff matrix
    pub fn payoff_one(mut self, payoff: PayoffMatrix) -> Self {
        self.payoff_one = Some(payoff);
        self
    }

    /// Set player two's payoff matrix
    pub fn payoff_two(mut self, payoff: PayoffMatrix) -> Self {
        self.payoff_two = Some(payoff);
        self
    }

    /// Set the number of rounds to play
    pub fn rounds(mut self, rounds: usize) -> Self {
        self.rounds = Some(rounds);
        self
    }

    /// Set the actions both players open with
    pub fn start_actions(mut self, action_one: usize, action_two: usize) -> Self {
        self.start_actions = Some((action_one, action_two));
        self
    }

    /// Start from an existing configuration. Later setters override it.
    pub fn config(mut self, config: FictitiousPlayConfig) -> Self {
        self.rounds = Some(config.rounds);
        self.start_actions = Some((config.start_action_one, config.start_action_two));
        self
    }

    /// Build the run
    ///
    /// Returns an error if either payoff matrix is missing or the
    /// configuration doesn't fit the game.
    pub fn build(self) -> Result<FictitiousPlay, InputError> {
        let payoff_one = self
            .payoff_one
            .ok_or(InputError::MissingPayoffMatrix { player: 1 })?;
        let payoff_two = self
            .payoff_two
            .ok_or(InputError::MissingPayoffMatrix { player: 2 })?;

        let defaults = FictitiousPlayConfig::default();
        let (start_action_one, start_action_two) = self
            .start_actions
            .unwrap_or((defaults.start_action_one, defaults.start_action_two));
        let config = FictitiousPlayConfig {
            rounds: self.rounds.unwrap_or(defaults.rounds),
            start_action_one,
            start_action_two,
        };

        config.validate(&payoff_one, &payoff_two)?;

        Ok(FictitiousPlay::new(config, payoff_one, payoff_two))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zeros() -> PayoffMatrix {
        PayoffMatrix::from_fn(3, 3, |_, _| 0.0).unwrap()
    }

    #[test]
    fn test_builder_defaults() {
        let play = FictitiousPlayBuilder::new()
            .payoff_one(zeros())
            .payoff_two(zeros())
            .build()
            .unwrap();

        assert_eq!(play.config(), &FictitiousPlayConfig::default());
    }

    #[test]
    fn test_builder_custom_config() {
        let play = FictitiousPlayBuilder::new()
            .payoff_one(zeros())
            .payoff_two(zeros())
            .config(FictitiousPlayConfig {
                rounds: 7,
                start_action_one: 2,
                start_action_two: 0,
            })
            .rounds(9)
            .build()
            .unwrap();

        let config = play.config();
        assert_eq!(config.rounds, 9);
        assert_eq!(config.start_action_one, 2);
        assert_eq!(config.start_action_two, 0);
    }

    #[test]
    fn test_builder_missing_matrix() {
        let result = FictitiousPlayBuilder::new().payoff_two(zeros()).build();
        assert!(matches!(
            result,
            Err(InputError::MissingPayoffMatrix { player: 1 })
        ));

        let result = FictitiousPlayBuilder::new().payoff_one(zeros()).build();
        assert!(matches!(
            result,
            Err(InputError::MissingPayoffMatrix { player: 2 })
        ));
    }

    #[test]
    fn test_builder_validation_error() {
        let result = FictitiousPlayBuilder::new()
            .payoff_one(zeros())
            .payoff_two(zeros())
            .rounds(0)
            .build();
        assert!(matches!(result, Err(InputError::NoRounds)));
    }
}
