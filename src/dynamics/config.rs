use crate::core::PayoffMatrix;
use crate::errors::InputError;

/// Default number of rounds to simulate.
pub const DEFAULT_ROUNDS: usize = 1000;
/// Default opening action for player one.
pub const DEFAULT_START_ACTION_ONE: usize = 1;
/// Default opening action for player two.
pub const DEFAULT_START_ACTION_TWO: usize = 2;

/// Configuration for a fictitious play run
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FictitiousPlayConfig {
    /// Number of rounds to play
    pub rounds: usize,
    /// Action player one takes in round one (0-based)
    pub start_action_one: usize,
    /// Action player two takes in round one (0-based)
    pub start_action_two: usize,
}

impl Default for FictitiousPlayConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            start_action_one: DEFAULT_START_ACTION_ONE,
            start_action_two: DEFAULT_START_ACTION_TWO,
        }
    }
}

impl FictitiousPlayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration against the game it will be used for.
    ///
    /// Both matrices must have player one's actions as rows and player two's
    /// actions as columns, so their shapes have to be identical.
    pub fn validate(
        &self,
        payoff_one: &PayoffMatrix,
        payoff_two: &PayoffMatrix,
    ) -> Result<(), InputError> {
        if self.rounds == 0 {
            return Err(InputError::NoRounds);
        }

        if payoff_one.shape() != payoff_two.shape() {
            return Err(InputError::ShapeMismatch {
                rows_one: payoff_one.rows(),
                cols_one: payoff_one.cols(),
                rows_two: payoff_two.rows(),
                cols_two: payoff_two.cols(),
            });
        }

        if self.start_action_one >= payoff_one.rows() {
            return Err(InputError::StartActionOutOfRange {
                player: 1,
                action: self.start_action_one,
                num_actions: payoff_one.rows(),
            });
        }

        if self.start_action_two >= payoff_one.cols() {
            return Err(InputError::StartActionOutOfRange {
                player: 2,
                action: self.start_action_two,
                num_actions: payoff_one.cols(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(n: usize) -> PayoffMatrix {
        PayoffMatrix::from_fn(n, n, |_, _| 0.0).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = FictitiousPlayConfig::default();
        assert_eq!(config.rounds, 1000);
        assert_eq!(config.start_action_one, 1);
        assert_eq!(config.start_action_two, 2);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FictitiousPlayConfig::default();
        assert!(config.validate(&square(3), &square(3)).is_ok());
    }

    #[test]
    fn test_validate_zero_rounds() {
        let config = FictitiousPlayConfig {
            rounds: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(&square(3), &square(3)),
            Err(InputError::NoRounds)
        );
    }

    #[test]
    fn test_validate_shape_mismatch() {
        let config = FictitiousPlayConfig::default();
        let wide = PayoffMatrix::from_fn(3, 4, |_, _| 0.0).unwrap();
        assert!(matches!(
            config.validate(&square(3), &wide),
            Err(InputError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_validate_start_out_of_range() {
        // The default start of (1, 2) needs at least three columns.
        let config = FictitiousPlayConfig::default();
        assert_eq!(
            config.validate(&square(2), &square(2)),
            Err(InputError::StartActionOutOfRange {
                player: 2,
                action: 2,
                num_actions: 2
            })
        );

        let config = FictitiousPlayConfig {
            start_action_one: 5,
            start_action_two: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(&square(2), &square(2)),
            Err(InputError::StartActionOutOfRange { player: 1, .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_json_uses_defaults() {
        let config: FictitiousPlayConfig = serde_json::from_str(r#"{"rounds": 10}"#).unwrap();
        assert_eq!(config.rounds, 10);
        assert_eq!(config.start_action_one, 1);
        assert_eq!(config.start_action_two, 2);
    }
}
