use tracing::event;

use crate::core::CostSequence;
use crate::errors::InputError;

use super::config::SelectionConfig;
use super::decision::DecisionSequence;
use super::tie_break::TieBreak;

/// The outcome of running a selection policy over a cost sequence.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// The option picked each round (1-based labels)
    pub picks: DecisionSequence,
    /// Sum of the cost of every picked option
    pub total_cost: f64,
}

impl Selection {
    pub fn into_parts(self) -> (DecisionSequence, f64) {
        (self.picks, self.total_cost)
    }
}

/// Deterministic follow the leader over a fixed set of options.
///
/// Round one always takes the configured first choice. After that the policy
/// picks an option with the smallest accumulated cost over all earlier
/// rounds, breaking ties with its [`TieBreak`]. The whole cost vector is
/// observed every round, not just the cost of the picked option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionPolicy {
    config: SelectionConfig,
}

impl SelectionPolicy {
    pub fn new(num_options: usize, tie_break: TieBreak) -> Result<Self, InputError> {
        Self::from_config(&SelectionConfig::new(num_options, tie_break))
    }

    pub fn from_config(config: &SelectionConfig) -> Result<Self, InputError> {
        config.validate()?;
        Ok(Self {
            config: config.clone(),
        })
    }

    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    pub fn num_options(&self) -> usize {
        self.config.num_options
    }

    pub fn tie_break(&self) -> TieBreak {
        self.config.tie_break
    }

    /// Run the policy over every round of `costs`.
    ///
    /// # Errors
    ///
    /// Fails before the first round if `costs` doesn't have exactly
    /// [`num_options`](Self::num_options) options per round.
    pub fn select(&self, costs: &CostSequence) -> Result<Selection, InputError> {
        let num_options = self.config.num_options;
        if costs.num_options() != num_options {
            return Err(InputError::OptionCountMismatch {
                expected: num_options,
                found: costs.num_options(),
            });
        }

        event!(
            tracing::Level::DEBUG,
            rounds = costs.rounds(),
            num_options,
            tie_break = %self.config.tie_break,
            "Starting selection"
        );

        let mut accumulated = vec![0.0_f64; num_options];
        let mut picks = DecisionSequence::with_capacity(costs.rounds());
        let mut total_cost = 0.0;

        for (round, round_costs) in costs.iter().enumerate() {
            let choice = if round == 0 {
                self.config.first_choice
            } else {
                self.leader(&accumulated)
            };

            event!(
                tracing::Level::TRACE,
                round = round + 1,
                choice,
                cost = round_costs[choice],
                "Option selected"
            );

            picks.push_option(choice);
            total_cost += round_costs[choice];

            for (total, cost) in accumulated.iter_mut().zip(round_costs) {
                *total += cost;
            }
        }

        event!(tracing::Level::DEBUG, total_cost, "Selection complete");

        Ok(Selection { picks, total_cost })
    }

    /// Option with the smallest accumulated cost, ties broken by the rule.
    fn leader(&self, accumulated: &[f64]) -> usize {
        let smallest = accumulated.iter().copied().fold(f64::INFINITY, f64::min);
        let contenders = accumulated
            .iter()
            .enumerate()
            .filter(|(_, total)| **total == smallest)
            .map(|(option, _)| option);

        // Accumulated costs are finite so the minimum is always attained.
        self.config.tie_break.resolve(contenders).unwrap_or(0)
    }
}
