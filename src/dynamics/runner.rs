use tracing::event;

use crate::core::PayoffMatrix;

use super::config::FictitiousPlayConfig;
use super::history::PlayHistory;
use super::strategy::{ActionCounts, best_response};

/// A fictitious play run over a fixed two player game.
///
/// Each round both players play the action chosen last round, update their
/// empirical strategies and then best respond to the opponent's empirical
/// strategy. Build one with [`super::FictitiousPlayBuilder`].
#[derive(Debug, Clone)]
pub struct FictitiousPlay {
    config: FictitiousPlayConfig,
    payoff_one: PayoffMatrix,
    payoff_two: PayoffMatrix,
}

impl FictitiousPlay {
    /// Create a run from already validated parts (use the builder instead)
    pub(crate) fn new(
        config: FictitiousPlayConfig,
        payoff_one: PayoffMatrix,
        payoff_two: PayoffMatrix,
    ) -> Self {
        Self {
            config,
            payoff_one,
            payoff_two,
        }
    }

    pub fn config(&self) -> &FictitiousPlayConfig {
        &self.config
    }

    /// Play every round and return the full history.
    ///
    /// The counters live only for the duration of this call, so running the
    /// same instance twice gives identical histories.
    pub fn run(&self) -> PlayHistory {
        let rounds = self.config.rounds;
        let (num_actions_one, num_actions_two) = self.payoff_one.shape();

        event!(
            tracing::Level::DEBUG,
            rounds,
            num_actions_one,
            num_actions_two,
            start_action_one = self.config.start_action_one,
            start_action_two = self.config.start_action_two,
            "Starting fictitious play"
        );

        let mut counts_one = ActionCounts::new(num_actions_one);
        let mut counts_two = ActionCounts::new(num_actions_two);
        let mut history = PlayHistory::with_capacity(rounds);

        let mut action_one = self.config.start_action_one;
        let mut action_two = self.config.start_action_two;

        for round in 1..=rounds {
            counts_one.record(action_one);
            counts_two.record(action_two);
            history.actions.push((action_one, action_two));

            let strategy_one = counts_one.strategy(round);
            let strategy_two = counts_two.strategy(round);

            let expected_one = self.payoff_one.mul_vec(strategy_two.probabilities());
            let expected_two = self
                .payoff_two
                .transpose_mul_vec(strategy_one.probabilities());

            history.player_one.push(strategy_one);
            history.player_two.push(strategy_two);

            action_one = best_response(&expected_one);
            action_two = best_response(&expected_two);

            event!(
                tracing::Level::TRACE,
                round,
                next_action_one = action_one,
                next_action_two = action_two,
                "Best responses computed"
            );
        }

        if let Some((one, two)) = history.final_strategies() {
            event!(
                tracing::Level::DEBUG,
                rounds,
                player_one = ?one.probabilities(),
                player_two = ?two.probabilities(),
                "Fictitious play complete"
            );
        }

        history
    }
}
