use std::collections::BTreeMap;

use tracing::event;

use crate::core::CostSequence;
use crate::errors::InputError;
use crate::selection::DecisionSequence;

/// Best replacement for one source option.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Substitution {
    /// 0-based option that would have been played instead
    pub replacement: usize,
    /// Cost of the replacement over the rounds the source was played
    pub cost: f64,
    /// 0-based rounds in which the source option was played
    pub rounds: Vec<usize>,
}

/// The best substitution rule in hindsight.
///
/// Maps every option that was played at least once (0-based) to the option
/// that would have been cheapest over exactly the rounds it was played.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubstitutionMap {
    substitutions: BTreeMap<usize, Substitution>,
}

impl SubstitutionMap {
    pub fn get(&self, source: usize) -> Option<&Substitution> {
        self.substitutions.get(&source)
    }

    /// Substitutions in order of source option.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Substitution)> {
        self.substitutions.iter().map(|(source, sub)| (*source, sub))
    }

    pub fn len(&self) -> usize {
        self.substitutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.substitutions.is_empty()
    }

    /// Total cost had every source been replaced by its best replacement.
    pub fn total_cost(&self) -> f64 {
        self.substitutions.values().map(|sub| sub.cost).sum()
    }
}

/// Check that `picks` holds one valid label per round of `costs`.
fn validate_picks(picks: &DecisionSequence, costs: &CostSequence) -> Result<(), InputError> {
    if picks.len() != costs.rounds() {
        return Err(InputError::RoundCountMismatch {
            expected: costs.rounds(),
            found: picks.len(),
        });
    }

    let num_options = costs.num_options();
    if let Some((round, label)) = picks
        .labels()
        .iter()
        .enumerate()
        .find(|(_, label)| **label == 0 || **label > num_options)
    {
        return Err(InputError::DecisionOutOfRange {
            round,
            label: *label,
            num_options,
        });
    }

    Ok(())
}

/// Cost actually paid by `picks`, recomputed from the cost sequence.
pub fn realized_cost(picks: &DecisionSequence, costs: &CostSequence) -> Result<f64, InputError> {
    validate_picks(picks, costs)?;
    Ok(picks
        .options()
        .enumerate()
        .map(|(round, option)| costs.cost(round, option))
        .sum())
}

/// Find the best replacement for every option that was played.
///
/// For a source option played in rounds `T`, each candidate is scored by its
/// own cost summed over `T`. The cheapest candidate wins, and among equally
/// cheap candidates the lowest index wins.
pub fn best_substitutions(
    picks: &DecisionSequence,
    costs: &CostSequence,
) -> Result<SubstitutionMap, InputError> {
    validate_picks(picks, costs)?;

    let mut played: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for (round, option) in picks.options().enumerate() {
        played.entry(option).or_default().push(round);
    }

    let substitutions = played
        .into_iter()
        .map(|(source, rounds)| {
            let mut replacement = 0;
            let mut best = f64::INFINITY;
            for candidate in 0..costs.num_options() {
                let switch_cost: f64 = rounds.iter().map(|t| costs.cost(*t, candidate)).sum();
                if switch_cost < best {
                    best = switch_cost;
                    replacement = candidate;
                }
            }

            event!(
                tracing::Level::TRACE,
                source,
                replacement,
                cost = best,
                rounds = rounds.len(),
                "Best substitution found"
            );

            (
                source,
                Substitution {
                    replacement,
                    cost: best,
                    rounds,
                },
            )
        })
        .collect();

    Ok(SubstitutionMap { substitutions })
}

/// Realized cost minus the cost of the best substitution rule in hindsight.
///
/// The realized cost is recomputed from `picks` and `costs` rather than
/// taken from the caller, so a mismatched pair can't hide behind a stale
/// total.
pub fn swap_regret(picks: &DecisionSequence, costs: &CostSequence) -> Result<f64, InputError> {
    let substitutions = best_substitutions(picks, costs)?;
    let actual = realized_cost(picks, costs)?;
    Ok(actual - substitutions.total_cost())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn costs() -> CostSequence {
        CostSequence::new(vec![
            vec![0.0, 1.0, 1.0],
            vec![1.0, 0.0, 1.0],
            vec![1.0, 1.0, 0.0],
            vec![0.0, 1.0, 1.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_groups_rounds_by_source() {
        let picks = DecisionSequence::from_labels(vec![2, 3, 2, 3]);
        let map = best_substitutions(&picks, &costs()).unwrap();

        assert_eq!(map.len(), 2);
        assert!(map.get(0).is_none());

        let from_second = map.get(1).unwrap();
        assert_eq!(from_second.rounds, vec![0, 2]);
        // Rounds 0 and 2: candidate costs are 1, 2 and 1. First cheapest wins.
        assert_eq!(from_second.replacement, 0);
        assert_eq!(from_second.cost, 1.0);

        let from_third = map.get(2).unwrap();
        assert_eq!(from_third.rounds, vec![1, 3]);
        // Rounds 1 and 3: candidate costs are 1, 1 and 2.
        assert_eq!(from_third.replacement, 0);
        assert_eq!(from_third.cost, 1.0);

        assert_eq!(map.total_cost(), 2.0);
        let sources: Vec<usize> = map.iter().map(|(source, _)| source).collect();
        assert_eq!(sources, vec![1, 2]);
    }

    #[test]
    fn test_swap_regret() {
        let picks = DecisionSequence::from_labels(vec![2, 3, 2, 3]);
        assert_eq!(realized_cost(&picks, &costs()).unwrap(), 4.0);
        assert_eq!(swap_regret(&picks, &costs()).unwrap(), 2.0);
    }

    #[test]
    fn test_perfect_play_has_no_swap_regret() {
        let picks = DecisionSequence::from_labels(vec![1, 2, 3, 1]);
        assert_eq!(realized_cost(&picks, &costs()).unwrap(), 0.0);
        assert_eq!(swap_regret(&picks, &costs()).unwrap(), 0.0);
    }

    #[test]
    fn test_source_can_map_to_itself() {
        let picks = DecisionSequence::from_labels(vec![1, 1, 1, 1]);
        let map = best_substitutions(&picks, &costs()).unwrap();
        let sub = map.get(0).unwrap();
        // Candidate costs over all rounds are 2, 3 and 3.
        assert_eq!(sub.replacement, 0);
        assert_eq!(sub.cost, 2.0);
        assert_eq!(swap_regret(&picks, &costs()).unwrap(), 0.0);
    }

    #[test]
    fn test_round_count_mismatch() {
        let picks = DecisionSequence::from_labels(vec![1, 2]);
        assert_eq!(
            swap_regret(&picks, &costs()),
            Err(InputError::RoundCountMismatch {
                expected: 4,
                found: 2
            })
        );
    }

    #[test]
    fn test_label_out_of_range() {
        let picks = DecisionSequence::from_labels(vec![1, 4, 1, 1]);
        assert_eq!(
            swap_regret(&picks, &costs()),
            Err(InputError::DecisionOutOfRange {
                round: 1,
                label: 4,
                num_options: 3
            })
        );

        let picks = DecisionSequence::from_labels(vec![0, 1, 1, 1]);
        assert!(matches!(
            realized_cost(&picks, &costs()),
            Err(InputError::DecisionOutOfRange { round: 0, label: 0, .. })
        ));
    }
}
