/// The option picked in each round, as 1-based labels.
///
/// Produced once by a [`super::SelectionPolicy`] and read by the regret
/// evaluator.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DecisionSequence {
    labels: Vec<usize>,
}

impl DecisionSequence {
    /// Wrap labels that were produced elsewhere.
    ///
    /// Labels are checked against a cost sequence when the regret is
    /// evaluated, not here.
    pub fn from_labels(labels: Vec<usize>) -> Self {
        Self { labels }
    }

    pub(crate) fn with_capacity(rounds: usize) -> Self {
        Self {
            labels: Vec::with_capacity(rounds),
        }
    }

    pub(crate) fn push_option(&mut self, option: usize) {
        self.labels.push(option + 1);
    }

    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// The picked options as 0-based indices.
    ///
    /// A label of zero maps to `usize::MAX`, which is never a valid option.
    pub fn options(&self) -> impl Iterator<Item = usize> + '_ {
        self.labels.iter().map(|label| label.wrapping_sub(1))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl From<Vec<usize>> for DecisionSequence {
    fn from(labels: Vec<usize>) -> Self {
        Self::from_labels(labels)
    }
}
