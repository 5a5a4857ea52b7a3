use thiserror::Error;

/// Usage errors caused by the numbers handed to the engines.
///
/// These are never transient. They are detected before any counter or
/// accumulator is touched.
#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum InputError {
    #[error("Matrix must have at least one row and one column")]
    EmptyMatrix,

    #[error("Row {row} has {found} entries but {expected} were expected")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Value at row {row}, column {col} is not a finite number")]
    NonFiniteValue { row: usize, col: usize },

    #[error("Cost at round {round}, option {option} is negative")]
    NegativeCost { round: usize, option: usize },

    #[error("Payoff matrices disagree on shape: {rows_one}x{cols_one} vs {rows_two}x{cols_two}")]
    ShapeMismatch {
        rows_one: usize,
        cols_one: usize,
        rows_two: usize,
        cols_two: usize,
    },

    #[error("Payoff matrix for player {player} was not provided")]
    MissingPayoffMatrix { player: usize },

    #[error("At least one round is required")]
    NoRounds,

    #[error("At least one option is required")]
    NoOptions,

    #[error("Cost sequence has no rounds")]
    EmptyCostSequence,

    #[error("Starting action {action} for player {player} is out of range for {num_actions} actions")]
    StartActionOutOfRange {
        player: usize,
        action: usize,
        num_actions: usize,
    },

    #[error("Warm start option {option} is out of range for {num_options} options")]
    WarmStartOutOfRange { option: usize, num_options: usize },

    #[error("Cost sequence has {found} options per round but the policy uses {expected}")]
    OptionCountMismatch { expected: usize, found: usize },

    #[error("Decision sequence has {found} rounds but the cost sequence has {expected}")]
    RoundCountMismatch { expected: usize, found: usize },

    #[error("Decision label {label} at round {round} is outside 1..={num_options}")]
    DecisionOutOfRange {
        round: usize,
        label: usize,
        num_options: usize,
    },
}

/// Errors in how an engine was configured.
#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum ConfigError {
    #[error("Unknown tie-break rule: {0}")]
    UnknownTieBreak(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// The two kinds of failure the engines can report.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ErrorKind {
    InvalidInput,
    InvalidConfiguration,
}

#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum RegretError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
}

impl RegretError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegretError::InvalidInput(_) => ErrorKind::InvalidInput,
            RegretError::InvalidConfiguration(_) => ErrorKind::InvalidConfiguration,
        }
    }
}

/// Result type used across the crate
pub type Result<T> = std::result::Result<T, RegretError>;
