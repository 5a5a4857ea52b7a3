use crate::errors::InputError;
#[cfg(feature = "serde")]
use crate::errors::{ConfigError, Result};

use super::tie_break::TieBreak;

/// Default number of options the policy chooses between.
pub const DEFAULT_NUM_OPTIONS: usize = 4;

/// Configuration for a [`super::SelectionPolicy`]
///
/// # Example
///
/// ```
/// # #[cfg(feature = "serde")]
/// # {
/// use rs_regret::selection::{SelectionConfig, TieBreak};
///
/// let config = SelectionConfig::from_json(r#"{"num_options": 3, "tie_break": "max"}"#).unwrap();
/// assert_eq!(config.tie_break, TieBreak::HighestIndex);
/// assert_eq!(config.first_choice, 0);
/// # }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionConfig {
    /// Number of options available every round
    pub num_options: usize,
    /// How ties between equally cheap options are broken
    pub tie_break: TieBreak,
    /// Option taken in round one, before any cost has been seen (0-based)
    pub first_choice: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            num_options: DEFAULT_NUM_OPTIONS,
            tie_break: TieBreak::default(),
            first_choice: 0,
        }
    }
}

impl SelectionConfig {
    pub fn new(num_options: usize, tie_break: TieBreak) -> Self {
        Self {
            num_options,
            tie_break,
            ..Default::default()
        }
    }

    /// Parse a configuration from JSON. Missing fields use the defaults.
    ///
    /// An unrecognised `tie_break` name is reported as
    /// [`ConfigError::UnknownTieBreak`]; any other malformed document as
    /// [`ConfigError::Parse`].
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        if let Some(name) = value.get("tie_break").and_then(serde_json::Value::as_str) {
            name.parse::<TieBreak>()?;
        }

        let config: Self =
            serde_json::from_value(value).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> std::result::Result<(), InputError> {
        if self.num_options == 0 {
            return Err(InputError::NoOptions);
        }

        if self.first_choice >= self.num_options {
            return Err(InputError::WarmStartOutOfRange {
                option: self.first_choice,
                num_options: self.num_options,
            });
        }

        Ok(())
    }
}
